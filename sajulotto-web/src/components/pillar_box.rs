use sajulotto_core::report::Pillar;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PillarBoxProps {
    pub label: AttrValue,
    pub pillar: Pillar,
}

fn glyph_or_dash(glyph: &str) -> &str {
    if glyph.is_empty() { "-" } else { glyph }
}

#[function_component(PillarBox)]
pub fn pillar_box(props: &PillarBoxProps) -> Html {
    let pillar = &props.pillar;
    html! {
        <div class="pillar-box">
            <span class="pillar-label">{ props.label.clone() }</span>
            <div class="pillar-cell pillar-top">
                <span class="pillar-glyph">{ glyph_or_dash(&pillar.top) }</span>
                <span class="pillar-reading">{ pillar.top_reading.clone() }</span>
            </div>
            <div class="pillar-cell pillar-bottom">
                <span class="pillar-glyph">{ glyph_or_dash(&pillar.bottom) }</span>
                <span class="pillar-reading">{ pillar.bottom_reading.clone() }</span>
            </div>
        </div>
    }
}
