use yew::prelude::*;

/// Ball color band by number range, matching the televised draw machines.
#[must_use]
pub const fn ball_color_class(number: u8) -> &'static str {
    match number {
        1..=10 => "ball-yellow",
        11..=20 => "ball-blue",
        21..=30 => "ball-red",
        31..=40 => "ball-gray",
        _ => "ball-green",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LottoBallProps {
    pub number: u8,
    #[prop_or_default]
    pub generating: bool,
}

#[function_component(LottoBall)]
pub fn lotto_ball(props: &LottoBallProps) -> Html {
    let class = classes!(
        "lotto-ball",
        ball_color_class(props.number),
        props.generating.then_some("generating"),
    );
    html! {
        <span {class}>{ props.number }</span>
    }
}

/// Dashed placeholder shown before a ball is revealed.
#[function_component(HiddenBall)]
pub fn hidden_ball() -> Html {
    html! { <span class="lotto-ball hidden-ball"></span> }
}
