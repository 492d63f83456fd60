use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AnalyzingViewProps {
    pub user_name: AttrValue,
    pub percent: i32,
    pub step_message: AttrValue,
    pub expected_secs: u16,
    pub remaining_secs: u16,
}

#[function_component(AnalyzingView)]
pub fn analyzing_view(props: &AnalyzingViewProps) -> Html {
    html! {
        <section class="analyzing-view">
            <div class="progress-ring">
                <div class="progress-fill" style={format!("--progress: {}", props.percent)}></div>
                <div class="progress-center">
                    <span class="progress-number">{ format!("{}%", props.percent) }</span>
                    <span class="progress-caption">{ "Destiny syncing" }</span>
                </div>
            </div>

            <h2 class="step-message">{ props.step_message.clone() }</h2>

            <p class="wait-line">
                { format!(
                    "Expected wait: {}s · Remaining: {}s",
                    props.expected_secs, props.remaining_secs,
                ) }
            </p>

            <div class="wait-warning">
                <p>
                    { "A precise destiny reading is in progress. The result only forms if you wait it out to the end." }
                </p>
                <p class="wait-warning-sub">
                    { "Leaving or refreshing midway resets the analysis." }
                </p>
            </div>

            <p class="analyzing-footnote">
                { format!(
                    "Tuning {}'s energy to the 2026 fire-horse frequency.",
                    props.user_name,
                ) }
            </p>
        </section>
    }
}
