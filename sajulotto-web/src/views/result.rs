use sajulotto_core::constants::BONUS_CATEGORIES;
use sajulotto_core::report::{FortuneReport, NumberKind};
use yew::prelude::*;

use crate::components::{LottoBall, PillarBox, lotto_ball::HiddenBall};
use crate::rich_text;

/// Snapshot of an in-flight bonus roll for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RollView {
    pub progress: i32,
    pub revealed: usize,
    pub numbers: Vec<u8>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResultViewProps {
    pub user_name: AttrValue,
    pub report: FortuneReport,
    pub primary: Vec<u8>,
    pub revealed: usize,
    pub unlocked_sets: Vec<Vec<u8>>,
    #[prop_or_default]
    pub rolling: Option<RollView>,
    pub saved: bool,
    pub on_unlock: Callback<usize>,
    pub on_save: Callback<()>,
    pub on_reset: Callback<()>,
}

const fn kind_badge(kind: NumberKind) -> (&'static str, &'static str) {
    match kind {
        NumberKind::Identity => ("badge-identity", "✨ Chart identity number"),
        NumberKind::Monthly => ("badge-monthly", "📅 Season luck number"),
        NumberKind::Daily => ("badge-daily", "⚡ Daily resonance number"),
    }
}

fn combined_group(label: &str, balls: &[u8]) -> Html {
    html! {
        <div class="combined-group">
            <span class="combined-label">{ label.to_string() }</span>
            <div class="ball-row">
                { for balls.iter().map(|&n| html! { <LottoBall number={n} /> }) }
            </div>
        </div>
    }
}

#[function_component(ResultView)]
pub fn result_view(props: &ResultViewProps) -> Html {
    let report = &props.report;
    let unlocked_count = props.unlocked_sets.len();
    let rolling = props.rolling.is_some();

    let on_save = {
        let on = props.on_save.clone();
        Callback::from(move |_| on.emit(()))
    };
    let on_reset = {
        let on = props.on_reset.clone();
        Callback::from(move |_| on.emit(()))
    };
    let on_unlock_next = {
        let on = props.on_unlock.clone();
        Callback::from(move |_| on.emit(unlocked_count))
    };

    // Slot cards still locked, after any set mid-roll.
    let first_locked = unlocked_count + usize::from(rolling);
    let locked_cards = (first_locked..BONUS_CATEGORIES.len()).map(|idx| {
        let category = &BONUS_CATEGORIES[idx];
        let is_next = idx == first_locked && !rolling;
        let onclick = is_next.then(|| {
            let on = props.on_unlock.clone();
            Callback::from(move |_: MouseEvent| on.emit(idx))
        });
        html! {
            <div key={idx}
                class={classes!("locked-card", is_next.then_some("next"))}
                onclick={onclick}>
                <span class="chest">{ "🧰" }</span>
                <span class="locked-title">{ category.title }</span>
                <span class="locked-desc">{ category.desc }</span>
                if is_next {
                    <span class="locked-cta">{ "Open now to receive your wealth luck" }</span>
                }
            </div>
        }
    });

    html! {
        <div class="result-view">
            <section class="result-card">
                <div class="pillar-section">
                    <h4 class="pillar-heading">
                        { format!("{}'s destiny board", props.user_name) }
                    </h4>
                    <p class="pillar-sub">{ "✨ Live 2026 fire-horse energy applied" }</p>
                    <div class="pillar-grid">
                        <PillarBox label="Hour" pillar={report.pillars.hour.clone()} />
                        <PillarBox label="Day" pillar={report.pillars.day.clone()} />
                        <PillarBox label="Month" pillar={report.pillars.month.clone()} />
                        <PillarBox label="Year" pillar={report.pillars.year.clone()} />
                    </div>
                </div>

                <div class="report-panel">
                    <h3 class="report-heading">{ "🔮 High-precision destiny reading" }</h3>
                    <div class="element-card">
                        <h4>{ "Core lucky element" }</h4>
                        <p class="element-name">{ rich_text::render_rich(&report.main_element) }</p>
                        <p class="element-desc">
                            { rich_text::render_rich(&report.element_description) }
                        </p>
                    </div>
                    <blockquote class="fortune-summary">
                        { rich_text::render_rich(&report.fortune_summary) }
                    </blockquote>
                    { rich_text::render_report_sections(&report.full_report) }
                </div>

                <div class="primary-section">
                    <span class="primary-heading">
                        { format!("Recommended numbers from {}'s reading", props.user_name) }
                    </span>
                    <div class="ball-row primary-balls">
                        { for props.primary.iter().enumerate().map(|(idx, &n)| {
                            if idx < props.revealed {
                                html! { <LottoBall number={n} /> }
                            } else {
                                html! { <HiddenBall /> }
                            }
                        }) }
                    </div>
                </div>

                <div class="explanation-panel">
                    <strong class="explanation-heading">
                        { "🔢 Why each number was chosen" }
                    </strong>
                    { for report.number_explanations.iter().map(|item| {
                        let (badge_class, badge_label) = kind_badge(item.kind);
                        html! {
                            <div class="explanation-card">
                                <div class="explanation-head">
                                    <LottoBall number={item.number} />
                                    <span class={classes!("kind-badge", badge_class)}>
                                        { badge_label }
                                    </span>
                                    <span class="element-tag">{ item.element.clone() }</span>
                                </div>
                                <p class="explanation-body">
                                    { rich_text::render_rich(&item.explanation) }
                                </p>
                            </div>
                        }
                    }) }
                </div>

                <div class="lucky-grid">
                    <div class="lucky-cell">
                        <span class="lucky-label">{ "Lucky direction" }</span>
                        <span class="lucky-value">{ report.lucky_direction.clone() }</span>
                    </div>
                    <div class="lucky-cell">
                        <span class="lucky-label">{ "Lucky color" }</span>
                        <span class="lucky-value">{ report.lucky_color.clone() }</span>
                    </div>
                    <div class="lucky-cell">
                        <span class="lucky-label">{ "Lucky time" }</span>
                        <span class="lucky-value">{ report.lucky_time.clone() }</span>
                    </div>
                </div>

                <div class="bonus-section">
                    <div class="bonus-header">
                        <h5>{ "💰 Wealth-luck bonus sets" }</h5>
                        <span class="bonus-count">
                            { format!("{unlocked_count} / {} unlocked", BONUS_CATEGORIES.len()) }
                        </span>
                    </div>

                    { for props.unlocked_sets.iter().enumerate().map(|(idx, set)| {
                        let category = &BONUS_CATEGORIES[idx];
                        html! {
                            <div class="bonus-card" key={idx}>
                                <div class="bonus-card-head">
                                    <span class="bonus-title">{ category.title }</span>
                                    <span class="bonus-done">{ "Unlocked" }</span>
                                </div>
                                <div class="ball-row">
                                    { for set.iter().map(|&n| html! { <LottoBall number={n} /> }) }
                                </div>
                                <p class="bonus-comment">{ category.comment }</p>
                            </div>
                        }
                    }) }

                    if let Some(roll) = &props.rolling {
                        <div class="rolling-card">
                            <p class="rolling-copy">
                                { format!("Transposing {}'s wealth luck into numbers...", props.user_name) }
                            </p>
                            <div class="ball-row">
                                { for roll.numbers.iter().enumerate().map(|(idx, &n)| {
                                    if idx < roll.revealed {
                                        html! { <LottoBall number={n} /> }
                                    } else {
                                        html! { <HiddenBall /> }
                                    }
                                }) }
                            </div>
                            <div class="rolling-bar">
                                <div class="rolling-fill"
                                    style={format!("width: {}%", roll.progress)}></div>
                            </div>
                        </div>
                    }

                    { for locked_cards }
                </div>

                <div class="combined-panel">
                    <h4 class="combined-heading">{ "The 6/45 concordance combination" }</h4>
                    <div class="combined-grid">
                        { combined_group("✨ Chart identity", &props.primary[..2.min(props.primary.len())]) }
                        { combined_group("📅 Season luck", props.primary.get(2..4).unwrap_or(&[])) }
                        { combined_group("⚡ Daily resonance", props.primary.get(4..6).unwrap_or(&[])) }
                    </div>
                    <p class="combined-copy">
                        { "Root, stem and bloom drawn into one: the chart, the season and the day aligned on a single winning frequency." }
                    </p>
                </div>

                <p class="disclaimer">
                    { "This service is an entertainment-grade probability reading inspired by traditional five-element destiny lore." }
                </p>

                <div class="result-actions">
                    if unlocked_count < BONUS_CATEGORIES.len() {
                        <button class="btn-unlock"
                            disabled={rolling}
                            onclick={on_unlock_next}>
                            <span>{ format!("✨ Receive {}", BONUS_CATEGORIES[unlocked_count].title) }</span>
                            <span class="btn-unlock-sub">
                                { "(watch an ad to unlock the 2026 grand-luck numbers)" }
                            </span>
                        </button>
                    } else {
                        <div class="celebration">
                            <p>{ "🎉 You have received every fortune of 2026!" }</p>
                            <button class={classes!("btn-save", props.saved.then_some("saved"))}
                                onclick={on_save}>
                                { if props.saved { "✓ Lucky record saved" } else { "📥 Save my lucky record" } }
                            </button>
                        </div>
                    }
                    <button class="btn-ghost" onclick={on_reset}>{ "Start over" }</button>
                </div>
            </section>
        </div>
    }
}
