use std::cell::Cell;

use gloo::timers::callback::Interval;
use sajulotto_core::constants::AD_WATCH_SECS;
use yew::prelude::*;

/// Where the placeholder sits in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdPosition {
    Top,
    Sidebar,
    Bottom,
    Reward,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AdPlaceholderProps {
    pub position: AdPosition,
    /// Fired once when a reward-position ad has been "watched" to the end.
    #[prop_or_default]
    pub on_rewarded: Callback<()>,
}

/// Simulated ad slot. Reward-position slots run a fixed countdown and fire
/// `on_rewarded` exactly once when it reaches zero.
#[function_component(AdPlaceholder)]
pub fn ad_placeholder(props: &AdPlaceholderProps) -> Html {
    let remaining = use_state(|| AD_WATCH_SECS);

    {
        let remaining = remaining.clone();
        let on_rewarded = props.on_rewarded.clone();
        use_effect_with(props.position, move |position| {
            let mut countdown = None;
            if *position == AdPosition::Reward {
                // Cell keeps the authoritative count; the state handle only
                // mirrors it for display.
                let left = Cell::new(AD_WATCH_SECS);
                countdown = Some(Interval::new(1_000, move || {
                    if left.get() == 0 {
                        return;
                    }
                    left.set(left.get() - 1);
                    remaining.set(left.get());
                    if left.get() == 0 {
                        on_rewarded.emit(());
                    }
                }));
            }
            move || drop(countdown)
        });
    }

    match props.position {
        AdPosition::Reward => html! {
            <div class="ad-slot ad-reward">
                <span class="ad-tag">{ "AD" }</span>
                if *remaining > 0 {
                    <p class="ad-countdown">{ format!("Reward unlocks in {}s", *remaining) }</p>
                } else {
                    <p class="ad-countdown done">{ "Ad watched to the end" }</p>
                }
            </div>
        },
        AdPosition::Top | AdPosition::Sidebar | AdPosition::Bottom => html! {
            <div class="ad-slot ad-banner">
                <span class="ad-tag">{ "AD" }</span>
                <p class="ad-copy">{ "Sponsored placement" }</p>
            </div>
        },
    }
}
