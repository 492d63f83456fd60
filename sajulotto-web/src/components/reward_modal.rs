use yew::prelude::*;

use super::{AdPlaceholder, AdPosition};

#[derive(Properties, PartialEq, Clone)]
pub struct RewardModalProps {
    pub title: AttrValue,
    pub user_name: AttrValue,
    /// True once the simulated ad has completed; arms the confirm button.
    pub armed: bool,
    pub on_rewarded: Callback<()>,
    pub on_complete: Callback<()>,
    pub on_close: Callback<()>,
}

/// Full-screen gate shown while a bonus slot's ad plays. Closing it before
/// completion cancels the unlock with no side effects.
#[function_component(RewardModal)]
pub fn reward_modal(props: &RewardModalProps) -> Html {
    let on_complete = {
        let armed = props.armed;
        let on = props.on_complete.clone();
        Callback::from(move |_| {
            if armed {
                on.emit(());
            }
        })
    };
    let on_close = {
        let on = props.on_close.clone();
        Callback::from(move |_| on.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal reward-modal">
                <div class="reward-banner">
                    <span class="reward-orb">{ "🔮" }</span>
                    <p>{ "Receiving the energy of the heavens..." }</p>
                </div>
                <h4 class="reward-title">{ format!("Unlocking {}", props.title) }</h4>
                <p class="reward-copy">
                    { format!(
                        "The {} numbers for {} arrive shortly. Please hold on while the reading's energy is transposed.",
                        props.title, props.user_name,
                    ) }
                </p>
                <AdPlaceholder position={AdPosition::Reward} on_rewarded={props.on_rewarded.clone()} />
                <button class="btn-primary" disabled={!props.armed} onclick={on_complete}>
                    { if props.armed { "Receive the energy" } else { "Button unlocks after the ad" } }
                </button>
                <button class="btn-ghost" onclick={on_close}>{ "Close" }</button>
            </div>
        </div>
    }
}
