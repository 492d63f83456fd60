use yew::prelude::*;

use sajulotto_core::constants::{BONUS_CATEGORIES, FINAL_DECISION_SLOT};

use super::{AdPlaceholder, AdPosition};

#[derive(Properties, PartialEq, Clone)]
pub struct FinalGateModalProps {
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

/// Extra one-time gate in front of the final bonus slot. Its ad doubles as
/// the reward ad, so confirming rolls the last set immediately.
#[function_component(FinalGateModal)]
pub fn final_gate_modal(props: &FinalGateModalProps) -> Html {
    let armed = use_state(|| false);

    let on_rewarded = {
        let armed = armed.clone();
        Callback::from(move |()| armed.set(true))
    };
    let on_confirm = {
        let armed_now = *armed;
        let on = props.on_confirm.clone();
        Callback::from(move |_| {
            if armed_now {
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
            <div class="modal final-gate-modal">
                <h4 class="final-gate-title">
                    { format!("Unlocking {}", BONUS_CATEGORIES[FINAL_DECISION_SLOT].title) }
                </h4>
                <p class="reward-copy">
                    { "Only a completed ad reveals the final decision numbers." }
                </p>
                <AdPlaceholder position={AdPosition::Reward} {on_rewarded} />
                <button class="btn-final" disabled={!*armed} onclick={on_confirm}>
                    { if *armed { "Ad finished - receive the final set" } else { "Button unlocks after the ad" } }
                </button>
                <button class="btn-ghost" onclick={on_close}>{ "Close" }</button>
            </div>
        </div>
    }
}
