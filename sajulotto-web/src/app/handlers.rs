//! Callback constructors wiring user actions to the session reducer and
//! the persistence collaborators.

use sajulotto_core::constants::FINAL_DECISION_SLOT;
use sajulotto_core::history::{HistoryRecord, HistoryStore};
use sajulotto_core::{AccountGate, BirthProfile};
use yew::prelude::*;

use crate::app::state::AppState;
use crate::app::store::SessionAction;
use crate::dom;
use crate::storage::BrowserStore;

pub fn build_submit(state: &AppState) -> Callback<BirthProfile> {
    let store = state.store.clone();
    let error = state.error_message.clone();
    Callback::from(move |profile: BirthProfile| {
        if let Err(err) = profile.validate() {
            error.set(Some(AttrValue::from(err.to_string())));
            return;
        }
        error.set(None);
        store.dispatch(SessionAction::Submit {
            profile,
            seed: dom::entropy_seed(),
        });
    })
}

pub fn build_reset(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    let error = state.error_message.clone();
    Callback::from(move |()| {
        error.set(None);
        store.dispatch(SessionAction::Reset);
    })
}

/// Route an unlock request: the final slot detours through its one-time
/// gate until granted, everything else opens the reward modal directly.
pub fn build_unlock_request(state: &AppState) -> Callback<usize> {
    let store = state.store.clone();
    let show_final_gate = state.show_final_gate.clone();
    Callback::from(move |slot: usize| {
        if slot == FINAL_DECISION_SLOT && !store.session.bonus().final_decision_unlocked() {
            show_final_gate.set(true);
            return;
        }
        store.dispatch(SessionAction::RequestUnlock(slot));
    })
}

pub fn build_ad_rewarded(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    Callback::from(move |()| store.dispatch(SessionAction::AdComplete))
}

pub fn build_confirm_unlock(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    Callback::from(move |()| store.dispatch(SessionAction::ConfirmUnlock))
}

pub fn build_cancel_unlock(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    Callback::from(move |()| store.dispatch(SessionAction::CancelUnlock))
}

/// The final gate's ad doubles as the reward ad, so confirming grants the
/// flag and runs the whole unlock in one go.
pub fn build_final_gate_confirm(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    let show_final_gate = state.show_final_gate.clone();
    Callback::from(move |()| {
        show_final_gate.set(false);
        store.dispatch(SessionAction::GrantFinalDecision);
        store.dispatch(SessionAction::RequestUnlock(FINAL_DECISION_SLOT));
        store.dispatch(SessionAction::AdComplete);
        store.dispatch(SessionAction::ConfirmUnlock);
    })
}

pub fn build_final_gate_close(state: &AppState) -> Callback<()> {
    let show_final_gate = state.show_final_gate.clone();
    Callback::from(move |()| show_final_gate.set(false))
}

pub fn build_save(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    let history_items = state.history_items.clone();
    let logged_in = state.logged_in.clone();
    let show_auth = state.show_auth.clone();
    Callback::from(move |()| {
        if !*logged_in {
            show_auth.set(true);
            return;
        }
        let session = &store.session;
        if session.saved() {
            return;
        }
        let Some(report) = session.report() else {
            return;
        };
        let now = dom::now_ms();
        let record = HistoryRecord {
            id: now.to_string(),
            name: session.profile().name.trim().to_string(),
            numbers: session.primary_set().to_vec(),
            main_element: report.main_element.clone(),
            timestamp: now,
            full_report: Some(report.full_report.clone()),
        };
        match HistoryStore::new(BrowserStore).append(record) {
            Ok(items) => {
                history_items.set(items);
                store.dispatch(SessionAction::MarkSaved);
            }
            Err(err) => log::error!("failed to save history: {err}"),
        }
    })
}

pub fn build_delete_history(state: &AppState) -> Callback<String> {
    let history_items = state.history_items.clone();
    Callback::from(move |id: String| {
        match HistoryStore::new(BrowserStore).remove(&id) {
            Ok(items) => history_items.set(items),
            Err(err) => log::error!("failed to delete history record: {err}"),
        }
    })
}

pub fn build_login(state: &AppState) -> Callback<()> {
    let logged_in = state.logged_in.clone();
    Callback::from(move |()| {
        if let Err(err) = AccountGate::new(BrowserStore).log_in() {
            log::error!("failed to persist member flag: {err}");
        }
        logged_in.set(true);
    })
}

pub fn build_logout(state: &AppState) -> Callback<()> {
    let logged_in = state.logged_in.clone();
    Callback::from(move |()| {
        if let Err(err) = AccountGate::new(BrowserStore).log_out() {
            log::error!("failed to clear member flag: {err}");
        }
        logged_in.set(false);
    })
}
