use sajulotto_core::history::HistoryRecord;
use yew::prelude::*;

use crate::app::store::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub store: UseReducerHandle<SessionStore>,
    pub preview_set: UseStateHandle<Vec<u8>>,
    pub visitor_count: UseStateHandle<u32>,
    pub history_items: UseStateHandle<Vec<HistoryRecord>>,
    pub logged_in: UseStateHandle<bool>,
    pub show_history: UseStateHandle<bool>,
    pub show_auth: UseStateHandle<bool>,
    pub show_final_gate: UseStateHandle<bool>,
    pub error_message: UseStateHandle<Option<AttrValue>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        store: use_reducer(SessionStore::default),
        preview_set: use_state(|| vec![7, 14, 21, 28, 35, 42]),
        visitor_count: use_state(|| 12_504_u32),
        history_items: use_state(Vec::new),
        logged_in: use_state(|| false),
        show_history: use_state(|| false),
        show_auth: use_state(|| false),
        show_final_gate: use_state(|| false),
        error_message: use_state(|| None),
    }
}
