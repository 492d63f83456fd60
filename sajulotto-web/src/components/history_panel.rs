use sajulotto_core::history::HistoryRecord;
use yew::prelude::*;

use super::LottoBall;
use crate::dom;

#[derive(Properties, PartialEq, Clone)]
pub struct HistoryPanelProps {
    pub items: Vec<HistoryRecord>,
    pub logged_in: bool,
    pub on_close: Callback<()>,
    pub on_delete: Callback<String>,
    pub on_login: Callback<()>,
}

#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    let on_close = {
        let on = props.on_close.clone();
        Callback::from(move |_| on.emit(()))
    };
    let on_login = {
        let on = props.on_login.clone();
        Callback::from(move |_| on.emit(()))
    };

    let body = if !props.logged_in {
        html! {
            <div class="history-empty">
                <span class="history-icon">{ "🔐" }</span>
                <p>{ "Sign in to revisit your saved lucky numbers any time." }</p>
                <button class="btn-primary" onclick={on_login}>{ "Sign in" }</button>
            </div>
        }
    } else if props.items.is_empty() {
        html! {
            <div class="history-empty">
                <span class="history-icon">{ "📭" }</span>
                <p>{ "No saved records yet." }</p>
            </div>
        }
    } else {
        html! {
            <div class="history-list">
                { for props.items.iter().map(|item| {
                    let on_delete = {
                        let on = props.on_delete.clone();
                        let id = item.id.clone();
                        Callback::from(move |_| on.emit(id.clone()))
                    };
                    html! {
                        <div class="history-item" key={item.id.clone()}>
                            <div class="history-head">
                                <div>
                                    <span class="history-date">{ dom::format_date(item.timestamp) }</span>
                                    <h4>{ format!("Reading for {}", item.name) }</h4>
                                    <span class="history-element">{ item.main_element.clone() }</span>
                                </div>
                                <button class="btn-delete" onclick={on_delete}>{ "✕" }</button>
                            </div>
                            <div class="ball-row">
                                { for item.numbers.iter().map(|&n| html! { <LottoBall number={n} /> }) }
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="history-panel">
            <div class="history-header">
                <h3>{ "Saved lucky records" }</h3>
                <button class="btn-ghost" onclick={on_close}>{ "✕" }</button>
            </div>
            { body }
        </div>
    }
}
