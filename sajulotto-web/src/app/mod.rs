pub mod handlers;
pub mod state;
pub mod store;
pub mod timers;

use sajulotto_core::constants::BONUS_CATEGORIES;
use sajulotto_core::history::HistoryStore;
use sajulotto_core::numbers::percent_display;
use sajulotto_core::{ANALYSIS_STEPS, AccountGate, GateStage, Phase};
use yew::prelude::*;

use crate::components::{AdPlaceholder, AdPosition, AuthModal, FinalGateModal, HistoryPanel, RewardModal};
use crate::storage::BrowserStore;
use crate::views::{AnalyzingView, IdleView, ResultView, RollView};
use state::{AppState, use_app_state};

/// Load persisted history and the member flag once on mount.
#[hook]
fn use_bootstrap(state: &AppState) {
    let history_items = state.history_items.clone();
    let logged_in = state.logged_in.clone();
    use_effect_with((), move |()| {
        history_items.set(HistoryStore::new(BrowserStore).load_all());
        logged_in.set(AccountGate::new(BrowserStore).is_member());
    });
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_app_state();
    use_bootstrap(&state);
    timers::use_idle_cosmetics(&state);
    timers::use_analysis_clock(&state);
    timers::use_analysis_request(&state);
    timers::use_result_entry(&state);
    timers::use_reveal_clock(&state);
    timers::use_roll_clock(&state);

    let session = &state.store.session;
    let on_submit = handlers::build_submit(&state);
    let on_reset = handlers::build_reset(&state);
    let on_unlock = handlers::build_unlock_request(&state);
    let on_ad_rewarded = handlers::build_ad_rewarded(&state);
    let on_confirm_unlock = handlers::build_confirm_unlock(&state);
    let on_cancel_unlock = handlers::build_cancel_unlock(&state);
    let on_final_confirm = handlers::build_final_gate_confirm(&state);
    let on_final_close = handlers::build_final_gate_close(&state);
    let on_save = handlers::build_save(&state);
    let on_delete_history = handlers::build_delete_history(&state);
    let on_login = handlers::build_login(&state);
    let on_logout = handlers::build_logout(&state);

    let user_name = AttrValue::from(session.profile().name.trim().to_string());

    let main = match session.phase() {
        Phase::Idle => html! {
            <IdleView
                initial={session.profile().clone()}
                preview={(*state.preview_set).clone()}
                error={(*state.error_message).clone()}
                on_submit={on_submit} />
        },
        Phase::Analyzing => {
            let progress = session.progress();
            let percent = progress.map_or(0, |p| percent_display(p.percent()));
            let step = progress.map_or(0, |p| p.step_index());
            html! {
                <AnalyzingView
                    user_name={user_name.clone()}
                    {percent}
                    step_message={AttrValue::from(ANALYSIS_STEPS[step % ANALYSIS_STEPS.len()])}
                    expected_secs={progress.map_or(0, |p| p.expected_wait_secs())}
                    remaining_secs={progress.map_or(0, |p| p.remaining_secs())} />
            }
        }
        Phase::Result => match session.report() {
            Some(report) => {
                let rolling = session.bonus().pending_roll().map(|roll| RollView {
                    progress: percent_display(roll.charge()),
                    revealed: roll.revealed(),
                    numbers: roll.numbers().to_vec(),
                });
                html! {
                    <ResultView
                        user_name={user_name.clone()}
                        report={report.clone()}
                        primary={session.primary_set().to_vec()}
                        revealed={session.revealed_count()}
                        unlocked_sets={session.bonus().unlocked_sets().to_vec()}
                        {rolling}
                        saved={session.saved()}
                        on_unlock={on_unlock}
                        on_save={on_save}
                        on_reset={on_reset} />
                }
            }
            // A result phase without a report cannot be reached through the
            // named operations; render nothing rather than panic.
            None => html! {},
        },
    };

    // The reward modal is open exactly while a gate is playing or armed.
    let reward_modal = session.bonus().gate_stage().and_then(|stage| {
        matches!(stage, GateStage::AdPlaying | GateStage::AdComplete).then(|| {
            let slot = session.bonus().active_slot().unwrap_or_default();
            let title = BONUS_CATEGORIES
                .get(slot)
                .map_or("", |category| category.title);
            html! {
                <RewardModal
                    title={AttrValue::from(title)}
                    user_name={user_name.clone()}
                    armed={stage == GateStage::AdComplete}
                    on_rewarded={on_ad_rewarded.clone()}
                    on_complete={on_confirm_unlock.clone()}
                    on_close={on_cancel_unlock.clone()} />
            }
        })
    });

    let on_show_history = {
        let show_history = state.show_history.clone();
        Callback::from(move |_| show_history.set(true))
    };
    let on_close_history = {
        let show_history = state.show_history.clone();
        Callback::from(move |()| show_history.set(false))
    };
    let on_open_auth = {
        let show_auth = state.show_auth.clone();
        Callback::from(move |_| show_auth.set(true))
    };
    let on_open_auth_unit = {
        let show_auth = state.show_auth.clone();
        Callback::from(move |()| show_auth.set(true))
    };
    let on_close_auth = {
        let show_auth = state.show_auth.clone();
        Callback::from(move |()| show_auth.set(false))
    };
    let on_logout_click = {
        let on_logout = on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="app-shell">
            <header class="app-header">
                <div class="brand">
                    <span class="brand-mark">{ "☯" }</span>
                    <h1>{ "Saju Lotto" }</h1>
                </div>
                <div class="header-actions">
                    <button class="btn-chip" onclick={on_show_history}>{ "📜 Records" }</button>
                    if *state.logged_in {
                        <button class="btn-chip member" onclick={on_logout_click}>{ "My Luck" }</button>
                    } else {
                        <button class="btn-chip" onclick={on_open_auth}>{ "Sign in" }</button>
                    }
                </div>
            </header>

            <main class="app-main">
                { main }
                <AdPlaceholder position={AdPosition::Bottom} />
            </main>

            if let Some(modal) = reward_modal {
                { modal }
            }
            if *state.show_final_gate {
                <FinalGateModal on_confirm={on_final_confirm} on_close={on_final_close} />
            }
            if *state.show_auth {
                <AuthModal on_authed={on_login} on_close={on_close_auth} />
            }
            if *state.show_history {
                <HistoryPanel
                    items={(*state.history_items).clone()}
                    logged_in={*state.logged_in}
                    on_close={on_close_history}
                    on_delete={on_delete_history}
                    on_login={on_open_auth_unit} />
            }

            <footer class="app-footer">
                <p class="visitor-line">
                    { format!("{} readings completed today", *state.visitor_count) }
                </p>
                <p class="blessing">
                    { "Where the wisdom of the fire-horse year meets AI. May the grand luck written in your chart come true." }
                </p>
            </footer>
        </div>
    }
}
