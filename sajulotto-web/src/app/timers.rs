//! Phase-owned timer choreography.
//!
//! Each hook schedules its intervals/timeouts when its phase (or sub-state)
//! becomes active and drops them on exit; a dropped gloo timer is a
//! cancelled timer. Dispatches carry the attempt token captured at schedule
//! time, so anything that fires late is a guarded no-op in the core.

use std::cell::Cell;

use gloo::timers::callback::{Interval, Timeout};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sajulotto_core::constants::{
    PREVIEW_SHUFFLE_MS, RESULT_ENTRY_DELAY_MS, REVEAL_TICK_MS, ROLL_CHARGE_DURATION_MS,
    ROLL_CHARGE_TICK_MS, ROLL_REVEAL_TICK_MS, ROLL_SETTLE_MS, VISITOR_TICK_MS,
};
use sajulotto_core::progress::{PERCENT_TICK_MS, SECOND_TICK_MS};
use sajulotto_core::{Phase, Session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::analysis;
use crate::app::state::AppState;
use crate::app::store::SessionAction;
use crate::dom;

/// Idle-only preview reshuffle plus the always-on visitor ticker.
#[hook]
pub fn use_idle_cosmetics(state: &AppState) {
    let phase = state.store.session.phase();

    {
        let preview = state.preview_set.clone();
        use_effect_with(phase, move |phase| {
            let mut shuffle = None;
            if *phase == Phase::Idle {
                let mut rng = SmallRng::seed_from_u64(dom::entropy_seed());
                shuffle = Some(Interval::new(PREVIEW_SHUFFLE_MS, move || {
                    preview.set(Session::preview_set(&mut rng));
                }));
            }
            move || drop(shuffle)
        });
    }

    {
        let visitors = state.visitor_count.clone();
        use_effect_with((), move |()| {
            let count = Cell::new(*visitors);
            let mut rng = SmallRng::seed_from_u64(dom::entropy_seed() ^ 0x9E37_79B9);
            let ticker = Interval::new(VISITOR_TICK_MS, move || {
                count.set(count.get() + rng.gen_range(0..3));
                visitors.set(count.get());
            });
            move || drop(ticker)
        });
    }
}

/// The two fixed-rate clocks owned by the analyzing phase.
#[hook]
pub fn use_analysis_clock(state: &AppState) {
    let store = state.store.clone();
    let session = &store.session;
    let deps = (session.phase() == Phase::Analyzing, session.token());
    use_effect_with(deps, move |(analyzing, token)| {
        let mut clocks = None;
        if *analyzing {
            let token = *token;
            let percent = {
                let store = store.clone();
                Interval::new(PERCENT_TICK_MS, move || {
                    store.dispatch(SessionAction::ProgressTick(token));
                })
            };
            let second = {
                let store = store.clone();
                Interval::new(SECOND_TICK_MS, move || {
                    store.dispatch(SessionAction::SecondTick(token));
                })
            };
            clocks = Some((percent, second));
        }
        move || drop(clocks)
    });
}

/// The real work of the analyzing phase: the collaborator call and the
/// minimum-wait floor. The result screen waits for both.
#[hook]
pub fn use_analysis_request(state: &AppState) {
    let store = state.store.clone();
    let error = state.error_message.clone();
    let session = &store.session;
    let profile = session.profile().clone();
    let numbers = session.primary_set().to_vec();
    let wait_secs = session
        .progress()
        .map_or(0, |progress| progress.expected_wait_secs());
    let deps = (session.phase() == Phase::Analyzing, session.token());
    use_effect_with(deps, move |(analyzing, token)| {
        let mut wait_floor = None;
        if *analyzing {
            let token = *token;
            {
                let store = store.clone();
                wait_floor = Some(Timeout::new(u32::from(wait_secs) * 1_000, move || {
                    store.dispatch(SessionAction::WaitElapsed(token));
                }));
            }
            spawn_local(async move {
                let today = dom::today_string();
                match analysis::analyze_fortune(&profile, &numbers, &today).await {
                    Ok(report) => {
                        store.dispatch(SessionAction::AnalysisResolved(token, Box::new(report)));
                    }
                    Err(err) => {
                        log::error!("fortune analysis failed: {err}");
                        error.set(Some(AttrValue::from(
                            "The analysis ran into an error. Please try again in a moment.",
                        )));
                        store.dispatch(SessionAction::AnalysisFailed(token));
                    }
                }
            });
        }
        move || drop(wait_floor)
    });
}

/// Short pause on the full progress ring before the result screen mounts.
#[hook]
pub fn use_result_entry(state: &AppState) {
    let store = state.store.clone();
    let session = &store.session;
    let deps = (
        session.phase() == Phase::Analyzing && session.analysis_complete(),
        session.token(),
    );
    use_effect_with(deps, move |(ready, token)| {
        let mut entry = None;
        if *ready {
            let token = *token;
            entry = Some(Timeout::new(RESULT_ENTRY_DELAY_MS, move || {
                store.dispatch(SessionAction::EnterResult(token));
            }));
        }
        move || drop(entry)
    });
}

/// Staged primary-ball reveal; one timeout per ball, re-armed per reveal.
#[hook]
pub fn use_reveal_clock(state: &AppState) {
    let store = state.store.clone();
    let session = &store.session;
    let deps = (
        session.reveal_pending(),
        session.revealed_count(),
        session.token(),
    );
    use_effect_with(deps, move |(pending, _revealed, token)| {
        let mut reveal = None;
        if *pending {
            let token = *token;
            reveal = Some(Timeout::new(REVEAL_TICK_MS, move || {
                store.dispatch(SessionAction::RevealTick(token));
            }));
        }
        move || drop(reveal)
    });
}

/// Bonus-roll choreography: charge bar, staged ball reveal, settle.
#[hook]
pub fn use_roll_clock(state: &AppState) {
    let store = state.store.clone();
    let session = &store.session;
    let roll_key = session
        .bonus()
        .pending_roll()
        .map(|roll| (roll.is_charged(), roll.revealed()));
    let deps = (roll_key, session.token());
    use_effect_with(deps, move |(roll_key, token)| {
        let token = *token;
        let mut charge_clock = None;
        let mut force_full = None;
        let mut step = None;
        match roll_key {
            // Charging: tick the bar, with a hard stop at the fixed duration.
            Some((false, _)) => {
                charge_clock = {
                    let store = store.clone();
                    Some(Interval::new(ROLL_CHARGE_TICK_MS, move || {
                        store.dispatch(SessionAction::RollChargeTick(token));
                    }))
                };
                force_full = Some(Timeout::new(ROLL_CHARGE_DURATION_MS, move || {
                    store.dispatch(SessionAction::RollForceCharged(token));
                }));
            }
            // Revealing: one ball per fixed delay.
            Some((true, revealed)) if *revealed < sajulotto_core::session::REVEAL_BALL_COUNT => {
                step = Some(Timeout::new(ROLL_REVEAL_TICK_MS, move || {
                    store.dispatch(SessionAction::RollRevealTick(token));
                }));
            }
            // Fully revealed: settle and grant.
            Some((true, _)) => {
                step = Some(Timeout::new(ROLL_SETTLE_MS, move || {
                    store.dispatch(SessionAction::RollSettle(token));
                }));
            }
            None => {}
        }
        move || {
            drop(charge_clock);
            drop(force_full);
            drop(step);
        }
    });
}
