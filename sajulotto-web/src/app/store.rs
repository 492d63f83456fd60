//! Reducer wrapper around the core session.
//!
//! Every mutation flows through one named action; timer callbacks dispatch
//! with the token they were scheduled under so late deliveries die inside
//! the core guards instead of mutating a retired attempt.

use std::rc::Rc;

use sajulotto_core::report::FortuneReport;
use sajulotto_core::{AttemptToken, BirthProfile, Session};
use yew::prelude::*;

pub enum SessionAction {
    /// Start a new attempt. The profile is validated by the submit handler
    /// before dispatch.
    Submit { profile: BirthProfile, seed: u64 },
    ProgressTick(AttemptToken),
    SecondTick(AttemptToken),
    AnalysisResolved(AttemptToken, Box<FortuneReport>),
    AnalysisFailed(AttemptToken),
    WaitElapsed(AttemptToken),
    EnterResult(AttemptToken),
    RevealTick(AttemptToken),
    RequestUnlock(usize),
    GrantFinalDecision,
    AdComplete,
    ConfirmUnlock,
    CancelUnlock,
    RollChargeTick(AttemptToken),
    RollForceCharged(AttemptToken),
    RollRevealTick(AttemptToken),
    RollSettle(AttemptToken),
    MarkSaved,
    Reset,
}

#[derive(Default)]
pub struct SessionStore {
    pub session: Session,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();
        match action {
            SessionAction::Submit { profile, seed } => {
                let _ = session.submit(profile, seed);
            }
            SessionAction::ProgressTick(token) => session.progress_tick(token),
            SessionAction::SecondTick(token) => session.second_tick(token),
            SessionAction::AnalysisResolved(token, report) => {
                session.analysis_resolved(token, *report);
            }
            SessionAction::AnalysisFailed(token) => session.analysis_failed(token),
            SessionAction::WaitElapsed(token) => session.wait_elapsed(token),
            SessionAction::EnterResult(token) => session.enter_result(token),
            SessionAction::RevealTick(token) => session.reveal_tick(token),
            SessionAction::RequestUnlock(slot) => {
                let _ = session.request_unlock(slot);
            }
            SessionAction::GrantFinalDecision => session.grant_final_decision(),
            SessionAction::AdComplete => {
                let _ = session.ad_complete();
            }
            SessionAction::ConfirmUnlock => {
                let _ = session.confirm_unlock();
            }
            SessionAction::CancelUnlock => {
                let _ = session.cancel_unlock();
            }
            SessionAction::RollChargeTick(token) => session.roll_charge_tick(token),
            SessionAction::RollForceCharged(token) => session.roll_force_charged(token),
            SessionAction::RollRevealTick(token) => session.roll_reveal_tick(token),
            SessionAction::RollSettle(token) => {
                let _ = session.roll_settle(token);
            }
            SessionAction::MarkSaved => {
                let _ = session.mark_saved();
            }
            SessionAction::Reset => session.reset(),
        }
        Rc::new(Self { session })
    }
}
