//! Top-level session state machine.
//!
//! The session is a plain value transitioned only through named operations.
//! Timer and async callbacks carry the [`AttemptToken`] they were scheduled
//! under; events from a retired attempt are silent no-ops, never errors.

use std::rc::Rc;

use rand::Rng;

use crate::bonus::BonusState;
use crate::constants::ANALYSIS_STEPS;
use crate::draw;
use crate::profile::{BirthProfile, ValidationError};
use crate::progress::AnalysisProgress;
use crate::report::FortuneReport;
use crate::rng::RngBundle;

/// Balls revealed one by one on the result screen.
pub const REVEAL_BALL_COUNT: usize = draw::SET_SIZE;

/// Top-level phase of one analysis attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Analyzing,
    Result,
}

/// Opaque handle tying scheduled work to the attempt that spawned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptToken(u64);

/// One user analysis attempt plus its bonus-unlock state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    phase: Phase,
    attempt: u64,
    profile: BirthProfile,
    rng: Option<Rc<RngBundle>>,
    progress: Option<AnalysisProgress>,
    primary_set: Vec<u8>,
    report: Option<FortuneReport>,
    analysis_done: bool,
    wait_done: bool,
    revealed_count: usize,
    saved: bool,
    bonus: BonusState,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn profile(&self) -> &BirthProfile {
        &self.profile
    }

    #[must_use]
    pub fn primary_set(&self) -> &[u8] {
        &self.primary_set
    }

    #[must_use]
    pub const fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    #[must_use]
    pub fn report(&self) -> Option<&FortuneReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> Option<&AnalysisProgress> {
        self.progress.as_ref()
    }

    #[must_use]
    pub const fn bonus(&self) -> &BonusState {
        &self.bonus
    }

    #[must_use]
    pub const fn saved(&self) -> bool {
        self.saved
    }

    /// Token for the attempt currently in flight.
    #[must_use]
    pub const fn token(&self) -> AttemptToken {
        AttemptToken(self.attempt)
    }

    /// Whether both the collaborator and the minimum wait have resolved.
    #[must_use]
    pub const fn analysis_complete(&self) -> bool {
        self.analysis_done && self.wait_done
    }

    /// Start a new attempt from the submitted profile.
    ///
    /// Resets every per-attempt counter, fixes the expected wait, and draws
    /// the primary set up front. A new submission always retires the
    /// previous attempt.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the profile fails the submission
    /// guard; the session is left untouched.
    pub fn submit(
        &mut self,
        profile: BirthProfile,
        seed: u64,
    ) -> Result<AttemptToken, ValidationError> {
        profile.validate()?;
        self.attempt += 1;
        let bundle = Rc::new(RngBundle::from_user_seed(seed));
        self.progress = Some(AnalysisProgress::start(
            &mut *bundle.wait(),
            ANALYSIS_STEPS.len(),
        ));
        self.primary_set = draw::draw_primary(&mut *bundle.primary());
        self.rng = Some(bundle);
        self.profile = profile;
        self.report = None;
        self.analysis_done = false;
        self.wait_done = false;
        self.revealed_count = 0;
        self.saved = false;
        self.bonus.reset();
        self.phase = Phase::Analyzing;
        Ok(self.token())
    }

    /// Advance the fake percent counter (100 ms cadence).
    pub fn progress_tick(&mut self, token: AttemptToken) {
        if self.owns(token) && self.phase == Phase::Analyzing {
            if let Some(progress) = self.progress.as_mut() {
                progress.tick_percent();
            }
        }
    }

    /// Advance the step message and countdown (1 s cadence).
    pub fn second_tick(&mut self, token: AttemptToken) {
        if self.owns(token) && self.phase == Phase::Analyzing {
            if let Some(progress) = self.progress.as_mut() {
                progress.tick_second();
            }
        }
    }

    /// Record the collaborator's report. Duplicate resolutions are no-ops.
    pub fn analysis_resolved(&mut self, token: AttemptToken, report: FortuneReport) {
        if !self.owns(token) || self.phase != Phase::Analyzing || self.analysis_done {
            return;
        }
        self.report = Some(report);
        self.analysis_done = true;
        self.maybe_finish();
    }

    /// Record the minimum-wait floor elapsing.
    pub fn wait_elapsed(&mut self, token: AttemptToken) {
        if !self.owns(token) || self.phase != Phase::Analyzing {
            return;
        }
        self.wait_done = true;
        self.maybe_finish();
    }

    /// Mount the result screen once both completion conditions hold.
    pub fn enter_result(&mut self, token: AttemptToken) {
        if self.owns(token) && self.phase == Phase::Analyzing && self.analysis_complete() {
            self.phase = Phase::Result;
            self.revealed_count = 0;
        }
    }

    /// Abort the attempt on collaborator failure; no partial result remains.
    pub fn analysis_failed(&mut self, token: AttemptToken) {
        if self.owns(token) && self.phase == Phase::Analyzing {
            self.retire_attempt();
        }
    }

    /// Reveal the next primary ball (600 ms cadence, result screen only).
    pub fn reveal_tick(&mut self, token: AttemptToken) {
        if self.owns(token)
            && self.phase == Phase::Result
            && self.revealed_count < REVEAL_BALL_COUNT
        {
            self.revealed_count += 1;
        }
    }

    /// Whether the result screen still has balls to reveal.
    #[must_use]
    pub const fn reveal_pending(&self) -> bool {
        matches!(self.phase, Phase::Result) && self.revealed_count < REVEAL_BALL_COUNT
    }

    /// Record the session as saved to history. Write-once per attempt.
    pub fn mark_saved(&mut self) -> bool {
        if self.phase == Phase::Result && !self.saved {
            self.saved = true;
            return true;
        }
        false
    }

    /// Explicit user reset back to the form. Persisted history is untouched.
    pub fn reset(&mut self) {
        self.retire_attempt();
    }

    // Reward-gate operations, valid only on the result screen.

    /// Whether `slot` may start its gate right now.
    #[must_use]
    pub fn can_request_unlock(&self, slot: usize) -> bool {
        self.phase == Phase::Result && self.bonus.can_request(slot)
    }

    pub fn request_unlock(&mut self, slot: usize) -> bool {
        self.phase == Phase::Result && self.bonus.request_unlock(slot)
    }

    pub fn grant_final_decision(&mut self) {
        if self.phase == Phase::Result {
            self.bonus.grant_final_decision();
        }
    }

    pub fn ad_complete(&mut self) -> bool {
        self.phase == Phase::Result && self.bonus.ad_complete()
    }

    pub fn confirm_unlock(&mut self) -> bool {
        if self.phase != Phase::Result {
            return false;
        }
        let Some(bundle) = self.rng.clone() else {
            return false;
        };
        self.bonus
            .confirm_unlock(&mut *bundle.bonus(), &self.primary_set)
    }

    pub fn cancel_unlock(&mut self) -> bool {
        self.phase == Phase::Result && self.bonus.cancel_unlock()
    }

    pub fn roll_charge_tick(&mut self, token: AttemptToken) {
        if self.owns(token) && self.phase == Phase::Result {
            self.bonus.roll_charge_tick();
        }
    }

    pub fn roll_force_charged(&mut self, token: AttemptToken) {
        if self.owns(token) && self.phase == Phase::Result {
            self.bonus.roll_force_charged();
        }
    }

    pub fn roll_reveal_tick(&mut self, token: AttemptToken) {
        if self.owns(token) && self.phase == Phase::Result {
            self.bonus.roll_reveal_tick();
        }
    }

    pub fn roll_settle(&mut self, token: AttemptToken) -> bool {
        self.owns(token) && self.phase == Phase::Result && self.bonus.roll_settle()
    }

    /// Draw a cosmetic shuffle set from an external random source.
    #[must_use]
    pub fn preview_set(rng: &mut impl Rng) -> Vec<u8> {
        draw::draw_primary(rng)
    }

    const fn owns(&self, token: AttemptToken) -> bool {
        token.0 == self.attempt
    }

    /// Snap the progress ring to 100 once both completion conditions hold.
    fn maybe_finish(&mut self) {
        if self.analysis_complete()
            && let Some(progress) = self.progress.as_mut()
        {
            progress.finish();
        }
    }

    fn retire_attempt(&mut self) {
        self.attempt += 1;
        self.phase = Phase::Idle;
        self.rng = None;
        self.progress = None;
        self.primary_set.clear();
        self.report = None;
        self.analysis_done = false;
        self.wait_done = false;
        self.revealed_count = 0;
        self.saved = false;
        self.bonus.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{WAIT_CEIL_SECS, WAIT_FLOOR_SECS};
    use crate::report::FortuneReport;

    fn profile() -> BirthProfile {
        BirthProfile {
            name: "Ji-ho".to_string(),
            ..BirthProfile::default()
        }
    }

    fn report() -> FortuneReport {
        FortuneReport::from_json(
            r#"{
                "mainElement": "Wood",
                "elementDescription": "d",
                "fortuneSummary": "s",
                "luckyDirection": "East",
                "luckyColor": "Green",
                "luckyTime": "dawn",
                "fullReport": "r"
            }"#,
        )
        .unwrap()
    }

    fn analyzing_session() -> (Session, AttemptToken) {
        let mut session = Session::new();
        let token = session.submit(profile(), 0xFEED).unwrap();
        (session, token)
    }

    fn resulted_session() -> (Session, AttemptToken) {
        let (mut session, token) = analyzing_session();
        session.analysis_resolved(token, report());
        session.wait_elapsed(token);
        session.enter_result(token);
        (session, token)
    }

    #[test]
    fn submit_resets_counters_and_draws_the_primary_set() {
        let (session, _) = analyzing_session();
        assert_eq!(session.phase(), Phase::Analyzing);
        assert_eq!(session.revealed_count(), 0);
        assert_eq!(session.bonus().unlocked_count(), 0);
        let progress = session.progress().unwrap();
        assert!((progress.percent() - 0.0).abs() < f32::EPSILON);
        let wait = progress.expected_wait_secs();
        assert!((WAIT_FLOOR_SECS..=WAIT_CEIL_SECS).contains(&wait));
        assert_eq!(session.primary_set().len(), 6);
        assert!(session.primary_set().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn submit_rejects_short_names_without_state_change() {
        let mut session = Session::new();
        let err = session.submit(BirthProfile::default(), 1).unwrap_err();
        assert_eq!(err, ValidationError::NameTooShort);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.progress().is_none());
    }

    #[test]
    fn result_requires_both_completion_conditions() {
        let (mut session, token) = analyzing_session();
        session.analysis_resolved(token, report());
        session.enter_result(token);
        assert_eq!(session.phase(), Phase::Analyzing, "wait still outstanding");
        session.wait_elapsed(token);
        assert!((session.progress().unwrap().percent() - 100.0).abs() < f32::EPSILON);
        session.enter_result(token);
        assert_eq!(session.phase(), Phase::Result);

        // Opposite order.
        let (mut session, token) = analyzing_session();
        session.wait_elapsed(token);
        session.enter_result(token);
        assert_eq!(session.phase(), Phase::Analyzing, "report still outstanding");
        session.analysis_resolved(token, report());
        session.enter_result(token);
        assert_eq!(session.phase(), Phase::Result);
    }

    #[test]
    fn percent_saturates_below_100_until_completion() {
        let (mut session, token) = analyzing_session();
        for _ in 0..5_000 {
            session.progress_tick(token);
        }
        assert!((session.progress().unwrap().percent() - 99.0).abs() < f32::EPSILON);
    }

    #[test]
    fn failure_returns_to_idle_and_silences_stale_timers() {
        let (mut session, token) = analyzing_session();
        session.progress_tick(token);
        session.analysis_failed(token);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.report().is_none());
        assert!(session.progress().is_none());

        // Timers scheduled for the failed attempt keep firing; nothing moves.
        session.progress_tick(token);
        session.second_tick(token);
        session.wait_elapsed(token);
        session.enter_result(token);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.progress().is_none());
    }

    #[test]
    fn stale_tokens_from_a_previous_attempt_are_no_ops() {
        let (mut session, old_token) = analyzing_session();
        session.reset();
        let new_token = session.submit(profile(), 0xB0BA).unwrap();
        assert_ne!(old_token, new_token);

        session.analysis_resolved(old_token, report());
        session.wait_elapsed(old_token);
        session.enter_result(old_token);
        assert_eq!(session.phase(), Phase::Analyzing);
        assert!(session.report().is_none());
    }

    #[test]
    fn duplicate_resolution_keeps_the_first_report() {
        let (mut session, token) = analyzing_session();
        session.analysis_resolved(token, report());
        let mut second = report();
        second.main_element = "Metal".to_string();
        session.analysis_resolved(token, second);
        assert_eq!(session.report().unwrap().main_element, "Wood");
    }

    #[test]
    fn reveal_ticks_stop_at_six_and_only_in_result() {
        let (mut session, token) = analyzing_session();
        session.reveal_tick(token);
        assert_eq!(session.revealed_count(), 0, "not revealing while analyzing");

        let (mut session, token) = resulted_session();
        for _ in 0..10 {
            session.reveal_tick(token);
        }
        assert_eq!(session.revealed_count(), REVEAL_BALL_COUNT);
        assert!(!session.reveal_pending());
    }

    #[test]
    fn same_seed_reproduces_the_whole_attempt() {
        let run = |seed: u64| {
            let mut session = Session::new();
            let token = session.submit(profile(), seed).unwrap();
            session.analysis_resolved(token, report());
            session.wait_elapsed(token);
            session.enter_result(token);
            let mut sets = vec![session.primary_set().to_vec()];
            for slot in 0..4 {
                assert!(session.request_unlock(slot));
                assert!(session.ad_complete());
                assert!(session.confirm_unlock());
                session.roll_force_charged(token);
                for _ in 0..REVEAL_BALL_COUNT {
                    session.roll_reveal_tick(token);
                }
                assert!(session.roll_settle(token));
            }
            sets.extend(session.bonus().unlocked_sets().iter().cloned());
            (
                session.progress().unwrap().expected_wait_secs(),
                sets,
            )
        };
        assert_eq!(run(0xD1CE), run(0xD1CE));
        assert_ne!(run(0xD1CE).1, run(0xD1CE ^ 1).1);
    }

    #[test]
    fn mark_saved_is_write_once_per_attempt() {
        let (mut session, _) = resulted_session();
        assert!(session.mark_saved());
        assert!(!session.mark_saved());
        session.reset();
        assert!(!session.mark_saved(), "saving requires a result");
    }

    #[test]
    fn reset_clears_attempt_state() {
        let (mut session, token) = resulted_session();
        assert!(session.request_unlock(0));
        session.reset();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.bonus().unlocked_count(), 0);
        assert!(session.bonus().gate_stage().is_none());
        assert!(session.primary_set().is_empty());
        // Roll timers from the retired attempt are dead.
        session.roll_charge_tick(token);
        assert!(session.bonus().pending_roll().is_none());
    }
}
