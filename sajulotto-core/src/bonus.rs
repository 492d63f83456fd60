//! Reward-gated bonus sets, unlocked strictly in sequence.

use rand::Rng;

use crate::constants::{BONUS_CATEGORIES, FINAL_DECISION_SLOT};
use crate::draw;

/// Per-slot gate progression for one unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStage {
    AdPlaying,
    AdComplete,
    Consumed,
}

/// Charge step applied per roll tick.
pub const ROLL_CHARGE_STEP: f32 = 1.1;
/// Balls in a bonus set reveal.
pub const ROLL_BALL_COUNT: usize = draw::SET_SIZE;

/// In-flight bonus draw with its reveal animation counters.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRoll {
    numbers: Vec<u8>,
    charge: f32,
    revealed: usize,
}

impl PendingRoll {
    fn new(numbers: Vec<u8>) -> Self {
        Self {
            numbers,
            charge: 0.0,
            revealed: 0,
        }
    }

    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    #[must_use]
    pub const fn charge(&self) -> f32 {
        self.charge
    }

    #[must_use]
    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub fn is_charged(&self) -> bool {
        self.charge >= 100.0
    }

    #[must_use]
    pub const fn is_fully_revealed(&self) -> bool {
        self.revealed >= ROLL_BALL_COUNT
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveUnlock {
    slot: usize,
    stage: GateStage,
    roll: Option<PendingRoll>,
}

/// Unlock state for the five sequential bonus sets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BonusState {
    unlocked_sets: Vec<Vec<u8>>,
    final_decision_unlocked: bool,
    active: Option<ActiveUnlock>,
}

impl BonusState {
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.unlocked_sets.len()
    }

    #[must_use]
    pub fn unlocked_sets(&self) -> &[Vec<u8>] {
        &self.unlocked_sets
    }

    #[must_use]
    pub const fn final_decision_unlocked(&self) -> bool {
        self.final_decision_unlocked
    }

    /// The only slot currently eligible for an unlock request.
    #[must_use]
    pub fn next_slot(&self) -> Option<usize> {
        let next = self.unlocked_count();
        (next < BONUS_CATEGORIES.len()).then_some(next)
    }

    #[must_use]
    pub fn active_slot(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.slot)
    }

    #[must_use]
    pub fn gate_stage(&self) -> Option<GateStage> {
        self.active.as_ref().map(|a| a.stage)
    }

    #[must_use]
    pub fn pending_roll(&self) -> Option<&PendingRoll> {
        self.active.as_ref().and_then(|a| a.roll.as_ref())
    }

    /// Whether `slot` may start its gate right now.
    #[must_use]
    pub fn can_request(&self, slot: usize) -> bool {
        self.active.is_none()
            && self.next_slot() == Some(slot)
            && (slot != FINAL_DECISION_SLOT || self.final_decision_unlocked)
    }

    /// Begin the gate for `slot`. Out-of-order or duplicate requests are
    /// no-ops.
    pub fn request_unlock(&mut self, slot: usize) -> bool {
        if !self.can_request(slot) {
            return false;
        }
        self.active = Some(ActiveUnlock {
            slot,
            stage: GateStage::AdPlaying,
            roll: None,
        });
        true
    }

    /// One-time grant making the final slot's gate reachable.
    pub fn grant_final_decision(&mut self) {
        self.final_decision_unlocked = true;
    }

    /// Mark the simulated ad as watched. Duplicate signals do not re-arm.
    pub fn ad_complete(&mut self) -> bool {
        match self.active.as_mut() {
            Some(active) if active.stage == GateStage::AdPlaying => {
                active.stage = GateStage::AdComplete;
                true
            }
            _ => false,
        }
    }

    /// Consume the completed ad: draw the bonus set and open its roll.
    pub fn confirm_unlock(&mut self, rng: &mut impl Rng, primary: &[u8]) -> bool {
        match self.active.as_mut() {
            Some(active) if active.stage == GateStage::AdComplete => {
                active.stage = GateStage::Consumed;
                active.roll = Some(PendingRoll::new(draw::draw_bonus(rng, primary)));
                true
            }
            _ => false,
        }
    }

    /// Advance the charge bar one tick.
    pub fn roll_charge_tick(&mut self) {
        if let Some(roll) = self.roll_mut() {
            roll.charge = (roll.charge + ROLL_CHARGE_STEP).min(100.0);
        }
    }

    /// Force the charge bar full after the fixed charge duration.
    pub fn roll_force_charged(&mut self) {
        if let Some(roll) = self.roll_mut() {
            roll.charge = 100.0;
        }
    }

    /// Reveal the next bonus ball, once the bar is full.
    pub fn roll_reveal_tick(&mut self) {
        if let Some(roll) = self.roll_mut()
            && roll.is_charged()
            && roll.revealed < ROLL_BALL_COUNT
        {
            roll.revealed += 1;
        }
    }

    /// Grant the fully revealed set, appending it and closing the unlock.
    pub fn roll_settle(&mut self) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        let Some(roll) = active.roll.as_ref() else {
            return false;
        };
        if !roll.is_fully_revealed() {
            return false;
        }
        let numbers = roll.numbers.clone();
        self.unlocked_sets.push(numbers);
        self.active = None;
        true
    }

    /// Abandon an unlock before consumption; no side effects remain.
    pub fn cancel_unlock(&mut self) -> bool {
        match self.active.as_ref() {
            Some(active) if active.stage != GateStage::Consumed => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn roll_mut(&mut self) -> Option<&mut PendingRoll> {
        self.active.as_mut().and_then(|a| a.roll.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const PRIMARY: [u8; 6] = [3, 11, 19, 27, 35, 43];

    fn run_full_unlock(state: &mut BonusState, rng: &mut SmallRng, slot: usize) {
        assert!(state.request_unlock(slot));
        assert!(state.ad_complete());
        assert!(state.confirm_unlock(rng, &PRIMARY));
        state.roll_force_charged();
        for _ in 0..ROLL_BALL_COUNT {
            state.roll_reveal_tick();
        }
        assert!(state.roll_settle());
    }

    #[test]
    fn slots_unlock_strictly_in_order() {
        let mut state = BonusState::default();
        let mut rng = SmallRng::seed_from_u64(5);
        assert!(!state.request_unlock(1), "slot 1 before slot 0 is a no-op");
        assert!(!state.request_unlock(4));
        run_full_unlock(&mut state, &mut rng, 0);
        assert_eq!(state.unlocked_count(), 1);
        assert!(!state.request_unlock(0), "slot 0 cannot unlock twice");
        assert!(state.request_unlock(1));
    }

    #[test]
    fn one_unlock_in_flight_at_a_time() {
        let mut state = BonusState::default();
        assert!(state.request_unlock(0));
        assert!(!state.request_unlock(0));
        assert!(!state.request_unlock(1));
    }

    #[test]
    fn duplicate_ad_completion_grants_exactly_one_set() {
        let mut state = BonusState::default();
        let mut rng = SmallRng::seed_from_u64(6);
        assert!(state.request_unlock(0));
        assert!(state.ad_complete());
        assert!(!state.ad_complete(), "second completion must not re-arm");
        assert!(state.confirm_unlock(&mut rng, &PRIMARY));
        assert!(
            !state.confirm_unlock(&mut rng, &PRIMARY),
            "confirm is one-shot"
        );
        state.roll_force_charged();
        for _ in 0..ROLL_BALL_COUNT {
            state.roll_reveal_tick();
        }
        assert!(state.roll_settle());
        assert!(!state.roll_settle());
        assert_eq!(state.unlocked_count(), 1);
    }

    #[test]
    fn final_slot_needs_the_extra_gate() {
        let mut state = BonusState::default();
        let mut rng = SmallRng::seed_from_u64(7);
        for slot in 0..FINAL_DECISION_SLOT {
            run_full_unlock(&mut state, &mut rng, slot);
        }
        assert!(!state.request_unlock(FINAL_DECISION_SLOT));
        assert!(!state.request_unlock(FINAL_DECISION_SLOT));
        state.grant_final_decision();
        run_full_unlock(&mut state, &mut rng, FINAL_DECISION_SLOT);
        assert_eq!(state.unlocked_count(), BONUS_CATEGORIES.len());
        assert!(state.next_slot().is_none());
    }

    #[test]
    fn cancel_before_consumption_leaves_no_trace() {
        let mut state = BonusState::default();
        assert!(state.request_unlock(0));
        assert!(state.cancel_unlock());
        assert_eq!(state, BonusState::default());

        assert!(state.request_unlock(0));
        assert!(state.ad_complete());
        assert!(state.cancel_unlock(), "cancel after ad, before confirm");
        assert_eq!(state.unlocked_count(), 0);
        assert!(state.gate_stage().is_none());
    }

    #[test]
    fn roll_reveals_wait_for_full_charge() {
        let mut state = BonusState::default();
        let mut rng = SmallRng::seed_from_u64(8);
        assert!(state.request_unlock(0));
        assert!(state.ad_complete());
        assert!(state.confirm_unlock(&mut rng, &PRIMARY));
        state.roll_reveal_tick();
        assert_eq!(state.pending_roll().unwrap().revealed(), 0);
        for _ in 0..200 {
            state.roll_charge_tick();
        }
        assert!(state.pending_roll().unwrap().is_charged());
        state.roll_reveal_tick();
        assert_eq!(state.pending_roll().unwrap().revealed(), 1);
    }

    #[test]
    fn bonus_sets_build_on_the_primary_prefix() {
        let mut state = BonusState::default();
        let mut rng = SmallRng::seed_from_u64(9);
        run_full_unlock(&mut state, &mut rng, 0);
        let set = &state.unlocked_sets()[0];
        for n in &PRIMARY[..draw::BONUS_PREFIX_LEN] {
            assert!(set.contains(n));
        }
    }
}
