//! Simulated analysis progress, decoupled from the real call's latency.

use rand::Rng;

/// Cadence of the percent counter.
pub const PERCENT_TICK_MS: u32 = 100;
/// Cadence of the step-message / remaining-time counter.
pub const SECOND_TICK_MS: u32 = 1_000;
/// Inclusive bounds of the advertised wait, in seconds.
pub const WAIT_FLOOR_SECS: u16 = 180;
pub const WAIT_CEIL_SECS: u16 = 300;
/// Percent ceiling while the real work is still outstanding.
pub const PERCENT_CEILING: f32 = 99.0;

/// Fake percentage/step/countdown state for one analysis attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisProgress {
    percent: f32,
    step_index: usize,
    step_count: usize,
    expected_wait_secs: u16,
    remaining_secs: u16,
    finished: bool,
}

impl AnalysisProgress {
    /// Start a fresh simulation, drawing the advertised wait from
    /// `[WAIT_FLOOR_SECS, WAIT_CEIL_SECS]`.
    pub fn start(rng: &mut impl Rng, step_count: usize) -> Self {
        let wait = rng.gen_range(WAIT_FLOOR_SECS..=WAIT_CEIL_SECS);
        Self {
            percent: 0.0,
            step_index: 0,
            step_count: step_count.max(1),
            expected_wait_secs: wait,
            remaining_secs: wait,
            finished: false,
        }
    }

    /// Advance the percent counter one tick: fast early, slow late, and
    /// saturating at the ceiling until the real result lands.
    pub fn tick_percent(&mut self) {
        if self.finished {
            return;
        }
        let step = if self.percent < 50.0 {
            2.0
        } else if self.percent < 80.0 {
            1.0
        } else {
            0.5
        };
        self.percent = (self.percent + step).min(PERCENT_CEILING);
    }

    /// Advance the step message and countdown one second.
    pub fn tick_second(&mut self) {
        self.step_index = (self.step_index + 1) % self.step_count;
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    /// Snap to 100%. Idempotent; called once both the collaborator and the
    /// minimum wait have resolved.
    pub fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            self.percent = 100.0;
        }
    }

    #[must_use]
    pub const fn percent(&self) -> f32 {
        self.percent
    }

    #[must_use]
    pub const fn step_index(&self) -> usize {
        self.step_index
    }

    #[must_use]
    pub const fn expected_wait_secs(&self) -> u16 {
        self.expected_wait_secs
    }

    #[must_use]
    pub const fn remaining_secs(&self) -> u16 {
        self.remaining_secs
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn started(seed: u64) -> AnalysisProgress {
        let mut rng = SmallRng::seed_from_u64(seed);
        AnalysisProgress::start(&mut rng, 7)
    }

    #[test]
    fn expected_wait_stays_in_bounds() {
        for seed in 0..500 {
            let progress = started(seed);
            let wait = progress.expected_wait_secs();
            assert!((WAIT_FLOOR_SECS..=WAIT_CEIL_SECS).contains(&wait));
            assert_eq!(progress.remaining_secs(), wait);
        }
    }

    #[test]
    fn percent_is_monotone_and_saturates_below_100() {
        let mut progress = started(1);
        let mut last = progress.percent();
        for _ in 0..10_000 {
            progress.tick_percent();
            assert!(progress.percent() >= last);
            assert!(progress.percent() <= PERCENT_CEILING);
            last = progress.percent();
        }
        assert!((progress.percent() - PERCENT_CEILING).abs() < f32::EPSILON);
    }

    #[test]
    fn percent_slows_down_in_stages() {
        let mut progress = started(2);
        progress.tick_percent();
        assert!((progress.percent() - 2.0).abs() < f32::EPSILON);
        while progress.percent() < 50.0 {
            progress.tick_percent();
        }
        let at_fifty = progress.percent();
        progress.tick_percent();
        assert!((progress.percent() - at_fifty - 1.0).abs() < 1e-4);
    }

    #[test]
    fn finish_snaps_to_100_once() {
        let mut progress = started(3);
        progress.finish();
        assert!((progress.percent() - 100.0).abs() < f32::EPSILON);
        progress.tick_percent();
        assert!((progress.percent() - 100.0).abs() < f32::EPSILON);
        progress.finish();
        assert!(progress.is_finished());
    }

    #[test]
    fn countdown_floors_at_zero_and_steps_wrap() {
        let mut progress = started(4);
        let wait = usize::from(progress.expected_wait_secs());
        for i in 1..=wait + 10 {
            progress.tick_second();
            assert_eq!(progress.step_index(), i % 7);
        }
        assert_eq!(progress.remaining_secs(), 0);
    }
}
