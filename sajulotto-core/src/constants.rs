//! Fixed copy decks and session-wide tuning constants.

/// Status lines cycled once per second while an analysis is in flight.
pub const ANALYSIS_STEPS: [&str; 7] = [
    "Charting the celestial stems and earthly branches of your birth...",
    "Weighing the balance and excesses of the five elements...",
    "Searching for your guiding and favorable elements...",
    "Syncing your luck with the fire-horse year of 2026...",
    "Reading the sound-element waves of your name...",
    "Composing the digits where wealth luck peaks...",
    "Heaven's secret is out - extracting your lucky numbers...",
];

/// One titled category per sequential bonus set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusCategory {
    pub title: &'static str,
    pub desc: &'static str,
    pub comment: &'static str,
}

pub const BONUS_CATEGORIES: [BonusCategory; 5] = [
    BonusCategory {
        title: "[Foundation Wealth Boost]",
        desc: "A combination that fills the vessel of your basic money luck.",
        comment: "Shores up the element you lack and lays the groundwork of fortune.",
    },
    BonusCategory {
        title: "[Windfall Extraction]",
        desc: "The energy of sudden wealth, calling in unexpected money.",
        comment: "A combination tuned to amplify the current of windfall luck.",
    },
    BonusCategory {
        title: "[Grand Fortune Jackpot]",
        desc: "The great-luck alignment where heaven's gate swings open.",
        comment: "Numbers where your present luck cycle and today's signs align.",
    },
    BonusCategory {
        title: "[Vault Keeper's Numbers]",
        desc: "Digits that keep incoming wealth from leaking back out.",
        comment: "A steady combination carrying the energy of growth and guarding.",
    },
    BonusCategory {
        title: "[Final Decision Strike]",
        desc: "The last resolving numbers where today's signs meet your name.",
        comment: "The single absolute combination distilled from your whole chart.",
    },
];

/// Index of the bonus slot that needs the extra one-time gate.
pub const FINAL_DECISION_SLOT: usize = BONUS_CATEGORIES.len() - 1;

/// Maximum number of persisted history records.
pub const HISTORY_CAP: usize = 50;

/// Delay between consecutive primary-set ball reveals.
pub const REVEAL_TICK_MS: u32 = 600;
/// Pause after the progress ring hits 100 before the result screen mounts.
pub const RESULT_ENTRY_DELAY_MS: u32 = 800;
/// Simulated rewarded-ad watch duration.
pub const AD_WATCH_SECS: u32 = 6;
/// Cadence of the bonus-roll charge bar.
pub const ROLL_CHARGE_TICK_MS: u32 = 30;
/// Hard cap on the charge animation; the bar is forced full afterwards.
pub const ROLL_CHARGE_DURATION_MS: u32 = 3_000;
/// Delay between consecutive bonus-ball reveals.
pub const ROLL_REVEAL_TICK_MS: u32 = 400;
/// Settle pause between the sixth bonus ball and the set being granted.
pub const ROLL_SETTLE_MS: u32 = 500;
/// Idle-screen preview set reshuffle cadence.
pub const PREVIEW_SHUFFLE_MS: u32 = 2_000;
/// Footer visitor-counter cadence.
pub const VISITOR_TICK_MS: u32 = 4_000;
