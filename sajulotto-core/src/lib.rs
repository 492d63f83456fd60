//! Saju Lotto Core Engine
//!
//! Platform-agnostic session logic for the Saju Lotto fortune picker.
//! This crate provides the session state machine, draw engine, reward gate
//! and history store without UI or platform-specific dependencies.

pub mod account;
pub mod bonus;
pub mod constants;
pub mod draw;
pub mod history;
pub mod numbers;
pub mod profile;
pub mod progress;
pub mod report;
pub mod rng;
pub mod sanitize;
pub mod session;

// Re-export commonly used types
pub use account::AccountGate;
pub use bonus::{BonusState, GateStage, PendingRoll};
pub use constants::{ANALYSIS_STEPS, BONUS_CATEGORIES, BonusCategory};
pub use draw::{DrawError, draw, draw_bonus, draw_primary};
pub use history::{HistoryRecord, HistoryStore};
pub use profile::{BirthProfile, BirthTime, CalendarType, Gender, ValidationError};
pub use progress::AnalysisProgress;
pub use report::{FortuneReport, NumberExplanation, NumberKind, Pillar, PillarSet};
pub use rng::RngBundle;
pub use sanitize::{sanitize_report_text, split_sections};
pub use session::{AttemptToken, Phase, Session};

/// Trait for abstracting the browser key-value store
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    type Error: std::error::Error + 'static;

    /// Read the string stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}
