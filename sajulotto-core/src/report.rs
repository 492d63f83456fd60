//! Structured model of the fortune collaborator's response.

use serde::{Deserialize, Serialize};

/// Why a number was chosen, in the collaborator's taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberKind {
    Identity,
    Monthly,
    Daily,
}

/// One explained ball of the primary set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberExplanation {
    pub number: u8,
    pub element: String,
    pub explanation: String,
    #[serde(rename = "type")]
    pub kind: NumberKind,
}

/// One calendar pillar: glyph pair plus phonetic readings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub top: String,
    pub bottom: String,
    pub top_reading: String,
    pub bottom_reading: String,
}

/// The four pillars of the birth chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PillarSet {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

/// Full structured report returned by the analysis collaborator.
///
/// Text fields may carry the one allowed emphasis tag and arbitrary model
/// noise; they must pass through [`crate::sanitize`] before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneReport {
    pub main_element: String,
    pub element_description: String,
    pub fortune_summary: String,
    pub lucky_direction: String,
    pub lucky_color: String,
    pub lucky_time: String,
    #[serde(default)]
    pub number_explanations: Vec<NumberExplanation>,
    #[serde(default)]
    pub pillars: PillarSet,
    #[serde(default)]
    pub detail_preview: String,
    pub full_report: String,
}

impl FortuneReport {
    /// Parse the collaborator's JSON payload.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the payload is not a valid
    /// report; callers fold this into the single collaborator-failure path.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
