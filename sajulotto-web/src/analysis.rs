//! Generative-language collaborator producing the fortune report.
//!
//! One request, one response: every failure mode collapses into a single
//! error surfaced as a generic retry message. No partial reports.

use gloo_net::http::Request;
use sajulotto_core::profile::{BirthProfile, CalendarType, Gender};
use sajulotto_core::report::FortuneReport;
use serde_json::{Value, json};
use thiserror::Error;

const MODEL: &str = "gemini-3-pro-preview";
const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis API key is not configured")]
    MissingKey,
    #[error("network error: {0}")]
    Network(String),
    #[error("response carried no candidate text")]
    EmptyResponse,
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn api_key() -> Result<&'static str, AnalysisError> {
    option_env!("SAJULOTTO_API_KEY").ok_or(AnalysisError::MissingKey)
}

#[must_use]
pub const fn calendar_label(calendar: CalendarType) -> &'static str {
    match calendar {
        CalendarType::Solar => "solar calendar",
        CalendarType::LunarPlain => "lunar calendar, regular month",
        CalendarType::LunarLeap => "lunar calendar, leap month",
    }
}

#[must_use]
pub const fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "male",
        Gender::Female => "female",
    }
}

/// Compose the master prompt for one analysis attempt.
#[must_use]
pub fn build_prompt(profile: &BirthProfile, numbers: &[u8], today: &str) -> String {
    let number_list = numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let name = profile.name.trim();
    let gender = gender_label(profile.gender);
    let birth_date = profile.date_string();
    let birth_time = profile.birth_time;
    let calendar = calendar_label(profile.calendar);
    format!(
        "# Role\n\
        You are the master reader of the Saju Lotto destiny board, the finest \
        traditional four-pillars and name-lore analyst.\n\
        \n\
        # Time & Logic Constraints (CRITICAL)\n\
        1. Anchor every reading in the fire-horse year of 2026.\n\
        2. Never mention or reason from the year 2024.\n\
        3. Today's date context: {today}\n\
        \n\
        # Input Context\n\
        - Name: {name}\n\
        - Gender: {gender}\n\
        - Birth date: {birth_date}\n\
        - Birth hour: {birth_time}\n\
        - Calendar: {calendar}\n\
        - Chosen numbers: {number_list}\n\
        \n\
        Respond in JSON. Wrap key phrases in <b> tags for emphasis."
    )
}

/// Response schema handed to the model so the payload parses as a report.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "mainElement": { "type": "STRING" },
            "elementDescription": { "type": "STRING" },
            "fortuneSummary": { "type": "STRING" },
            "luckyDirection": { "type": "STRING" },
            "luckyColor": { "type": "STRING" },
            "luckyTime": { "type": "STRING" },
            "numberExplanations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "number": { "type": "INTEGER" },
                        "element": { "type": "STRING" },
                        "explanation": { "type": "STRING" },
                        "type": { "type": "STRING", "enum": ["IDENTITY", "MONTHLY", "DAILY"] }
                    },
                    "required": ["number", "element", "explanation", "type"]
                }
            },
            "pillars": { "type": "OBJECT" },
            "detailPreview": { "type": "STRING" },
            "fullReport": { "type": "STRING" }
        },
        "required": [
            "mainElement", "elementDescription", "fortuneSummary",
            "luckyDirection", "luckyColor", "luckyTime", "fullReport"
        ]
    })
}

/// Pull the report out of the API envelope.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyResponse`] when no candidate text exists,
/// or [`AnalysisError::Malformed`] when that text is not a valid report.
pub fn report_from_response(body: &Value) -> Result<FortuneReport, AnalysisError> {
    let text = body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or(AnalysisError::EmptyResponse)?;
    Ok(FortuneReport::from_json(text)?)
}

/// Run one analysis round trip against the generative-language API.
///
/// # Errors
///
/// Returns an [`AnalysisError`] for a missing key, transport failure, empty
/// response, or unparseable payload. Callers treat all of these as the one
/// collaborator-failure path.
pub async fn analyze_fortune(
    profile: &BirthProfile,
    numbers: &[u8],
    today: &str,
) -> Result<FortuneReport, AnalysisError> {
    let key = api_key()?;
    let url = format!("{ENDPOINT}/{MODEL}:generateContent?key={key}");
    let payload = json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": build_prompt(profile, numbers, today) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    });

    let response = Request::post(&url)
        .json(&payload)
        .map_err(|err| AnalysisError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| AnalysisError::Network(err.to_string()))?;
    let body: Value = response
        .json()
        .await
        .map_err(|err| AnalysisError::Network(err.to_string()))?;
    report_from_response(&body)
}
