//! Birth-data profile collected by the form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum trimmed name length accepted by `submit`.
pub const MIN_NAME_CHARS: usize = 2;
/// Earliest selectable birth year.
pub const YEAR_MIN: u16 = 1950;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be at least {MIN_NAME_CHARS} characters")]
    NameTooShort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CalendarType {
    #[default]
    Solar,
    LunarPlain,
    LunarLeap,
}

impl CalendarType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::LunarPlain => "lunar_plain",
            Self::LunarLeap => "lunar_leap",
        }
    }
}

impl fmt::Display for CalendarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solar" => Ok(Self::Solar),
            "lunar_plain" => Ok(Self::LunarPlain),
            "lunar_leap" => Ok(Self::LunarLeap),
            _ => Err(()),
        }
    }
}

/// Birth hour, or unknown when the user cannot say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum BirthTime {
    #[default]
    Unknown,
    Hour(u8),
}

impl BirthTime {
    /// Construct from an hour value, clamping out-of-range input to unknown.
    #[must_use]
    pub const fn from_hour(hour: u8) -> Self {
        if hour < 24 { Self::Hour(hour) } else { Self::Unknown }
    }
}

impl fmt::Display for BirthTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::Hour(h) => write!(f, "{h}:00"),
        }
    }
}

impl FromStr for BirthTime {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "unknown" {
            return Ok(Self::Unknown);
        }
        let hour_part = s.strip_suffix(":00").unwrap_or(s);
        let hour: u8 = hour_part.parse().map_err(|_| ())?;
        if hour < 24 { Ok(Self::Hour(hour)) } else { Err(()) }
    }
}

impl TryFrom<String> for BirthTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .parse()
            .map_err(|()| format!("invalid birth time: {value}"))
    }
}

impl From<BirthTime> for String {
    fn from(value: BirthTime) -> Self {
        value.to_string()
    }
}

/// Immutable per-attempt input captured at form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub name: String,
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub birth_time: BirthTime,
    pub gender: Gender,
    pub calendar: CalendarType,
}

impl Default for BirthProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            year: 1990,
            month: 1,
            day: 1,
            birth_time: BirthTime::Unknown,
            gender: Gender::Male,
            calendar: CalendarType::Solar,
        }
    }
}

impl BirthProfile {
    /// Check the profile against the submission guard.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NameTooShort` when the trimmed name has
    /// fewer than [`MIN_NAME_CHARS`] characters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        Ok(())
    }

    /// ISO-style date string used in prompts and display.
    #[must_use]
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
