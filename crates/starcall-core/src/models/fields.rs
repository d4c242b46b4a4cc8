//! Extracted shooting star fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Rendered in place of an unrecognized region or size.
pub const SENTINEL_ERR: &str = "ERR";

/// Rendered in place of a missing landing time.
pub const SENTINEL_TIME: &str = "0";

/// Size of a shooting star as reported by a telescope.
///
/// Tier 1 and tier 2 telescopes describe the size in words, tier 3
/// telescopes report the exact size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StarSize {
    Small,
    Average,
    Big,
    /// Exact size from a tier 3 telescope.
    Exact(u32),
}

impl fmt::Display for StarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => f.write_str("Small"),
            Self::Average => f.write_str("Average"),
            Self::Big => f.write_str("Big"),
            Self::Exact(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for StarSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Small" => Ok(Self::Small),
            "Average" => Ok(Self::Average),
            "Big" => Ok(Self::Big),
            other => other
                .parse()
                .map(Self::Exact)
                .map_err(|_| format!("invalid star size: {}", other)),
        }
    }
}

impl TryFrom<String> for StarSize {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StarSize> for String {
    fn from(size: StarSize) -> Self {
        size.to_string()
    }
}

/// The three fields recovered from one dialog.
///
/// `None` means the field was not found. Sentinels are only substituted
/// when the fields are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Canonical region label (e.g. "Lost Grove").
    pub location: Option<String>,

    /// Star size.
    pub size: Option<StarSize>,

    /// Minutes until the earliest landing time.
    pub time_minutes: Option<u32>,
}

impl ExtractedFields {
    /// Region label, or `"ERR"`.
    pub fn location_or_sentinel(&self) -> &str {
        self.location.as_deref().unwrap_or(SENTINEL_ERR)
    }

    /// Size label, or `"ERR"`.
    pub fn size_or_sentinel(&self) -> String {
        self.size
            .map(|s| s.to_string())
            .unwrap_or_else(|| SENTINEL_ERR.to_string())
    }

    /// Minutes as a string, or `"0"`.
    pub fn time_or_sentinel(&self) -> String {
        self.time_minutes
            .map(|m| m.to_string())
            .unwrap_or_else(|| SENTINEL_TIME.to_string())
    }

    /// Names of the fields that were not found.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.location.is_none() {
            missing.push("location");
        }
        if self.size.is_none() {
            missing.push("size");
        }
        if self.time_minutes.is_none() {
            missing.push("time");
        }
        missing
    }

    /// Check that all three fields were found.
    pub fn require_complete(&self) -> Result<(), ExtractionError> {
        if self.location.is_none() {
            return Err(ExtractionError::UnknownLocation);
        }
        if self.size.is_none() {
            return Err(ExtractionError::UnknownSize);
        }
        if self.time_minutes.is_none() {
            return Err(ExtractionError::MissingTime);
        }
        Ok(())
    }
}
