//! Tutor model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of a tutor listing
///
/// Backends hand out numeric row ids while bundled and file catalogs use free
/// text, so the id is kept as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TutorId(String);

impl TutorId {
    /// Create an id from any non-blank text
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TutorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TutorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_input("Tutor ID cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<i64> for TutorId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// A tutor listing as seen by students
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRecord {
    /// Unique identifier
    pub id: TutorId,
    /// Display name
    pub name: String,
    /// Subject label, e.g. "Mathematics"
    pub subject: String,
    /// Hourly price, currency-agnostic
    pub price_per_hour: f64,
    /// Location label, e.g. "Boston, MA"
    pub location: String,
    /// Free-text schedule
    pub availability: String,
    /// Free-text description (empty when the tutor wrote none)
    #[serde(default)]
    pub bio: String,
    /// Average rating in [0, 5]
    #[serde(default)]
    pub rating: f64,
    /// Completed sessions
    #[serde(default)]
    pub total_sessions: u32,
    /// Messaging handle (phone number) used for the contact deep link
    pub contact_handle: String,
}

impl TutorRecord {
    /// Whether the free-text query matches name, subject, or bio.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        contains_folded(&self.name, needle)
            || contains_folded(&self.subject, needle)
            || contains_folded(&self.bio, needle)
    }

    pub(crate) fn matches_subject(&self, needle: &str) -> bool {
        contains_folded(&self.subject, needle)
    }

    pub(crate) fn matches_location(&self, needle: &str) -> bool {
        contains_folded(&self.location, needle)
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
