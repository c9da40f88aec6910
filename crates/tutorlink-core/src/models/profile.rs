//! Tutor-facing profile model

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::digits_only;

/// Minimum number of digits a contact number must carry
const MIN_CONTACT_DIGITS: usize = 10;

/// Share of lifetime sessions attributed to the current month on the dashboard
const THIS_MONTH_SHARE_PERCENT: u32 = 30;

/// Hourly price assumed for earnings when the stored profile has none
pub const FALLBACK_STATS_PRICE: f64 = 25.0;

/// Fields counted by [`TutorProfileDraft::completion_percent`]
const COMPLETION_FIELDS: u32 = 6;

/// Reasons a profile draft is rejected before it is sent anywhere
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Price per hour must be a positive number")]
    InvalidPrice,
    #[error("Contact number must contain at least 10 digits")]
    InvalidContact,
}

/// Profile fields as entered by a tutor, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorProfileDraft {
    pub subject: String,
    pub price_per_hour: f64,
    pub availability: String,
    pub contact_handle: String,
    pub location: String,
    #[serde(default)]
    pub bio: String,
}

/// A validated tutor profile
///
/// Rating and session counts are owned by the backend and are not part of
/// what a tutor can submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorProfile {
    pub subject: String,
    pub price_per_hour: f64,
    pub availability: String,
    pub contact_handle: String,
    pub location: String,
    pub bio: String,
}

impl TutorProfileDraft {
    /// Validate and trim the draft
    ///
    /// Fields are checked in form order, so the first problem reported is the
    /// one nearest the top of the form.
    pub fn validate(&self) -> Result<TutorProfile, ProfileError> {
        let subject = required(&self.subject, "subject")?;
        if !self.price_per_hour.is_finite() || self.price_per_hour <= 0.0 {
            return Err(ProfileError::InvalidPrice);
        }
        let availability = required(&self.availability, "availability")?;
        let contact_handle = required(&self.contact_handle, "contact")?;
        if digits_only(&contact_handle).len() < MIN_CONTACT_DIGITS {
            return Err(ProfileError::InvalidContact);
        }
        let location = required(&self.location, "location")?;

        Ok(TutorProfile {
            subject,
            price_per_hour: self.price_per_hour,
            availability,
            contact_handle,
            location,
            bio: self.bio.trim().to_string(),
        })
    }
}

impl TutorProfileDraft {
    /// Share of the six profile fields that are filled in, rounded to a
    /// whole percent. Bio counts even though it is optional.
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        let price_set = self.price_per_hour.is_finite() && self.price_per_hour > 0.0;
        let filled = [
            &self.subject,
            &self.availability,
            &self.contact_handle,
            &self.location,
            &self.bio,
        ]
        .iter()
        .filter(|value| !value.trim().is_empty())
        .count();
        let completed = u32::try_from(filled).unwrap_or(0) + u32::from(price_set);

        // round(completed / 6 * 100) in integer math
        let percent = (completed * 100 + COMPLETION_FIELDS / 2) / COMPLETION_FIELDS;
        u8::try_from(percent).unwrap_or(100)
    }
}

/// A tutor's stored profile as the backend reports it, including the
/// server-owned rating and session count
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorProfileSnapshot {
    #[serde(flatten)]
    pub profile: TutorProfileDraft,
    pub rating: f64,
    pub total_sessions: u32,
}

impl TutorProfileSnapshot {
    /// Dashboard figures from the server's session count
    #[must_use]
    pub fn stats(&self) -> TutorStats {
        let price = self.profile.price_per_hour;
        let price = if price.is_finite() && price > 0.0 {
            price
        } else {
            FALLBACK_STATS_PRICE
        };
        TutorStats::new(self.total_sessions, price)
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ProfileError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ProfileError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Dashboard figures derived from a tutor's session count and price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorStats {
    pub total_sessions: u32,
    /// Estimated sessions this month (30% of the lifetime total, rounded down)
    pub this_month_sessions: u32,
    pub total_earnings: f64,
}

impl TutorStats {
    #[must_use]
    pub fn new(total_sessions: u32, price_per_hour: f64) -> Self {
        let this_month_sessions =
            u64::from(total_sessions) * u64::from(THIS_MONTH_SHARE_PERCENT) / 100;
        let this_month_sessions = u32::try_from(this_month_sessions).unwrap_or(u32::MAX);
        Self {
            total_sessions,
            this_month_sessions,
            total_earnings: f64::from(total_sessions) * price_per_hour,
        }
    }
}
