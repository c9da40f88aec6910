//! Wire shapes exchanged with the directory backend.
//!
//! The backend speaks snake_case (`price_per_hour`, `whatsapp_number`,
//! `total_sessions`) and may send ids as integers. Everything crossing the
//! boundary goes through these types and is translated into the in-process
//! model here, nowhere else.

use serde::{Deserialize, Serialize};

use crate::models::{
    TutorId, TutorProfile, TutorProfileDraft, TutorProfileSnapshot, TutorRecord,
};

/// Tutor id as the backend sends it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl From<WireId> for TutorId {
    fn from(value: WireId) -> Self {
        match value {
            WireId::Number(number) => Self::from(number),
            WireId::Text(text) => Self::new(text.trim()),
        }
    }
}

impl From<&TutorId> for WireId {
    /// Numeric only when the id is exactly the canonical form of an integer,
    /// so ids like `007` or `+5` keep their text.
    fn from(value: &TutorId) -> Self {
        match value.as_str().parse::<i64>() {
            Ok(number) if number.to_string() == value.as_str() => Self::Number(number),
            _ => Self::Text(value.to_string()),
        }
    }
}

/// Tutor listing as returned by `GET /tutors` and `GET /tutors/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTutor {
    pub id: WireId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub price_per_hour: f64,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_sessions: Option<u32>,
}

impl From<WireTutor> for TutorRecord {
    fn from(wire: WireTutor) -> Self {
        Self {
            id: wire.id.into(),
            name: wire.name.unwrap_or_default(),
            subject: wire.subject.unwrap_or_default(),
            price_per_hour: wire.price_per_hour,
            location: wire.location.unwrap_or_default(),
            availability: wire.availability.unwrap_or_default(),
            bio: wire.bio.unwrap_or_default(),
            rating: wire.rating.unwrap_or_default(),
            total_sessions: wire.total_sessions.unwrap_or_default(),
            contact_handle: wire.whatsapp_number.unwrap_or_default(),
        }
    }
}

impl From<&TutorRecord> for WireTutor {
    fn from(record: &TutorRecord) -> Self {
        Self {
            id: WireId::from(&record.id),
            name: Some(record.name.clone()),
            subject: Some(record.subject.clone()),
            price_per_hour: record.price_per_hour,
            availability: Some(record.availability.clone()),
            whatsapp_number: Some(record.contact_handle.clone()),
            location: Some(record.location.clone()),
            bio: Some(record.bio.clone()),
            rating: Some(record.rating),
            total_sessions: Some(record.total_sessions),
        }
    }
}

/// Body of `POST /tutor/profile`
///
/// Rating and session counts are server-owned and never sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireProfile {
    pub subject: String,
    pub price_per_hour: f64,
    pub availability: String,
    pub whatsapp_number: String,
    pub location: String,
    pub bio: String,
}

impl From<&TutorProfile> for WireProfile {
    fn from(profile: &TutorProfile) -> Self {
        Self {
            subject: profile.subject.clone(),
            price_per_hour: profile.price_per_hour,
            availability: profile.availability.clone(),
            whatsapp_number: profile.contact_handle.clone(),
            location: profile.location.clone(),
            bio: profile.bio.clone(),
        }
    }
}

/// Body of `GET /tutor/profile`
///
/// The backend answers `{}` when the signed-in tutor has no profile yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireProfileSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sessions: Option<u32>,
}

impl WireProfileSnapshot {
    /// A stored profile always has a subject
    pub fn is_empty(&self) -> bool {
        self.subject
            .as_deref()
            .is_none_or(|subject| subject.trim().is_empty())
    }
}

impl From<WireProfileSnapshot> for TutorProfileSnapshot {
    fn from(wire: WireProfileSnapshot) -> Self {
        Self {
            profile: TutorProfileDraft {
                subject: wire.subject.unwrap_or_default(),
                price_per_hour: wire.price_per_hour.unwrap_or_default(),
                availability: wire.availability.unwrap_or_default(),
                contact_handle: wire.whatsapp_number.unwrap_or_default(),
                location: wire.location.unwrap_or_default(),
                bio: wire.bio.unwrap_or_default(),
            },
            rating: wire.rating.unwrap_or_default(),
            total_sessions: wire.total_sessions.unwrap_or_default(),
        }
    }
}

impl From<&TutorProfileSnapshot> for WireProfileSnapshot {
    fn from(snapshot: &TutorProfileSnapshot) -> Self {
        let profile = &snapshot.profile;
        Self {
            subject: Some(profile.subject.clone()),
            price_per_hour: Some(profile.price_per_hour),
            availability: Some(profile.availability.clone()),
            whatsapp_number: Some(profile.contact_handle.clone()),
            location: Some(profile.location.clone()),
            bio: Some(profile.bio.clone()),
            rating: Some(snapshot.rating),
            total_sessions: Some(snapshot.total_sessions),
        }
    }
}

/// Body of `POST /connect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectRequest {
    pub tutor_id: WireId,
}

impl ConnectRequest {
    pub fn new(tutor_id: &TutorId) -> Self {
        Self {
            tutor_id: WireId::from(tutor_id),
        }
    }
}

/// Acknowledgement or error body returned by write endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WireAck {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl WireAck {
    /// Failure message carried by the body, if any
    pub fn failure_message(&self) -> Option<String> {
        if let Some(error) = self.error.as_deref().filter(|value| !value.trim().is_empty()) {
            return Some(error.trim().to_string());
        }
        if self.success == Some(false) {
            return Some(
                self.message
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .unwrap_or("request was rejected")
                    .to_string(),
            );
        }
        None
    }
}
