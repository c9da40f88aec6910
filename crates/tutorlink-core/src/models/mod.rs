//! Data models for TutorLink

mod profile;
mod tutor;

pub use profile::{
    ProfileError, TutorProfile, TutorProfileDraft, TutorProfileSnapshot, TutorStats,
    FALLBACK_STATS_PRICE,
};
pub use tutor::{TutorId, TutorRecord};
