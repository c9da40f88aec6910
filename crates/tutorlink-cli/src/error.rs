use std::io;

use thiserror::Error;
use tutorlink_core::models::ProfileError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] tutorlink_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid profile: {0}")]
    Profile(#[from] ProfileError),
    #[error("Tutor ID cannot be empty")]
    EmptyTutorId,
    #[error("No tutor with id '{0}' in the catalog")]
    TutorNotFound(String),
    #[error("No stored profile on the backend. Create one with `tutorlink profile submit`.")]
    ProfileNotFound,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(
        "No directory backend configured. Pass --api-url, set TUTORLINK_API_URL, or run `tutorlink config set api-url <URL>`."
    )]
    BackendNotConfigured,
}
