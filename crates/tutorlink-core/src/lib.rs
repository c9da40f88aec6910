//! tutorlink-core - Core library for TutorLink
//!
//! This crate contains the tutor models, directory search, presentation
//! helpers, and the backend client shared by TutorLink interfaces.

pub mod assistant;
pub mod catalog;
pub mod client;
pub mod config;
pub mod contact;
pub mod error;
pub mod models;
pub mod rating;
pub mod search;
pub mod util;
pub mod wire;

pub use error::{Error, Result};
pub use models::{TutorId, TutorRecord};
pub use search::{search, QueryParams, SortKey};
