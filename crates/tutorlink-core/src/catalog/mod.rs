//! Tutor catalogs
//!
//! A catalog is an ordered list of tutor records. Order matters: it is the
//! "relevance" order that searches preserve. Catalogs come from the bundled
//! sample set, from a JSON file in the backend wire format, or from the
//! directory backend itself (see [`crate::client`]).

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{TutorId, TutorRecord};
use crate::wire::WireTutor;

mod sample;

pub use sample::sample_catalog;

/// Parse a catalog from a JSON array of wire-format tutors
pub fn parse_catalog_json(payload: &str) -> Result<Vec<TutorRecord>> {
    let wire = serde_json::from_str::<Vec<WireTutor>>(payload)?;
    let catalog = wire.into_iter().map(TutorRecord::from).collect::<Vec<_>>();
    check_catalog(&catalog)?;
    Ok(catalog)
}

/// Load a catalog file written in the backend wire format
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<TutorRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let catalog = parse_catalog_json(&raw)?;
    tracing::info!("Loaded {} tutors from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Render a catalog back into the wire format
pub fn render_catalog_json(catalog: &[TutorRecord]) -> serde_json::Result<String> {
    let wire = catalog.iter().map(WireTutor::from).collect::<Vec<_>>();
    serde_json::to_string_pretty(&wire)
}

/// Look up a tutor by id
pub fn find_by_id<'a>(catalog: &'a [TutorRecord], id: &TutorId) -> Option<&'a TutorRecord> {
    catalog.iter().find(|tutor| &tutor.id == id)
}

/// Reject catalogs with blank names or duplicate ids
pub fn check_catalog(catalog: &[TutorRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(catalog.len());
    for tutor in catalog {
        if tutor.id.as_str().is_empty() {
            return Err(Error::invalid_input("Tutor ID cannot be empty"));
        }
        if tutor.name.trim().is_empty() {
            return Err(Error::invalid_input(format!(
                "Tutor {} has no name",
                tutor.id
            )));
        }
        if !seen.insert(&tutor.id) {
            return Err(Error::invalid_input(format!(
                "Duplicate tutor ID in catalog: {}",
                tutor.id
            )));
        }
    }
    Ok(())
}
