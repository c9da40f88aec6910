//! Tutor directory search
//!
//! Filtering is a linear, conjunctive pass over the catalog followed by a
//! stable sort. The catalog itself is never modified; results are clones in
//! catalog order unless a sort key reorders them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::TutorRecord;

/// Result ordering requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Catalog order
    #[default]
    Relevance,
    /// Highest rating first
    Rating,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Rating => "rating",
            Self::PriceLow => "price_low",
            Self::PriceHigh => "price_high",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "relevance" => Ok(Self::Relevance),
            "rating" => Ok(Self::Rating),
            "price_low" => Ok(Self::PriceLow),
            "price_high" => Ok(Self::PriceHigh),
            other => Err(Error::invalid_input(format!("Unknown sort key: {other}"))),
        }
    }
}

/// Filter terms for one search
///
/// Empty strings are treated the same as absent filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    #[serde(default)]
    pub free_text: Option<String>,
    #[serde(default)]
    pub subject_filter: Option<String>,
    #[serde(default)]
    pub location_filter: Option<String>,
    #[serde(default)]
    pub sort_key: SortKey,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_free_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject_filter = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location_filter = Some(location.into());
        self
    }

    #[must_use]
    pub const fn sorted_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// True when no filter term is set
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        folded(self.free_text.as_deref()).is_none()
            && folded(self.subject_filter.as_deref()).is_none()
            && folded(self.location_filter.as_deref()).is_none()
    }
}

/// Lowercased filter term, or `None` when the term is absent or empty
fn folded(term: Option<&str>) -> Option<String> {
    term.filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

/// Filter and order a catalog
#[must_use]
pub fn search(catalog: &[TutorRecord], params: &QueryParams) -> Vec<TutorRecord> {
    let free_text = folded(params.free_text.as_deref());
    let subject = folded(params.subject_filter.as_deref());
    let location = folded(params.location_filter.as_deref());

    let mut results = catalog
        .iter()
        .filter(|tutor| free_text.as_deref().is_none_or(|needle| tutor.matches_text(needle)))
        .filter(|tutor| subject.as_deref().is_none_or(|needle| tutor.matches_subject(needle)))
        .filter(|tutor| {
            location
                .as_deref()
                .is_none_or(|needle| tutor.matches_location(needle))
        })
        .cloned()
        .collect::<Vec<_>>();

    sort_records(&mut results, params.sort_key);

    tracing::debug!(
        catalog = catalog.len(),
        matched = results.len(),
        sort = %params.sort_key,
        "Tutor search completed"
    );
    results
}

/// Reorder records in place; `slice::sort_by` is stable, so ties keep their
/// incoming order.
pub fn sort_records(records: &mut [TutorRecord], sort_key: SortKey) {
    match sort_key {
        SortKey::Relevance => {}
        SortKey::Rating => records.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::PriceLow => records.sort_by(|a, b| a.price_per_hour.total_cmp(&b.price_per_hour)),
        SortKey::PriceHigh => {
            records.sort_by(|a, b| b.price_per_hour.total_cmp(&a.price_per_hour));
        }
    }
}
