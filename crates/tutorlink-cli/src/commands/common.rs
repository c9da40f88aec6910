use std::path::PathBuf;

use serde::Serialize;
use tutorlink_core::catalog::{find_by_id, load_catalog_file, sample_catalog};
use tutorlink_core::client::DirectoryClient;
use tutorlink_core::config::ClientConfig;
use tutorlink_core::contact::{format_phone_number, tutor_contact_link};
use tutorlink_core::models::TutorStats;
use tutorlink_core::rating::render_stars;
use tutorlink_core::util::normalize_text_option;
use tutorlink_core::{search, QueryParams, SortKey, TutorId, TutorRecord};

use crate::cli::FilterArgs;
use crate::config_file::CliConfig;
use crate::error::CliError;

/// Where tutor listings are read from
#[derive(Debug)]
pub enum CatalogSource {
    File(PathBuf),
    Backend(DirectoryClient),
    Sample,
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => format!("file {}", path.display()),
            Self::Backend(client) => format!("backend {}", client.base_url()),
            Self::Sample => "bundled sample catalog".to_string(),
        }
    }
}

/// Everything a command needs to reach the catalog
#[derive(Debug)]
pub struct CliContext {
    pub client_config: ClientConfig,
    pub source: CatalogSource,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorListItem<'a> {
    #[serde(flatten)]
    pub tutor: &'a TutorRecord,
    pub stars: String,
    pub contact_link: String,
}

/// Pick the catalog source.
///
/// `--catalog` wins, then `--api-url`, then `TUTORLINK_API_URL`, then the
/// saved backend URL, then the saved catalog file, then the bundled sample.
pub fn resolve_context(
    catalog_flag: Option<PathBuf>,
    api_url_flag: Option<String>,
    env_config: ClientConfig,
    saved: &CliConfig,
) -> Result<CliContext, CliError> {
    let mut client_config = env_config;

    if let Some(url) = normalize_text_option(api_url_flag) {
        client_config = client_config.with_api_base_url(&url)?;
    } else if client_config.api_base_url.is_none() {
        if let Some(url) = saved.api_base_url.as_deref() {
            client_config = client_config.with_api_base_url(url)?;
        }
    }

    let source = if let Some(path) = catalog_flag {
        CatalogSource::File(path)
    } else if client_config.api_base_url.is_some() {
        CatalogSource::Backend(DirectoryClient::new(&client_config)?)
    } else if let Some(path) = saved.catalog_path.clone() {
        CatalogSource::File(path)
    } else {
        CatalogSource::Sample
    };

    tracing::debug!("Using {}", source.describe());
    Ok(CliContext {
        client_config,
        source,
    })
}

pub async fn load_catalog(context: &CliContext) -> Result<Vec<TutorRecord>, CliError> {
    match &context.source {
        CatalogSource::File(path) => Ok(load_catalog_file(path)?),
        CatalogSource::Backend(client) => Ok(client.list_tutors().await?),
        CatalogSource::Sample => Ok(sample_catalog()),
    }
}

/// Run a search against the configured source
pub async fn find_tutors(
    context: &CliContext,
    params: &QueryParams,
) -> Result<Vec<TutorRecord>, CliError> {
    if let CatalogSource::Backend(client) = &context.source {
        if !params.is_unfiltered() {
            return Ok(client.search_tutors(params).await?);
        }
    }

    let catalog = load_catalog(context).await?;
    Ok(search(&catalog, params))
}

pub const fn require_backend(context: &CliContext) -> Result<&DirectoryClient, CliError> {
    match &context.source {
        CatalogSource::Backend(client) => Ok(client),
        _ => Err(CliError::BackendNotConfigured),
    }
}

pub fn normalize_tutor_id(id: &str) -> Result<TutorId, CliError> {
    id.parse::<TutorId>().map_err(|_| CliError::EmptyTutorId)
}

pub async fn resolve_tutor(context: &CliContext, id: &str) -> Result<TutorRecord, CliError> {
    let tutor_id = normalize_tutor_id(id)?;
    let catalog = load_catalog(context).await?;
    find_by_id(&catalog, &tutor_id)
        .cloned()
        .ok_or_else(|| CliError::TutorNotFound(tutor_id.to_string()))
}

pub fn build_query_params(query_parts: &[String], filters: &FilterArgs) -> QueryParams {
    QueryParams {
        free_text: normalize_text_option(Some(query_parts.join(" "))),
        subject_filter: normalize_text_option(filters.subject.clone()),
        location_filter: normalize_text_option(filters.location.clone()),
        sort_key: SortKey::from(filters.sort),
    }
}

pub fn tutor_to_list_item<'a>(
    tutor: &'a TutorRecord,
    messaging_base_url: &str,
) -> TutorListItem<'a> {
    TutorListItem {
        tutor,
        stars: render_stars(tutor.rating),
        contact_link: tutor_contact_link(messaging_base_url, tutor),
    }
}

pub fn print_tutors(
    tutors: &[TutorRecord],
    as_json: bool,
    messaging_base_url: &str,
) -> Result<(), CliError> {
    if as_json {
        let json_items = tutors
            .iter()
            .map(|tutor| tutor_to_list_item(tutor, messaging_base_url))
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if tutors.is_empty() {
        println!("No tutors found");
    } else {
        for line in format_tutor_lines(tutors) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn format_tutor_lines(tutors: &[TutorRecord]) -> Vec<String> {
    tutors
        .iter()
        .map(|tutor| {
            let id = truncate_text(tutor.id.as_str(), 6);
            let name = truncate_text(&tutor.name, 22);
            let subject = truncate_text(&tutor.subject, 20);
            let stars = render_stars(tutor.rating);
            format!(
                "{id:<6}  {name:<22}  {subject:<20}  {:>8}/h  {stars} {:.1}  {}",
                format_price(tutor.price_per_hour),
                tutor.rating,
                tutor.location
            )
        })
        .collect()
}

pub fn format_tutor_details(tutor: &TutorRecord, messaging_base_url: &str) -> Vec<String> {
    let stats = TutorStats::new(tutor.total_sessions, tutor.price_per_hour);
    let mut lines = vec![
        format!("{} ({})", tutor.name, tutor.id),
        format!("Subject:       {}", tutor.subject),
        format!("Price:         {}/h", format_price(tutor.price_per_hour)),
        format!(
            "Rating:        {} {:.1} ({} sessions)",
            render_stars(tutor.rating),
            tutor.rating,
            stats.total_sessions
        ),
        format!("Location:      {}", tutor.location),
        format!("Availability:  {}", tutor.availability),
        format!("Phone:         {}", format_phone_number(&tutor.contact_handle)),
    ];
    if !tutor.bio.trim().is_empty() {
        lines.push(String::new());
        lines.push(tutor.bio.trim().to_string());
    }
    lines.push(String::new());
    lines.push(format!(
        "Contact:       {}",
        tutor_contact_link(messaging_base_url, tutor)
    ));
    lines
}

pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}
