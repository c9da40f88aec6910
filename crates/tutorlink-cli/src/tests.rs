use std::path::PathBuf;

use clap::Parser;
use pretty_assertions::assert_eq;
use tutorlink_core::catalog::{render_catalog_json, sample_catalog};
use tutorlink_core::config::ClientConfig;
use tutorlink_core::contact::DEFAULT_MESSAGING_BASE_URL;
use tutorlink_core::models::{TutorProfileDraft, TutorProfileSnapshot, TutorStats};
use tutorlink_core::{QueryParams, SortKey, TutorId};

use crate::cli::{
    Cli, Commands, CompletionShell, ConfigKey, FilterArgs, ProfileArgs, ProfileCommands, SortArg,
};
use crate::commands::common::{
    build_query_params, find_tutors, format_price, format_tutor_details, format_tutor_lines,
    load_catalog, require_backend, resolve_context, resolve_tutor, truncate_text,
    tutor_to_list_item, CatalogSource, CliContext,
};
use crate::commands::completions::render_completions;
use crate::commands::config::{apply_config_set, apply_config_unset, format_config_lines};
use crate::commands::profile::{
    format_profile_snapshot, format_profile_summary, profile_view, validate_profile_args,
    write_profile_export,
};
use crate::config_file::CliConfig;
use crate::error::CliError;

fn sample_context() -> CliContext {
    CliContext {
        client_config: ClientConfig::default(),
        source: CatalogSource::Sample,
    }
}

fn stored_profile() -> TutorProfileSnapshot {
    TutorProfileSnapshot {
        profile: TutorProfileDraft {
            subject: "Physics".to_string(),
            price_per_hour: 40.0,
            availability: "Monday-Friday 4-8 PM".to_string(),
            contact_handle: "+1234567891".to_string(),
            location: "Boston, MA".to_string(),
            bio: String::new(),
        },
        rating: 4.8,
        total_sessions: 89,
    }
}

fn profile_args() -> ProfileArgs {
    ProfileArgs {
        subject: " Chemistry ".to_string(),
        price: 32.5,
        availability: "Weekends".to_string(),
        contact: "+1 (555) 123-4567".to_string(),
        location: "Online".to_string(),
        bio: String::new(),
    }
}

#[test]
fn cli_parses_quick_search_without_subcommand() {
    let cli = Cli::try_parse_from(["tutorlink", "calculus", "tutor"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.query, vec!["calculus".to_string(), "tutor".to_string()]);
}

#[test]
fn cli_parses_search_filters_and_sort_aliases() {
    let cli = Cli::try_parse_from([
        "tutorlink",
        "search",
        "algebra",
        "--subject",
        "math",
        "-l",
        "new york",
        "--sort",
        "price-low",
    ])
    .unwrap();

    let Some(Commands::Search { query, filters, json }) = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(query, vec!["algebra".to_string()]);
    assert_eq!(filters.subject.as_deref(), Some("math"));
    assert_eq!(filters.location.as_deref(), Some("new york"));
    assert_eq!(filters.sort, SortArg::PriceLow);
    assert!(!json);
}

#[test]
fn cli_accepts_global_api_url_after_subcommand() {
    let cli = Cli::try_parse_from(["tutorlink", "list", "--api-url", "https://api.example.com"])
        .unwrap();
    assert_eq!(cli.api_url.as_deref(), Some("https://api.example.com"));
}

#[test]
fn build_query_params_blanks_become_none() {
    let filters = FilterArgs {
        subject: Some("  ".to_string()),
        location: Some(" Boston ".to_string()),
        sort: SortArg::Rating,
    };
    let params = build_query_params(&[" ".to_string()], &filters);

    assert_eq!(
        params,
        QueryParams::default()
            .with_location("Boston")
            .sorted_by(SortKey::Rating)
    );
}

#[test]
fn build_query_params_joins_query_words() {
    let params = build_query_params(
        &["organic".to_string(), "chemistry".to_string()],
        &FilterArgs::default(),
    );
    assert_eq!(params.free_text.as_deref(), Some("organic chemistry"));
    assert_eq!(params.sort_key, SortKey::Relevance);
}

#[test]
fn resolve_context_defaults_to_sample_catalog() {
    let context =
        resolve_context(None, None, ClientConfig::default(), &CliConfig::default()).unwrap();
    assert!(matches!(context.source, CatalogSource::Sample));
    assert!(require_backend(&context).is_err());
}

#[test]
fn resolve_context_prefers_catalog_flag_over_backend() {
    let saved = CliConfig {
        api_base_url: Some("https://saved.example.com".to_string()),
        catalog_path: Some(PathBuf::from("saved.json")),
        ..CliConfig::default()
    };
    let context = resolve_context(
        Some(PathBuf::from("flag.json")),
        Some("https://flag.example.com".to_string()),
        ClientConfig::default(),
        &saved,
    )
    .unwrap();

    match context.source {
        CatalogSource::File(path) => assert_eq!(path, PathBuf::from("flag.json")),
        other => panic!("expected file source, got {other:?}"),
    }
    assert_eq!(
        context.client_config.api_base_url.as_deref(),
        Some("https://flag.example.com")
    );
}

#[test]
fn resolve_context_prefers_env_backend_over_saved_config() {
    let env_config = ClientConfig::default()
        .with_api_base_url("https://env.example.com/")
        .unwrap();
    let saved = CliConfig {
        api_base_url: Some("https://saved.example.com".to_string()),
        ..CliConfig::default()
    };
    let context = resolve_context(None, None, env_config, &saved).unwrap();

    let client = require_backend(&context).unwrap();
    assert_eq!(client.base_url(), "https://env.example.com");
}

#[test]
fn resolve_context_falls_back_to_saved_catalog_path() {
    let saved = CliConfig {
        catalog_path: Some(PathBuf::from("tutors.json")),
        ..CliConfig::default()
    };
    let context = resolve_context(None, None, ClientConfig::default(), &saved).unwrap();
    assert!(matches!(
        context.source,
        CatalogSource::File(ref path) if path == &PathBuf::from("tutors.json")
    ));
}

#[test]
fn resolve_context_rejects_non_http_api_url() {
    let result = resolve_context(
        None,
        Some("api.example.com".to_string()),
        ClientConfig::default(),
        &CliConfig::default(),
    );
    assert!(matches!(result, Err(CliError::Core(_))));
}

#[tokio::test]
async fn find_tutors_filters_sample_catalog_locally() {
    let context = sample_context();
    let params = QueryParams::default()
        .with_subject("science")
        .sorted_by(SortKey::PriceHigh);

    let tutors = find_tutors(&context, &params).await.unwrap();
    let ids = tutors
        .iter()
        .map(|tutor| tutor.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["4"]);
}

#[tokio::test]
async fn load_catalog_reads_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tutors.json");
    let catalog = sample_catalog().into_iter().take(2).collect::<Vec<_>>();
    std::fs::write(&path, render_catalog_json(&catalog).unwrap()).unwrap();

    let context = CliContext {
        client_config: ClientConfig::default(),
        source: CatalogSource::File(path),
    };
    let loaded = load_catalog(&context).await.unwrap();
    assert_eq!(loaded, catalog);
}

#[tokio::test]
async fn resolve_tutor_reports_missing_and_empty_ids() {
    let context = sample_context();

    let tutor = resolve_tutor(&context, " 3 ").await.unwrap();
    assert_eq!(tutor.id, TutorId::new("3"));

    let missing = resolve_tutor(&context, "99").await.unwrap_err();
    assert!(matches!(missing, CliError::TutorNotFound(ref id) if id == "99"));

    let empty = resolve_tutor(&context, "   ").await.unwrap_err();
    assert!(matches!(empty, CliError::EmptyTutorId));
}

#[test]
fn format_price_drops_zero_cents() {
    assert_eq!(format_price(35.0), "$35");
    assert_eq!(format_price(32.5), "$32.50");
}

#[test]
fn truncate_text_collapses_whitespace_and_adds_ellipsis() {
    assert_eq!(truncate_text("  Dr.   Emily\nBrown ", 20), "Dr. Emily Brown");
    assert_eq!(truncate_text("Computer Science", 10), "Compute...");
}

#[test]
fn format_tutor_lines_include_price_and_stars() {
    let catalog = sample_catalog();
    let lines = format_tutor_lines(&catalog[..1]);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("1 "));
    assert!(lines[0].contains("Dr. Emily Brown"));
    assert!(lines[0].contains("$35/h"));
    assert!(lines[0].contains("★★★★⯨ 4.9"));
    assert!(lines[0].ends_with("New York, NY"));
}

#[test]
fn format_tutor_details_show_phone_and_contact_link() {
    let catalog = sample_catalog();
    let lines = format_tutor_details(&catalog[0], DEFAULT_MESSAGING_BASE_URL);

    assert_eq!(lines[0], "Dr. Emily Brown (1)");
    assert!(lines.contains(&"Phone:         (123) 456-7890".to_string()));
    let contact = lines.last().unwrap();
    assert!(contact.contains("https://wa.me/1234567890?text=Hello%21"));
}

#[test]
fn tutor_list_item_serializes_flat_camel_case() {
    let catalog = sample_catalog();
    let item = tutor_to_list_item(&catalog[1], DEFAULT_MESSAGING_BASE_URL);
    let value = serde_json::to_value(&item).unwrap();

    assert_eq!(value["id"], "2");
    assert_eq!(value["pricePerHour"], 40.0);
    assert_eq!(value["stars"], "★★★★⯨");
    assert!(value["contactLink"]
        .as_str()
        .unwrap()
        .starts_with("https://wa.me/1234567891?text="));
}

#[test]
fn validate_profile_args_trims_and_reports_first_error() {
    let profile = validate_profile_args(profile_args()).unwrap();
    assert_eq!(profile.subject, "Chemistry");

    let mut bad = profile_args();
    bad.price = 0.0;
    bad.contact = "12345".to_string();
    let error = validate_profile_args(bad).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Invalid profile: Price per hour must be a positive number"
    );
}

#[test]
fn profile_summary_includes_stats() {
    let profile = validate_profile_args(profile_args()).unwrap();
    let lines = format_profile_summary(&profile, &TutorStats::new(10, profile.price_per_hour));

    assert!(lines.contains(&"Phone:         +1 (555) 123-4567".to_string()));
    assert!(lines.contains(&"This month:      3".to_string()));
    assert!(lines.contains(&"Total earnings:  $325".to_string()));
}

#[test]
fn config_set_validates_api_url() {
    let mut config = CliConfig::default();

    apply_config_set(&mut config, ConfigKey::ApiUrl, " https://api.example.com/ ").unwrap();
    assert_eq!(
        config.api_base_url.as_deref(),
        Some("https://api.example.com")
    );

    assert!(apply_config_set(&mut config, ConfigKey::ApiUrl, "ftp://nope").is_err());
    assert!(apply_config_set(&mut config, ConfigKey::CatalogPath, "  ").is_err());
}

#[test]
fn config_unset_clears_only_named_key() {
    let mut config = CliConfig {
        api_base_url: Some("https://api.example.com".to_string()),
        catalog_path: Some(PathBuf::from("tutors.json")),
        ..CliConfig::default()
    };

    apply_config_unset(&mut config, ConfigKey::ApiUrl);
    assert_eq!(config.api_base_url, None);
    assert_eq!(config.catalog_path, Some(PathBuf::from("tutors.json")));

    let lines = format_config_lines(&config, "/tmp/cli-config.json");
    assert_eq!(lines[1], "api-url:       (not set)");
    assert_eq!(lines[2], "catalog-path:  tutors.json");
}

#[test]
fn completions_use_binary_name() {
    for shell in [CompletionShell::Bash, CompletionShell::Zsh, CompletionShell::Fish] {
        let script = String::from_utf8(render_completions(shell)).unwrap();
        assert!(script.contains("tutorlink"));
    }
}

#[test]
fn cli_parses_profile_show_json() {
    let cli = Cli::try_parse_from(["tutorlink", "profile", "show", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Profile {
            command: ProfileCommands::Show { json: true }
        })
    ));
}

#[test]
fn profile_snapshot_lines_use_server_stats() {
    let lines = format_profile_snapshot(&stored_profile());

    assert!(lines.contains(&"Rating:          ★★★★⯨ 4.8".to_string()));
    assert!(lines.contains(&"Total sessions:  89".to_string()));
    assert!(lines.contains(&"This month:      26".to_string()));
    assert!(lines.contains(&"Total earnings:  $3560".to_string()));
    assert_eq!(lines.last().unwrap(), "Profile:         83% complete");
}

#[test]
fn profile_view_serializes_stats_and_completion() {
    let snapshot = stored_profile();
    let value = serde_json::to_value(profile_view(&snapshot)).unwrap();

    assert_eq!(value["subject"], "Physics");
    assert_eq!(value["totalSessions"], 89);
    assert_eq!(value["stats"]["thisMonthSessions"], 26);
    assert_eq!(value["completionPercent"], 83);
    assert_eq!(value["stars"], "★★★★⯨");
}

#[test]
fn profile_export_writes_backend_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tutor-profile.json");

    write_profile_export(&stored_profile(), Some(&path)).unwrap();

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(exported["whatsapp_number"], "+1234567891");
    assert_eq!(exported["price_per_hour"], 40.0);
    assert_eq!(exported["total_sessions"], 89);
}
