use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tutorlink_core::contact::format_phone_number;
use tutorlink_core::models::{TutorProfile, TutorProfileDraft, TutorProfileSnapshot, TutorStats};
use tutorlink_core::rating::render_stars;
use tutorlink_core::wire::WireProfileSnapshot;

use crate::cli::{ProfileArgs, ProfileCommands};
use crate::commands::common::{format_price, require_backend, CliContext};
use crate::error::CliError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView<'a> {
    #[serde(flatten)]
    pub snapshot: &'a TutorProfileSnapshot,
    pub stars: String,
    pub stats: TutorStats,
    pub completion_percent: u8,
}

pub async fn run_profile(context: &CliContext, command: ProfileCommands) -> Result<(), CliError> {
    match command {
        ProfileCommands::Validate { profile, sessions } => {
            let profile = validate_profile_args(profile)?;
            let stats = TutorStats::new(sessions, profile.price_per_hour);
            for line in format_profile_summary(&profile, &stats) {
                println!("{line}");
            }
            Ok(())
        }
        ProfileCommands::Submit { profile } => {
            let profile = validate_profile_args(profile)?;
            let client = require_backend(context)?;
            client.submit_profile(&profile).await?;
            println!("Profile for {} published", profile.subject);
            Ok(())
        }
        ProfileCommands::Show { json } => {
            let client = require_backend(context)?;
            let Some(snapshot) = client.fetch_profile().await? else {
                println!("No profile found. Create one with `tutorlink profile submit`.");
                return Ok(());
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&profile_view(&snapshot))?);
            } else {
                for line in format_profile_snapshot(&snapshot) {
                    println!("{line}");
                }
            }
            Ok(())
        }
        ProfileCommands::Export { output } => {
            let client = require_backend(context)?;
            let snapshot = client
                .fetch_profile()
                .await?
                .ok_or(CliError::ProfileNotFound)?;
            write_profile_export(&snapshot, output.as_deref())
        }
    }
}

pub fn profile_view(snapshot: &TutorProfileSnapshot) -> ProfileView<'_> {
    ProfileView {
        snapshot,
        stars: render_stars(snapshot.rating),
        stats: snapshot.stats(),
        completion_percent: snapshot.profile.completion_percent(),
    }
}

/// Write the stored profile in the backend's own field names
pub fn write_profile_export(
    snapshot: &TutorProfileSnapshot,
    output_path: Option<&Path>,
) -> Result<(), CliError> {
    let mut rendered = serde_json::to_string_pretty(&WireProfileSnapshot::from(snapshot))?;
    rendered.push('\n');

    if let Some(path) = output_path {
        std::fs::write(path, rendered)?;
        println!("{}", path.display());
    } else {
        io::stdout().write_all(rendered.as_bytes())?;
    }
    Ok(())
}

pub fn format_profile_snapshot(snapshot: &TutorProfileSnapshot) -> Vec<String> {
    let profile = &snapshot.profile;
    let stats = snapshot.stats();
    let mut lines = vec![
        format!("Subject:       {}", profile.subject),
        format!("Price:         {}/h", format_price(profile.price_per_hour)),
        format!("Availability:  {}", profile.availability),
        format!("Phone:         {}", format_phone_number(&profile.contact_handle)),
        format!("Location:      {}", profile.location),
    ];
    if !profile.bio.trim().is_empty() {
        lines.push(format!("Bio:           {}", profile.bio.trim()));
    }
    lines.push(String::new());
    lines.push(format!(
        "Rating:          {} {:.1}",
        render_stars(snapshot.rating),
        snapshot.rating
    ));
    lines.push(format!("Total sessions:  {}", stats.total_sessions));
    lines.push(format!("This month:      {}", stats.this_month_sessions));
    lines.push(format!("Total earnings:  {}", format_price(stats.total_earnings)));
    lines.push(format!("Profile:         {}% complete", profile.completion_percent()));
    lines
}

pub fn validate_profile_args(args: ProfileArgs) -> Result<TutorProfile, CliError> {
    let draft = TutorProfileDraft {
        subject: args.subject,
        price_per_hour: args.price,
        availability: args.availability,
        contact_handle: args.contact,
        location: args.location,
        bio: args.bio,
    };
    Ok(draft.validate()?)
}

pub fn format_profile_summary(profile: &TutorProfile, stats: &TutorStats) -> Vec<String> {
    let mut lines = vec![
        "Profile is valid".to_string(),
        format!("Subject:       {}", profile.subject),
        format!("Price:         {}/h", format_price(profile.price_per_hour)),
        format!("Availability:  {}", profile.availability),
        format!("Phone:         {}", format_phone_number(&profile.contact_handle)),
        format!("Location:      {}", profile.location),
    ];
    if !profile.bio.is_empty() {
        lines.push(format!("Bio:           {}", profile.bio));
    }
    lines.push(String::new());
    lines.push(format!("Total sessions:  {}", stats.total_sessions));
    lines.push(format!("This month:      {}", stats.this_month_sessions));
    lines.push(format!("Total earnings:  {}", format_price(stats.total_earnings)));
    lines
}
