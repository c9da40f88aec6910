//! TutorLink CLI - Find a tutor from the command line
//!
//! Searches the tutor directory and hands back a direct messaging link.

mod cli;
mod commands;
mod config_file;
mod error;

#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use tutorlink_core::config::ClientConfig;

use crate::cli::{Cli, Commands, FilterArgs};
use crate::commands::ask::run_ask;
use crate::commands::common::resolve_context;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::connect::run_connect;
use crate::commands::contact::run_contact;
use crate::commands::list::run_list;
use crate::commands::profile::run_profile;
use crate::commands::search::run_search;
use crate::commands::show::run_show;
use crate::config_file::CliConfig;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // These never touch the catalog, so a broken backend setting must not block them.
    match cli.command {
        Some(Commands::Completions { shell, output }) => {
            return run_completions(shell, output.as_deref());
        }
        Some(Commands::Config { command }) => return run_config(command),
        Some(Commands::Ask { message }) => {
            run_ask(&message);
            return Ok(());
        }
        _ => {}
    }

    let saved = CliConfig::load().map_err(CliError::Config)?;
    let context = resolve_context(cli.catalog, cli.api_url, ClientConfig::from_env()?, &saved)?;

    match cli.command {
        Some(Commands::Search {
            query,
            filters,
            json,
        }) => run_search(&context, &query, &filters, json).await?,
        Some(Commands::List { sort, json }) => run_list(&context, sort.into(), json).await?,
        Some(Commands::Show { id, json }) => run_show(&context, &id, json).await?,
        Some(Commands::Contact { id }) => run_contact(&context, &id).await?,
        Some(Commands::Connect { id }) => run_connect(&context, &id).await?,
        Some(Commands::Profile { command }) => run_profile(&context, command).await?,
        Some(Commands::Ask { .. } | Commands::Completions { .. } | Commands::Config { .. }) => {}
        None => {
            if cli.query.is_empty() {
                Cli::command().print_help()?;
            } else {
                run_search(&context, &cli.query, &FilterArgs::default(), false).await?;
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "tutorlink=debug,tutorlink_core=debug"
    } else {
        "tutorlink=warn,tutorlink_core=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
