use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tutorlink_core::SortKey;

#[derive(Parser)]
#[command(name = "tutorlink")]
#[command(about = "Find a tutor and reach them directly from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read the tutor catalog from a JSON file instead of the backend
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Directory backend base URL (overrides TUTORLINK_API_URL and saved config)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quick search: tutorlink "calculus"
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search tutors by text, subject, and location
    #[command(alias = "find")]
    Search {
        /// Free text matched against name, subject, and bio
        query: Vec<String>,
        #[command(flatten)]
        filters: FilterArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every tutor in the catalog
    List {
        /// Result ordering
        #[arg(long, value_enum, default_value_t = SortArg::Relevance)]
        sort: SortArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one tutor's full listing
    Show {
        /// Tutor ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the messaging link for reaching a tutor
    Contact {
        /// Tutor ID
        id: String,
    },
    /// Tell the backend you reached out to a tutor
    Connect {
        /// Tutor ID
        id: String,
    },
    /// Check, publish, or inspect your tutor profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Ask the help assistant a question
    Ask {
        /// Question text
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Manage saved CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only tutors whose subject contains this text
    #[arg(short, long, value_name = "SUBJECT")]
    pub subject: Option<String>,
    /// Only tutors whose location contains this text
    #[arg(short, long, value_name = "LOCATION")]
    pub location: Option<String>,
    /// Result ordering
    #[arg(long, value_enum, default_value_t = SortArg::Relevance)]
    pub sort: SortArg,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SortArg {
    #[default]
    Relevance,
    Rating,
    #[value(name = "price_low", alias = "price-low")]
    PriceLow,
    #[value(name = "price_high", alias = "price-high")]
    PriceHigh,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Relevance => Self::Relevance,
            SortArg::Rating => Self::Rating,
            SortArg::PriceLow => Self::PriceLow,
            SortArg::PriceHigh => Self::PriceHigh,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Subject you teach
    #[arg(long)]
    pub subject: String,
    /// Hourly price
    #[arg(long, value_name = "AMOUNT")]
    pub price: f64,
    /// When you are available, e.g. "Weekdays 6-9 PM"
    #[arg(long)]
    pub availability: String,
    /// Messaging phone number students will reach you on
    #[arg(long, value_name = "PHONE")]
    pub contact: String,
    /// Where you teach, e.g. "Boston, MA" or "Online"
    #[arg(long)]
    pub location: String,
    /// Short description of your background
    #[arg(long, default_value = "")]
    pub bio: String,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Validate a profile without sending it
    Validate {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Completed sessions, for the earnings preview
        #[arg(long, default_value = "0")]
        sessions: u32,
    },
    /// Validate and publish a profile to the backend
    Submit {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Show your stored profile with rating, stats, and completion
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save your stored profile as JSON for backup
    Export {
        /// Output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Save a default catalog source setting
    Set {
        /// Setting to change
        #[arg(value_enum)]
        key: ConfigKey,
        /// New value
        value: String,
    },
    /// Forget one saved setting
    Unset {
        /// Setting to remove
        #[arg(value_enum)]
        key: ConfigKey,
    },
    /// Show saved settings and where they live
    Show,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ConfigKey {
    /// Directory backend base URL
    ApiUrl,
    /// Catalog JSON file
    CatalogPath,
}
