//! CLI argument parsing for uninotas
//!
//! Global flags: --root, --store, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod auth;
pub mod format;
pub mod parse;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use auth::AuthCommands;
use parse::parse_output_format;
pub use uninotas_core::format::OutputFormat;

/// Uninotas - minimum final score calculator and grade history
#[derive(Parser, Debug)]
#[command(name = "uninotas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true, env = "UNINOTAS_STORE")]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (error, warn, info, debug, trace, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new uninotas store
    Init,

    /// Check whether score texts are valid (0 to 5, at most two decimals)
    Validate {
        /// Score texts to check
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        texts: Vec<String>,
    },

    /// Compute the score needed in the third assessment to pass
    Calc {
        /// First assessment score (30%)
        #[arg(allow_hyphen_values = true)]
        first: String,

        /// Second assessment score (35%)
        #[arg(allow_hyphen_values = true)]
        second: String,

        /// Save the result to your history (requires a signed-in account)
        #[arg(long)]
        save: bool,

        /// Course name for the saved record
        #[arg(long, short, requires = "save")]
        course: Option<String>,

        /// Semester label for the saved record (e.g. 2024-1)
        #[arg(long, short, requires = "save")]
        semester: Option<String>,
    },

    /// Manage the local account session
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// List saved results
    History {
        /// Show a specific semester (defaults to the first one saved)
        #[arg(long, short, conflicts_with = "all")]
        semester: Option<String>,

        /// Show every semester
        #[arg(long)]
        all: bool,
    },

    /// Remove a saved result
    Remove {
        /// Record ID (rec-...)
        id: String,
    },

    /// Compare saved results across semesters
    Compare,
}
