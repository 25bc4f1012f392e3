//! CLI argument parsing and command definitions.
//!
//! Every command operates on a search index file; when `FILE` is omitted,
//! the configured `[index] path` is used instead.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "DOCFIND_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// docfind commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load an index and report whether it conforms to the schema.
    Validate {
        /// Index file (defaults to the configured index path).
        file: Option<String>,
    },

    /// Print summary statistics for an index.
    Stats {
        /// Index file (defaults to the configured index path).
        file: Option<String>,
    },

    /// List pages with their record counts.
    Pages {
        /// Index file (defaults to the configured index path).
        file: Option<String>,
    },

    /// Load an index and re-emit it (normalizes formatting).
    Dump {
        /// Index file (defaults to the configured index path).
        file: Option<String>,

        /// Emit pretty-printed JSON instead of the JavaScript binding form.
        #[arg(long)]
        pretty: bool,
    },

    /// Print version information.
    Version,
}

// ============================================================================
// Tests
// ============================================================================
