//! The docfind application runner.
//!
//! Ties argument parsing, configuration, logging, and command dispatch
//! together. The configuration is held behind a [`Shared`] handle: built
//! once from file/env at startup, then read-only for the process lifetime.

use docfind_core::{Result, Shared};
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::DocfindConfig;
use crate::handlers;

// ============================================================================
// DocfindCli
// ============================================================================

/// The CLI application.
pub struct DocfindCli {
    name: String,
    config: Shared<DocfindConfig>,
    version: String,
}

impl DocfindCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = DocfindConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application with an explicit configuration.
    pub fn new(name: impl Into<String>, config: DocfindConfig) -> Self {
        Self {
            name: name.into(),
            config: Shared::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &DocfindConfig {
        self.config.get()
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` if set, otherwise derives the filter from the
    /// verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Validate { file }) => {
                let path = self.config().index_path(file.as_deref())?;
                handlers::handle_validate(&path)
            }
            Some(Command::Stats { file }) => {
                let path = self.config().index_path(file.as_deref())?;
                handlers::handle_stats(&path)
            }
            Some(Command::Pages { file }) => {
                let path = self.config().index_path(file.as_deref())?;
                handlers::handle_pages(&path)
            }
            Some(Command::Dump { file, pretty }) => {
                let path = self.config().index_path(file.as_deref())?;
                handlers::handle_dump(&path, pretty)
            }
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            None => {
                println!("{} {} — use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
