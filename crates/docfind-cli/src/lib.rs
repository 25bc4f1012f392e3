//! docfind CLI — command-line inspector for documentation search indexes.
//!
//! # Modules
//!
//! - [`cli`]: clap argument and command definitions
//! - [`config`]: TOML/env configuration loading
//! - [`app`]: the application runner
//! - [`handlers`]: per-command implementations

pub mod app;
pub mod cli;
pub mod config;
pub mod handlers;

pub use app::DocfindCli;
pub use cli::{CliArgs, Command};
pub use config::DocfindConfig;
