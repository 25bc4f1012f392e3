//! Configuration for the docfind CLI.
//!
//! Provides [`DocfindConfig`], loaded from TOML files, environment
//! variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `DOCFIND_CONFIG` environment variable
//! 3. XDG default: `~/.config/docfind/config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;

use confyg::{env, Confygery};
use docfind_core::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the docfind CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocfindConfig {
    /// Project name, used for env var prefixes and display.
    pub project_name: String,

    /// Index-related configuration.
    pub index: IndexConfig,
}

/// Search index configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Default index file used when a command gets no FILE argument.
    pub path: Option<String>,
}

impl Default for DocfindConfig {
    fn default() -> Self {
        Self {
            project_name: "docfind".to_string(),
            index: IndexConfig::default(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl DocfindConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("DOCFIND");
        env_opts.add_section("index");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. DOCFIND_CONFIG env var
        if let Ok(path) = std::env::var("DOCFIND_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("docfind").join("config.toml"))
    }

    /// Resolve the index file a command should act on.
    ///
    /// An explicit FILE argument wins over the configured `[index] path`.
    pub fn index_path(&self, explicit: Option<&str>) -> Result<PathBuf> {
        if let Some(file) = explicit {
            return Ok(PathBuf::from(file));
        }
        match &self.index.path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Err(Error::config(
                "no index file given and [index] path is not configured",
            )),
        }
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
