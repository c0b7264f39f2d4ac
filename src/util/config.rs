//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `<config dir>/cem/config.toml` - User-wide defaults
//! - Project: `.cem/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Command-line flags
//! take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::render::predicate::DeprecationFilter;

/// cem configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest location
    pub manifest: ManifestConfig,

    /// Listing defaults
    pub list: ListConfig,
}

/// Where to find the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Path to custom-elements.json, relative to the config's project root
    pub path: Option<PathBuf>,
}

/// Defaults for `cem list` and `cem tree`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Default output format (table, tree)
    pub format: Option<OutputFormat>,

    /// Default deprecation filter (show, hide, only)
    pub deprecated: Option<DeprecationFilter>,

    /// Default table columns
    pub columns: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing
    /// or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.manifest.path.is_some() {
            self.manifest.path = other.manifest.path;
        }

        if other.list.format.is_some() {
            self.list.format = other.list.format;
        }
        if other.list.deprecated.is_some() {
            self.list.deprecated = other.list.deprecated;
        }
        if !other.list.columns.is_empty() {
            self.list.columns = other.list.columns;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.cem/config.toml)
/// 2. Global config (<config dir>/cem/config.toml)
/// 3. Defaults
///
/// A relative `manifest.path` in the project config is resolved against
/// the project root.
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    let mut project = Config::load_or_default(project_path);
    if let (Some(path), Some(root)) = (
        project.manifest.path.as_ref(),
        project_path.parent().and_then(Path::parent),
    ) {
        if path.is_relative() {
            project.manifest.path = Some(root.join(path));
        }
    }
    config.merge(project);

    config
}

/// Get the global config path (`<config dir>/cem/config.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "cem", "cem")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Get the project config path (`.cem/config.toml`).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".cem").join("config.toml")
}
