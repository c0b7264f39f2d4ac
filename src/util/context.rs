//! Global context for cem operations.
//!
//! Provides centralized access to the working directory, merged
//! configuration, and manifest discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use miette::Diagnostic as MietteDiagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::util::config::{self, Config};
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Conventional manifest file name.
pub const DEFAULT_MANIFEST_NAME: &str = "custom-elements.json";

/// Failure to locate a manifest.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum LocateError {
    /// Nothing found between `dir` and the filesystem root.
    #[error("could not find `{DEFAULT_MANIFEST_NAME}` in `{}` or any parent directory", dir.display())]
    #[diagnostic(code(cem::locate::not_found))]
    NotFound { dir: PathBuf },

    /// An explicitly requested manifest does not exist.
    #[error("manifest `{}` does not exist", path.display())]
    #[diagnostic(code(cem::locate::missing))]
    Missing { path: PathBuf },
}

impl LocateError {
    /// Convert to a user-facing diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string()).with_suggestion(suggestions::NO_MANIFEST)
    }
}

/// The subset of package.json cem cares about.
#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(rename = "customElements")]
    custom_elements: Option<String>,
}

/// Global context shared by all commands.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    cwd: PathBuf,
    config: Config,
}

impl GlobalContext {
    /// Create a context for the current directory, loading global and
    /// project configuration.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a context rooted at a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let global = config::global_config_path();
        let config = config::load_config(global.as_deref(), &config::project_config_path(&cwd));
        GlobalContext { cwd, config }
    }

    /// Replace the loaded configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the merged configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find the manifest to inspect.
    ///
    /// Resolution order:
    /// 1. `explicit` (from `--manifest` or `CEM_MANIFEST`)
    /// 2. `manifest.path` from configuration
    /// 3. Searching upward from cwd for a package.json with a
    ///    `customElements` field, or a `custom-elements.json`
    pub fn find_manifest(&self, explicit: Option<&Path>) -> Result<PathBuf, LocateError> {
        if let Some(path) = explicit.or(self.config.manifest.path.as_deref()) {
            let path = self.cwd.join(path);
            if path.is_file() {
                return Ok(path);
            }
            return Err(LocateError::Missing { path });
        }

        let mut current = self.cwd.clone();
        loop {
            if let Some(path) = manifest_in_dir(&current) {
                tracing::debug!("found manifest at {}", path.display());
                return Ok(path);
            }
            if !current.pop() {
                return Err(LocateError::NotFound {
                    dir: self.cwd.clone(),
                });
            }
        }
    }
}

/// Look for a manifest in a single directory.
///
/// A package.json `customElements` field wins over the conventional file
/// name when it points at an existing file.
fn manifest_in_dir(dir: &Path) -> Option<PathBuf> {
    let package_json = dir.join("package.json");
    if package_json.is_file() {
        match read_package_json(&package_json) {
            Ok(PackageJson {
                custom_elements: Some(relative),
            }) => {
                let path = dir.join(relative);
                if path.is_file() {
                    return Some(path);
                }
                tracing::warn!(
                    "{} points at missing manifest {}",
                    package_json.display(),
                    path.display()
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("{:#}", e),
        }
    }

    let conventional = dir.join(DEFAULT_MANIFEST_NAME);
    conventional.is_file().then_some(conventional)
}

fn read_package_json(path: &Path) -> Result<PackageJson> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}
