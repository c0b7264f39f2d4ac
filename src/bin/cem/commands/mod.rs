//! Command implementations

pub mod completions;
pub mod list;
pub mod normalize;
pub mod query;
pub mod tree;

use std::path::PathBuf;

use anyhow::Result;

use cem::core::Package;
use cem::ops::load_package;
use cem::util::shell::Status;
use cem::util::{GlobalContext, Shell};

/// State shared by every command that reads a manifest.
pub struct Session {
    pub ctx: GlobalContext,
    pub shell: Shell,
    manifest: Option<PathBuf>,
}

impl Session {
    pub fn new(shell: Shell, manifest: Option<PathBuf>) -> Result<Self> {
        Ok(Session {
            ctx: GlobalContext::new()?,
            shell,
            manifest,
        })
    }

    /// Locate and decode the manifest.
    pub fn load_package(&self) -> Result<Package> {
        let path = self.ctx.find_manifest(self.manifest.as_deref())?;
        let package = load_package(&path)?;
        self.shell.status(
            Status::Loaded,
            format!("{} ({} modules)", path.display(), package.modules.len()),
        );
        Ok(package)
    }
}
