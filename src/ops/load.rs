//! Reading manifests from disk.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::Package;

/// Read and decode the manifest at `path`.
///
/// Decoding failures keep their [`ManifestError`](crate::core::ManifestError)
/// so callers can downcast for a diagnostic.
pub fn load_package(path: &Path) -> Result<Package> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!("read {} bytes from {}", bytes.len(), path.display());
    Package::from_slice(&bytes).with_context(|| format!("failed to decode {}", path.display()))
}
