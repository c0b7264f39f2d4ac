//! Re-encoding a manifest in canonical form.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::Package;

/// Encode `package` as two-space pretty JSON with a trailing newline.
pub fn normalize(package: &Package) -> Result<String> {
    let mut json = package.to_json_pretty()?;
    json.push('\n');
    Ok(json)
}

/// Write the normalized form of `package` to `output`.
pub fn write_normalized(package: &Package, output: &Path) -> Result<()> {
    let json = normalize(package)?;
    std::fs::write(output, json)
        .with_context(|| format!("failed to write {}", output.display()))
}
