//! Querying the manifest through the data source engine.

use anyhow::Result;
use serde_json::Value;

use crate::core::Package;
use crate::query::{package_sources, resolve_with_filter};

/// Options for [`query`].
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// `manifest` or `elements`
    pub source: String,
    /// Path inside the source; empty for the whole source
    pub path: String,
    /// `first`, `count`, or `exists`
    pub filter: Option<String>,
}

/// Resolve a query against the sources built from `package`.
pub fn query(package: &Package, opts: &QueryOptions) -> Result<Value> {
    let sources = package_sources(package)?;
    let value = resolve_with_filter(&opts.source, &opts.path, opts.filter.as_deref(), &sources)?;
    Ok(value)
}
