//! cem - Inspect Custom Elements Manifests from the command line
//!
//! This crate provides the library behind the `cem` binary: a typed model
//! of `custom-elements.json` with lossless decoding and re-encoding, a
//! display layer that renders manifest entities as tables and trees, and a
//! small path query engine over the decoded data.

pub mod core;
pub mod ops;
pub mod output;
pub mod query;
pub mod render;
pub mod util;

/// Shared fixtures for unit tests.
#[cfg(test)]
pub mod test_support;

pub use core::{Declaration, ManifestError, Module, Package};
pub use render::{Renderable, RenderableKind, TreeNode};
pub use util::context::GlobalContext;
