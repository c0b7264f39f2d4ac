//! Test utilities for unit tests.
//!
//! Provides manifest fixtures shared by the model, projection, and query
//! tests. The JSON lives under `tests/fixtures/` so the CLI integration
//! tests read the same documents.

pub mod fixtures;

pub use fixtures::*;
