//! High-level operations.
//!
//! This module contains the implementation of cem commands. Each operation
//! takes a decoded [`Package`](crate::core::Package) and returns the text to
//! print, leaving output and exit codes to the binary.

pub mod list;
pub mod load;
pub mod normalize;
pub mod query;
pub mod tree;

pub use list::{list, ListKind, ListOptions};
pub use load::load_package;
pub use normalize::{normalize, write_normalized};
pub use query::{query, QueryOptions};
pub use tree::{tree, TreeOptions};
