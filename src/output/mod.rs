//! Output sinks: tree and table rendering, terminal styling.

pub mod style;
pub mod table;
pub mod tree;

pub use table::{render_sections, render_table, Table, TableError, TableOptions};
pub use tree::render_tree;

use serde::{Deserialize, Serialize};

/// How listings are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pipe tables
    #[default]
    Table,
    /// Box-drawing trees
    Tree,
}
