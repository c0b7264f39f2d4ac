//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use cem::ops::ListKind;
use cem::output::OutputFormat;
use cem::render::predicate::DeprecationFilter;

/// cem - Inspect Custom Elements Manifests
#[derive(Parser)]
#[command(name = "cem")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to custom-elements.json (defaults to package.json `customElements`)
    #[arg(short, long, global = true, env = "CEM_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List elements, modules, or the members of one element
    List(ListArgs),

    /// Display the package, or one element, as a tree
    Tree(TreeArgs),

    /// Query manifest data by path
    Query(QueryArgs),

    /// Decode and re-encode the manifest
    Normalize(NormalizeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// What to list
    #[arg(value_enum)]
    pub kind: ListKind,

    /// Element to list members of (required for member kinds)
    #[arg(short, long)]
    pub tag_name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Which entities to show by deprecation status
    #[arg(short, long, value_enum)]
    pub deprecated: Option<DeprecationFilter>,

    /// Table columns to show, comma-separated (the first column is always kept)
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,
}

#[derive(Args)]
pub struct TreeArgs {
    /// Show only this element
    #[arg(short, long)]
    pub tag_name: Option<String>,

    /// Which entities to show by deprecation status
    #[arg(short, long, value_enum)]
    pub deprecated: Option<DeprecationFilter>,
}

/// Post-processing applied to a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryFilter {
    /// First element of an array
    First,
    /// Number of elements or keys
    Count,
    /// Whether the path resolves at all
    Exists,
}

impl QueryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryFilter::First => "first",
            QueryFilter::Count => "count",
            QueryFilter::Exists => "exists",
        }
    }
}

#[derive(Args)]
pub struct QueryArgs {
    /// Data source: `manifest` or `elements`
    pub source: String,

    /// Dot-separated path inside the source
    #[arg(default_value = "")]
    pub path: String,

    /// Post-process the result
    #[arg(short, long, value_enum)]
    pub filter: Option<QueryFilter>,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_columns() {
        let cli = Cli::parse_from([
            "cem",
            "list",
            "attributes",
            "--tag-name",
            "my-button",
            "--columns",
            "Summary,Type",
        ]);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.kind, ListKind::Attributes);
                assert_eq!(args.columns, vec!["Summary", "Type"]);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cem", "tree", "--no-color", "-m", "dist/cem.json"]);
        assert!(cli.no_color);
        assert_eq!(cli.manifest, Some(PathBuf::from("dist/cem.json")));
    }
}
