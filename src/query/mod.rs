//! Path queries over JSON data sources.

pub mod engine;
pub mod path;
pub mod sources;

pub use engine::{
    apply_filter, execute_all, execute_data_fetcher, resolve_path, resolve_with_filter,
    DataFetcher, QueryError, Sources,
};
pub use sources::package_sources;
