//! `cem query` command

use anyhow::{Context, Result};

use crate::cli::QueryArgs;
use crate::commands::Session;
use cem::ops::{query, QueryOptions};

pub fn execute(args: QueryArgs, session: &Session) -> Result<()> {
    let package = session.load_package()?;

    let opts = QueryOptions {
        source: args.source,
        path: args.path,
        filter: args.filter.map(|filter| filter.as_str().to_string()),
    };

    let value = query(&package, &opts)?;
    let json = serde_json::to_string_pretty(&value).context("failed to encode query result")?;
    session.shell.print(&json)?;
    Ok(())
}
