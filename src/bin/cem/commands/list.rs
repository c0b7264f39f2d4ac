//! `cem list` command

use anyhow::Result;

use crate::cli::ListArgs;
use crate::commands::Session;
use cem::ops::{list, ListOptions};

pub fn execute(args: ListArgs, session: &Session) -> Result<()> {
    let package = session.load_package()?;
    let defaults = &session.ctx.config().list;

    let opts = ListOptions {
        tag_name: args.tag_name,
        format: args.format.or(defaults.format).unwrap_or_default(),
        deprecated: args.deprecated.or(defaults.deprecated).unwrap_or_default(),
        columns: if args.columns.is_empty() {
            defaults.columns.clone()
        } else {
            args.columns
        },
    };

    let output = list(&package, args.kind, &opts)?;
    if output.is_empty() {
        session.shell.note(format!("no {} to show", args.kind));
        return Ok(());
    }
    session.shell.print(&output)?;
    Ok(())
}
