//! `cem tree` command

use anyhow::Result;

use crate::cli::TreeArgs;
use crate::commands::Session;
use cem::ops::{tree, TreeOptions};

pub fn execute(args: TreeArgs, session: &Session) -> Result<()> {
    let package = session.load_package()?;

    let opts = TreeOptions {
        tag_name: args.tag_name,
        deprecated: args
            .deprecated
            .or(session.ctx.config().list.deprecated)
            .unwrap_or_default(),
    };

    session.shell.print(&tree(&package, &opts)?)?;
    Ok(())
}
