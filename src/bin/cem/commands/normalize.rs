//! `cem normalize` command

use anyhow::Result;

use crate::cli::NormalizeArgs;
use crate::commands::Session;
use cem::ops::{normalize, write_normalized};
use cem::util::shell::Status;

pub fn execute(args: NormalizeArgs, session: &Session) -> Result<()> {
    let package = session.load_package()?;

    match args.output {
        Some(output) => {
            write_normalized(&package, &output)?;
            session
                .shell
                .status(Status::Finished, format!("wrote {}", output.display()));
        }
        None => session.shell.print(&normalize(&package)?)?,
    }
    Ok(())
}
