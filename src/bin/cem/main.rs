//! cem CLI - Inspect Custom Elements Manifests

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cem::core::ManifestError;
use cem::output::style::set_color_enabled;
use cem::output::TableError;
use cem::query::QueryError;
use cem::util::context::LocateError;
use cem::util::diagnostic::{emit, Diagnostic};
use cem::util::shell::ColorChoice;
use cem::util::Shell;
use cli::{Cli, Commands};
use commands::Session;

fn main() {
    let cli = Cli::parse();

    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let shell = Shell::from_flags(cli.quiet, cli.verbose, color);
    set_color_enabled(shell.use_color());

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("cem=debug")
    } else if cli.quiet {
        EnvFilter::new("cem=error")
    } else {
        EnvFilter::new("cem=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let use_color = shell.use_color();
    if let Err(e) = run(cli, shell) {
        report(&e, use_color);
        std::process::exit(1);
    }
}

fn run(cli: Cli, shell: Shell) -> Result<()> {
    // Completions need no manifest
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let session = Session::new(shell, cli.manifest)?;

    match cli.command {
        Commands::List(args) => commands::list::execute(args, &session),
        Commands::Tree(args) => commands::tree::execute(args, &session),
        Commands::Query(args) => commands::query::execute(args, &session),
        Commands::Normalize(args) => commands::normalize::execute(args, &session),
        Commands::Completions(_) => Ok(()),
    }
}

/// Print an error, as a diagnostic with suggestions when one is known.
fn report(err: &anyhow::Error, color: bool) {
    match diagnostic_for(err) {
        Some(mut diagnostic) => {
            let outer = err.to_string();
            if outer != diagnostic.message {
                diagnostic = diagnostic.with_context(outer);
            }
            emit(&diagnostic, color);
        }
        None => eprintln!("error: {:#}", err),
    }
}

fn diagnostic_for(err: &anyhow::Error) -> Option<Diagnostic> {
    if let Some(e) = err.downcast_ref::<ManifestError>() {
        return Some(e.to_diagnostic());
    }
    if let Some(e) = err.downcast_ref::<LocateError>() {
        return Some(e.to_diagnostic());
    }
    if let Some(e) = err.downcast_ref::<TableError>() {
        return Some(e.to_diagnostic());
    }
    if let Some(e) = err.downcast_ref::<QueryError>() {
        return Some(e.to_diagnostic());
    }
    None
}
