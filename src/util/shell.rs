//! Centralized shell output.
//!
//! Listings and query results go to stdout so they can be piped. Status
//! lines go to stderr, right-aligned like `{status:>12} {message}`, and are
//! filtered by verbosity.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use colored::Colorize;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: errors only
    Quiet,
    /// Default: warnings and errors
    #[default]
    Normal,
    /// --verbose: every status line
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Never use ANSI colors.
    Never,
}

impl ColorChoice {
    /// Resolve against the terminal attached to stdout.
    pub fn should_color(self) -> bool {
        match self {
            ColorChoice::Auto => {
                io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
            ColorChoice::Never => false,
        }
    }
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A manifest was read and decoded (cyan)
    Loaded,
    /// A file was written (green)
    Finished,
    /// Informational (blue)
    Info,
    /// Recoverable problem (yellow)
    Warning,
    /// Fatal problem (red)
    Error,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Loaded => "Loaded",
            Status::Finished => "Finished",
            Status::Info => "Info",
            Status::Warning => "Warning",
            Status::Error => "error",
        }
    }

    fn paint(&self, text: &str) -> String {
        match self {
            Status::Loaded => text.bold().cyan().to_string(),
            Status::Finished => text.bold().green().to_string(),
            Status::Info => text.bold().blue().to_string(),
            Status::Warning => text.bold().yellow().to_string(),
            Status::Error => text.bold().red().to_string(),
        }
    }

    fn is_shown(&self, verbosity: Verbosity) -> bool {
        match verbosity {
            Verbosity::Quiet => *self == Status::Error,
            Verbosity::Normal => matches!(self, Status::Warning | Status::Error | Status::Finished),
            Verbosity::Verbose => true,
        }
    }
}

/// Width status labels are right-aligned to.
const STATUS_WIDTH: usize = 12;

/// Central shell for all CLI output.
#[derive(Debug, Clone)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
}

impl Shell {
    /// Create a new shell.
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        Shell {
            verbosity,
            use_color: color.should_color(),
        }
    }

    /// Create a shell from CLI flags. Quiet wins over verbose.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Shell::new(verbosity, color)
    }

    /// Get the verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Check if colors are enabled.
    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Print a status message to stderr.
    pub fn status(&self, status: Status, msg: impl Display) {
        if status.is_shown(self.verbosity) {
            eprintln!("{} {}", self.format_status(status), msg);
        }
    }

    /// Print an info message.
    pub fn note(&self, msg: impl Display) {
        self.status(Status::Info, msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: impl Display) {
        self.status(Status::Warning, msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: impl Display) {
        self.status(Status::Error, msg);
    }

    /// Write command output to stdout, adding a trailing newline if missing.
    pub fn print(&self, output: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()
    }

    fn format_status(&self, status: Status) -> String {
        let text = format!("{:>width$}", status.as_str(), width = STATUS_WIDTH);
        if self.use_color {
            status.paint(&text)
        } else {
            text
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Verbosity::default(), ColorChoice::default())
    }
}
