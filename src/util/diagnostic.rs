//! User-friendly diagnostic messages.
//!
//! Every error shown to the user names what went wrong and, where one
//! exists, the command or edit that fixes it.

use std::fmt;
use std::path::PathBuf;

use colored::Colorize;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when no manifest file is found.
    pub const NO_MANIFEST: &str =
        "Pass `--manifest <path>` or add a `customElements` field to package.json";

    /// Suggestion when the manifest is not valid JSON.
    pub const CHECK_MANIFEST_JSON: &str =
        "Check that the file is a custom-elements.json and not truncated";

    /// Suggestion when the manifest uses an unsupported shape.
    pub const REGENERATE_MANIFEST: &str =
        "Regenerate the manifest with an analyzer that emits schema 2.x";

    /// Suggestion when a tag is not found.
    pub const LIST_TAGS: &str = "Run `cem list tags` to see registered elements";

    /// Suggestion when a query path resolves to nothing.
    pub const QUERY_PATH: &str = "Run `cem query elements` to inspect the available data";
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let label = if color {
            "error".bold().red().to_string()
        } else {
            "error".to_string()
        };
        output.push_str(&format!("{}: {}\n", label, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  → {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help = if color {
                "help".bold().green().to_string()
            } else {
                "help".to_string()
            };
            if let [only] = self.suggestions.as_slice() {
                output.push_str(&format!("{}: {}\n", help, only));
            } else {
                output.push_str(&format!("{}: consider:\n", help));
                for (i, suggestion) in self.suggestions.iter().enumerate() {
                    output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
                }
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
