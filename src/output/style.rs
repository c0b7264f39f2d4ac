//! Terminal styling for labels and headings.

use std::borrow::Cow;
use std::sync::LazyLock;

use colored::Colorize;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

use crate::core::Deprecated;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid ANSI regex"));

/// Enable or disable styling for the whole process.
pub fn set_color_enabled(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

/// Mark `name` as deprecated when `deprecation` says so.
///
/// `Flag(true)` appends `(DEPRECATED)`; a reason appends
/// `(DEPRECATED: reason)`. Everything is red when deprecated.
pub fn highlight_if_deprecated(name: &str, deprecation: &Deprecated) -> String {
    match deprecation {
        Deprecated::None | Deprecated::Flag(false) => name.to_string(),
        Deprecated::Flag(true) => format!("{} (DEPRECATED)", name).red().to_string(),
        Deprecated::Reason(reason) => format!("{} (DEPRECATED: {})", name, reason)
            .red()
            .to_string(),
    }
}

/// Append a dimmed summary to a label, if there is one.
pub fn with_summary(label: String, summary: Option<&str>) -> String {
    match summary.filter(|summary| !summary.is_empty()) {
        Some(summary) => format!("{} {}", label, summary.dimmed()),
        None => label,
    }
}

/// Style a declaration keyword such as `class` or `module`.
pub fn keyword(word: &str) -> String {
    word.blue().to_string()
}

/// Style a group or section title.
pub fn title(text: &str) -> String {
    text.bold().blue().to_string()
}

/// Remove ANSI escape sequences.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

/// Terminal column width of `text`, ignoring escape sequences. Wide
/// characters such as emoji count as two columns.
pub fn display_width(text: &str) -> usize {
    strip_ansi(text).width()
}
