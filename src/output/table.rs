//! Pipe tables for renderables.

use thiserror::Error;

use super::style::{display_width, title};
use crate::render::{Predicate, Renderable, RenderableKind};
use crate::util::diagnostic::Diagnostic;

/// Errors from building a table.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum TableError {
    #[error("unknown column `{column}`{}", suggestion_suffix(.suggestion))]
    #[diagnostic(code(cem::table::unknown_column))]
    UnknownColumn {
        column: String,
        suggestion: Option<String>,
        available: Vec<String>,
    },
}

impl TableError {
    /// Convert to a user-facing diagnostic listing the valid columns.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TableError::UnknownColumn { available, .. } => Diagnostic::error(self.to_string())
                .with_context(format!("available columns: {}", available.join(", "))),
        }
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(candidate) => format!("; did you mean `{}`?", candidate),
        None => String::new(),
    }
}

/// Options for table rendering.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Columns to keep, matched case-insensitively. The first column is
    /// always kept. Empty means all non-empty columns.
    pub columns: Vec<String>,
}

/// A table ready to be printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headings: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headings: &[&str], rows: Vec<Vec<String>>) -> Self {
        Table {
            headings: headings.iter().map(|heading| heading.to_string()).collect(),
            rows,
        }
    }

    /// Build a table from renderables that share one kind.
    ///
    /// Headings come from the first item.
    pub fn from_renderables(items: &[&dyn Renderable], predicate: Predicate<'_>) -> Self {
        let headings = items.first().map(|item| item.column_headings()).unwrap_or(&[]);
        let rows = items
            .iter()
            .copied()
            .filter(|item| predicate(*item))
            .map(|item| item.to_table_row())
            .collect();
        Table::new(headings, rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only the requested columns, or drop empty ones when none are
    /// requested.
    pub fn select(self, options: &TableOptions) -> Result<Table, TableError> {
        if options.columns.is_empty() {
            return Ok(self.without_empty_columns());
        }

        let mut keep = vec![0];
        for column in &options.columns {
            let position = self
                .headings
                .iter()
                .position(|heading| heading.eq_ignore_ascii_case(column.trim()));
            match position {
                Some(position) if !keep.contains(&position) => keep.push(position),
                Some(_) => {}
                None => {
                    return Err(TableError::UnknownColumn {
                        column: column.clone(),
                        suggestion: closest_heading(column, &self.headings),
                        available: self.headings.clone(),
                    })
                }
            }
        }
        keep.sort_unstable();
        Ok(self.project(&keep))
    }

    fn without_empty_columns(self) -> Table {
        let keep: Vec<usize> = (0..self.headings.len())
            .filter(|&index| {
                index == 0
                    || self
                        .rows
                        .iter()
                        .any(|row| row.get(index).is_some_and(|cell| !cell.is_empty()))
            })
            .collect();
        self.project(&keep)
    }

    fn project(self, keep: &[usize]) -> Table {
        let pick = |cells: &[String]| -> Vec<String> {
            keep.iter()
                .map(|&index| cells.get(index).cloned().unwrap_or_default())
                .collect()
        };
        Table {
            headings: pick(&self.headings),
            rows: self.rows.iter().map(|row| pick(row)).collect(),
        }
    }

    /// Render as a pipe table with a dashed separator row.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self
            .headings
            .iter()
            .map(|heading| display_width(heading).max(3))
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(cell));
            }
        }

        let line = |cells: &[String]| -> String {
            let padded: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let cell = cells.get(index).map(String::as_str).unwrap_or_default();
                    format!("{}{}", cell, " ".repeat(width - display_width(cell)))
                })
                .collect();
            format!("| {} |", padded.join(" | "))
        };

        let mut output = String::new();
        output.push_str(&line(&self.headings));
        output.push('\n');
        let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        output.push_str(&line(&separator));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&line(row));
            output.push('\n');
        }
        output
    }
}

/// Render a flat list of same-kind renderables. Nothing is rendered when
/// no row is accepted.
pub fn render_table(
    items: &[&dyn Renderable],
    predicate: Predicate<'_>,
    options: &TableOptions,
) -> Result<String, TableError> {
    let table = Table::from_renderables(items, predicate);
    if table.is_empty() {
        return Ok(String::new());
    }
    Ok(table.select(options)?.render())
}

/// Render mixed children as one titled table per kind, in order of first
/// appearance. Kinds with no accepted rows are skipped.
pub fn render_sections(
    items: &[&dyn Renderable],
    predicate: Predicate<'_>,
    options: &TableOptions,
) -> Result<String, TableError> {
    let mut kinds: Vec<RenderableKind> = Vec::new();
    for item in items {
        if !kinds.contains(&item.kind()) {
            kinds.push(item.kind());
        }
    }

    let mut sections = Vec::new();
    for kind in kinds {
        let members: Vec<&dyn Renderable> = items
            .iter()
            .copied()
            .filter(|item| item.kind() == kind)
            .collect();
        let table = Table::from_renderables(&members, predicate);
        if table.is_empty() {
            continue;
        }
        let table = table.select(options)?;
        sections.push(format!("{}\n\n{}", title(kind.title()), table.render()));
    }
    Ok(sections.join("\n"))
}

/// The heading closest to `column`, if it is within three edits.
fn closest_heading(column: &str, headings: &[String]) -> Option<String> {
    let column = column.to_lowercase();
    headings
        .iter()
        .map(|heading| (strsim::levenshtein(&column, &heading.to_lowercase()), heading))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, heading)| heading.clone())
}
