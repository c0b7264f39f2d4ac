//! Resolve named data fetchers against named data sources.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::path;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Named JSON data sources.
pub type Sources = HashMap<String, Value>;

/// Errors from the query engine.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum QueryError {
    #[error("source '{source_name}' not found")]
    #[diagnostic(code(cem::query::source_not_found))]
    SourceNotFound { source_name: String },

    #[error("path '{path}' not found in source '{source_name}'")]
    #[diagnostic(code(cem::query::path_not_found))]
    PathNotFound { source_name: String, path: String },

    #[error("required fetcher '{name}' failed: {cause}")]
    #[diagnostic(code(cem::query::required_fetcher))]
    RequiredFetcherFailed {
        name: String,
        #[source]
        cause: Box<QueryError>,
    },
}

impl QueryError {
    /// Convert to a user-facing diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            QueryError::SourceNotFound { .. } | QueryError::PathNotFound { .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::QUERY_PATH)
            }
            QueryError::RequiredFetcherFailed { name, cause } => cause
                .to_diagnostic()
                .with_context(format!("required by fetcher '{}'", name)),
        }
    }
}

/// A named lookup of `path` in `source`, with an optional filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFetcher {
    pub name: String,
    pub source: String,
    pub path: String,
    /// `first`, `count`, or `exists`. Other names pass the value through.
    pub filter: Option<String>,
    pub required: bool,
}

/// Resolve `path` inside the source named `source`.
///
/// An empty path returns the whole source. A path that does not match is
/// retried once with `[key]` segments rewritten as `.key`, unless it
/// contains filter syntax (`?` or `@`).
pub fn resolve_path(source: &str, path: &str, sources: &Sources) -> Result<Value, QueryError> {
    let data = sources.get(source).ok_or_else(|| QueryError::SourceNotFound {
        source_name: source.to_string(),
    })?;

    if path.is_empty() {
        return Ok(data.clone());
    }

    if let Some(found) = path::get(data, path) {
        return Ok(found);
    }

    let mut final_path = path.to_string();
    if path.contains('[') && !path.contains('?') && !path.contains('@') {
        final_path = path::convert_map_access(path);
        tracing::trace!(path, adjusted = %final_path, "retrying with map access");
        if let Some(found) = path::get(data, &final_path) {
            return Ok(found);
        }
    }

    Err(QueryError::PathNotFound {
        source_name: source.to_string(),
        path: final_path,
    })
}

/// Apply a named filter to a resolved value.
pub fn apply_filter(value: Value, filter: &str) -> Value {
    match filter {
        "first" => match value {
            Value::Array(items) if !items.is_empty() => {
                items.into_iter().next().unwrap_or(Value::Null)
            }
            other => other,
        },
        "count" => match value {
            Value::Array(items) => Value::from(items.len()),
            _ => Value::from(1),
        },
        "exists" => Value::Bool(!value.is_null()),
        _ => value,
    }
}

/// Resolve a path and apply `filter`.
///
/// With the `exists` filter a missing path is `false` rather than an error.
pub fn resolve_with_filter(
    source: &str,
    path: &str,
    filter: Option<&str>,
    sources: &Sources,
) -> Result<Value, QueryError> {
    match (resolve_path(source, path, sources), filter) {
        (Ok(value), Some(filter)) => Ok(apply_filter(value, filter)),
        (Ok(value), None) => Ok(value),
        (Err(QueryError::PathNotFound { .. }), Some("exists")) => Ok(Value::Bool(false)),
        (Err(err), _) => Err(err),
    }
}

/// Run one fetcher.
///
/// A failing optional fetcher yields `Ok(None)`; a failing required one is
/// an error.
pub fn execute_data_fetcher(
    fetcher: &DataFetcher,
    sources: &Sources,
) -> Result<Option<Value>, QueryError> {
    match resolve_with_filter(
        &fetcher.source,
        &fetcher.path,
        fetcher.filter.as_deref(),
        sources,
    ) {
        Ok(value) => Ok(Some(value)),
        Err(err) if fetcher.required => Err(QueryError::RequiredFetcherFailed {
            name: fetcher.name.clone(),
            cause: Box::new(err),
        }),
        Err(err) => {
            tracing::debug!(fetcher = %fetcher.name, error = %err, "optional fetcher skipped");
            Ok(None)
        }
    }
}

/// Run fetchers in order, collecting results by name.
///
/// Each result is also added to `sources` under the fetcher's name, so
/// later fetchers can read from earlier ones.
pub fn execute_all(
    fetchers: &[DataFetcher],
    sources: &mut Sources,
) -> Result<HashMap<String, Value>, QueryError> {
    let mut results = HashMap::new();
    for fetcher in fetchers {
        if let Some(value) = execute_data_fetcher(fetcher, sources)? {
            sources.insert(fetcher.name.clone(), value.clone());
            results.insert(fetcher.name.clone(), value);
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sources() -> Sources {
        let mut sources = Sources::new();
        sources.insert(
            "elements".to_string(),
            json!({
                "my-button": {"tagName": "my-button", "slots": ["", "icon"]},
                "my-card": {"tagName": "my-card", "slots": []}
            }),
        );
        sources.insert(
            "registry".to_string(),
            json!({"elements": {"my-card": {"tagName": "my-card"}}}),
        );
        sources.insert("version".to_string(), json!("2.1.0"));
        sources
    }

    fn fetcher(name: &str, path: &str, filter: Option<&str>, required: bool) -> DataFetcher {
        DataFetcher {
            name: name.to_string(),
            source: "elements".to_string(),
            path: path.to_string(),
            filter: filter.map(str::to_string),
            required,
        }
    }

    #[test]
    fn test_resolve_path() {
        let sources = sources();
        assert_eq!(
            resolve_path("elements", "my-button.tagName", &sources).unwrap(),
            json!("my-button")
        );
        assert_eq!(resolve_path("version", "", &sources).unwrap(), json!("2.1.0"));
    }

    #[test]
    fn test_resolve_map_access() {
        let sources = sources();
        assert_eq!(
            resolve_path("registry", "elements[my-card].tagName", &sources).unwrap(),
            json!("my-card")
        );
    }

    #[test]
    fn test_resolve_errors() {
        let sources = sources();
        let err = resolve_path("nope", "x", &sources).unwrap_err();
        assert_eq!(err.to_string(), "source 'nope' not found");

        let err = resolve_path("registry", "elements[x-missing].tagName", &sources).unwrap_err();
        assert_eq!(
            err.to_string(),
            "path 'elements.x-missing.tagName' not found in source 'registry'"
        );

        let err = resolve_path("elements", "a[?(@.b)]", &sources).unwrap_err();
        assert!(matches!(err, QueryError::PathNotFound { ref path, .. } if path == "a[?(@.b)]"));
    }

    #[test]
    fn test_error_diagnostics() {
        let sources = sources();
        let err = resolve_path("elements", "x-none", &sources).unwrap_err();
        let output = err.to_diagnostic().format(false);
        assert!(output.starts_with("error: path 'x-none' not found in source 'elements'"));
        assert!(output.contains("help: Run `cem query elements`"));

        let err = QueryError::RequiredFetcherFailed {
            name: "tag".to_string(),
            cause: Box::new(err),
        };
        let output = err.to_diagnostic().format(false);
        assert!(output.starts_with("error: path 'x-none'"));
        assert!(output.contains("  → required by fetcher 'tag'"));
    }

    #[test]
    fn test_apply_filter() {
        assert_eq!(apply_filter(json!([1, 2]), "first"), json!(1));
        assert_eq!(apply_filter(json!([]), "first"), json!([]));
        assert_eq!(apply_filter(json!("x"), "first"), json!("x"));
        assert_eq!(apply_filter(json!([1, 2, 3]), "count"), json!(3));
        assert_eq!(apply_filter(json!({"a": 1}), "count"), json!(1));
        assert_eq!(apply_filter(json!(null), "exists"), json!(false));
        assert_eq!(apply_filter(json!(0), "exists"), json!(true));
        assert_eq!(apply_filter(json!(5), "reverse"), json!(5));
    }

    #[test]
    fn test_exists_on_missing_path() {
        let sources = sources();
        let value = resolve_with_filter("elements", "x-none", Some("exists"), &sources).unwrap();
        assert_eq!(value, json!(false));
        assert!(resolve_with_filter("missing", "", Some("exists"), &sources).is_err());
    }

    #[test]
    fn test_execute_fetchers() {
        let mut sources = sources();
        let fetchers = vec![
            fetcher("slots", "my-button.slots", None, true),
            fetcher("slotCount", "my-button.slots", Some("count"), true),
            fetcher("optional", "x-none.slots", None, false),
            DataFetcher {
                name: "firstSlot".to_string(),
                source: "slots".to_string(),
                path: String::new(),
                filter: Some("first".to_string()),
                required: true,
            },
        ];

        let results = execute_all(&fetchers, &mut sources).unwrap();
        assert_eq!(results["slots"], json!(["", "icon"]));
        assert_eq!(results["slotCount"], json!(2));
        assert_eq!(results["firstSlot"], json!(""));
        assert!(!results.contains_key("optional"));
        assert!(sources.contains_key("slotCount"));
    }

    #[test]
    fn test_required_fetcher_fails() {
        let mut sources = sources();
        let err = execute_all(&[fetcher("tag", "x-none.tagName", None, true)], &mut sources)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "required fetcher 'tag' failed: path 'x-none.tagName' not found in source 'elements'"
        );
    }
}
