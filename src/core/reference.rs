//! Cross-entity references and module path normalization.

use serde::{Deserialize, Deserializer, Serialize};

/// A reference to an exported JavaScript object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_module_path"
    )]
    pub module: Option<String>,
}

impl Reference {
    /// Create a reference to `name`, optionally inside `module`.
    pub fn new(name: impl Into<String>, module: Option<&str>) -> Self {
        Reference {
            name: name.into(),
            package: None,
            module: module.map(normalize_module_path),
        }
    }

    /// True when this reference points at `name` in `module_path`.
    ///
    /// A reference without a module matches any module.
    pub fn points_at(&self, name: &str, module_path: &str) -> bool {
        self.name == name
            && self
                .module
                .as_deref()
                .map_or(true, |module| module.is_empty() || module == module_path)
    }
}

/// A link to the source code of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReference {
    pub href: String,
}

const SOURCE_EXTENSIONS: &[(&str, &str)] = &[
    (".mts", ".mjs"),
    (".cts", ".cjs"),
    (".tsx", ".js"),
    (".ts", ".js"),
];

const DECLARATION_SUFFIXES: &[&str] = &[".d.ts", ".d.mts", ".d.cts"];

/// Rewrite a source-language extension into its distributable counterpart.
///
/// `src/button.ts` becomes `src/button.js`. Declaration files and paths
/// without a source extension are returned unchanged.
pub fn normalize_module_path(path: &str) -> String {
    if DECLARATION_SUFFIXES.iter().any(|suffix| path.ends_with(suffix)) {
        return path.to_string();
    }

    for (source, emitted) in SOURCE_EXTENSIONS {
        if let Some(stem) = path.strip_suffix(source) {
            return format!("{}{}", stem, emitted);
        }
    }

    path.to_string()
}

pub(crate) fn deserialize_module_path<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let path = String::deserialize(deserializer)?;
    Ok(normalize_module_path(&path))
}

fn deserialize_optional_module_path<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let path = Option::<String>::deserialize(deserializer)?;
    Ok(path.as_deref().map(normalize_module_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_module_path() {
        assert_eq!(normalize_module_path("src/button.ts"), "src/button.js");
        assert_eq!(normalize_module_path("src/button.mts"), "src/button.mjs");
        assert_eq!(normalize_module_path("src/button.cts"), "src/button.cjs");
        assert_eq!(normalize_module_path("src/view.tsx"), "src/view.js");
        assert_eq!(normalize_module_path("src/button.js"), "src/button.js");
        assert_eq!(normalize_module_path("types/button.d.ts"), "types/button.d.ts");
        assert_eq!(normalize_module_path(""), "");
    }

    #[test]
    fn test_non_source_paths_pass_through() {
        for path in [
            "src/styles/button.css",
            "src/data.json",
            "types/button.d.mts",
            "types/button.d.cts",
            "src/tsconfig",
            "src/button.ts.bak",
        ] {
            assert_eq!(normalize_module_path(path), path);
        }
    }

    #[test]
    fn test_reference_decode_keeps_declaration_files() {
        let reference: Reference =
            serde_json::from_value(json!({"name": "Button", "module": "types/button.d.ts"}))
                .unwrap();
        assert_eq!(reference.module.as_deref(), Some("types/button.d.ts"));

        let styles: Reference =
            serde_json::from_value(json!({"name": "styles", "module": "src/button.css"})).unwrap();
        assert_eq!(styles.module.as_deref(), Some("src/button.css"));
    }

    #[test]
    fn test_reference_decode_normalizes_module() {
        let reference: Reference =
            serde_json::from_value(json!({"name": "Button", "module": "src/button.ts"})).unwrap();
        assert_eq!(reference.module.as_deref(), Some("src/button.js"));

        let bare: Reference = serde_json::from_value(json!({"name": "Button"})).unwrap();
        assert_eq!(bare.module, None);
    }

    #[test]
    fn test_points_at() {
        let reference = Reference::new("Button", Some("src/button.ts"));
        assert!(reference.points_at("Button", "src/button.js"));
        assert!(!reference.points_at("Button", "src/other.js"));
        assert!(!reference.points_at("Other", "src/button.js"));
        assert!(Reference::new("Button", None).points_at("Button", "anything.js"));
    }
}
