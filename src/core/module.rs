//! A JavaScript module and its exports index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::declaration::Declaration;
use super::decode::{Decode, RawObject};
use super::deprecated::{impl_deprecatable, Deprecated};
use super::error::ManifestResult;
use super::export::{CustomElementExport, Export, JavaScriptExport};
use super::reference::{deserialize_module_path, normalize_module_path};

const JAVASCRIPT_MODULE: &str = "javascript-module";

fn default_module_kind() -> String {
    JAVASCRIPT_MODULE.to_string()
}

/// A module in the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default = "default_module_kind")]
    pub kind: String,

    /// Path to the module, relative to the package root.
    #[serde(deserialize_with = "deserialize_module_path")]
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub declarations: Vec<Declaration>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub exports: Vec<Export>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl Module {
    pub fn new(path: &str) -> Self {
        Module {
            kind: default_module_kind(),
            path: normalize_module_path(path),
            summary: None,
            description: None,
            declarations: Vec::new(),
            exports: Vec::new(),
            deprecated: Deprecated::None,
        }
    }

    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|decl| decl.name() == name)
    }

    /// Tag names defined by this module's custom element exports.
    pub fn tag_names(&self) -> Vec<&str> {
        self.exports
            .iter()
            .filter_map(|export| match export {
                Export::CustomElement(export) => Some(export.name.as_str()),
                Export::JavaScript(_) => None,
            })
            .collect()
    }

    /// Build the declaration-name to export index for this module.
    pub fn export_index(&self) -> ExportIndex<'_> {
        ExportIndex::build(self)
    }
}

/// Exports of a module, keyed by the name of the declaration they export.
///
/// Only exports whose reference has no module, or names this module, are
/// indexed. When several exports point at one declaration the first wins.
#[derive(Debug, Default)]
pub struct ExportIndex<'a> {
    javascript: HashMap<&'a str, &'a JavaScriptExport>,
    definitions: HashMap<&'a str, &'a CustomElementExport>,
}

impl<'a> ExportIndex<'a> {
    fn build(module: &'a Module) -> Self {
        let mut index = ExportIndex::default();
        for export in &module.exports {
            let reference = export.declaration();
            if !reference.points_at(&reference.name, &module.path) {
                continue;
            }
            match export {
                Export::JavaScript(js) => {
                    index.javascript.entry(reference.name.as_str()).or_insert(js);
                }
                Export::CustomElement(definition) => {
                    index
                        .definitions
                        .entry(reference.name.as_str())
                        .or_insert(definition);
                }
            }
        }
        index
    }

    pub fn javascript(&self, declaration: &str) -> Option<&'a JavaScriptExport> {
        self.javascript.get(declaration).copied()
    }

    pub fn definition(&self, declaration: &str) -> Option<&'a CustomElementExport> {
        self.definitions.get(declaration).copied()
    }
}

impl_deprecatable!(Module);

impl Decode for Module {
    fn decode(value: Value) -> ManifestResult<Self> {
        let mut raw = RawObject::new("module", value)?;
        let deprecated = raw.deprecation()?;
        let declarations = raw.list("declarations")?;
        let exports = raw.list("exports")?;

        let mut module: Module = raw.finish()?;
        module.deprecated = deprecated;
        module.declarations = declarations;
        module.exports = exports;
        Ok(module)
    }
}
