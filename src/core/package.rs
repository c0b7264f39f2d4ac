//! The root of a Custom Elements Manifest.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::declaration::{CustomElementDeclaration, Declaration};
use super::decode::{Decode, RawObject};
use super::deprecated::{impl_deprecatable, Deprecated};
use super::error::{ManifestError, ManifestResult};
use super::export::CustomElementExport;
use super::module::Module;

/// A package: the top-level manifest document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub schema_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<Module>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

/// A custom element declaration together with where it lives.
#[derive(Debug, Clone, Copy)]
pub struct CustomElementContext<'a> {
    pub declaration: &'a CustomElementDeclaration,
    pub module: &'a Module,
    pub export: Option<&'a CustomElementExport>,
}

impl<'a> CustomElementContext<'a> {
    /// The tag name, from the declaration or its definition export.
    pub fn tag_name(&self) -> Option<&'a str> {
        self.declaration
            .element
            .tag_name()
            .or_else(|| self.export.map(|export| export.name.as_str()))
    }
}

impl Package {
    pub fn new(schema_version: impl Into<String>) -> Self {
        Package {
            schema_version: schema_version.into(),
            ..Default::default()
        }
    }

    /// Decode a package from raw bytes.
    ///
    /// The bytes are parsed as JSON first; a syntax error is reported as
    /// [`ManifestError::Syntax`] before any structure is examined.
    pub fn from_slice(bytes: &[u8]) -> ManifestResult<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(ManifestError::Syntax)?;
        let package = Package::decode(value)?;
        tracing::debug!(
            schema_version = %package.schema_version,
            modules = package.modules.len(),
            "decoded manifest"
        );
        Ok(package)
    }

    /// Decode a package from a JSON string.
    pub fn from_json(text: &str) -> ManifestResult<Self> {
        Package::from_slice(text.as_bytes())
    }

    /// Encode as a JSON value.
    pub fn to_value(&self) -> ManifestResult<Value> {
        serde_json::to_value(self).map_err(ManifestError::Encode)
    }

    /// Encode as pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> ManifestResult<String> {
        serde_json::to_string_pretty(self).map_err(ManifestError::Encode)
    }

    /// Every custom element declaration, in module order.
    pub fn custom_elements(&self) -> impl Iterator<Item = CustomElementContext<'_>> {
        self.modules.iter().flat_map(|module| {
            let index = module.export_index();
            module
                .declarations
                .iter()
                .filter_map(move |decl| match decl {
                    Declaration::CustomElement(declaration) => Some(CustomElementContext {
                        declaration,
                        module,
                        export: index.definition(declaration.name()),
                    }),
                    _ => None,
                })
                .collect::<Vec<_>>()
        })
    }

    /// All tag names defined in the package.
    pub fn tag_names(&self) -> Vec<&str> {
        self.custom_elements()
            .filter_map(|element| element.tag_name())
            .collect()
    }

    /// Find the custom element registered as `tag`.
    pub fn find_custom_element(&self, tag: &str) -> ManifestResult<CustomElementContext<'_>> {
        self.custom_elements()
            .find(|element| element.tag_name() == Some(tag))
            .ok_or_else(|| ManifestError::TagNotFound(tag.to_string()))
    }
}

impl_deprecatable!(Package);

impl Decode for Package {
    fn decode(value: Value) -> ManifestResult<Self> {
        let mut raw = RawObject::new("package", value)?;
        let deprecated = raw.deprecation()?;
        let modules = raw.list("modules")?;

        let mut package: Package = raw.finish()?;
        package.deprecated = deprecated;
        package.modules = modules;
        Ok(package)
    }
}

impl std::str::FromStr for Package {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Package::from_json(s)
    }
}
