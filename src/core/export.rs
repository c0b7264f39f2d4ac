//! Module exports: JavaScript exports and custom element definitions.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::decode::{decode_leaf, serialize_tagged, Decode, Discriminator};
use super::deprecated::{impl_deprecatable, Deprecatable, Deprecated};
use super::error::{ManifestError, ManifestResult};
use super::reference::Reference;

/// A JavaScript export (`export { X }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaScriptExport {
    /// The exported name, or `default`.
    pub name: String,

    pub declaration: Reference,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

/// A `customElements.define()` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomElementExport {
    /// The tag name being defined.
    pub name: String,

    pub declaration: Reference,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

/// The closed set of export kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    JavaScript,
    CustomElementDefinition,
}

type ExportDecoder = fn(Value) -> ManifestResult<Export>;

fn decode_javascript(value: Value) -> ManifestResult<Export> {
    decode_leaf("javascript export", value).map(Export::JavaScript)
}

fn decode_definition(value: Value) -> ManifestResult<Export> {
    decode_leaf("custom element export", value).map(Export::CustomElement)
}

/// Wire tag, variant, and decoder for every export kind.
const EXPORT_KINDS: &[(&str, ExportKind, ExportDecoder)] = &[
    ("js", ExportKind::JavaScript, decode_javascript),
    (
        "custom-element-definition",
        ExportKind::CustomElementDefinition,
        decode_definition,
    ),
];

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::JavaScript => "js",
            ExportKind::CustomElementDefinition => "custom-element-definition",
        }
    }

    pub fn parse(tag: &str) -> Option<ExportKind> {
        EXPORT_KINDS
            .iter()
            .find(|(wire, _, _)| *wire == tag)
            .map(|(_, kind, _)| *kind)
    }
}

/// An export of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Export {
    JavaScript(JavaScriptExport),
    CustomElement(CustomElementExport),
}

impl Export {
    pub fn kind(&self) -> ExportKind {
        match self {
            Export::JavaScript(_) => ExportKind::JavaScript,
            Export::CustomElement(_) => ExportKind::CustomElementDefinition,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Export::JavaScript(export) => &export.name,
            Export::CustomElement(export) => &export.name,
        }
    }

    pub fn declaration(&self) -> &Reference {
        match self {
            Export::JavaScript(export) => &export.declaration,
            Export::CustomElement(export) => &export.declaration,
        }
    }
}

impl_deprecatable!(JavaScriptExport, CustomElementExport);

impl Deprecatable for Export {
    fn deprecation(&self) -> &Deprecated {
        match self {
            Export::JavaScript(export) => export.deprecation(),
            Export::CustomElement(export) => export.deprecation(),
        }
    }

    fn deprecation_mut(&mut self) -> &mut Deprecated {
        match self {
            Export::JavaScript(export) => export.deprecation_mut(),
            Export::CustomElement(export) => export.deprecation_mut(),
        }
    }
}

impl Decode for Export {
    fn decode(value: Value) -> ManifestResult<Self> {
        let tag = Discriminator::peek("export", &value)?;
        let kind = tag.kind.as_deref().unwrap_or_default();

        let decoder = EXPORT_KINDS
            .iter()
            .find(|(wire, _, _)| *wire == kind)
            .map(|(_, _, decoder)| *decoder)
            .ok_or_else(|| ManifestError::UnknownDiscriminator {
                target: "export",
                kind: tag.kind_or_missing(),
                expected: "js, custom-element-definition",
            })?;

        decoder(value)
    }
}

impl Serialize for Export {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind().as_str();
        match self {
            Export::JavaScript(export) => serialize_tagged(kind, export, serializer),
            Export::CustomElement(export) => serialize_tagged(kind, export, serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_js_export() {
        let export = Export::decode(json!({
            "kind": "js",
            "name": "MyElement",
            "declaration": {"name": "MyElement", "module": "src/my-element.ts"}
        }))
        .unwrap();

        assert_eq!(export.kind(), ExportKind::JavaScript);
        assert_eq!(export.name(), "MyElement");
        assert_eq!(export.declaration().module.as_deref(), Some("src/my-element.js"));
        assert!(!export.is_deprecated());
    }

    #[test]
    fn test_decode_definition_with_deprecation() {
        let export = Export::decode(json!({
            "kind": "custom-element-definition",
            "name": "my-element",
            "declaration": {"name": "MyElement"},
            "deprecated": "renamed"
        }))
        .unwrap();

        assert_eq!(export.kind(), ExportKind::CustomElementDefinition);
        assert_eq!(export.deprecation(), &Deprecated::from("renamed"));
    }

    #[test]
    fn test_unknown_export_kind() {
        let err = Export::decode(json!({"kind": "weird", "name": "x", "declaration": {"name": "x"}}))
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown export kind `weird`");
    }

    #[test]
    fn test_encode_restores_kind() {
        let input = json!({
            "kind": "js",
            "name": "default",
            "declaration": {"name": "Button", "module": "button.js"},
            "deprecated": false
        });
        let export = Export::decode(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&export).unwrap(), input);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(ExportKind::parse("js"), Some(ExportKind::JavaScript));
        assert_eq!(
            ExportKind::parse("custom-element-definition"),
            Some(ExportKind::CustomElementDefinition)
        );
        assert_eq!(ExportKind::parse("css"), None);
    }
}
