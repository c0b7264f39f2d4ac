//! Module-level declarations: classes, mixins, custom elements, functions,
//! and variables.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::class_member::{ClassMember, CustomElementField};
use super::decode::{decode_leaf_entities, serialize_tagged, Decode, Discriminator, RawObject};
use super::deprecated::{impl_deprecatable, Deprecatable, Deprecated};
use super::error::{ManifestError, ManifestResult};
use super::members::{Attribute, CssCustomProperty, CssCustomState, CssPart, Demo, Event, Slot};
use super::reference::{Reference, SourceReference};
use super::types::{is_false, null_as_false, FullyQualified, FunctionLike, PropertyLike};

/// Common shape of classes and mixins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLike {
    #[serde(flatten)]
    pub qualified: FullyQualified,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<Reference>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ClassMember>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,

    #[serde(skip)]
    pub start_byte: u32,
}

impl ClassLike {
    pub fn new(name: impl Into<String>) -> Self {
        ClassLike {
            qualified: FullyQualified::new(name),
            ..Default::default()
        }
    }

    /// Fields bound to attributes, keyed by attribute name.
    pub fn attribute_fields(&self) -> impl Iterator<Item = (&str, &CustomElementField)> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::CustomElementField(field) => {
                field.attribute.as_deref().map(|attribute| (attribute, field))
            }
            _ => None,
        })
    }
}

/// The custom element half of a custom element class or mixin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Slot>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub css_parts: Vec<CssPart>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub css_properties: Vec<CssCustomProperty>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub css_states: Vec<CssCustomState>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub demos: Vec<Demo>,

    /// The `customElement: true` marker, kept as read.
    #[serde(
        default,
        deserialize_with = "null_as_false",
        skip_serializing_if = "is_false"
    )]
    pub custom_element: bool,
}

impl CustomElement {
    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref().filter(|tag| !tag.is_empty())
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.qualified.name == name)
    }
}

/// The hand-decoded collections of a custom element.
struct ElementParts {
    attributes: Vec<Attribute>,
    events: Vec<Event>,
    slots: Vec<Slot>,
    css_parts: Vec<CssPart>,
    css_properties: Vec<CssCustomProperty>,
    css_states: Vec<CssCustomState>,
}

impl ElementParts {
    fn take(raw: &mut RawObject) -> ManifestResult<Self> {
        Ok(ElementParts {
            attributes: raw.list("attributes")?,
            events: raw.list("events")?,
            slots: raw.list("slots")?,
            css_parts: raw.list("cssParts")?,
            css_properties: raw.list("cssProperties")?,
            css_states: raw.list("cssStates")?,
        })
    }

    fn apply(self, element: &mut CustomElement) {
        element.attributes = self.attributes;
        element.events = self.events;
        element.slots = self.slots;
        element.css_parts = self.css_parts;
        element.css_properties = self.css_properties;
        element.css_states = self.css_states;
    }
}

/// A plain class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    #[serde(flatten)]
    pub class: ClassLike,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

/// A class that defines a custom element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomElementDeclaration {
    #[serde(flatten)]
    pub class: ClassDeclaration,

    #[serde(flatten)]
    pub element: CustomElement,
}

impl CustomElementDeclaration {
    pub fn name(&self) -> &str {
        &self.class.class.qualified.name
    }
}

/// A mixin: a function that returns a class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixinDeclaration {
    #[serde(flatten)]
    pub class: ClassLike,

    #[serde(flatten)]
    pub function: FunctionLike,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

/// A mixin that adds custom element API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomElementMixinDeclaration {
    #[serde(flatten)]
    pub mixin: MixinDeclaration,

    #[serde(flatten)]
    pub element: CustomElement,
}

/// A function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    #[serde(flatten)]
    pub qualified: FullyQualified,

    #[serde(flatten)]
    pub function: FunctionLike,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,

    #[serde(skip)]
    pub start_byte: u32,
}

/// A module-level variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    #[serde(flatten)]
    pub property: PropertyLike,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,

    #[serde(skip)]
    pub start_byte: u32,
}

/// Every declaration kind, as resolved from `kind` and the custom element
/// markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Class,
    CustomElement,
    Mixin,
    CustomElementMixin,
    Function,
    Variable,
}

impl DeclarationKind {
    const EXPECTED: &'static str = "class, mixin, function, variable";

    fn resolve(tag: &Discriminator) -> Option<DeclarationKind> {
        let is_element = tag.custom_element() || tag.tag_name.is_some();
        match (tag.kind.as_deref()?, is_element) {
            ("class", false) => Some(DeclarationKind::Class),
            ("class", true) => Some(DeclarationKind::CustomElement),
            ("mixin", false) => Some(DeclarationKind::Mixin),
            ("mixin", true) => Some(DeclarationKind::CustomElementMixin),
            ("function", _) => Some(DeclarationKind::Function),
            ("variable", _) => Some(DeclarationKind::Variable),
            _ => None,
        }
    }

    /// The wire `kind` of this declaration.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class | DeclarationKind::CustomElement => "class",
            DeclarationKind::Mixin | DeclarationKind::CustomElementMixin => "mixin",
            DeclarationKind::Function => "function",
            DeclarationKind::Variable => "variable",
        }
    }

    fn decode(self, value: Value) -> ManifestResult<Declaration> {
        match self {
            DeclarationKind::Class => ClassDeclaration::decode(value).map(Declaration::Class),
            DeclarationKind::CustomElement => {
                CustomElementDeclaration::decode(value).map(Declaration::CustomElement)
            }
            DeclarationKind::Mixin => MixinDeclaration::decode(value).map(Declaration::Mixin),
            DeclarationKind::CustomElementMixin => {
                CustomElementMixinDeclaration::decode(value).map(Declaration::CustomElementMixin)
            }
            DeclarationKind::Function => {
                FunctionDeclaration::decode(value).map(Declaration::Function)
            }
            DeclarationKind::Variable => {
                VariableDeclaration::decode(value).map(Declaration::Variable)
            }
        }
    }
}

/// A declaration inside a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Class(ClassDeclaration),
    CustomElement(CustomElementDeclaration),
    Mixin(MixinDeclaration),
    CustomElementMixin(CustomElementMixinDeclaration),
    Function(FunctionDeclaration),
    Variable(VariableDeclaration),
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Class(_) => DeclarationKind::Class,
            Declaration::CustomElement(_) => DeclarationKind::CustomElement,
            Declaration::Mixin(_) => DeclarationKind::Mixin,
            Declaration::CustomElementMixin(_) => DeclarationKind::CustomElementMixin,
            Declaration::Function(_) => DeclarationKind::Function,
            Declaration::Variable(_) => DeclarationKind::Variable,
        }
    }

    pub fn qualified(&self) -> &FullyQualified {
        match self {
            Declaration::Class(decl) => &decl.class.qualified,
            Declaration::CustomElement(decl) => &decl.class.class.qualified,
            Declaration::Mixin(decl) => &decl.class.qualified,
            Declaration::CustomElementMixin(decl) => &decl.mixin.class.qualified,
            Declaration::Function(decl) => &decl.qualified,
            Declaration::Variable(decl) => &decl.property.qualified,
        }
    }

    pub fn name(&self) -> &str {
        &self.qualified().name
    }

    /// The class shape of classes, mixins, and custom elements.
    pub fn class_like(&self) -> Option<&ClassLike> {
        match self {
            Declaration::Class(decl) => Some(&decl.class),
            Declaration::CustomElement(decl) => Some(&decl.class.class),
            Declaration::Mixin(decl) => Some(&decl.class),
            Declaration::CustomElementMixin(decl) => Some(&decl.mixin.class),
            Declaration::Function(_) | Declaration::Variable(_) => None,
        }
    }

    /// The custom element half of custom element classes and mixins.
    pub fn custom_element(&self) -> Option<&CustomElement> {
        match self {
            Declaration::CustomElement(decl) => Some(&decl.element),
            Declaration::CustomElementMixin(decl) => Some(&decl.element),
            _ => None,
        }
    }

    pub fn start_byte(&self) -> u32 {
        match self {
            Declaration::Function(decl) => decl.start_byte,
            Declaration::Variable(decl) => decl.start_byte,
            other => other.class_like().map_or(0, |class| class.start_byte),
        }
    }
}

impl_deprecatable!(ClassDeclaration, MixinDeclaration, FunctionDeclaration);

impl Deprecatable for CustomElementDeclaration {
    fn deprecation(&self) -> &Deprecated {
        &self.class.deprecated
    }

    fn deprecation_mut(&mut self) -> &mut Deprecated {
        &mut self.class.deprecated
    }
}

impl Deprecatable for CustomElementMixinDeclaration {
    fn deprecation(&self) -> &Deprecated {
        &self.mixin.deprecated
    }

    fn deprecation_mut(&mut self) -> &mut Deprecated {
        &mut self.mixin.deprecated
    }
}

impl Deprecatable for VariableDeclaration {
    fn deprecation(&self) -> &Deprecated {
        &self.property.deprecated
    }

    fn deprecation_mut(&mut self) -> &mut Deprecated {
        &mut self.property.deprecated
    }
}

impl Deprecatable for Declaration {
    fn deprecation(&self) -> &Deprecated {
        match self {
            Declaration::Class(decl) => decl.deprecation(),
            Declaration::CustomElement(decl) => decl.deprecation(),
            Declaration::Mixin(decl) => decl.deprecation(),
            Declaration::CustomElementMixin(decl) => decl.deprecation(),
            Declaration::Function(decl) => decl.deprecation(),
            Declaration::Variable(decl) => decl.deprecation(),
        }
    }

    fn deprecation_mut(&mut self) -> &mut Deprecated {
        match self {
            Declaration::Class(decl) => decl.deprecation_mut(),
            Declaration::CustomElement(decl) => decl.deprecation_mut(),
            Declaration::Mixin(decl) => decl.deprecation_mut(),
            Declaration::CustomElementMixin(decl) => decl.deprecation_mut(),
            Declaration::Function(decl) => decl.deprecation_mut(),
            Declaration::Variable(decl) => decl.deprecation_mut(),
        }
    }
}

decode_leaf_entities!(VariableDeclaration => "variable");

impl Decode for ClassDeclaration {
    fn decode(value: Value) -> ManifestResult<Self> {
        let mut raw = RawObject::new("class", value)?;
        let deprecated = raw.deprecation()?;
        let members = raw.known_list("members")?;

        let mut decl: ClassDeclaration = raw.finish()?;
        decl.deprecated = deprecated;
        decl.class.members = members;
        Ok(decl)
    }
}

impl Decode for CustomElementDeclaration {
    fn decode(value: Value) -> ManifestResult<Self> {
        let mut raw = RawObject::new("custom element", value)?;
        let deprecated = raw.deprecation()?;
        let members = raw.known_list("members")?;
        let parts = ElementParts::take(&mut raw)?;

        let mut decl: CustomElementDeclaration = raw.finish()?;
        decl.class.deprecated = deprecated;
        decl.class.class.members = members;
        parts.apply(&mut decl.element);
        Ok(decl)
    }
}

impl Decode for MixinDeclaration {
    fn decode(value: Value) -> ManifestResult<Self> {
        let mut raw = RawObject::new("mixin", value)?;
        let deprecated = raw.deprecation()?;
        let members = raw.known_list("members")?;
        let parameters = raw.list("parameters")?;

        let mut decl: MixinDeclaration = raw.finish()?;
        decl.deprecated = deprecated;
        decl.class.members = members;
        decl.function.parameters = parameters;
        Ok(decl)
    }
}

impl Decode for CustomElementMixinDeclaration {
    fn decode(value: Value) -> ManifestResult<Self> {
        let mut raw = RawObject::new("custom element mixin", value)?;
        let deprecated = raw.deprecation()?;
        let members = raw.known_list("members")?;
        let parameters = raw.list("parameters")?;
        let parts = ElementParts::take(&mut raw)?;

        let mut decl: CustomElementMixinDeclaration = raw.finish()?;
        decl.mixin.deprecated = deprecated;
        decl.mixin.class.members = members;
        decl.mixin.function.parameters = parameters;
        parts.apply(&mut decl.element);
        Ok(decl)
    }
}

impl Decode for FunctionDeclaration {
    fn decode(value: Value) -> ManifestResult<Self> {
        let mut raw = RawObject::new("function", value)?;
        let deprecated = raw.deprecation()?;
        let parameters = raw.list("parameters")?;

        let mut decl: FunctionDeclaration = raw.finish()?;
        decl.deprecated = deprecated;
        decl.function.parameters = parameters;
        Ok(decl)
    }
}

impl Decode for Declaration {
    fn decode(value: Value) -> ManifestResult<Self> {
        let tag = Discriminator::peek("declaration", &value)?;
        let kind = DeclarationKind::resolve(&tag).ok_or_else(|| {
            ManifestError::UnknownDiscriminator {
                target: "declaration",
                kind: tag.kind_or_missing(),
                expected: DeclarationKind::EXPECTED,
            }
        })?;
        tracing::trace!(?kind, "decoding declaration");
        kind.decode(value)
    }
}

impl Serialize for Declaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind().as_str();
        match self {
            Declaration::Class(decl) => serialize_tagged(kind, decl, serializer),
            Declaration::CustomElement(decl) => serialize_tagged(kind, decl, serializer),
            Declaration::Mixin(decl) => serialize_tagged(kind, decl, serializer),
            Declaration::CustomElementMixin(decl) => serialize_tagged(kind, decl, serializer),
            Declaration::Function(decl) => serialize_tagged(kind, decl, serializer),
            Declaration::Variable(decl) => serialize_tagged(kind, decl, serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_class_vs_custom_element() {
        let plain = Declaration::decode(json!({"kind": "class", "name": "Base"})).unwrap();
        assert_eq!(plain.kind(), DeclarationKind::Class);

        let flagged =
            Declaration::decode(json!({"kind": "class", "name": "A", "customElement": true}))
                .unwrap();
        assert_eq!(flagged.kind(), DeclarationKind::CustomElement);

        let tagged =
            Declaration::decode(json!({"kind": "class", "name": "B", "tagName": "x-b"})).unwrap();
        assert_eq!(tagged.kind(), DeclarationKind::CustomElement);
        assert_eq!(tagged.custom_element().unwrap().tag_name(), Some("x-b"));
    }

    #[test]
    fn test_custom_element_collections() {
        let decl = Declaration::decode(json!({
            "kind": "class",
            "name": "MyButton",
            "tagName": "my-button",
            "customElement": true,
            "deprecated": "use x-button",
            "attributes": [{"name": "disabled", "fieldName": "disabled"}],
            "events": [{"name": "click"}],
            "slots": [{"name": ""}],
            "cssParts": [{"name": "base"}],
            "cssProperties": [{"name": "--color"}],
            "cssStates": [{"name": "active", "deprecated": true}],
            "members": [
                {"kind": "field", "name": "disabled", "attribute": "disabled", "reflects": true},
                {"kind": "method", "name": "click"}
            ]
        }))
        .unwrap();

        let element = decl.custom_element().unwrap();
        assert_eq!(element.attributes.len(), 1);
        assert_eq!(element.events.len(), 1);
        assert_eq!(element.slots.len(), 1);
        assert_eq!(element.css_parts.len(), 1);
        assert_eq!(element.css_properties.len(), 1);
        assert!(element.css_states[0].is_deprecated());
        assert!(decl.is_deprecated());

        let class = decl.class_like().unwrap();
        assert_eq!(class.members.len(), 2);
        let fields: Vec<_> = class.attribute_fields().map(|(attr, _)| attr).collect();
        assert_eq!(fields, vec!["disabled"]);
    }

    #[test]
    fn test_mixin_and_function() {
        let mixin = Declaration::decode(json!({
            "kind": "mixin",
            "name": "FocusMixin",
            "parameters": [{"name": "superClass"}],
            "members": [{"kind": "method", "name": "focus"}]
        }))
        .unwrap();
        assert_eq!(mixin.kind(), DeclarationKind::Mixin);

        let element_mixin = Declaration::decode(json!({
            "kind": "mixin",
            "name": "FormMixin",
            "customElement": true,
            "attributes": [{"name": "name"}]
        }))
        .unwrap();
        assert_eq!(element_mixin.kind(), DeclarationKind::CustomElementMixin);
        assert_eq!(element_mixin.custom_element().unwrap().attributes.len(), 1);

        let function = Declaration::decode(json!({
            "kind": "function",
            "name": "register",
            "parameters": [{"name": "tag", "type": {"text": "string"}}],
            "deprecated": false
        }))
        .unwrap();
        match &function {
            Declaration::Function(decl) => {
                assert_eq!(decl.function.parameters.len(), 1);
                assert_eq!(decl.deprecated, Deprecated::Flag(false));
            }
            other => panic!("expected a function, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_declaration_kind() {
        let err = Declaration::decode(json!({"kind": "enum", "name": "E"})).unwrap_err();
        assert_eq!(err.to_string(), "unknown declaration kind `enum`");
    }

    #[test]
    fn test_bad_member_fails_declaration() {
        let err = Declaration::decode(json!({
            "kind": "class",
            "name": "A",
            "members": [{"kind": "field", "name": "x", "deprecated": []}]
        }))
        .unwrap_err();
        assert!(matches!(err, ManifestError::InvalidDeprecatedShape { entity: "field", .. }));
    }

    #[test]
    fn test_unknown_member_kind_is_skipped() {
        let decl = Declaration::decode(json!({
            "kind": "class",
            "name": "A",
            "tagName": "x-a",
            "members": [
                {"kind": "accessor", "name": "value"},
                {"name": "untyped"},
                {"kind": "method", "name": "focus"}
            ]
        }))
        .unwrap();
        let members = &decl.class_like().unwrap().members;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name(), "focus");
    }

    #[test]
    fn test_null_custom_element_marker() {
        let plain = Declaration::decode(json!({
            "kind": "class", "name": "A", "customElement": null
        }))
        .unwrap();
        assert_eq!(plain.kind(), DeclarationKind::Class);

        let element = Declaration::decode(json!({
            "kind": "class", "name": "B", "tagName": "x-b", "customElement": null
        }))
        .unwrap();
        assert_eq!(element.kind(), DeclarationKind::CustomElement);
        assert!(!element.custom_element().unwrap().custom_element);
    }

    #[test]
    fn test_encode_custom_element() {
        let input = json!({
            "kind": "class",
            "name": "MyEl",
            "members": [{"kind": "field", "name": "open", "attribute": "open"}],
            "tagName": "my-el",
            "attributes": [{"name": "open", "deprecated": false}],
            "customElement": true
        });
        let decl = Declaration::decode(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&decl).unwrap(), input);
    }
}
