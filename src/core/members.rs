//! Custom element API surface: attributes, events, slots, CSS hooks, demos.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::decode::decode_leaf_entities;
use super::deprecated::{impl_deprecatable, Deprecated};
use super::reference::{Reference, SourceReference};
use super::types::{FullyQualified, Type};

static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^'([^']*)'$|^"([^"]*)"$"#).expect("valid literal regex"));

/// An HTML attribute of a custom element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(flatten)]
    pub qualified: FullyQualified,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Name of the class field backing this attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,

    #[serde(skip)]
    pub start_byte: u32,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Attribute {
            qualified: FullyQualified::new(name),
            ..Default::default()
        }
    }

    /// Literal values of a union-of-strings type such as `"a" | "b"`.
    ///
    /// Returns an empty list when the type is absent or is not made
    /// entirely of string literals.
    pub fn enum_values(&self) -> Vec<String> {
        let Some(ty) = &self.ty else {
            return Vec::new();
        };

        let mut values = Vec::new();
        for part in ty.text.split('|').map(str::trim) {
            match STRING_LITERAL.captures(part) {
                Some(caps) => {
                    let value = caps.get(1).or_else(|| caps.get(2));
                    values.push(value.map(|m| m.as_str()).unwrap_or_default().to_string());
                }
                None => return Vec::new(),
            }
        }
        values
    }

    /// True when the attribute type is a union of string literals.
    pub fn is_enum(&self) -> bool {
        !self.enum_values().is_empty()
    }

    /// Check a value against the attribute's string-literal union.
    ///
    /// Quoted and unquoted spellings are both accepted. Attributes that are
    /// not enums accept any value.
    pub fn is_valid_value(&self, value: &str) -> bool {
        let values = self.enum_values();
        if values.is_empty() {
            return true;
        }
        let unquoted = value.trim().trim_matches(|c| c == '"' || c == '\'');
        values.iter().any(|candidate| candidate == unquoted)
    }
}

/// A DOM event dispatched by a custom element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(flatten)]
    pub qualified: FullyQualified,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,

    #[serde(skip)]
    pub start_byte: u32,
}

/// A slot. The empty name is the default slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(flatten)]
    pub qualified: FullyQualified,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,

    #[serde(skip)]
    pub start_byte: u32,
}

/// A CSS shadow part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssPart {
    #[serde(flatten)]
    pub qualified: FullyQualified,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,

    #[serde(skip)]
    pub start_byte: u32,
}

/// A CSS custom property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssCustomProperty {
    #[serde(flatten)]
    pub qualified: FullyQualified,

    /// CSS `@property` syntax, e.g. `<color>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,

    #[serde(skip)]
    pub start_byte: u32,
}

/// A CSS custom state (`:state(name)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssCustomState {
    #[serde(flatten)]
    pub qualified: FullyQualified,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,

    #[serde(skip)]
    pub start_byte: u32,
}

/// A demo page for a custom element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demo {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
}

impl_deprecatable!(Attribute, Event, Slot, CssPart, CssCustomProperty, CssCustomState);

decode_leaf_entities!(
    Attribute => "attribute",
    Event => "event",
    Slot => "slot",
    CssPart => "css part",
    CssCustomProperty => "css custom property",
    CssCustomState => "css custom state",
);
