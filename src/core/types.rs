//! Building blocks shared across entities: names, types, parameters.

use serde::{Deserialize, Serialize};

use super::decode::decode_leaf_entities;
use super::deprecated::{impl_deprecatable, Deprecated};
use super::reference::SourceReference;

/// Name, summary, and description common to most entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullyQualified {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FullyQualified {
    pub fn new(name: impl Into<String>) -> Self {
        FullyQualified {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The summary, or an empty string.
    pub fn summary_or_empty(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }
}

/// A reference to a type within a type string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReference {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
}

/// A TypeScript type string with optional references into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub text: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<TypeReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
}

impl Type {
    pub fn new(text: impl Into<String>) -> Self {
        Type {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Text of an optional type, or an empty string.
pub(crate) fn type_text(ty: Option<&Type>) -> &str {
    ty.map(|ty| ty.text.as_str()).unwrap_or_default()
}

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Public,
    Private,
    Protected,
}

impl Privacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Private => "private",
            Privacy::Protected => "protected",
        }
    }
}

/// Fields shared by properties, variables, and parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyLike {
    #[serde(flatten)]
    pub qualified: FullyQualified,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl PropertyLike {
    pub fn new(name: impl Into<String>) -> Self {
        PropertyLike {
            qualified: FullyQualified::new(name),
            ..Default::default()
        }
    }
}

/// A function or method parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(flatten)]
    pub property: PropertyLike,

    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub rest: bool,
}

/// What a function returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters and return value shared by functions, methods, and mixins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionLike {
    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Return>,
}

impl FunctionLike {
    /// The return type text, if any.
    pub fn return_type(&self) -> Option<&str> {
        self.returns
            .as_ref()
            .and_then(|returns| returns.ty.as_ref())
            .map(|ty| ty.text.as_str())
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Read an optional boolean where `null` means false.
pub(crate) fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl_deprecatable!(PropertyLike);

impl super::deprecated::Deprecatable for Parameter {
    fn deprecation(&self) -> &Deprecated {
        &self.property.deprecated
    }

    fn deprecation_mut(&mut self) -> &mut Deprecated {
        &mut self.property.deprecated
    }
}

decode_leaf_entities!(Parameter => "parameter");
