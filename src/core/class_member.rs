//! Class members: fields, attribute-backed fields, and methods.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::decode::{decode_leaf_entities, serialize_tagged, Decode, Discriminator, RawObject};
use super::deprecated::{impl_deprecatable, Deprecatable, Deprecated};
use super::error::{ManifestError, ManifestResult};
use super::reference::{Reference, SourceReference};
use super::types::{is_false, FullyQualified, FunctionLike, Privacy, PropertyLike};

/// A class field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassField {
    #[serde(flatten)]
    pub property: PropertyLike,

    #[serde(rename = "static", default, skip_serializing_if = "is_false")]
    pub is_static: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,

    #[serde(skip)]
    pub start_byte: u32,
}

impl ClassField {
    pub fn new(name: impl Into<String>) -> Self {
        ClassField {
            property: PropertyLike::new(name),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.property.qualified.name
    }
}

/// A field that is bound to an HTML attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomElementField {
    #[serde(flatten)]
    pub field: ClassField,

    /// Name of the attribute this field is bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    /// Whether property changes are reflected back to the attribute.
    #[serde(default, skip_serializing_if = "is_false")]
    pub reflects: bool,
}

/// A class method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMethod {
    #[serde(flatten)]
    pub qualified: FullyQualified,

    #[serde(flatten)]
    pub function: FunctionLike,

    #[serde(rename = "static", default, skip_serializing_if = "is_false")]
    pub is_static: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,

    #[serde(skip)]
    pub start_byte: u32,
}

/// A member of a class, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    Field(ClassField),
    CustomElementField(CustomElementField),
    Method(ClassMethod),
}

impl ClassMember {
    pub fn name(&self) -> &str {
        match self {
            ClassMember::Field(field) => field.name(),
            ClassMember::CustomElementField(field) => field.field.name(),
            ClassMember::Method(method) => &method.qualified.name,
        }
    }

    /// The wire `kind` of this member.
    pub fn kind(&self) -> &'static str {
        match self {
            ClassMember::Field(_) | ClassMember::CustomElementField(_) => "field",
            ClassMember::Method(_) => "method",
        }
    }

    /// The plain field view, for either field variant.
    pub fn as_field(&self) -> Option<&ClassField> {
        match self {
            ClassMember::Field(field) => Some(field),
            ClassMember::CustomElementField(field) => Some(&field.field),
            ClassMember::Method(_) => None,
        }
    }

    pub fn as_method(&self) -> Option<&ClassMethod> {
        match self {
            ClassMember::Method(method) => Some(method),
            _ => None,
        }
    }
}

impl Deprecatable for ClassField {
    fn deprecation(&self) -> &Deprecated {
        &self.property.deprecated
    }

    fn deprecation_mut(&mut self) -> &mut Deprecated {
        &mut self.property.deprecated
    }
}

impl Deprecatable for CustomElementField {
    fn deprecation(&self) -> &Deprecated {
        self.field.deprecation()
    }

    fn deprecation_mut(&mut self) -> &mut Deprecated {
        self.field.deprecation_mut()
    }
}

impl Deprecatable for ClassMember {
    fn deprecation(&self) -> &Deprecated {
        match self {
            ClassMember::Field(field) => field.deprecation(),
            ClassMember::CustomElementField(field) => field.deprecation(),
            ClassMember::Method(method) => method.deprecation(),
        }
    }

    fn deprecation_mut(&mut self) -> &mut Deprecated {
        match self {
            ClassMember::Field(field) => field.deprecation_mut(),
            ClassMember::CustomElementField(field) => field.deprecation_mut(),
            ClassMember::Method(method) => method.deprecation_mut(),
        }
    }
}

impl_deprecatable!(ClassMethod);

decode_leaf_entities!(
    ClassField => "field",
    CustomElementField => "field",
);

impl Decode for ClassMethod {
    fn decode(value: Value) -> ManifestResult<Self> {
        let mut raw = RawObject::new("method", value)?;
        let deprecated = raw.deprecation()?;
        let parameters = raw.list("parameters")?;

        let mut method: ClassMethod = raw.finish()?;
        method.deprecated = deprecated;
        method.function.parameters = parameters;
        Ok(method)
    }
}

impl Decode for ClassMember {
    fn decode(value: Value) -> ManifestResult<Self> {
        let tag = Discriminator::peek("class member", &value)?;
        tracing::trace!(kind = ?tag.kind, "decoding class member");

        match tag.kind.as_deref() {
            Some("field") if tag.binds_attribute() => {
                CustomElementField::decode(value).map(ClassMember::CustomElementField)
            }
            Some("field") => ClassField::decode(value).map(ClassMember::Field),
            Some("method") => ClassMethod::decode(value).map(ClassMember::Method),
            _ => Err(ManifestError::UnknownDiscriminator {
                target: "class member",
                kind: tag.kind_or_missing(),
                expected: "field, method",
            }),
        }
    }
}

impl Serialize for ClassMember {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ClassMember::Field(field) => serialize_tagged(self.kind(), field, serializer),
            ClassMember::CustomElementField(field) => {
                serialize_tagged(self.kind(), field, serializer)
            }
            ClassMember::Method(method) => serialize_tagged(self.kind(), method, serializer),
        }
    }
}
