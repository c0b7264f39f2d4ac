//! Decoding from JSON values into the entity model.
//!
//! Entities are decoded from an already-parsed [`Value`] so that syntax errors
//! are reported once, up front. Fields that need hand-written handling
//! (`deprecated`, nested lists of polymorphic or deprecatable children) are
//! taken out of the object first; the remaining fields go through serde.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::deprecated::{Deprecatable, Deprecated};
use super::error::{ManifestError, ManifestResult};

/// An entity that can be decoded from a JSON value.
pub trait Decode: Sized {
    fn decode(value: Value) -> ManifestResult<Self>;
}

/// A JSON object being taken apart field by field.
pub(crate) struct RawObject {
    entity: &'static str,
    fields: Map<String, Value>,
}

impl RawObject {
    pub(crate) fn new(entity: &'static str, value: Value) -> ManifestResult<Self> {
        match value {
            Value::Object(fields) => Ok(RawObject { entity, fields }),
            other => Err(ManifestError::shape(
                entity,
                format!("expected an object, found {}", describe(&other)),
            )),
        }
    }

    /// Remove and decode the `deprecated` field.
    pub(crate) fn deprecation(&mut self) -> ManifestResult<Deprecated> {
        Deprecated::decode(self.entity, self.fields.remove("deprecated").as_ref())
    }

    /// Remove and decode a list of child entities. Absent or `null` is empty.
    pub(crate) fn list<T: Decode>(&mut self, key: &str) -> ManifestResult<Vec<T>> {
        self.array(key)?.into_iter().map(T::decode).collect()
    }

    /// Like [`RawObject::list`], but entries with an unknown or missing
    /// `kind` are dropped. Any other decode error still fails the list.
    pub(crate) fn known_list<T: Decode>(&mut self, key: &str) -> ManifestResult<Vec<T>> {
        let mut decoded = Vec::new();
        for item in self.array(key)? {
            match T::decode(item) {
                Ok(entity) => decoded.push(entity),
                Err(ManifestError::UnknownDiscriminator { kind, .. }) => {
                    tracing::debug!(
                        entity = self.entity,
                        list = key,
                        kind = %kind,
                        "skipping entry with unknown kind"
                    );
                }
                Err(err) => return Err(err),
            }
        }
        Ok(decoded)
    }

    fn array(&mut self, key: &str) -> ManifestResult<Vec<Value>> {
        match self.fields.remove(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(ManifestError::shape(
                self.entity,
                format!("`{}` must be an array, found {}", key, describe(&other)),
            )),
        }
    }

    /// Decode the remaining fields with serde.
    pub(crate) fn finish<T: DeserializeOwned>(self) -> ManifestResult<T> {
        let entity = self.entity;
        serde_json::from_value(Value::Object(self.fields))
            .map_err(|err| ManifestError::shape(entity, err.to_string()))
    }
}

/// Decode an entity whose only hand-decoded field is `deprecated`.
pub(crate) fn decode_leaf<T>(entity: &'static str, value: Value) -> ManifestResult<T>
where
    T: DeserializeOwned + Deprecatable,
{
    let mut raw = RawObject::new(entity, value)?;
    let deprecated = raw.deprecation()?;
    let mut decoded: T = raw.finish()?;
    *decoded.deprecation_mut() = deprecated;
    Ok(decoded)
}

/// Implements [`Decode`] through [`decode_leaf`].
macro_rules! decode_leaf_entities {
    ($($ty:ty => $entity:literal),+ $(,)?) => {
        $(impl $crate::core::decode::Decode for $ty {
            fn decode(value: serde_json::Value) -> $crate::core::error::ManifestResult<Self> {
                $crate::core::decode::decode_leaf($entity, value)
            }
        })+
    };
}

pub(crate) use decode_leaf_entities;

/// The fields consulted to pick a variant before decoding it.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub(crate) struct Discriminator {
    pub kind: Option<String>,
    #[serde(rename = "customElement")]
    custom_element: Option<bool>,
    #[serde(rename = "tagName")]
    pub tag_name: Option<String>,
    pub attribute: Option<Value>,
    pub reflects: Option<bool>,
}

impl Discriminator {
    /// Read the discriminating fields without consuming `value`.
    pub(crate) fn peek(entity: &'static str, value: &Value) -> ManifestResult<Self> {
        if !value.is_object() {
            return Err(ManifestError::shape(
                entity,
                format!("expected an object, found {}", describe(value)),
            ));
        }
        serde::Deserialize::deserialize(value)
            .map_err(|err: serde_json::Error| ManifestError::shape(entity, err.to_string()))
    }

    /// `customElement: true`. Absent and `null` both read as false.
    pub(crate) fn custom_element(&self) -> bool {
        self.custom_element.unwrap_or(false)
    }

    /// Whether a `field` member carries an attribute binding. A bare
    /// `reflects: false` is not a binding.
    pub(crate) fn binds_attribute(&self) -> bool {
        self.attribute.is_some() || self.reflects == Some(true)
    }

    pub(crate) fn kind_or_missing(&self) -> String {
        self.kind.clone().unwrap_or_else(|| "<missing>".to_string())
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Serialize `inner` as an object whose first key is `kind`.
pub(crate) fn serialize_tagged<S, T>(kind: &str, inner: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: serde::Serialize,
{
    use serde::ser::{Error, SerializeMap};

    let fields = match serde_json::to_value(inner).map_err(S::Error::custom)? {
        Value::Object(fields) => fields,
        _ => return Err(S::Error::custom("tagged entities must serialize as objects")),
    };

    let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
    map.serialize_entry("kind", kind)?;
    for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != "kind") {
        map.serialize_entry(key, value)?;
    }
    map.end()
}
