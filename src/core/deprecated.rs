//! Deprecation status shared by every manifest entity.
//!
//! On the wire `deprecated` is either absent, a boolean, or a string holding
//! the reason. The three shapes are kept apart so that re-encoding a manifest
//! reproduces exactly what was read.

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::error::{ManifestError, ManifestResult};

/// Deprecation status of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Deprecated {
    /// The field was absent.
    #[default]
    None,
    /// `deprecated: true` or `deprecated: false`.
    Flag(bool),
    /// `deprecated: "reason"`.
    Reason(String),
}

impl Deprecated {
    /// Decode the raw `deprecated` value of `entity`.
    ///
    /// `null` is treated like an absent field. Any other non-boolean,
    /// non-string value is rejected.
    pub fn decode(entity: &'static str, raw: Option<&Value>) -> ManifestResult<Self> {
        match raw {
            None | Some(Value::Null) => Ok(Deprecated::None),
            Some(Value::Bool(flag)) => Ok(Deprecated::Flag(*flag)),
            Some(Value::String(reason)) => Ok(Deprecated::Reason(reason.clone())),
            Some(other) => Err(ManifestError::InvalidDeprecatedShape {
                entity,
                raw: other.to_string(),
            }),
        }
    }

    /// True for `Flag(true)` and for any reason, including an empty one.
    pub fn is_deprecated(&self) -> bool {
        match self {
            Deprecated::None => false,
            Deprecated::Flag(flag) => *flag,
            Deprecated::Reason(_) => true,
        }
    }

    /// True when the field was absent. Used to omit it on encode.
    pub fn is_none(&self) -> bool {
        matches!(self, Deprecated::None)
    }

    /// The deprecation reason, if one was given.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Deprecated::Reason(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<bool> for Deprecated {
    fn from(flag: bool) -> Self {
        Deprecated::Flag(flag)
    }
}

impl From<&str> for Deprecated {
    fn from(reason: &str) -> Self {
        Deprecated::Reason(reason.to_string())
    }
}

impl Serialize for Deprecated {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Deprecated::None => serializer.serialize_none(),
            Deprecated::Flag(flag) => serializer.serialize_bool(*flag),
            Deprecated::Reason(reason) => serializer.serialize_str(reason),
        }
    }
}

/// Entities that carry a deprecation status.
pub trait Deprecatable {
    fn deprecation(&self) -> &Deprecated;

    fn deprecation_mut(&mut self) -> &mut Deprecated;

    fn is_deprecated(&self) -> bool {
        self.deprecation().is_deprecated()
    }
}

/// Implements [`Deprecatable`] for entities with a `deprecated` field.
macro_rules! impl_deprecatable {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::core::deprecated::Deprecatable for $ty {
            fn deprecation(&self) -> &$crate::core::deprecated::Deprecated {
                &self.deprecated
            }

            fn deprecation_mut(&mut self) -> &mut $crate::core::deprecated::Deprecated {
                &mut self.deprecated
            }
        })+
    };
}

pub(crate) use impl_deprecatable;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_shapes() {
        assert_eq!(Deprecated::decode("slot", None).unwrap(), Deprecated::None);
        assert_eq!(
            Deprecated::decode("slot", Some(&Value::Null)).unwrap(),
            Deprecated::None
        );
        assert_eq!(
            Deprecated::decode("slot", Some(&json!(true))).unwrap(),
            Deprecated::Flag(true)
        );
        assert_eq!(
            Deprecated::decode("slot", Some(&json!(false))).unwrap(),
            Deprecated::Flag(false)
        );
        assert_eq!(
            Deprecated::decode("slot", Some(&json!("use x"))).unwrap(),
            Deprecated::Reason("use x".to_string())
        );
    }

    #[test]
    fn test_decode_rejects_other_shapes() {
        let err = Deprecated::decode("attribute", Some(&json!(42))).unwrap_err();
        match err {
            ManifestError::InvalidDeprecatedShape { entity, raw } => {
                assert_eq!(entity, "attribute");
                assert_eq!(raw, "42");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(Deprecated::decode("attribute", Some(&json!({"reason": "x"}))).is_err());
    }

    #[test]
    fn test_is_deprecated() {
        assert!(!Deprecated::None.is_deprecated());
        assert!(!Deprecated::Flag(false).is_deprecated());
        assert!(Deprecated::Flag(true).is_deprecated());
        assert!(Deprecated::Reason(String::new()).is_deprecated());
        assert!(Deprecated::from("gone").is_deprecated());
    }

    #[test]
    fn test_encode_keeps_shape() {
        assert_eq!(serde_json::to_value(Deprecated::Flag(false)).unwrap(), json!(false));
        assert_eq!(serde_json::to_value(Deprecated::Flag(true)).unwrap(), json!(true));
        assert_eq!(
            serde_json::to_value(Deprecated::from("old")).unwrap(),
            json!("old")
        );
    }
}
