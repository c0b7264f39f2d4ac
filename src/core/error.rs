//! Errors raised while decoding, encoding, or looking up manifest entities.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Errors produced by the manifest model.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ManifestError {
    /// The input bytes are not valid JSON.
    #[error("manifest is not valid JSON: {0}")]
    #[diagnostic(code(cem::decode::syntax))]
    Syntax(#[source] serde_json::Error),

    /// A `kind` value does not name any known variant.
    #[error("unknown {target} kind `{kind}`")]
    #[diagnostic(
        code(cem::decode::unknown_kind),
        help("supported {target} kinds: {expected}")
    )]
    UnknownDiscriminator {
        target: &'static str,
        kind: String,
        expected: &'static str,
    },

    /// `deprecated` was something other than a boolean or a string.
    #[error("invalid `deprecated` on {entity}: expected a boolean or a string, found `{raw}`")]
    #[diagnostic(code(cem::decode::deprecated_shape))]
    InvalidDeprecatedShape { entity: &'static str, raw: String },

    /// A value has the wrong structure for the entity it should decode into.
    #[error("invalid {entity}: {message}")]
    #[diagnostic(code(cem::decode::shape))]
    InvalidShape {
        entity: &'static str,
        message: String,
    },

    /// No custom element declares the requested tag name.
    #[error("tag not found: `{0}`")]
    #[diagnostic(code(cem::lookup::tag_not_found))]
    TagNotFound(String),

    /// Serializing the model failed.
    #[error("failed to encode manifest: {0}")]
    #[diagnostic(code(cem::encode))]
    Encode(#[source] serde_json::Error),
}

/// Shorthand for results in the manifest model.
pub type ManifestResult<T> = Result<T, ManifestError>;

impl ManifestError {
    pub(crate) fn shape(entity: &'static str, message: impl Into<String>) -> Self {
        ManifestError::InvalidShape {
            entity,
            message: message.into(),
        }
    }

    /// Convert this error to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ManifestError::Syntax(err) => Diagnostic::error("manifest is not valid JSON")
                .with_context(format!("line {}, column {}: {}", err.line(), err.column(), err))
                .with_suggestion(suggestions::CHECK_MANIFEST_JSON),

            ManifestError::UnknownDiscriminator {
                target,
                kind,
                expected,
            } => Diagnostic::error(format!("unknown {} kind `{}`", target, kind))
                .with_context(format!("supported kinds: {}", expected))
                .with_suggestion(suggestions::REGENERATE_MANIFEST),

            ManifestError::InvalidDeprecatedShape { entity, raw } => {
                Diagnostic::error(format!("invalid `deprecated` value on {}", entity))
                    .with_context(format!("found `{}`", raw))
                    .with_suggestion("Use `true`, `false`, or a string explaining the deprecation")
            }

            ManifestError::InvalidShape { entity, message } => {
                Diagnostic::error(format!("invalid {}", entity))
                    .with_context(message.clone())
                    .with_suggestion(suggestions::REGENERATE_MANIFEST)
            }

            ManifestError::TagNotFound(tag) => {
                Diagnostic::error(format!("no custom element is registered as `{}`", tag))
                    .with_suggestion(suggestions::LIST_TAGS)
            }

            ManifestError::Encode(err) => {
                Diagnostic::error("failed to encode manifest").with_context(err.to_string())
            }
        }
    }
}
