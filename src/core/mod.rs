//! The Custom Elements Manifest entity model.
//!
//! Entities are decoded from JSON with [`Package::from_slice`] and encoded
//! back with [`Package::to_json_pretty`]. Decoding is strict: an unknown
//! `kind` or a malformed `deprecated` anywhere fails the whole document.

pub mod class_member;
pub mod declaration;
pub mod decode;
pub mod deprecated;
pub mod error;
pub mod export;
pub mod members;
pub mod module;
pub mod package;
pub mod reference;
pub mod types;

pub use class_member::{ClassField, ClassMember, ClassMethod, CustomElementField};
pub use declaration::{
    ClassDeclaration, ClassLike, CustomElement, CustomElementDeclaration,
    CustomElementMixinDeclaration, Declaration, DeclarationKind, FunctionDeclaration,
    MixinDeclaration, VariableDeclaration,
};
pub use decode::Decode;
pub use deprecated::{Deprecatable, Deprecated};
pub use error::{ManifestError, ManifestResult};
pub use export::{CustomElementExport, Export, ExportKind, JavaScriptExport};
pub use members::{Attribute, CssCustomProperty, CssCustomState, CssPart, Demo, Event, Slot};
pub use module::{ExportIndex, Module};
pub use package::{CustomElementContext, Package};
pub use reference::{normalize_module_path, Reference, SourceReference};
pub use types::{
    FullyQualified, FunctionLike, Parameter, Privacy, PropertyLike, Return, Type, TypeReference,
};
