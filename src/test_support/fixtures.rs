//! Manifest fixtures.

use crate::core::Package;

/// Raw JSON of the component library fixture.
pub const COMPONENTS_JSON: &str = include_str!("../../tests/fixtures/components.json");

/// A small component library: two custom elements, a plain class, a mixin,
/// a function, and a variable, with a mix of deprecation shapes.
pub fn components() -> Package {
    Package::from_json(COMPONENTS_JSON).expect("components fixture decodes")
}

/// A package built from a single module's JSON.
pub fn single_module(module: serde_json::Value) -> Package {
    let document = serde_json::json!({
        "schemaVersion": "2.1.0",
        "modules": [module],
    });
    Package::from_json(&document.to_string()).expect("fixture decodes")
}
