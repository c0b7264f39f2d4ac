//! Query sources derived from a decoded package.

use serde_json::{Map, Value};

use super::engine::Sources;
use crate::core::{ManifestResult, Package};

/// The whole re-encoded package.
pub const MANIFEST: &str = "manifest";

/// Custom elements keyed by tag name.
pub const ELEMENTS: &str = "elements";

/// Build the standard sources for `package`.
///
/// `elements` maps each tag name to its encoded declaration, with the
/// module path added as `modulePath`.
pub fn package_sources(package: &Package) -> ManifestResult<Sources> {
    let mut elements = Map::new();
    for element in package.custom_elements() {
        let Some(tag) = element.tag_name() else {
            continue;
        };
        let mut encoded = serde_json::to_value(element.declaration)
            .map_err(crate::core::ManifestError::Encode)?;
        if let Value::Object(fields) = &mut encoded {
            fields.insert("modulePath".to_string(), Value::from(element.module.path.as_str()));
        }
        elements.insert(tag.to_string(), encoded);
    }

    let mut sources = Sources::new();
    sources.insert(MANIFEST.to_string(), package.to_value()?);
    sources.insert(ELEMENTS.to_string(), Value::Object(elements));
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::engine::resolve_path;
    use crate::test_support::fixtures;
    use serde_json::json;

    #[test]
    fn test_package_sources() {
        let package = fixtures::components();
        let sources = package_sources(&package).unwrap();

        assert_eq!(
            resolve_path(ELEMENTS, "my-button.modulePath", &sources).unwrap(),
            json!("src/my-button.js")
        );
        assert!(resolve_path(ELEMENTS, "elements", &sources).is_err());
        assert_eq!(
            resolve_path(MANIFEST, "modules.#.path", &sources).unwrap(),
            json!(["src/my-button.js", "src/my-card.js", "src/utils.js"])
        );
        assert_eq!(
            resolve_path(ELEMENTS, "my-card.deprecated", &sources).unwrap(),
            json!("Use my-panel.")
        );
    }
}
