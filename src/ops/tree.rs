//! Whole-package and single-element trees.

use anyhow::Result;

use crate::core::Package;
use crate::output::render_tree;
use crate::render::predicate::DeprecationFilter;
use crate::render::{find_custom_element, Renderable, RenderablePackage};

/// Options for [`tree`].
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    /// Show only this element instead of the whole package
    pub tag_name: Option<String>,
    pub deprecated: DeprecationFilter,
}

/// Render the package, or one element, as a grouped tree.
pub fn tree(package: &Package, opts: &TreeOptions) -> Result<String> {
    let predicate = opts.deprecated.tree_predicate();
    let root = match opts.tag_name.as_deref() {
        Some(tag) => find_custom_element(package, tag)?.to_tree_node(&predicate),
        None => RenderablePackage::build(package).to_tree_node(&predicate),
    };
    Ok(render_tree(&root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::style::strip_ansi;
    use crate::test_support::fixtures;

    fn plain(opts: &TreeOptions) -> String {
        let package = fixtures::components();
        strip_ansi(&tree(&package, opts).unwrap()).into_owned()
    }

    #[test]
    fn test_package_tree() {
        let output = plain(&TreeOptions::default());
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("<root>"));
        assert!(lines.next().unwrap().starts_with("├── module src/my-button.js"));
        assert!(output.contains("function register (DEPRECATED)"));
        assert!(output.contains("└── module src/utils.js"));
    }

    #[test]
    fn test_element_tree_hides_deprecated() {
        let output = plain(&TreeOptions {
            tag_name: Some("my-button".to_string()),
            deprecated: DeprecationFilter::Hide,
        });
        assert!(output.starts_with("<my-button>"));
        assert!(output.contains("Attributes"));
        assert!(output.contains("variant"));
        assert!(!output.contains("DEPRECATED"));
    }

    #[test]
    fn test_only_deprecated_keeps_ancestors() {
        let output = plain(&TreeOptions {
            tag_name: None,
            deprecated: DeprecationFilter::Only,
        });
        assert!(output.contains("module src/my-button.js"));
        assert!(output.contains("icon (DEPRECATED)"));
        assert!(!output.contains("Visual style."));
    }

    #[test]
    fn test_unknown_tag() {
        let package = fixtures::components();
        let opts = TreeOptions {
            tag_name: Some("x-nope".to_string()),
            ..Default::default()
        };
        assert!(tree(&package, &opts).is_err());
    }
}
