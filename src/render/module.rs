//! Renderables for modules and the package root.

use super::declarations::{wrap_declaration, RenderableCustomElement};
use super::{borrow_all, Renderable, RenderableKind};
use crate::core::{
    Declaration, Deprecatable, Deprecated, ManifestError, ManifestResult, Module, Package,
};
use crate::output::style::{highlight_if_deprecated, keyword, with_summary};

/// A module and its declarations.
pub struct RenderableModule<'a> {
    pub module: &'a Module,
    children: Vec<Box<dyn Renderable + 'a>>,
}

impl<'a> RenderableModule<'a> {
    pub fn build(module: &'a Module) -> Self {
        let index = module.export_index();
        let children = module
            .declarations
            .iter()
            .map(|declaration| wrap_declaration(module, declaration, &index))
            .collect();

        RenderableModule { module, children }
    }
}

impl Renderable for RenderableModule<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::Module
    }

    fn name(&self) -> &str {
        &self.module.path
    }

    fn label(&self) -> String {
        let label = format!(
            "{} {}",
            keyword("module"),
            highlight_if_deprecated(self.name(), self.deprecation())
        );
        with_summary(label, self.module.summary.as_deref())
    }

    fn deprecation(&self) -> &Deprecated {
        self.module.deprecation()
    }

    fn children(&self) -> Vec<&dyn Renderable> {
        borrow_all(&self.children)
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Path", "Tag Names"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            self.module.tag_names().join(", "),
        ]
    }
}

/// The package root.
pub struct RenderablePackage<'a> {
    pub package: &'a Package,
    children: Vec<Box<dyn Renderable + 'a>>,
}

impl<'a> RenderablePackage<'a> {
    pub fn build(package: &'a Package) -> Self {
        let children = package
            .modules
            .iter()
            .map(|module| Box::new(RenderableModule::build(module)) as Box<dyn Renderable + 'a>)
            .collect();

        RenderablePackage { package, children }
    }
}

impl Renderable for RenderablePackage<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::Package
    }

    fn name(&self) -> &str {
        "<root>"
    }

    fn label(&self) -> String {
        highlight_if_deprecated(self.name(), self.deprecation())
    }

    fn deprecation(&self) -> &Deprecated {
        self.package.deprecation()
    }

    fn children(&self) -> Vec<&dyn Renderable> {
        borrow_all(&self.children)
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &[]
    }

    fn to_table_row(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Every custom element (or custom element mixin) in `package` that has a
/// tag name, in module order.
pub fn custom_elements(package: &Package) -> Vec<RenderableCustomElement<'_>> {
    package
        .modules
        .iter()
        .flat_map(|module| {
            let index = module.export_index();
            module
                .declarations
                .iter()
                .filter_map(|declaration| {
                    let parts = match declaration {
                        Declaration::CustomElement(decl) => (&decl.class.class, &decl.element),
                        Declaration::CustomElementMixin(decl) => {
                            (&decl.mixin.class, &decl.element)
                        }
                        _ => return None,
                    };
                    let name = declaration.name();
                    let element = RenderableCustomElement::build(
                        module,
                        declaration,
                        parts,
                        (index.definition(name), index.javascript(name)),
                    );
                    element.tag_name().is_some().then_some(element)
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// The custom element registered as `tag`.
pub fn find_custom_element<'a>(
    package: &'a Package,
    tag: &str,
) -> ManifestResult<RenderableCustomElement<'a>> {
    custom_elements(package)
        .into_iter()
        .find(|element| element.tag_name() == Some(tag))
        .ok_or_else(|| ManifestError::TagNotFound(tag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::style::strip_ansi;
    use crate::render::predicate::{all, deprecated_or_has_deprecated_descendant, not_deprecated};
    use crate::render::{RenderableCustomElement, TreeNode, CUSTOM_ELEMENT_GROUPS};
    use crate::test_support::fixtures;
    use pretty_assertions::assert_eq;

    fn plain(node: &TreeNode) -> String {
        strip_ansi(&node.label).into_owned()
    }

    fn button<'a>(package: &'a Package) -> RenderableCustomElement<'a> {
        let module = &package.modules[0];
        let index = module.export_index();
        let declaration = &module.declarations[0];
        let decl = match declaration {
            crate::core::Declaration::CustomElement(decl) => decl,
            other => panic!("expected a custom element, got {other:?}"),
        };
        RenderableCustomElement::build(
            module,
            declaration,
            (&decl.class.class, &decl.element),
            (index.definition("MyButton"), index.javascript("MyButton")),
        )
    }

    #[test]
    fn test_package_tree_shape() {
        let package = fixtures::components();
        let root = RenderablePackage::build(&package).to_tree_node(&all);

        assert_eq!(plain(&root), "<root>");
        let modules: Vec<String> = root.children.iter().map(plain).collect();
        assert_eq!(
            modules,
            vec![
                "module src/my-button.js Button module.",
                "module src/my-card.js",
                "module src/utils.js",
            ]
        );

        let utils = &root.children[2];
        let labels: Vec<String> = utils.children.iter().map(plain).collect();
        assert_eq!(
            labels,
            vec![
                "class Base",
                "mixin FocusMixin",
                "function register (DEPRECATED)",
                "var VERSION",
            ]
        );
        assert_eq!(plain(&utils.children[0].children[0]), "Fields");
    }

    #[test]
    fn test_custom_element_groups_in_order() {
        let package = fixtures::components();
        let node = button(&package).to_tree_node(&all);

        assert_eq!(plain(&node), "<my-button> A clickable button.");
        let groups: Vec<String> = node.children.iter().map(plain).collect();
        let expected: Vec<&str> = CUSTOM_ELEMENT_GROUPS
            .iter()
            .map(|kind| kind.group_title())
            .collect();
        assert_eq!(groups, expected);

        let slots = node.child("Slots").unwrap();
        assert_eq!(plain(&slots.children[0]), "<default> Button label.");
    }

    #[test]
    fn test_grouping_is_complete() {
        let package = fixtures::components();
        let element = button(&package);
        let node = element.to_tree_node(&all);

        let grouped: usize = node.children.iter().map(|group| group.children.len()).sum();
        assert_eq!(grouped, element.children().len());
    }

    #[test]
    fn test_field_annotations() {
        let package = fixtures::components();
        let node = button(&package).to_tree_node(&all);
        let fields: Vec<String> = node.child("Fields").unwrap().children.iter().map(plain).collect();

        assert_eq!(fields[0], "disabled (attribute: disabled, reflects)");
        assert_eq!(
            fields[1],
            "kind (DEPRECATED: Use `variant` instead.) (attribute: kind)"
        );
        // `label` is bound to an attribute that is not declared.
        assert_eq!(fields[3], "label");
    }

    #[test]
    fn test_attribute_reflects_annotation() {
        let package = fixtures::components();
        let node = button(&package).to_tree_node(&all);
        let attributes: Vec<String> = node
            .child("Attributes")
            .unwrap()
            .children
            .iter()
            .map(plain)
            .collect();

        assert_eq!(attributes[0], "disabled (reflects) Disables the button.");
        assert!(attributes.iter().skip(1).all(|label| !label.contains("(reflects)")));
    }

    #[test]
    fn test_prune_deprecated() {
        let package = fixtures::components();
        let root = RenderablePackage::build(&package).to_tree_node(&not_deprecated);

        let card_module = &root.children[1];
        assert!(card_module.children.is_empty(), "deprecated element pruned with subtree");

        let button = &root.children[0].children[0];
        let attributes: Vec<String> = button
            .child("Attributes")
            .unwrap()
            .children
            .iter()
            .map(plain)
            .collect();
        assert_eq!(
            attributes,
            vec!["disabled (reflects) Disables the button.", "variant Visual style."]
        );
        assert!(button.child("Slots").unwrap().children.len() == 1);
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let package = fixtures::components();
        let root = RenderablePackage::build(&package).to_tree_node(&not_deprecated);
        let button = &root.children[0].children[0];
        let methods = button.child("Methods").unwrap();
        assert_eq!(methods.children.len(), 1);

        let package = fixtures::single_module(serde_json::json!({
            "path": "a.js",
            "declarations": [{
                "kind": "class", "name": "A", "tagName": "x-a",
                "slots": [{"name": "only", "deprecated": true}]
            }]
        }));
        let root = RenderablePackage::build(&package).to_tree_node(&not_deprecated);
        let element = &root.children[0].children[0];
        assert!(element.children.is_empty());
    }

    #[test]
    fn test_deprecated_only_keeps_ancestors() {
        let package = fixtures::components();
        let root = RenderablePackage::build(&package)
            .to_tree_node(&deprecated_or_has_deprecated_descendant);

        let button = &root.children[0].children[0];
        assert!(button.child("Attributes").is_some());
        assert!(button.child("Parts").is_none());

        let utils = &root.children[2];
        let labels: Vec<String> = utils.children.iter().map(plain).collect();
        assert_eq!(labels, vec!["function register (DEPRECATED)"]);
    }

    #[test]
    fn test_table_rows_match_headings() {
        let package = fixtures::components();
        let root = RenderablePackage::build(&package);

        fn visit(item: &dyn Renderable) {
            assert_eq!(
                item.column_headings().len(),
                item.to_table_row().len(),
                "row and headings differ for {}",
                item.name()
            );
            for child in item.children() {
                visit(child);
            }
        }
        visit(&root);
    }

    #[test]
    fn test_attribute_row() {
        let package = fixtures::components();
        let element = button(&package);
        let attributes = element.children_of(RenderableKind::Attribute);
        let row: Vec<String> = attributes[0]
            .to_table_row()
            .iter()
            .map(|cell| strip_ansi(cell).into_owned())
            .collect();
        assert_eq!(
            row,
            vec!["disabled", "disabled", "✅", "Disables the button.", "false", "boolean"]
        );
    }

    #[test]
    fn test_method_row_defaults() {
        let package = fixtures::components();
        let element = button(&package);
        let methods = element.children_of(RenderableKind::Method);
        let row = methods[1].to_table_row();
        assert_eq!(strip_ansi(&row[0]), "legacyFocus (DEPRECATED)");
        assert_eq!(row[1], "void");
        assert_eq!(row[2], "protected");
        assert_eq!(row[3], "");
    }

    #[test]
    fn test_module_row_lists_tags() {
        let package = fixtures::components();
        let module = RenderableModule::build(&package.modules[0]);
        assert_eq!(module.to_table_row()[1], "my-button");
        assert!(RenderablePackage::build(&package).column_headings().is_empty());
    }

    #[test]
    fn test_custom_elements_in_module_order() {
        let package = fixtures::components();
        let tags: Vec<String> = custom_elements(&package)
            .iter()
            .map(|element| element.name().to_string())
            .collect();
        assert_eq!(tags, vec!["my-button", "my-card"]);
    }

    #[test]
    fn test_find_custom_element() {
        let package = fixtures::components();
        let card = find_custom_element(&package, "my-card").unwrap();
        assert!(card.is_deprecated());
        assert_eq!(card.to_table_row()[1], "MyCard");

        let err = find_custom_element(&package, "my-panel").err().unwrap();
        assert!(matches!(err, ManifestError::TagNotFound(tag) if tag == "my-panel"));
    }
}
