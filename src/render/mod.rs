//! A uniform view over manifest entities for display.
//!
//! Every displayable entity is wrapped in a [`Renderable`] that borrows the
//! entity together with its surrounding context (module, declaration,
//! export). The wrappers never copy manifest data; they are rebuilt from a
//! [`Package`](crate::core::Package) whenever a view is needed.

pub mod declarations;
pub mod members;
pub mod module;
pub mod predicate;

use crate::core::Deprecated;
use crate::output::style;

pub use declarations::{
    RenderableClass, RenderableCustomElement, RenderableFunction, RenderableVariable,
};
pub use members::{
    RenderableAttribute, RenderableCssPart, RenderableCssProperty, RenderableCssState,
    RenderableEvent, RenderableField, RenderableMethod, RenderableSlot,
};
pub use module::{custom_elements, find_custom_element, RenderableModule, RenderablePackage};
pub use predicate::Predicate;

static NOT_DEPRECATED: Deprecated = Deprecated::None;

/// The kind of a renderable, used for grouping and sectioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderableKind {
    Package,
    Module,
    Class,
    Mixin,
    CustomElement,
    Function,
    Variable,
    Attribute,
    Slot,
    Event,
    Field,
    Method,
    CssProperty,
    CssPart,
    CssState,
}

impl RenderableKind {
    /// Plural title used for table sections and listings.
    pub fn title(&self) -> &'static str {
        match self {
            RenderableKind::Package => "Packages",
            RenderableKind::Module => "Modules",
            RenderableKind::Class => "Classes",
            RenderableKind::Mixin => "Mixins",
            RenderableKind::CustomElement => "Custom Elements",
            RenderableKind::Function => "Functions",
            RenderableKind::Variable => "Variables",
            RenderableKind::Attribute => "Attributes",
            RenderableKind::Slot => "Slots",
            RenderableKind::Event => "Events",
            RenderableKind::Field => "Fields",
            RenderableKind::Method => "Methods",
            RenderableKind::CssProperty => "CSS Properties",
            RenderableKind::CssPart => "CSS Parts",
            RenderableKind::CssState => "CSS States",
        }
    }

    /// Title of the tree group holding members of this kind.
    pub fn group_title(&self) -> &'static str {
        match self {
            RenderableKind::CssPart => "Parts",
            RenderableKind::CssState => "States",
            other => other.title(),
        }
    }
}

/// Child groups of a custom element, in display order.
pub const CUSTOM_ELEMENT_GROUPS: &[RenderableKind] = &[
    RenderableKind::Attribute,
    RenderableKind::Slot,
    RenderableKind::Event,
    RenderableKind::Field,
    RenderableKind::Method,
    RenderableKind::CssProperty,
    RenderableKind::CssPart,
    RenderableKind::CssState,
];

/// Child groups of a plain class or mixin.
pub const CLASS_GROUPS: &[RenderableKind] = &[RenderableKind::Field, RenderableKind::Method];

/// A node of a display tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        TreeNode {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Find a direct child whose label, without styling, equals `label`.
    pub fn child(&self, label: &str) -> Option<&TreeNode> {
        self.children
            .iter()
            .find(|child| style::strip_ansi(&child.label) == label)
    }
}

/// A displayable manifest entity.
pub trait Renderable {
    fn kind(&self) -> RenderableKind;

    /// The identifying name: tag name, attribute name, module path.
    fn name(&self) -> &str;

    /// One-line description, styled for the terminal.
    fn label(&self) -> String;

    /// Deprecation status. Entities that cannot be deprecated report none.
    fn deprecation(&self) -> &Deprecated {
        &NOT_DEPRECATED
    }

    fn is_deprecated(&self) -> bool {
        self.deprecation().is_deprecated()
    }

    /// Renderable children in manifest order.
    fn children(&self) -> Vec<&dyn Renderable> {
        Vec::new()
    }

    /// Table headings, parallel to [`Renderable::to_table_row`].
    fn column_headings(&self) -> &'static [&'static str];

    fn to_table_row(&self) -> Vec<String>;

    /// Build a display tree. Children rejected by `predicate` are pruned
    /// together with their subtrees.
    fn to_tree_node(&self, predicate: Predicate<'_>) -> TreeNode {
        TreeNode::new(self.label()).with_children(tree_children(&self.children(), predicate))
    }
}

/// Tree nodes for the children accepted by `predicate`, in order.
pub fn tree_children(children: &[&dyn Renderable], predicate: Predicate<'_>) -> Vec<TreeNode> {
    children
        .iter()
        .copied()
        .filter(|child| predicate(*child))
        .map(|child| child.to_tree_node(predicate))
        .collect()
}

/// Tree nodes for accepted children, bucketed under one titled node per
/// kind in `groups` order. Empty groups are omitted.
pub fn grouped_tree_children(
    children: &[&dyn Renderable],
    groups: &[RenderableKind],
    predicate: Predicate<'_>,
) -> Vec<TreeNode> {
    groups
        .iter()
        .filter_map(|kind| {
            let members: Vec<&dyn Renderable> = children
                .iter()
                .copied()
                .filter(|child| child.kind() == *kind)
                .collect();
            let nodes = tree_children(&members, predicate);
            if nodes.is_empty() {
                None
            } else {
                Some(TreeNode::new(style::title(kind.group_title())).with_children(nodes))
            }
        })
        .collect()
}

/// Collect boxed renderables into borrowed trait objects.
pub(crate) fn borrow_all<'s>(items: &'s [Box<dyn Renderable + '_>]) -> Vec<&'s dyn Renderable> {
    items
        .iter()
        .map(|item| item.as_ref() as &dyn Renderable)
        .collect()
}

/// `value` or an empty string.
pub(crate) fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// `✅` for true, empty for false.
pub(crate) fn check(value: bool) -> String {
    if value {
        "✅".to_string()
    } else {
        String::new()
    }
}
