//! Listing custom elements, modules, and the members of one element.

use std::fmt;

use anyhow::{bail, Result};
use clap::ValueEnum;

use crate::core::Package;
use crate::output::{render_table, render_tree, OutputFormat, TableOptions};
use crate::render::predicate::DeprecationFilter;
use crate::render::{
    custom_elements, find_custom_element, tree_children, Renderable, RenderableKind,
    RenderableModule, TreeNode,
};

/// What to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    /// Every custom element tag
    Tags,
    /// Every module
    Modules,
    Attributes,
    Slots,
    Events,
    Fields,
    Methods,
    CssProperties,
    CssParts,
    CssStates,
}

impl ListKind {
    /// The member kind for per-element listings, or `None` for
    /// package-wide listings.
    pub fn member_kind(self) -> Option<RenderableKind> {
        match self {
            ListKind::Tags | ListKind::Modules => None,
            ListKind::Attributes => Some(RenderableKind::Attribute),
            ListKind::Slots => Some(RenderableKind::Slot),
            ListKind::Events => Some(RenderableKind::Event),
            ListKind::Fields => Some(RenderableKind::Field),
            ListKind::Methods => Some(RenderableKind::Method),
            ListKind::CssProperties => Some(RenderableKind::CssProperty),
            ListKind::CssParts => Some(RenderableKind::CssPart),
            ListKind::CssStates => Some(RenderableKind::CssState),
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{:?}", self),
        }
    }
}

/// Options for [`list`].
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Element whose members are listed
    pub tag_name: Option<String>,
    pub format: OutputFormat,
    pub deprecated: DeprecationFilter,
    /// Table columns to keep
    pub columns: Vec<String>,
}

/// Render a listing of `kind` from `package`.
pub fn list(package: &Package, kind: ListKind, opts: &ListOptions) -> Result<String> {
    match kind.member_kind() {
        None => list_package(package, kind, opts),
        Some(member) => {
            let Some(tag) = opts.tag_name.as_deref() else {
                bail!("`--tag-name` is required to list {}", kind);
            };
            list_members(package, tag, member, opts)
        }
    }
}

fn list_package(package: &Package, kind: ListKind, opts: &ListOptions) -> Result<String> {
    let modules: Vec<RenderableModule<'_>> =
        package.modules.iter().map(RenderableModule::build).collect();
    let elements = custom_elements(package);

    let (title, items): (&str, Vec<&dyn Renderable>) = match kind {
        ListKind::Modules => (
            RenderableKind::Module.title(),
            modules.iter().map(|m| m as &dyn Renderable).collect(),
        ),
        _ => (
            RenderableKind::CustomElement.title(),
            elements.iter().map(|e| e as &dyn Renderable).collect(),
        ),
    };

    render(TreeNode::new(title), &items, opts)
}

fn list_members(
    package: &Package,
    tag: &str,
    member: RenderableKind,
    opts: &ListOptions,
) -> Result<String> {
    let element = find_custom_element(package, tag)?;
    let members = element.children_of(member);
    render(TreeNode::new(element.label()), &members, opts)
}

/// Render `items` as a table, or as a tree under `root`.
fn render(root: TreeNode, items: &[&dyn Renderable], opts: &ListOptions) -> Result<String> {
    match opts.format {
        OutputFormat::Table => {
            let options = TableOptions {
                columns: opts.columns.clone(),
            };
            Ok(render_table(
                items,
                &opts.deprecated.row_predicate(),
                &options,
            )?)
        }
        OutputFormat::Tree => {
            let predicate = opts.deprecated.tree_predicate();
            let root = root.with_children(tree_children(items, &predicate));
            Ok(render_tree(&root))
        }
    }
}
