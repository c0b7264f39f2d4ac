//! Renderables for the members of classes and custom elements.

use colored::Colorize;

use super::{check, text, Renderable, RenderableKind};
use crate::core::{
    Attribute, ClassField, ClassMethod, CssCustomProperty, CssCustomState, CssPart,
    CustomElementField, Declaration, Deprecatable, Deprecated, Event, Module, Privacy, Slot,
};
use crate::output::style::{highlight_if_deprecated, with_summary};

/// Where a member lives.
#[derive(Debug, Clone, Copy)]
pub struct Owner<'a> {
    pub module: &'a Module,
    pub declaration: &'a Declaration,
    /// Tag name of the owning custom element, if any.
    pub tag_name: Option<&'a str>,
}

fn name_label(name: &str, deprecation: &Deprecated, summary: Option<&str>) -> String {
    with_summary(highlight_if_deprecated(name, deprecation), summary)
}

/// An HTML attribute, linked to the field that backs it.
#[derive(Debug, Clone, Copy)]
pub struct RenderableAttribute<'a> {
    pub attribute: &'a Attribute,
    pub field: Option<&'a CustomElementField>,
    pub owner: Owner<'a>,
}

impl RenderableAttribute<'_> {
    fn dom_property(&self) -> Option<&str> {
        self.field
            .map(|field| field.field.name())
            .or(self.attribute.field_name.as_deref())
    }
}

impl Renderable for RenderableAttribute<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::Attribute
    }

    fn name(&self) -> &str {
        &self.attribute.qualified.name
    }

    fn label(&self) -> String {
        let mut label = highlight_if_deprecated(self.name(), self.deprecation());
        if self.field.is_some_and(|field| field.reflects) {
            label = format!("{} {}", label, "(reflects)".cyan());
        }
        with_summary(label, self.attribute.qualified.summary.as_deref())
    }

    fn deprecation(&self) -> &Deprecated {
        self.attribute.deprecation()
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "DOM Property", "Reflects", "Summary", "Default", "Type"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            text(self.dom_property()),
            check(self.field.is_some_and(|field| field.reflects)),
            text(self.attribute.qualified.summary.as_deref()),
            text(self.attribute.default.as_deref()),
            text(self.attribute.ty.as_ref().map(|ty| ty.text.as_str())),
        ]
    }
}

/// A slot. The default slot is shown as `<default>`.
#[derive(Debug, Clone, Copy)]
pub struct RenderableSlot<'a> {
    pub slot: &'a Slot,
    pub owner: Owner<'a>,
}

impl RenderableSlot<'_> {
    fn display_name(&self) -> &str {
        match self.slot.qualified.name.as_str() {
            "" => "<default>",
            name => name,
        }
    }
}

impl Renderable for RenderableSlot<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::Slot
    }

    fn name(&self) -> &str {
        &self.slot.qualified.name
    }

    fn label(&self) -> String {
        name_label(
            self.display_name(),
            self.deprecation(),
            self.slot.qualified.summary.as_deref(),
        )
    }

    fn deprecation(&self) -> &Deprecated {
        self.slot.deprecation()
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "Summary"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.display_name(), self.deprecation()),
            text(self.slot.qualified.summary.as_deref()),
        ]
    }
}

/// A DOM event.
#[derive(Debug, Clone, Copy)]
pub struct RenderableEvent<'a> {
    pub event: &'a Event,
    pub owner: Owner<'a>,
}

impl Renderable for RenderableEvent<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::Event
    }

    fn name(&self) -> &str {
        &self.event.qualified.name
    }

    fn label(&self) -> String {
        name_label(
            self.name(),
            self.deprecation(),
            self.event.qualified.summary.as_deref(),
        )
    }

    fn deprecation(&self) -> &Deprecated {
        self.event.deprecation()
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "Type", "Summary"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            text(self.event.ty.as_ref().map(|ty| ty.text.as_str())),
            text(self.event.qualified.summary.as_deref()),
        ]
    }
}

/// A CSS custom property.
#[derive(Debug, Clone, Copy)]
pub struct RenderableCssProperty<'a> {
    pub property: &'a CssCustomProperty,
    pub owner: Owner<'a>,
}

impl Renderable for RenderableCssProperty<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::CssProperty
    }

    fn name(&self) -> &str {
        &self.property.qualified.name
    }

    fn label(&self) -> String {
        name_label(
            self.name(),
            self.deprecation(),
            self.property.qualified.summary.as_deref(),
        )
    }

    fn deprecation(&self) -> &Deprecated {
        self.property.deprecation()
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "Syntax", "Default", "Summary", "Inherited From"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            text(self.property.syntax.as_deref()),
            text(self.property.default.as_deref()),
            text(self.property.qualified.summary.as_deref()),
            text(
                self.property
                    .inherited_from
                    .as_ref()
                    .map(|reference| reference.name.as_str()),
            ),
        ]
    }
}

/// A CSS shadow part.
#[derive(Debug, Clone, Copy)]
pub struct RenderableCssPart<'a> {
    pub part: &'a CssPart,
    pub owner: Owner<'a>,
}

impl Renderable for RenderableCssPart<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::CssPart
    }

    fn name(&self) -> &str {
        &self.part.qualified.name
    }

    fn label(&self) -> String {
        name_label(
            self.name(),
            self.deprecation(),
            self.part.qualified.summary.as_deref(),
        )
    }

    fn deprecation(&self) -> &Deprecated {
        self.part.deprecation()
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "Summary"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            text(self.part.qualified.summary.as_deref()),
        ]
    }
}

/// A CSS custom state.
#[derive(Debug, Clone, Copy)]
pub struct RenderableCssState<'a> {
    pub state: &'a CssCustomState,
    pub owner: Owner<'a>,
}

impl Renderable for RenderableCssState<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::CssState
    }

    fn name(&self) -> &str {
        &self.state.qualified.name
    }

    fn label(&self) -> String {
        name_label(
            self.name(),
            self.deprecation(),
            self.state.qualified.summary.as_deref(),
        )
    }

    fn deprecation(&self) -> &Deprecated {
        self.state.deprecation()
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "Summary"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            text(self.state.qualified.summary.as_deref()),
        ]
    }
}

/// A class field, linked to its attribute when it has one.
#[derive(Debug, Clone, Copy)]
pub struct RenderableField<'a> {
    pub field: &'a ClassField,
    pub binding: Option<&'a CustomElementField>,
    pub attribute: Option<&'a Attribute>,
    pub owner: Owner<'a>,
}

impl Renderable for RenderableField<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::Field
    }

    fn name(&self) -> &str {
        self.field.name()
    }

    fn label(&self) -> String {
        let mut label = highlight_if_deprecated(self.name(), self.deprecation());
        if let (Some(attribute), Some(binding)) = (self.attribute, self.binding) {
            let annotation = if binding.reflects {
                format!("(attribute: {}, reflects)", attribute.qualified.name)
            } else {
                format!("(attribute: {})", attribute.qualified.name)
            };
            label = format!("{} {}", label, annotation.cyan());
        }
        with_summary(label, self.field.property.qualified.summary.as_deref())
    }

    fn deprecation(&self) -> &Deprecated {
        self.field.deprecation()
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "Type", "Attribute", "Reflects", "Summary"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            text(self.field.property.ty.as_ref().map(|ty| ty.text.as_str())),
            text(self.attribute.map(|attribute| attribute.qualified.name.as_str())),
            check(self.attribute.is_some() && self.binding.is_some_and(|b| b.reflects)),
            text(self.field.property.qualified.summary.as_deref()),
        ]
    }
}

/// A class method.
#[derive(Debug, Clone, Copy)]
pub struct RenderableMethod<'a> {
    pub method: &'a ClassMethod,
    pub owner: Owner<'a>,
}

impl Renderable for RenderableMethod<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::Method
    }

    fn name(&self) -> &str {
        &self.method.qualified.name
    }

    fn label(&self) -> String {
        name_label(
            self.name(),
            self.deprecation(),
            self.method.qualified.summary.as_deref(),
        )
    }

    fn deprecation(&self) -> &Deprecated {
        self.method.deprecation()
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "Return Type", "Privacy", "Static", "Summary"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            self.method.function.return_type().unwrap_or("void").to_string(),
            self.method.privacy.unwrap_or(Privacy::Public).as_str().to_string(),
            check(self.method.is_static),
            text(self.method.qualified.summary.as_deref()),
        ]
    }
}
