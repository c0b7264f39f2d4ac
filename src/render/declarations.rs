//! Renderables for module-level declarations.

use std::collections::HashMap;

use super::members::{
    Owner, RenderableAttribute, RenderableCssPart, RenderableCssProperty, RenderableCssState,
    RenderableEvent, RenderableField, RenderableMethod, RenderableSlot,
};
use super::{
    borrow_all, grouped_tree_children, text, Predicate, Renderable, RenderableKind, TreeNode,
    CLASS_GROUPS, CUSTOM_ELEMENT_GROUPS,
};
use crate::core::{
    Attribute, ClassLike, ClassMember, CustomElement, CustomElementExport, CustomElementField,
    Declaration, DeclarationKind, Deprecatable, Deprecated, ExportIndex, FunctionDeclaration,
    JavaScriptExport, Module, VariableDeclaration,
};
use crate::output::style::{highlight_if_deprecated, keyword, with_summary};

/// Wrap any declaration of `module`.
pub fn wrap_declaration<'a>(
    module: &'a Module,
    declaration: &'a Declaration,
    index: &ExportIndex<'a>,
) -> Box<dyn Renderable + 'a> {
    let name = declaration.name();
    let js_export = index.javascript(name);
    let definition = index.definition(name);
    match declaration {
        Declaration::CustomElement(decl) => Box::new(RenderableCustomElement::build(
            module,
            declaration,
            (&decl.class.class, &decl.element),
            (definition, js_export),
        )),
        Declaration::CustomElementMixin(decl) => Box::new(RenderableCustomElement::build(
            module,
            declaration,
            (&decl.mixin.class, &decl.element),
            (definition, js_export),
        )),
        Declaration::Class(decl) => Box::new(RenderableClass::build(
            module,
            declaration,
            &decl.class,
            js_export,
        )),
        Declaration::Mixin(decl) => Box::new(RenderableClass::build(
            module,
            declaration,
            &decl.class,
            js_export,
        )),
        Declaration::Function(function) => Box::new(RenderableFunction {
            function,
            module,
            export: js_export,
        }),
        Declaration::Variable(variable) => Box::new(RenderableVariable {
            variable,
            module,
            export: js_export,
        }),
    }
}

/// Renderables for the members of a class, with fields linked to the
/// attributes they are bound to.
fn member_children<'a>(
    class: &'a ClassLike,
    attributes: &HashMap<&str, &'a Attribute>,
    owner: Owner<'a>,
) -> Vec<Box<dyn Renderable + 'a>> {
    class
        .members
        .iter()
        .map(|member| -> Box<dyn Renderable + 'a> {
            match member {
                ClassMember::Field(field) => Box::new(RenderableField {
                    field,
                    binding: None,
                    attribute: None,
                    owner,
                }),
                ClassMember::CustomElementField(binding) => {
                    let attribute = binding.attribute.as_deref().and_then(|name| {
                        let found = attributes.get(name).copied();
                        if found.is_none() {
                            tracing::debug!(
                                field = binding.field.name(),
                                attribute = name,
                                declaration = owner.declaration.name(),
                                tag = owner.tag_name,
                                module = %owner.module.path,
                                "field is bound to an attribute that is not declared"
                            );
                        }
                        found
                    });
                    Box::new(RenderableField {
                        field: &binding.field,
                        binding: Some(binding),
                        attribute,
                        owner,
                    })
                }
                ClassMember::Method(method) => Box::new(RenderableMethod { method, owner }),
            }
        })
        .collect()
}

/// A custom element class or custom element mixin.
pub struct RenderableCustomElement<'a> {
    pub declaration: &'a Declaration,
    pub class: &'a ClassLike,
    pub element: &'a CustomElement,
    pub module: &'a Module,
    pub export: Option<&'a CustomElementExport>,
    pub js_export: Option<&'a JavaScriptExport>,
    children: Vec<Box<dyn Renderable + 'a>>,
}

impl<'a> RenderableCustomElement<'a> {
    /// Wrap a custom element declaration and all of its members.
    ///
    /// The attribute and field indices are built once here; a binding that
    /// cannot be resolved is logged and left without an annotation.
    pub fn build(
        module: &'a Module,
        declaration: &'a Declaration,
        (class, element): (&'a ClassLike, &'a CustomElement),
        (export, js_export): (
            Option<&'a CustomElementExport>,
            Option<&'a JavaScriptExport>,
        ),
    ) -> Self {
        let tag_name = element
            .tag_name()
            .or_else(|| export.map(|export| export.name.as_str()));
        let owner = Owner {
            module,
            declaration,
            tag_name,
        };

        let fields: HashMap<&str, &CustomElementField> = class.attribute_fields().collect();
        let attributes: HashMap<&str, &Attribute> = element
            .attributes
            .iter()
            .map(|attribute| (attribute.qualified.name.as_str(), attribute))
            .collect();

        let mut children: Vec<Box<dyn Renderable + 'a>> = Vec::new();

        for attribute in &element.attributes {
            let name = attribute.qualified.name.as_str();
            let field = fields.get(name).copied();
            if field.is_none() && attribute.field_name.is_some() {
                tracing::debug!(
                    attribute = name,
                    field = attribute.field_name.as_deref(),
                    declaration = owner.declaration.name(),
                    tag = owner.tag_name,
                    module = %owner.module.path,
                    "attribute names a field that is not bound to it"
                );
            }
            children.push(Box::new(RenderableAttribute {
                attribute,
                field,
                owner,
            }));
        }
        for slot in &element.slots {
            children.push(Box::new(RenderableSlot { slot, owner }));
        }
        for event in &element.events {
            children.push(Box::new(RenderableEvent { event, owner }));
        }
        children.extend(member_children(class, &attributes, owner));
        for property in &element.css_properties {
            children.push(Box::new(RenderableCssProperty { property, owner }));
        }
        for part in &element.css_parts {
            children.push(Box::new(RenderableCssPart { part, owner }));
        }
        for state in &element.css_states {
            children.push(Box::new(RenderableCssState { state, owner }));
        }

        RenderableCustomElement {
            declaration,
            class,
            element,
            module,
            export,
            js_export,
            children,
        }
    }

    /// The tag name, from the declaration or its definition export.
    pub fn tag_name(&self) -> Option<&'a str> {
        self.element
            .tag_name()
            .or_else(|| self.export.map(|export| export.name.as_str()))
    }

    /// Children of one kind, in manifest order.
    pub fn children_of(&self, kind: RenderableKind) -> Vec<&dyn Renderable> {
        self.children()
            .into_iter()
            .filter(|child| child.kind() == kind)
            .collect()
    }
}

impl Renderable for RenderableCustomElement<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::CustomElement
    }

    fn name(&self) -> &str {
        self.tag_name().unwrap_or_else(|| self.declaration.name())
    }

    fn label(&self) -> String {
        let tag = format!("<{}>", self.name());
        with_summary(
            highlight_if_deprecated(&tag, self.deprecation()),
            self.class.qualified.summary.as_deref(),
        )
    }

    fn deprecation(&self) -> &Deprecated {
        self.declaration.deprecation()
    }

    fn children(&self) -> Vec<&dyn Renderable> {
        borrow_all(&self.children)
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Tag", "Class", "Module", "Summary"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            self.declaration.name().to_string(),
            self.module.path.clone(),
            text(self.class.qualified.summary.as_deref()),
        ]
    }

    fn to_tree_node(&self, predicate: Predicate<'_>) -> TreeNode {
        TreeNode::new(self.label()).with_children(grouped_tree_children(
            &self.children(),
            CUSTOM_ELEMENT_GROUPS,
            predicate,
        ))
    }
}

/// A plain class or mixin.
pub struct RenderableClass<'a> {
    pub declaration: &'a Declaration,
    pub class: &'a ClassLike,
    pub module: &'a Module,
    pub export: Option<&'a JavaScriptExport>,
    children: Vec<Box<dyn Renderable + 'a>>,
}

impl<'a> RenderableClass<'a> {
    pub fn build(
        module: &'a Module,
        declaration: &'a Declaration,
        class: &'a ClassLike,
        export: Option<&'a JavaScriptExport>,
    ) -> Self {
        let owner = Owner {
            module,
            declaration,
            tag_name: None,
        };
        let children = member_children(class, &HashMap::new(), owner);

        RenderableClass {
            declaration,
            class,
            module,
            export,
            children,
        }
    }

    fn keyword(&self) -> &'static str {
        match self.declaration.kind() {
            DeclarationKind::Mixin | DeclarationKind::CustomElementMixin => "mixin",
            _ => "class",
        }
    }
}

impl Renderable for RenderableClass<'_> {
    fn kind(&self) -> RenderableKind {
        match self.declaration.kind() {
            DeclarationKind::Mixin | DeclarationKind::CustomElementMixin => RenderableKind::Mixin,
            _ => RenderableKind::Class,
        }
    }

    fn name(&self) -> &str {
        self.declaration.name()
    }

    fn label(&self) -> String {
        let label = format!(
            "{} {}",
            keyword(self.keyword()),
            highlight_if_deprecated(self.name(), self.deprecation())
        );
        with_summary(label, self.class.qualified.summary.as_deref())
    }

    fn deprecation(&self) -> &Deprecated {
        self.declaration.deprecation()
    }

    fn children(&self) -> Vec<&dyn Renderable> {
        borrow_all(&self.children)
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "Module Path", "Summary"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            self.module.path.clone(),
            text(self.class.qualified.summary.as_deref()),
        ]
    }

    fn to_tree_node(&self, predicate: Predicate<'_>) -> TreeNode {
        TreeNode::new(self.label()).with_children(grouped_tree_children(
            &self.children(),
            CLASS_GROUPS,
            predicate,
        ))
    }
}

/// A module-level function.
pub struct RenderableFunction<'a> {
    pub function: &'a FunctionDeclaration,
    pub module: &'a Module,
    pub export: Option<&'a JavaScriptExport>,
}

impl Renderable for RenderableFunction<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::Function
    }

    fn name(&self) -> &str {
        &self.function.qualified.name
    }

    fn label(&self) -> String {
        let label = format!(
            "{} {}",
            keyword("function"),
            highlight_if_deprecated(self.name(), self.deprecation())
        );
        with_summary(label, self.function.qualified.summary.as_deref())
    }

    fn deprecation(&self) -> &Deprecated {
        self.function.deprecation()
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "Return Type", "Summary"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            text(self.function.function.return_type()),
            text(self.function.qualified.summary.as_deref()),
        ]
    }
}

/// A module-level variable.
pub struct RenderableVariable<'a> {
    pub variable: &'a VariableDeclaration,
    pub module: &'a Module,
    pub export: Option<&'a JavaScriptExport>,
}

impl Renderable for RenderableVariable<'_> {
    fn kind(&self) -> RenderableKind {
        RenderableKind::Variable
    }

    fn name(&self) -> &str {
        &self.variable.property.qualified.name
    }

    fn label(&self) -> String {
        let label = format!(
            "{} {}",
            keyword("var"),
            highlight_if_deprecated(self.name(), self.deprecation())
        );
        with_summary(label, self.variable.property.qualified.summary.as_deref())
    }

    fn deprecation(&self) -> &Deprecated {
        self.variable.deprecation()
    }

    fn column_headings(&self) -> &'static [&'static str] {
        &["Name", "Type", "Summary"]
    }

    fn to_table_row(&self) -> Vec<String> {
        vec![
            highlight_if_deprecated(self.name(), self.deprecation()),
            text(self.variable.property.ty.as_ref().map(|ty| ty.text.as_str())),
            text(self.variable.property.qualified.summary.as_deref()),
        ]
    }
}
