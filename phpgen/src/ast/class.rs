//! Class and trait assembly builders.

use crate::ast::comment::{CommentBuilder, format_block};
use crate::ast::fns::MethodBuilder;
use crate::ast::property::{ConstantBuilder, PropertyBuilder};
use crate::error::{Error, Result};
use crate::generator::{Generator, GeneratorState, Kind};
use crate::value::Value;

/// Declaration state shared by class and trait assembly.
#[derive(Debug, Clone, Default)]
struct Declaration {
    namespace: Option<String>,
    name: Option<String>,
    uses: Vec<(String, Option<String>)>,
    traits: Vec<String>,
    description: Option<String>,
}

/// Assemble the fixed section order shared by classes and traits:
/// file description, namespace, uses, own comment, the opening signature,
/// trait uses, then the buffered constants, properties and methods.
///
/// Member sections concatenate in child-close order; the caller's call order
/// is the output order.
fn assemble(state: &GeneratorState, declaration: &Declaration, opener: String) -> Result<String> {
    let namespace = declaration
        .namespace
        .as_deref()
        .ok_or(Error::MissingNamespace)?;

    let mut sections: Vec<String> = Vec::new();
    if let Some(description) = &declaration.description {
        sections.push(description.clone());
    }
    sections.push(format!("namespace {namespace};"));
    sections.push(String::new());

    for (path, alias) in &declaration.uses {
        sections.push(match alias {
            Some(alias) => format!("use {path} as {alias};"),
            None => format!("use {path};"),
        });
    }
    if !declaration.uses.is_empty() {
        sections.push(String::new());
    }

    if let Some(comment) = state.buffered(Kind::Comment) {
        sections.push(comment);
    }

    sections.push(opener);
    sections.push("{".to_string());

    let inner = state.indent.prefix(1);
    for name in &declaration.traits {
        sections.push(format!("{inner}use {name};"));
    }
    if !declaration.traits.is_empty() {
        sections.push(String::new());
    }

    for kind in [Kind::Constant, Kind::Property, Kind::Method] {
        if let Some(code) = state.buffered(kind) {
            sections.push(code);
        }
    }

    sections.push("}".to_string());

    let separator = format!("\n{}", state.indent.prefix(state.indentation));
    Ok(sections.join(&separator))
}

/// Builder for a class declaration.
///
/// Classes are roots: nothing buffers a class, so there is no `end()` —
/// [`render`](Generator::render) produces the final text. A namespace and a
/// name are both mandatory; rendering without them is a configuration error.
#[derive(Debug, Clone, Default)]
pub struct ClassBuilder {
    state: GeneratorState,
    declaration: Declaration,
    extends: Option<String>,
    implements: Vec<String>,
    is_final: bool,
    is_abstract: bool,
}

impl ClassBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class namespace.
    pub fn def_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.declaration.namespace = Some(namespace.into());
        self
    }

    /// Set the class name.
    pub fn def_name(mut self, name: impl Into<String>) -> Self {
        self.declaration.name = Some(name.into());
        self
    }

    /// Add an import, optionally aliased.
    pub fn def_use(mut self, path: impl Into<String>, alias: Option<&str>) -> Self {
        self.declaration
            .uses
            .push((path.into(), alias.map(str::to_string)));
        self
    }

    /// Add a trait use inside the class body.
    pub fn def_trait(mut self, name: impl Into<String>) -> Self {
        self.declaration.traits.push(name.into());
        self
    }

    /// Set the file-level description block rendered above the namespace.
    pub fn def_description(mut self, lines: &[&str]) -> Self {
        let lines: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        self.declaration.description = Some(format_block(&lines, &self.prefix()));
        self
    }

    /// Set the parent class.
    pub fn def_extends(mut self, name: impl Into<String>) -> Self {
        self.extends = Some(name.into());
        self
    }

    /// Add an implemented interface.
    pub fn def_implements(mut self, name: impl Into<String>) -> Self {
        self.implements.push(name.into());
        self
    }

    /// Mark the class final.
    pub fn def_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Mark the class abstract.
    pub fn def_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Open the class's own doc-comment block.
    pub fn def_comment(self) -> CommentBuilder<Self> {
        let indentation = self.indentation();
        CommentBuilder::with_parent(self).set_indentation(indentation)
    }

    /// Open a constant declaration.
    pub fn def_constant(self, name: impl Into<String>) -> ConstantBuilder<Self> {
        let indentation = self.indentation();
        ConstantBuilder::with_parent(name, self)
            .set_indentation(indentation)
            .increase_indentation()
    }

    /// Open a constant with its value and doc comment in one call.
    pub fn def_typed_constant(
        self,
        name: impl Into<String>,
        value: Option<Value>,
        ty: &str,
        description: &str,
    ) -> Result<ConstantBuilder<Self>> {
        let constant = self
            .def_constant(name)
            .def_comment()
            .def_line(format!("{ty} {description}"))
            .end()?;
        Ok(match value {
            Some(value) => constant.def_value(value),
            None => constant,
        })
    }

    /// Open a property declaration.
    pub fn def_property(self, name: impl Into<String>) -> PropertyBuilder<Self> {
        let indentation = self.indentation();
        PropertyBuilder::with_parent(name, self)
            .set_indentation(indentation)
            .increase_indentation()
    }

    /// Open a property with its `@var` comment wired in one call.
    pub fn def_typed_property(
        self,
        name: impl Into<String>,
        ty: &str,
        value: Option<Value>,
        description: Option<&str>,
    ) -> Result<PropertyBuilder<Self>> {
        let property = self
            .def_property(name)
            .def_comment()
            .def_var(ty, description)
            .end()?;
        Ok(match value {
            Some(value) => property.def_value(value),
            None => property,
        })
    }

    /// Open a protected property with its `@var` comment.
    pub fn def_protected_property(
        self,
        name: impl Into<String>,
        ty: &str,
        value: Option<Value>,
        description: Option<&str>,
    ) -> Result<PropertyBuilder<Self>> {
        Ok(self
            .def_typed_property(name, ty, value, description)?
            .def_protected())
    }

    /// Open a static property with its `@var` comment.
    pub fn def_static_property(
        self,
        name: impl Into<String>,
        ty: &str,
        value: Option<Value>,
        description: Option<&str>,
    ) -> Result<PropertyBuilder<Self>> {
        Ok(self
            .def_typed_property(name, ty, value, description)?
            .def_static())
    }

    /// Open a protected static property with its `@var` comment.
    pub fn def_protected_static_property(
        self,
        name: impl Into<String>,
        ty: &str,
        value: Option<Value>,
        description: Option<&str>,
    ) -> Result<PropertyBuilder<Self>> {
        Ok(self
            .def_static_property(name, ty, value, description)?
            .def_protected())
    }

    /// Open a public method declaration.
    pub fn def_method(self, name: impl Into<String>) -> MethodBuilder<Self> {
        let indentation = self.indentation();
        MethodBuilder::with_parent(name, self)
            .set_indentation(indentation)
            .increase_indentation()
    }

    /// Open a protected method declaration.
    pub fn def_protected_method(self, name: impl Into<String>) -> MethodBuilder<Self> {
        self.def_method(name).def_protected()
    }

    /// Open a public static method declaration.
    pub fn def_static_method(self, name: impl Into<String>) -> MethodBuilder<Self> {
        self.def_method(name).def_static()
    }

    /// Open a protected static method declaration.
    pub fn def_protected_static_method(self, name: impl Into<String>) -> MethodBuilder<Self> {
        self.def_static_method(name).def_protected()
    }
}

impl Generator for ClassBuilder {
    fn kind(&self) -> Kind {
        Kind::Class
    }

    fn state(&self) -> &GeneratorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GeneratorState {
        &mut self.state
    }

    fn render(&self) -> Result<String> {
        let name = self.declaration.name.as_deref().ok_or(Error::MissingName)?;
        if self.is_final && self.is_abstract {
            return Err(Error::FinalAbstractConflict);
        }

        let mut opener = String::new();
        if self.is_final {
            opener.push_str("final ");
        }
        if self.is_abstract {
            opener.push_str("abstract ");
        }
        opener.push_str("class ");
        opener.push_str(name);
        if let Some(extends) = &self.extends {
            opener.push_str(" extends ");
            opener.push_str(extends);
        }
        if !self.implements.is_empty() {
            opener.push_str(" implements ");
            opener.push_str(&self.implements.join(", "));
        }

        assemble(&self.state, &self.declaration, opener)
    }
}

/// Builder for a trait declaration.
///
/// The same assembly as [`ClassBuilder`] with a `trait` opening signature;
/// traits have no `final`/`abstract`/`extends`/`implements` surface, so
/// those states are unrepresentable here.
#[derive(Debug, Clone, Default)]
pub struct TraitBuilder {
    state: GeneratorState,
    declaration: Declaration,
}

impl TraitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trait namespace.
    pub fn def_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.declaration.namespace = Some(namespace.into());
        self
    }

    /// Set the trait name.
    pub fn def_name(mut self, name: impl Into<String>) -> Self {
        self.declaration.name = Some(name.into());
        self
    }

    /// Add an import, optionally aliased.
    pub fn def_use(mut self, path: impl Into<String>, alias: Option<&str>) -> Self {
        self.declaration
            .uses
            .push((path.into(), alias.map(str::to_string)));
        self
    }

    /// Add a trait use inside the body.
    pub fn def_trait(mut self, name: impl Into<String>) -> Self {
        self.declaration.traits.push(name.into());
        self
    }

    /// Set the file-level description block rendered above the namespace.
    pub fn def_description(mut self, lines: &[&str]) -> Self {
        let lines: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        self.declaration.description = Some(format_block(&lines, &self.prefix()));
        self
    }

    /// Open the trait's own doc-comment block.
    pub fn def_comment(self) -> CommentBuilder<Self> {
        let indentation = self.indentation();
        CommentBuilder::with_parent(self).set_indentation(indentation)
    }

    /// Open a constant declaration.
    pub fn def_constant(self, name: impl Into<String>) -> ConstantBuilder<Self> {
        let indentation = self.indentation();
        ConstantBuilder::with_parent(name, self)
            .set_indentation(indentation)
            .increase_indentation()
    }

    /// Open a property declaration.
    pub fn def_property(self, name: impl Into<String>) -> PropertyBuilder<Self> {
        let indentation = self.indentation();
        PropertyBuilder::with_parent(name, self)
            .set_indentation(indentation)
            .increase_indentation()
    }

    /// Open a property with its `@var` comment wired in one call.
    pub fn def_typed_property(
        self,
        name: impl Into<String>,
        ty: &str,
        value: Option<Value>,
        description: Option<&str>,
    ) -> Result<PropertyBuilder<Self>> {
        let property = self
            .def_property(name)
            .def_comment()
            .def_var(ty, description)
            .end()?;
        Ok(match value {
            Some(value) => property.def_value(value),
            None => property,
        })
    }

    /// Open a public method declaration.
    pub fn def_method(self, name: impl Into<String>) -> MethodBuilder<Self> {
        let indentation = self.indentation();
        MethodBuilder::with_parent(name, self)
            .set_indentation(indentation)
            .increase_indentation()
    }
}

impl Generator for TraitBuilder {
    fn kind(&self) -> Kind {
        Kind::Trait
    }

    fn state(&self) -> &GeneratorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GeneratorState {
        &mut self.state
    }

    fn render(&self) -> Result<String> {
        let name = self.declaration.name.as_deref().ok_or(Error::MissingName)?;
        assemble(&self.state, &self.declaration, format!("trait {name}"))
    }
}
