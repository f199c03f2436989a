//! Class property and class constant builders.

use crate::ast::comment::CommentBuilder;
use crate::error::Result;
use crate::generator::{Detached, Generator, GeneratorState, Kind};
use crate::value::Value;

/// OOP member visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// Builder for a class property declaration.
///
/// Renders `visibility [static] $name [= value];` with any attached doc
/// block above it. A `null` value is treated as "no initializer".
#[derive(Debug, Clone)]
pub struct PropertyBuilder<P = Detached> {
    parent: P,
    state: GeneratorState,
    name: String,
    value: Option<Value>,
    visibility: Visibility,
    is_static: bool,
}

impl PropertyBuilder<Detached> {
    /// Create a standalone property builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_parent(name, Detached)
    }
}

impl<P> PropertyBuilder<P> {
    pub(crate) fn with_parent(name: impl Into<String>, parent: P) -> Self {
        Self {
            parent,
            state: GeneratorState::default(),
            name: name.into(),
            value: None,
            visibility: Visibility::default(),
            is_static: false,
        }
    }

    /// Set public visibility.
    pub fn def_public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    /// Set protected visibility.
    pub fn def_protected(mut self) -> Self {
        self.visibility = Visibility::Protected;
        self
    }

    /// Set private visibility.
    pub fn def_private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    /// Mark the property static.
    pub fn def_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set the property value.
    pub fn def_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Open the property's doc-comment block.
    pub fn def_comment(self) -> CommentBuilder<Self> {
        let indentation = self.state.indentation;
        CommentBuilder::with_parent(self).set_indentation(indentation)
    }
}

impl<P: Generator> PropertyBuilder<P> {
    /// Render the property and fold it into the parent, returning the parent.
    pub fn end(self) -> Result<P> {
        let text = self.render()?;
        let mut parent = self.parent;
        if !text.is_empty() {
            parent.fold(Kind::Property, text);
        }
        Ok(parent)
    }
}

impl<P> Generator for PropertyBuilder<P> {
    fn kind(&self) -> Kind {
        Kind::Property
    }

    fn state(&self) -> &GeneratorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GeneratorState {
        &mut self.state
    }

    fn render(&self) -> Result<String> {
        let mut line = format!("{}{} ", self.prefix(), self.visibility.as_str());
        if self.is_static {
            line.push_str("static ");
        }
        line.push('$');
        line.push_str(&self.name);
        if let Some(value) = &self.value {
            if !matches!(value, Value::Null) {
                line.push_str(" = ");
                line.push_str(&value.render(self.state.indent, self.indentation()));
            }
        }
        line.push(';');

        Ok(match self.buffered(Kind::Comment) {
            Some(comment) => format!("{comment}\n{line}"),
            None => line,
        })
    }
}

/// Builder for a class constant declaration.
///
/// Renders `const NAME [= value];` with any attached doc block above it.
#[derive(Debug, Clone)]
pub struct ConstantBuilder<P = Detached> {
    parent: P,
    state: GeneratorState,
    name: String,
    value: Option<Value>,
}

impl ConstantBuilder<Detached> {
    /// Create a standalone constant builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_parent(name, Detached)
    }
}

impl<P> ConstantBuilder<P> {
    pub(crate) fn with_parent(name: impl Into<String>, parent: P) -> Self {
        Self {
            parent,
            state: GeneratorState::default(),
            name: name.into(),
            value: None,
        }
    }

    /// Set the constant value.
    pub fn def_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Open the constant's doc-comment block.
    pub fn def_comment(self) -> CommentBuilder<Self> {
        let indentation = self.state.indentation;
        CommentBuilder::with_parent(self).set_indentation(indentation)
    }
}

impl<P: Generator> ConstantBuilder<P> {
    /// Render the constant and fold it into the parent, returning the parent.
    pub fn end(self) -> Result<P> {
        let text = self.render()?;
        let mut parent = self.parent;
        if !text.is_empty() {
            parent.fold(Kind::Constant, text);
        }
        Ok(parent)
    }
}

impl<P> Generator for ConstantBuilder<P> {
    fn kind(&self) -> Kind {
        Kind::Constant
    }

    fn state(&self) -> &GeneratorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GeneratorState {
        &mut self.state
    }

    fn render(&self) -> Result<String> {
        let mut line = format!("{}const {}", self.prefix(), self.name);
        if let Some(value) = &self.value {
            if !matches!(value, Value::Null) {
                line.push_str(" = ");
                line.push_str(&value.render(self.state.indent, self.indentation()));
            }
        }
        line.push(';');

        Ok(match self.buffered(Kind::Comment) {
            Some(comment) => format!("{comment}\n{line}"),
            None => line,
        })
    }
}
