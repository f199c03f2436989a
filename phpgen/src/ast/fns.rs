//! Function and method builders.

use crate::ast::comment::{format_block, param_line, return_line};
use crate::ast::conditions::IfBuilder;
use crate::error::Result;
use crate::generator::{CodeLines, Detached, Generator, GeneratorState, Kind};
use crate::indent::Indent;
use crate::value::Value;

use super::Visibility;

/// One declared argument of a function or method.
#[derive(Debug, Clone)]
pub struct Argument {
    name: String,
    ty: Option<String>,
    description: Option<String>,
    default: Option<Value>,
}

impl Argument {
    /// Create an untyped argument.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            description: None,
            default: None,
        }
    }

    /// Create a typed argument.
    pub fn typed(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name).ty(ty)
    }

    /// Set the type hint.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set the description used for the `@param` doc line.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default value.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn signature(&self, indent: Indent, level: i32) -> String {
        let mut out = String::new();
        if let Some(ty) = &self.ty {
            out.push_str(ty);
            out.push(' ');
        }
        out.push('$');
        out.push_str(&self.name);
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(&default.render(indent, level));
        }
        out
    }
}

/// Free-text doc lines attached by a [`FunctionCommentBuilder`].
#[derive(Debug, Clone, Default)]
struct DocLines {
    lines: Vec<String>,
    returns: Option<String>,
}

/// Signature, body and doc state shared by functions and methods.
#[derive(Debug, Clone)]
struct FunctionCore {
    name: String,
    arguments: Vec<Argument>,
    return_type: Option<String>,
    lines: Vec<String>,
    doc: Option<DocLines>,
}

impl FunctionCore {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            return_type: None,
            lines: Vec::new(),
            doc: None,
        }
    }

    /// Synthesize the doc block: free lines, then one `@param` per declared
    /// argument in declaration order, then the `@return` tag. The argument
    /// list is read at render time, so arguments declared after the doc
    /// block was closed still contribute.
    fn doc_block(&self, prefix: &str) -> Option<String> {
        let doc = self.doc.as_ref()?;
        let mut lines = doc.lines.clone();
        for argument in &self.arguments {
            lines.push(param_line(
                &argument.name,
                argument.ty.as_deref(),
                argument.description.as_deref(),
            ));
        }
        if let Some(returns) = &doc.returns {
            lines.push(returns.clone());
        }

        let block = format_block(&lines, prefix);
        (!block.is_empty()).then_some(block)
    }

    fn render(&self, modifiers: &str, state: &GeneratorState) -> String {
        let prefix = state.indent.prefix(state.indentation);
        let inner = state.indent.prefix(state.indentation + 1);

        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.signature(state.indent, state.indentation))
            .collect::<Vec<_>>()
            .join(", ");
        let return_type = self
            .return_type
            .as_ref()
            .map(|ty| format!(" : {ty}"))
            .unwrap_or_default();

        let mut out = String::new();
        if let Some(doc) = self.doc_block(&prefix) {
            out.push_str(&doc);
            out.push('\n');
        }
        out.push_str(&prefix);
        out.push_str(modifiers);
        out.push_str("function ");
        out.push_str(&self.name);
        out.push('(');
        out.push_str(&arguments);
        out.push(')');
        out.push_str(&return_type);
        out.push('\n');
        out.push_str(&prefix);
        out.push('{');
        for line in &self.lines {
            out.push('\n');
            out.push_str(&inner);
            out.push_str(line);
        }
        out.push('\n');
        out.push_str(&prefix);
        out.push('}');
        out
    }
}

/// Builder for a plain function.
#[derive(Debug, Clone)]
pub struct FunctionBuilder<P = Detached> {
    parent: P,
    state: GeneratorState,
    core: FunctionCore,
}

impl FunctionBuilder<Detached> {
    /// Create a standalone function builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_parent(name, Detached)
    }
}

impl<P> FunctionBuilder<P> {
    pub(crate) fn with_parent(name: impl Into<String>, parent: P) -> Self {
        Self {
            parent,
            state: GeneratorState::default(),
            core: FunctionCore::new(name),
        }
    }

    /// Declare an argument.
    pub fn def_argument(mut self, argument: Argument) -> Self {
        self.core.arguments.push(argument);
        self
    }

    /// Set the return type hint.
    pub fn def_return_type(mut self, ty: impl Into<String>) -> Self {
        self.core.return_type = Some(ty.into());
        self
    }

    /// Append one body statement line.
    pub fn def_line(mut self, line: impl Into<String>) -> Self {
        self.core.lines.push(line.into());
        self
    }

    /// Open the function's doc-comment block.
    pub fn def_comment(self) -> FunctionCommentBuilder<Self> {
        FunctionCommentBuilder::with_parent(self)
    }

    /// Open a condition chain inside the body.
    pub fn def_if(self) -> IfBuilder<Self> {
        IfBuilder::with_parent(self)
    }
}

impl<P: Generator> FunctionBuilder<P> {
    /// Render the function and fold it into the parent, returning the parent.
    pub fn end(self) -> Result<P> {
        let text = self.render()?;
        let mut parent = self.parent;
        if !text.is_empty() {
            parent.fold(Kind::Function, text);
        }
        Ok(parent)
    }
}

impl<P> Generator for FunctionBuilder<P> {
    fn kind(&self) -> Kind {
        Kind::Function
    }

    fn state(&self) -> &GeneratorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GeneratorState {
        &mut self.state
    }

    fn render(&self) -> Result<String> {
        Ok(self.core.render("", &self.state))
    }
}

impl<P> CodeLines for FunctionBuilder<P> {
    fn push_line(&mut self, line: String) {
        self.core.lines.push(line);
    }
}

impl<P> DocHost for FunctionBuilder<P> {
    fn attach_doc(&mut self, lines: Vec<String>, returns: Option<String>) {
        self.core.doc = Some(DocLines { lines, returns });
    }
}

/// Builder for a class method.
///
/// A function with visibility and an optional `static` modifier.
#[derive(Debug, Clone)]
pub struct MethodBuilder<P = Detached> {
    parent: P,
    state: GeneratorState,
    core: FunctionCore,
    visibility: Visibility,
    is_static: bool,
}

impl MethodBuilder<Detached> {
    /// Create a standalone method builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_parent(name, Detached)
    }
}

impl<P> MethodBuilder<P> {
    pub(crate) fn with_parent(name: impl Into<String>, parent: P) -> Self {
        Self {
            parent,
            state: GeneratorState::default(),
            core: FunctionCore::new(name),
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

    /// Mark the method static.
    pub fn def_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Declare an argument.
    pub fn def_argument(mut self, argument: Argument) -> Self {
        self.core.arguments.push(argument);
        self
    }

    /// Set the return type hint.
    pub fn def_return_type(mut self, ty: impl Into<String>) -> Self {
        self.core.return_type = Some(ty.into());
        self
    }

    /// Append one body statement line.
    pub fn def_line(mut self, line: impl Into<String>) -> Self {
        self.core.lines.push(line.into());
        self
    }

    /// Open the method's doc-comment block.
    pub fn def_comment(self) -> FunctionCommentBuilder<Self> {
        FunctionCommentBuilder::with_parent(self)
    }

    /// Open a condition chain inside the body.
    pub fn def_if(self) -> IfBuilder<Self> {
        IfBuilder::with_parent(self)
    }
}

impl<P: Generator> MethodBuilder<P> {
    /// Render the method and fold it into the parent, returning the parent.
    pub fn end(self) -> Result<P> {
        let text = self.render()?;
        let mut parent = self.parent;
        if !text.is_empty() {
            parent.fold(Kind::Method, text);
        }
        Ok(parent)
    }
}

impl<P> Generator for MethodBuilder<P> {
    fn kind(&self) -> Kind {
        Kind::Method
    }

    fn state(&self) -> &GeneratorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GeneratorState {
        &mut self.state
    }

    fn render(&self) -> Result<String> {
        let mut modifiers = format!("{} ", self.visibility.as_str());
        if self.is_static {
            modifiers.push_str("static ");
        }
        Ok(self.core.render(&modifiers, &self.state))
    }
}

impl<P> CodeLines for MethodBuilder<P> {
    fn push_line(&mut self, line: String) {
        self.core.lines.push(line);
    }
}

impl<P> DocHost for MethodBuilder<P> {
    fn attach_doc(&mut self, lines: Vec<String>, returns: Option<String>) {
        self.core.doc = Some(DocLines { lines, returns });
    }
}

/// Builders that carry an incrementally synthesized doc block.
pub trait DocHost {
    /// Attach the free-text doc lines and the optional `@return` tag.
    fn attach_doc(&mut self, lines: Vec<String>, returns: Option<String>);
}

/// Doc-comment block for a function or method.
///
/// Only free-text lines and the `@return` tag are written here; the `@param`
/// lines are synthesized by the host from its argument list when it renders,
/// so the block stays in sync no matter when it was closed relative to the
/// argument declarations.
#[derive(Debug, Clone)]
pub struct FunctionCommentBuilder<P> {
    parent: P,
    lines: Vec<String>,
    returns: Option<String>,
}

impl<P> FunctionCommentBuilder<P> {
    fn with_parent(parent: P) -> Self {
        Self {
            parent,
            lines: Vec::new(),
            returns: None,
        }
    }

    /// Add a free-text comment line.
    pub fn def_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Set the `@return` tag.
    pub fn def_return(mut self, ty: &str, description: Option<&str>) -> Self {
        self.returns = Some(return_line(ty, description));
        self
    }
}

impl<P: DocHost> FunctionCommentBuilder<P> {
    /// Attach the accumulated lines to the host and return it.
    pub fn end(self) -> P {
        let Self {
            mut parent,
            lines,
            returns,
        } = self;
        parent.attach_doc(lines, returns);
        parent
    }
}
