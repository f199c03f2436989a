//! Condition chain builders (`if` / `elseif` / `else`).

use crate::error::{Error, Result};
use crate::generator::{CodeLines, Detached, Generator, GeneratorState, Kind};

/// Builder for an `if` / `elseif` / `else` chain.
///
/// Branches are opened in order with [`def_condition`](Self::def_condition)
/// and [`def_else`](Self::def_else); the first branch renders the `if`
/// opener, every later one chains with `} elseif (…) {` or `} else {`.
/// Closing the chain appends the final `}` and feeds the whole statement
/// line by line into the enclosing body, so it lands between the statements
/// that surround it instead of in a buffered section.
#[derive(Debug, Clone)]
pub struct IfBuilder<P = Detached> {
    parent: P,
    state: GeneratorState,
    has_condition: bool,
}

impl IfBuilder<Detached> {
    /// Create a standalone condition chain.
    pub fn new() -> Self {
        Self::with_parent(Detached)
    }
}

impl Default for IfBuilder<Detached> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> IfBuilder<P> {
    pub(crate) fn with_parent(parent: P) -> Self {
        Self {
            parent,
            state: GeneratorState::default(),
            has_condition: false,
        }
    }

    /// Open a branch with the given condition expression.
    ///
    /// An empty expression opens an else branch and is only legal once a
    /// condition has been opened; the misuse is reported when the branch
    /// closes, before any text reaches a buffer.
    pub fn def_condition(mut self, expression: impl Into<String>) -> ConditionBuilder<Self> {
        let chained = self.has_condition;
        self.has_condition = true;
        let indentation = self.indentation();
        ConditionBuilder::with_parent(expression.into(), chained, self).set_indentation(indentation)
    }

    /// Open the final `else` branch.
    pub fn def_else(self) -> ConditionBuilder<Self> {
        self.def_condition("")
    }
}

impl<P: CodeLines> IfBuilder<P> {
    /// Render the chain and feed its lines into the enclosing body,
    /// returning the parent.
    pub fn end(self) -> Result<P> {
        let text = self.render()?;
        let mut parent = self.parent;
        for line in text.lines() {
            parent.push_line(line.to_string());
        }
        Ok(parent)
    }
}

impl<P> Generator for IfBuilder<P> {
    fn kind(&self) -> Kind {
        Kind::If
    }

    fn state(&self) -> &GeneratorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GeneratorState {
        &mut self.state
    }

    fn render(&self) -> Result<String> {
        let mut out = self.buffered(Kind::Condition).unwrap_or_default();
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.prefix());
        out.push('}');
        Ok(out)
    }
}

/// One branch of a condition chain.
///
/// Buffers its body lines one level deeper than the opener.
#[derive(Debug, Clone)]
pub struct ConditionBuilder<P = IfBuilder> {
    parent: P,
    state: GeneratorState,
    expression: String,
    chained: bool,
    lines: Vec<String>,
}

impl<P> ConditionBuilder<P> {
    fn with_parent(expression: String, chained: bool, parent: P) -> Self {
        Self {
            parent,
            state: GeneratorState::default(),
            expression,
            chained,
            lines: Vec::new(),
        }
    }

    /// Append one statement line to the branch body.
    pub fn def_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Open a nested condition chain inside this branch.
    pub fn def_if(self) -> IfBuilder<Self> {
        IfBuilder::with_parent(self)
    }
}

impl<P: Generator> ConditionBuilder<P> {
    /// Render the branch and fold it into the chain, returning the chain.
    pub fn end(self) -> Result<P> {
        let text = self.render()?;
        let mut parent = self.parent;
        if !text.is_empty() {
            parent.fold(Kind::Condition, text);
        }
        Ok(parent)
    }
}

impl<P> Generator for ConditionBuilder<P> {
    fn kind(&self) -> Kind {
        Kind::Condition
    }

    fn state(&self) -> &GeneratorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GeneratorState {
        &mut self.state
    }

    fn render(&self) -> Result<String> {
        let prefix = self.prefix();
        let inner = self.prefix_at(self.indentation() + 1);

        let mut out = if self.expression.is_empty() {
            if !self.chained {
                return Err(Error::OrphanElse);
            }
            format!("{prefix}}} else {{")
        } else if self.chained {
            format!("{prefix}}} elseif ({}) {{", self.expression)
        } else {
            format!("{prefix}if ({}) {{", self.expression)
        };
        for line in &self.lines {
            out.push('\n');
            out.push_str(&inner);
            out.push_str(line);
        }
        Ok(out)
    }
}

impl<P> CodeLines for ConditionBuilder<P> {
    fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_condition() -> Result<()> {
        let generated = IfBuilder::new()
            .def_condition("$a === 1")
            .def_line("$b = 2;")
            .end()?
            .render()?;

        assert_eq!(generated, "if ($a === 1) {\n    $b = 2;\n}");
        Ok(())
    }

    #[test]
    fn test_full_chain() -> Result<()> {
        let generated = IfBuilder::new()
            .def_condition("a")
            .def_line("x;")
            .end()?
            .def_condition("b")
            .def_line("y;")
            .end()?
            .def_else()
            .def_line("z;")
            .end()?
            .render()?;

        assert_eq!(
            generated,
            "if (a) {\n    x;\n} elseif (b) {\n    y;\n} else {\n    z;\n}"
        );
        Ok(())
    }

    #[test]
    fn test_orphan_else_fails() {
        let result = IfBuilder::new().def_else().def_line("z;").end();
        assert_eq!(result.unwrap_err(), Error::OrphanElse);
    }

    #[test]
    fn test_orphan_else_contributes_no_text() {
        // The failing branch never reaches the chain's buffer.
        let chain = IfBuilder::new();
        let branch = chain.def_else();
        assert_eq!(branch.render().unwrap_err(), Error::OrphanElse);
    }

    #[test]
    fn test_empty_expression_is_else() {
        let generated = IfBuilder::new()
            .def_condition("a")
            .end()
            .unwrap()
            .def_condition("")
            .def_line("fallback();")
            .end()
            .unwrap()
            .render()
            .unwrap();

        assert_eq!(generated, "if (a) {\n} else {\n    fallback();\n}");
    }

    #[test]
    fn test_indented_chain() -> Result<()> {
        let generated = IfBuilder::new()
            .set_indentation(1)
            .def_condition("$ready")
            .def_line("run();")
            .end()?
            .render()?;

        assert_eq!(generated, "    if ($ready) {\n        run();\n    }");
        Ok(())
    }

    #[test]
    fn test_nested_chain_feeds_branch_body() -> Result<()> {
        let generated = IfBuilder::new()
            .def_condition("a")
            .def_line("first();")
            .def_if()
            .def_condition("b")
            .def_line("second();")
            .end()?
            .end()?
            .end()?
            .render()?;

        assert_eq!(
            generated,
            "if (a) {\n    first();\n    if (b) {\n        second();\n    }\n}"
        );
        Ok(())
    }

    #[test]
    fn test_render_is_idempotent() -> Result<()> {
        let chain = IfBuilder::new().def_condition("a").def_line("x;").end()?;
        assert_eq!(chain.render()?, chain.render()?);
        Ok(())
    }
}
