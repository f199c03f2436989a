//! Doc-comment block builder.

use crate::error::Result;
use crate::generator::{Detached, Generator, GeneratorState, Kind};

/// Builder for `/** … */` doc blocks.
///
/// Collects free-text lines and documentation tags; a single line renders in
/// the compact one-line form, several lines render as a block. An empty
/// builder renders nothing and contributes nothing to its parent.
#[derive(Debug, Clone)]
pub struct CommentBuilder<P = Detached> {
    parent: P,
    state: GeneratorState,
    lines: Vec<String>,
}

impl CommentBuilder<Detached> {
    /// Create a standalone comment block.
    pub fn new() -> Self {
        Self::with_parent(Detached)
    }
}

impl Default for CommentBuilder<Detached> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> CommentBuilder<P> {
    pub(crate) fn with_parent(parent: P) -> Self {
        Self {
            parent,
            state: GeneratorState::default(),
            lines: Vec::new(),
        }
    }

    /// Add a free-text comment line.
    pub fn def_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Add a `@var` tag line.
    pub fn def_var(mut self, ty: &str, description: Option<&str>) -> Self {
        let mut line = format!("@var {ty}");
        if let Some(description) = description {
            line.push(' ');
            line.push_str(description);
        }
        self.lines.push(line);
        self
    }

    /// Add a `@param` tag line.
    pub fn def_param(mut self, name: &str, ty: Option<&str>, description: Option<&str>) -> Self {
        self.lines.push(param_line(name, ty, description));
        self
    }

    /// Add a `@return` tag line.
    pub fn def_return(mut self, ty: &str, description: Option<&str>) -> Self {
        self.lines.push(return_line(ty, description));
        self
    }

    /// Add a `@method` tag line; `arguments` are `(name, type)` pairs.
    pub fn def_method(mut self, name: &str, ty: &str, arguments: &[(&str, &str)]) -> Self {
        let arguments = arguments
            .iter()
            .map(|(name, ty)| format!("{ty} ${name}"))
            .collect::<Vec<_>>()
            .join(", ");
        self.lines.push(format!("@method {ty} {name}({arguments})"));
        self
    }
}

impl<P: Generator> CommentBuilder<P> {
    /// Render the block and fold it into the parent, returning the parent.
    pub fn end(self) -> Result<P> {
        let text = self.render()?;
        let mut parent = self.parent;
        if !text.is_empty() {
            parent.fold(Kind::Comment, text);
        }
        Ok(parent)
    }
}

impl<P> Generator for CommentBuilder<P> {
    fn kind(&self) -> Kind {
        Kind::Comment
    }

    fn state(&self) -> &GeneratorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GeneratorState {
        &mut self.state
    }

    fn render(&self) -> Result<String> {
        Ok(format_block(&self.lines, &self.prefix()))
    }
}

pub(crate) fn param_line(name: &str, ty: Option<&str>, description: Option<&str>) -> String {
    let mut line = String::from("@param");
    if let Some(ty) = ty {
        line.push(' ');
        line.push_str(ty);
    }
    line.push_str(" $");
    line.push_str(name);
    if let Some(description) = description {
        line.push(' ');
        line.push_str(description);
    }
    line
}

pub(crate) fn return_line(ty: &str, description: Option<&str>) -> String {
    let mut line = format!("@return {ty}");
    if let Some(description) = description {
        line.push(' ');
        line.push_str(description);
    }
    line
}

/// Format comment lines into a doc block, every line at the given prefix.
///
/// One line collapses to the compact `/** line */` form. Empty lines are
/// dropped; an all-empty input yields an empty string.
pub(crate) fn format_block(lines: &[String], prefix: &str) -> String {
    let lines: Vec<&String> = lines.iter().filter(|line| !line.is_empty()).collect();
    match lines.as_slice() {
        [] => String::new(),
        [line] => format!("{prefix}/** {line} */"),
        lines => {
            let mut out = format!("{prefix}/**");
            for line in lines {
                out.push('\n');
                out.push_str(prefix);
                out.push_str(" * ");
                out.push_str(line);
            }
            out.push('\n');
            out.push_str(prefix);
            out.push_str(" */");
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_line_comment() {
        let generated = CommentBuilder::new()
            .def_line("Test comment line")
            .def_line("Test comment line2")
            .render()
            .unwrap();

        assert_eq!(
            generated,
            "/**\n * Test comment line\n * Test comment line2\n */"
        );
    }

    #[test]
    fn test_single_line_comment() {
        let generated = CommentBuilder::new()
            .def_line("Test comment line")
            .render()
            .unwrap();

        assert_eq!(generated, "/** Test comment line */");
    }

    #[test]
    fn test_empty_comment_renders_nothing() {
        assert_eq!(CommentBuilder::new().render().unwrap(), "");
    }

    #[test]
    fn test_var_comment() {
        let generated = CommentBuilder::new()
            .def_var("testType", Some("Test description"))
            .render()
            .unwrap();

        assert_eq!(generated, "/** @var testType Test description */");
    }

    #[test]
    fn test_var_multiline_comment() {
        let generated = CommentBuilder::new()
            .def_line("Test comment")
            .def_var("testType", Some("Test description"))
            .render()
            .unwrap();

        assert_eq!(
            generated,
            "/**\n * Test comment\n * @var testType Test description\n */"
        );
    }

    #[test]
    fn test_param_comment() {
        let generated = CommentBuilder::new()
            .def_line("Test comment")
            .def_param("testName", Some("testType"), Some("Test description"))
            .render()
            .unwrap();

        assert_eq!(
            generated,
            "/**\n * Test comment\n * @param testType $testName Test description\n */"
        );
    }

    #[test]
    fn test_return_comment() {
        let generated = CommentBuilder::new()
            .def_line("Test comment")
            .def_return("ReturnType", Some("Return description"))
            .render()
            .unwrap();

        assert_eq!(
            generated,
            "/**\n * Test comment\n * @return ReturnType Return description\n */"
        );
    }

    #[test]
    fn test_method_comment() {
        let generated = CommentBuilder::new()
            .def_line("Test comment")
            .def_method("testMethod", "testType", &[])
            .render()
            .unwrap();

        assert_eq!(
            generated,
            "/**\n * Test comment\n * @method testType testMethod()\n */"
        );
    }

    #[test]
    fn test_method_with_arguments_comment() {
        let generated = CommentBuilder::new()
            .def_line("Test comment")
            .def_method("testMethod", "testType", &[("testArgument", "TestType")])
            .render()
            .unwrap();

        assert_eq!(
            generated,
            "/**\n * Test comment\n * @method testType testMethod(TestType $testArgument)\n */"
        );
    }

    #[test]
    fn test_indented_block() {
        let generated = CommentBuilder::new()
            .def_line("First")
            .def_line("Second")
            .set_indentation(1)
            .render()
            .unwrap();

        assert_eq!(generated, "    /**\n     * First\n     * Second\n     */");
    }

    #[test]
    fn test_render_is_idempotent() {
        let comment = CommentBuilder::new().def_line("Once");
        assert_eq!(comment.render().unwrap(), comment.render().unwrap());
    }
}
