//! The composition protocol shared by every builder node.
//!
//! A tree of builders assembles one final text block: a parent opens a child
//! builder, the child is configured through fluent setters, and closing the
//! child renders it and folds the text into the parent's buffer under the
//! child's [`Kind`]. The parent's own render then reads those buffers back in
//! a fixed order. Rendering is pure: it only reads state, so it can be
//! repeated for inspection without double-appending anything.

use indexmap::IndexMap;

use crate::error::Result;
use crate::indent::Indent;

/// Tag identifying which node family produced a buffered fragment.
///
/// This is a closed set: the buffer map is keyed by `Kind`, so every consumer
/// matches exhaustively instead of looking types up at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Comment,
    Constant,
    Property,
    Function,
    Method,
    Condition,
    If,
    Class,
    Trait,
}

/// Per-node state: indentation plus the buffer of rendered child fragments
/// grouped by kind, in child-close order.
#[derive(Debug, Clone, Default)]
pub struct GeneratorState {
    pub(crate) indent: Indent,
    pub(crate) indentation: i32,
    generated: IndexMap<Kind, Vec<String>>,
}

impl GeneratorState {
    pub(crate) fn fold(&mut self, kind: Kind, text: String) {
        self.generated.entry(kind).or_default().push(text);
    }

    pub(crate) fn buffered(&self, kind: Kind) -> Option<String> {
        let fragments = self.generated.get(&kind)?;
        let joined = fragments.join("\n");
        Some(joined.trim_start_matches('\n').to_string())
    }
}

/// Composition contract implemented by every builder node.
///
/// Configuration setters on the concrete builders return the builder itself;
/// closing a child (its `end()`) returns the parent. Those are distinct types
/// on purpose, so a chain cannot confuse the two scopes.
pub trait Generator: Sized {
    /// The kind this node's output folds under in its parent's buffer.
    fn kind(&self) -> Kind;

    fn state(&self) -> &GeneratorState;

    fn state_mut(&mut self) -> &mut GeneratorState;

    /// Render this node's textual fragment.
    ///
    /// Pure with respect to the node's buffers; repeated calls without
    /// intervening mutation yield identical text.
    fn render(&self) -> Result<String>;

    /// Set the absolute indentation depth.
    fn set_indentation(mut self, indentation: i32) -> Self {
        self.state_mut().indentation = indentation;
        self
    }

    /// Increase the indentation depth by one level.
    fn increase_indentation(mut self) -> Self {
        self.state_mut().indentation += 1;
        self
    }

    /// Decrease the indentation depth by one level.
    fn decrease_indentation(mut self) -> Self {
        self.state_mut().indentation -= 1;
        self
    }

    /// Current indentation depth.
    fn indentation(&self) -> i32 {
        self.state().indentation
    }

    /// Indentation prefix for this node's own depth.
    fn prefix(&self) -> String {
        self.state().indent.prefix(self.state().indentation)
    }

    /// Indentation prefix for an absolute depth.
    fn prefix_at(&self, level: i32) -> String {
        self.state().indent.prefix(level)
    }

    /// All fragments buffered under `kind`, joined in close order, or `None`
    /// if no child of that kind ever contributed.
    fn buffered(&self, kind: Kind) -> Option<String> {
        self.state().buffered(kind)
    }

    /// Append a rendered child fragment under `kind`.
    fn fold(&mut self, kind: Kind, text: String) {
        self.state_mut().fold(kind, text);
    }
}

/// Nodes that collect statement lines for a braced body.
///
/// Functions, methods and condition branches implement this; a closing
/// if-chain feeds its rendered lines back through it, so conditions land in
/// the body as ordinary statements rather than buffered sub-kinds.
pub trait CodeLines {
    /// Append one statement line to the body.
    fn push_line(&mut self, line: String);
}

/// Marker parent for builders constructed at the root of a tree.
///
/// `Detached` does not implement [`Generator`], so closing a root builder is
/// rejected at compile time instead of surfacing as a runtime protocol error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_preserves_close_order() {
        let mut state = GeneratorState::default();
        state.fold(Kind::Property, "first".to_string());
        state.fold(Kind::Property, "second".to_string());
        state.fold(Kind::Method, "third".to_string());

        assert_eq!(state.buffered(Kind::Property).as_deref(), Some("first\nsecond"));
        assert_eq!(state.buffered(Kind::Method).as_deref(), Some("third"));
        assert_eq!(state.buffered(Kind::Constant), None);
    }

    #[test]
    fn test_buffered_trims_leading_separators() {
        let mut state = GeneratorState::default();
        state.fold(Kind::Condition, "\n} else {".to_string());
        assert_eq!(state.buffered(Kind::Condition).as_deref(), Some("} else {"));
    }
}
