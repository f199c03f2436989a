//! Fluent builders for generating PHP class source code.
//!
//! A tree of generator nodes assembles one final text block: classes nest
//! constants, properties and methods; methods nest doc comments and
//! condition chains. Each node renders its own fragment and folds it into
//! its parent when closed.
//!
//! # Core primitives
//!
//! - [`Generator`] - The composition protocol every builder implements
//! - [`Kind`] - Tag grouping buffered child output by node family
//! - [`Indent`] - Indentation configuration
//! - [`Value`] - Literal value serialization (scalars and nested arrays)
//!
//! # Builders
//!
//! - [`ClassBuilder`], [`TraitBuilder`] - Top-level declarations
//! - [`PropertyBuilder`], [`ConstantBuilder`] - Class members
//! - [`FunctionBuilder`], [`MethodBuilder`] - Callables with doc blocks
//! - [`IfBuilder`], [`ConditionBuilder`] - Condition chains
//! - [`CommentBuilder`] - Doc-comment blocks
//!
//! # Example
//!
//! ```
//! use phpgen::{ClassBuilder, Generator};
//!
//! # fn main() -> phpgen::Result<()> {
//! let code = ClassBuilder::new()
//!     .def_namespace("app\\models")
//!     .def_name("User")
//!     .def_method("save")
//!     .def_line("return true;")
//!     .end()?
//!     .render()?;
//!
//! assert!(code.starts_with("namespace app\\models;"));
//! # Ok(())
//! # }
//! ```

mod error;
mod generator;
mod indent;
mod value;

pub mod ast;

pub use ast::{
    Argument, ClassBuilder, CommentBuilder, ConditionBuilder, ConstantBuilder, DocHost,
    FunctionBuilder, FunctionCommentBuilder, IfBuilder, MethodBuilder, PropertyBuilder,
    TraitBuilder, Visibility,
};
pub use error::{Error, Result};
pub use generator::{CodeLines, Detached, Generator, GeneratorState, Kind};
pub use indent::Indent;
pub use value::{Value, is_expression};
