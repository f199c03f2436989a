//! Builders for each PHP node kind.
//!
//! Every builder follows the same protocol: open it from its parent, chain
//! configuration setters, then `end()` to render and fold the output into
//! the parent. See [`crate::generator`] for the protocol itself.

mod class;
mod comment;
mod conditions;
mod fns;
mod property;

pub use class::{ClassBuilder, TraitBuilder};
pub use comment::CommentBuilder;
pub use conditions::{ConditionBuilder, IfBuilder};
pub use fns::{Argument, DocHost, FunctionBuilder, FunctionCommentBuilder, MethodBuilder};
pub use property::{ConstantBuilder, PropertyBuilder, Visibility};
