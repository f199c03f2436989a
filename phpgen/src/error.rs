use thiserror::Error;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while rendering a generator tree.
///
/// All of these are reported synchronously at render (or close) time; the
/// engine never retries and never degrades silently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A class or trait was rendered without a namespace.
    #[error("namespace should be defined before rendering")]
    MissingNamespace,

    /// A class or trait was rendered without a name.
    #[error("name should be defined before rendering")]
    MissingName,

    /// A class was marked both `final` and `abstract`.
    #[error("a class cannot be both final and abstract")]
    FinalAbstractConflict,

    /// An else branch was opened as the first condition of a chain.
    #[error("cannot open an else branch before any condition")]
    OrphanElse,
}
