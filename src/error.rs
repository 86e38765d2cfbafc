//! Error types for the selector engine

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Selector engine errors.
///
/// Malformed selector text is deliberately *not* an error: the parser degrades
/// to a best-effort structure (wildcard step, dropped fragment, permanently
/// unsatisfiable predicate) so that exploratory selectors fail to match rather
/// than abort. The only error that propagates out of the core is a selector
/// worker dying mid-evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Task error: {0}")]
    Task(String),
}

impl serde::ser::Error for Error {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Error::Serialization(msg.to_string())
    }
}
