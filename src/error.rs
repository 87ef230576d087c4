//! Error type shared by the rewriting engine, the turtle and the configuration parser.

use thiserror::Error;

/// Everything that can go wrong while configuring or rendering an L-system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LSystemError {
    /// A value was rejected at the point it was supplied (negative level,
    /// non-positive step, malformed colour, unknown command kind...).
    ///
    /// Failures in configuration text name the 1-based line number and
    /// quote the offending line.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A pop would have removed the last turtle state.
    #[error("cannot pop the last turtle state")]
    EmptyStack,

    /// A command was executed against a context that holds no turtle state.
    #[error("context has no current turtle state")]
    NoCurrentState,
}

impl LSystemError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LSystemError>;
