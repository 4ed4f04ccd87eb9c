use std::io;

use thiserror::Error;

/// The error taxonomy shared by every crate in the workspace.
///
/// This mirrors the split used throughout the codebase between a small set
/// of well-known failure categories and a pass-through variant for the
/// surrounding I/O layer.
#[derive(Error, Debug)]
pub enum EgameError {
    /// Malformed input: a missing attribute, a non-integer effect, an owner
    /// outside `{0,1}`, or an edge endpoint that is not a known vertex.
    #[error("parse error: {0}")]
    ParseError(String),

    /// A consistency check the solver or strategy extractor relies on did
    /// not hold. This indicates a bug, not a malformed input, and should
    /// never be caught and retried.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The requested output format tag is not recognised.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Passed straight through from the surrounding I/O layer.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl EgameError {
    /// Constructs a [`EgameError::ParseError`] from a formattable message.
    pub fn parse(message: impl Into<String>) -> Self {
        EgameError::ParseError(message.into())
    }

    /// Constructs a [`EgameError::InvariantViolation`] from a formattable message.
    pub fn invariant(message: impl Into<String>) -> Self {
        EgameError::InvariantViolation(message.into())
    }

    /// Constructs a [`EgameError::UnsupportedFormat`] for the given tag.
    pub fn unsupported_format(tag: impl Into<String>) -> Self {
        EgameError::UnsupportedFormat(tag.into())
    }
}

/// The result type used throughout the workspace.
pub type EgameResult<T> = Result<T, EgameError>;
