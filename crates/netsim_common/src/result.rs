//! Common result and error types for internal invariant failures.

/// The result type for operations that can only fail because of a bug.
///
/// `Err` indicates an unrecoverable internal error, never a problem with the
/// user's netlist. Malformed input is rejected earlier with a typed parse or
/// resolve error, so by the time a [`NetsimResult`] is returned its inputs
/// are already known to be well formed.
pub type NetsimResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug in netsim, not a user input problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal simulator error: {message}")]
pub struct InternalError {
    /// Description of the violated invariant.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
