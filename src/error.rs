//! Error taxonomy for sequence pipelines.
//!
//! Building a pipeline and running it are both synchronous; an operation
//! either produces its full result or returns one of these errors. Nothing is
//! retried and no partial output escapes a failed terminal.

use thiserror::Error;

/// Errors raised by sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A positional argument (skip/limit count, slice bounds) is out of range.
    #[error("invalid argument to `{op}`: {message}")]
    InvalidArgument {
        /// Operation that rejected the argument.
        op: &'static str,
        /// Human-readable description of the violated bound.
        message: String,
    },

    /// Two elements mapped to the same key and no merge function was supplied.
    #[error("duplicate key {key} (attempted merging values {existing} and {incoming})")]
    DuplicateKey {
        /// Debug rendering of the colliding key.
        key: String,
        /// Debug rendering of the value already stored under `key`.
        existing: String,
        /// Debug rendering of the value that collided.
        incoming: String,
    },

    /// A type-erased stage received a stream of an unexpected element type.
    ///
    /// Well-typed use of [`Sequence`](crate::Sequence) never produces this.
    #[error("stage `{stage}` expected elements of type {expected}")]
    TypeMismatch {
        /// Stage that performed the downcast.
        stage: &'static str,
        /// Type name the stage expected.
        expected: &'static str,
    },
}

impl SeqError {
    pub(crate) fn invalid_argument(op: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            op,
            message: message.into(),
        }
    }

    pub(crate) fn type_mismatch<T>(stage: &'static str) -> Self {
        Self::TypeMismatch {
            stage,
            expected: std::any::type_name::<T>(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeqError>;

/// Validate a non-negative count argument and convert it to `usize`.
pub(crate) fn non_negative(op: &'static str, name: &str, n: i64) -> Result<usize> {
    usize::try_from(n)
        .map_err(|_| SeqError::invalid_argument(op, format!("{name} must be >= 0, got {n}")))
}
