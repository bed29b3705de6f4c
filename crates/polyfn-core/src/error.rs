//! Error types for guard evaluation.

use thiserror::Error;

/// Error raised while evaluating a guard against a candidate value.
///
/// A guard that evaluates to `false` is a non-match; a guard that cannot be
/// evaluated at all is an error. Dispatch never conflates the two: these
/// errors propagate to the dispatch caller unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// The candidate does not order against the other operand.
    #[error("cannot compare {lhs} with {rhs}")]
    Incomparable { lhs: String, rhs: String },
}

impl GuardError {
    pub fn incomparable(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        GuardError::Incomparable {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }
}

/// Result type alias for guard evaluation.
pub type Result<T> = std::result::Result<T, GuardError>;
