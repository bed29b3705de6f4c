//! Error types for dispatch.

use std::sync::Arc;

use thiserror::Error;

use polyfn_core::GuardError;

use crate::call::Call;

/// Main error type for dispatch operations.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Every registered overload rejected the call.
    #[error("no overload of `{name}` matches {call}")]
    NoMatch { name: Arc<str>, call: Call },

    /// A guard could not be evaluated against the call.
    ///
    /// Propagated unmodified from the guard: a malformed guard fails the
    /// whole call even when a later entry would otherwise have matched.
    #[error(transparent)]
    Guard(#[from] GuardError),
}

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
