//! Error types raised by container operations.
//!
//! All failures in this crate are synchronous and reported at the call site
//! that detects them. Operations that may fail return `Result<_, DataError>`;
//! callers that want a fallback supply one explicitly (`get_or_else`) instead
//! of recovering from an error.

use thiserror::Error;

/// Errors raised by container constructors and value accessors.
///
/// # Examples
///
/// ```rust
/// use kindred::DataError;
/// use kindred::data::Maybe;
///
/// let empty: Maybe<i32> = Maybe::empty();
/// assert_eq!(
///     empty.get(),
///     Err(DataError::EmptyValueAccess { context: "Maybe::get".to_string() })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// A value was required but the container was empty and no default was supplied.
    #[error("empty value access: {context}")]
    EmptyValueAccess {
        /// The operation or caller-supplied message describing the access.
        context: String,
    },

    /// A constructor or operation was called with an argument violating its contract.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },
}

impl DataError {
    pub(crate) fn empty_value_access(context: impl Into<String>) -> Self {
        let context = context.into();
        tracing::debug!(context = %context, "empty value access");
        Self::EmptyValueAccess { context }
    }

    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(operation, reason = %reason, "invalid argument");
        Self::InvalidArgument { operation, reason }
    }
}
