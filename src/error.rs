//! Error types for errorlab operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for errorlab operations.
///
/// The engine is a pure computational library, so almost every failure is
/// a caller-supplied parameter outside its mathematical domain. Numerical
/// edge cases (floating-point drift, degenerate n=1 variances) are *not*
/// errors; they are clamped or propagate as non-finite values per the
/// documented boundary conditions.
///
/// # Examples
///
/// ```
/// use errorlab::error::ErrorLabError;
///
/// let err = ErrorLabError::InvalidParameter {
///     param: "alpha".to_string(),
///     value: "1.5".to_string(),
///     constraint: "must be in (0, 1)".to_string(),
/// };
/// assert!(err.to_string().contains("alpha"));
/// ```
#[derive(Debug)]
pub enum ErrorLabError {
    /// Parameter value outside its valid domain.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ErrorLabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLabError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{param}': got {value}, constraint: {constraint}"
                )
            }
            ErrorLabError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ErrorLabError {}

/// Convenience result type for errorlab operations.
pub type Result<T> = std::result::Result<T, ErrorLabError>;
