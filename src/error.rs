//! Error types for Perfilar operations.
//!
//! Provides rich error context for library consumers. All failures in this
//! domain are schema or input violations; there is no transient/retryable
//! class, so nothing is ever silently swallowed or retried.

use std::fmt;

/// Main error type for Perfilar operations.
///
/// Covers schema violations (unknown class or property names), vector
/// length mismatches, and degenerate numeric inputs (zero variance, empty
/// samples).
///
/// # Examples
///
/// ```
/// use perfilar::error::PerfilarError;
///
/// let err = PerfilarError::LengthMismatch {
///     expected: 4,
///     actual: 3,
/// };
/// assert!(err.to_string().contains("length mismatch"));
/// ```
#[derive(Debug)]
pub enum PerfilarError {
    /// Elementwise vector operation on vectors of differing length.
    LengthMismatch {
        /// Length of the left-hand operand
        expected: usize,
        /// Length of the right-hand operand
        actual: usize,
    },

    /// Training or classification referenced a class not declared at
    /// dataset construction.
    InvalidClassName {
        /// The unrecognized class name
        name: String,
    },

    /// A record or sample referenced a property not declared in the schema.
    InvalidPropertyName {
        /// The unrecognized property name
        name: String,
    },

    /// A computation would divide by zero (zero-variance correlation,
    /// scoring an empty sample).
    DivisionByZero {
        /// What was being computed
        context: String,
    },

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PerfilarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerfilarError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Vector length mismatch: expected {expected}, got {actual}"
                )
            }
            PerfilarError::InvalidClassName { name } => {
                write!(f, "Invalid class name: '{name}' was not declared")
            }
            PerfilarError::InvalidPropertyName { name } => {
                write!(f, "Invalid property name: '{name}' is not in the schema")
            }
            PerfilarError::DivisionByZero { context } => {
                write!(f, "Division by zero: {context}")
            }
            PerfilarError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            PerfilarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PerfilarError {}

impl From<&str> for PerfilarError {
    fn from(msg: &str) -> Self {
        PerfilarError::Other(msg.to_string())
    }
}

impl From<String> for PerfilarError {
    fn from(msg: String) -> Self {
        PerfilarError::Other(msg)
    }
}

impl PerfilarError {
    /// Create a division-by-zero error with descriptive context.
    #[must_use]
    pub fn division_by_zero(context: &str) -> Self {
        Self::DivisionByZero {
            context: context.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PerfilarError>;
