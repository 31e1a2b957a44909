//! Generator error types.

use thiserror::Error;

/// Top-level error type for generator operations.
///
/// Degenerate ranges (`max <= min`) are deliberately *not* represented here:
/// ranged draws answer them with a zero sentinel instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// A unique batch asked for more values than the domain can produce.
    #[error("cannot draw {requested} unique values from a domain of {available}")]
    InsufficientDistinctValues {
        /// Number of distinct values requested.
        requested: u64,
        /// Number of distinct values the domain can produce.
        available: u64,
    },

    /// Invalid generator parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(String),
}
