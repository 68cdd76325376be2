//! Error types for the extrapolation crate.

use thiserror::Error;

/// Errors produced by zero-noise extrapolation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZneError {
    /// Scale and expectation sequences must pair up one-to-one.
    #[error("scale and value sequences differ in length: {scales} vs {values}")]
    LengthMismatch {
        /// Number of scale factors supplied.
        scales: usize,
        /// Number of expectation values supplied.
        values: usize,
    },

    /// The series holds no data points.
    #[error("extrapolation series is empty")]
    EmptySeries,

    /// The requested extrapolation mode has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The least-squares system is singular (e.g. repeated scale values).
    #[error("least-squares system is singular")]
    SingularFit,
}

/// Result type for extrapolation operations.
pub type ZneResult<T> = Result<T, ZneError>;
