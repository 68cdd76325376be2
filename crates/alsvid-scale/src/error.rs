//! Error types for the scaling crate.

use alsvid_pulse::PulseError;
use thiserror::Error;

/// Errors produced by pulse integration and schedule scaling.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScaleError {
    /// A family-specific shape parameter was never provided.
    #[error("{family} area requires the '{parameter}' parameter")]
    MissingParameter {
        /// Envelope family whose area was requested.
        family: &'static str,
        /// The absent parameter.
        parameter: &'static str,
    },

    /// Scale factors below 1 would compress pulses instead of stretching them.
    #[error("scale factor must be at least 1, got {0}")]
    InvalidScale(f64),

    /// Pulse IR error.
    #[error("pulse IR error: {0}")]
    Pulse(#[from] PulseError),
}

/// Result type for scaling operations.
pub type ScaleResult<T> = Result<T, ScaleError>;
