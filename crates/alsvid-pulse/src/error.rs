//! Error types for the pulse IR crate.

use thiserror::Error;

/// Errors that can occur when constructing pulse-program values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PulseError {
    /// Pulse duration must be strictly positive.
    #[error("pulse duration must be positive, got {0}")]
    InvalidDuration(f64),

    /// Gaussian width parameter must be strictly positive.
    #[error("sigma must be positive, got {0}")]
    InvalidSigma(f64),

    /// GaussianSquare plateau must fit inside the pulse window.
    #[error("width must satisfy 0 <= width <= duration, got width {width} for duration {duration}")]
    InvalidWidth {
        /// The offending plateau length.
        width: f64,
        /// Total pulse duration.
        duration: f64,
    },

    /// Pulse amplitudes are normalised to the unit disc.
    #[error("amplitude magnitude must not exceed 1, got {0}")]
    AmplitudeOutOfRange(f64),

    /// Sampled envelopes need at least one sample.
    #[error("sampled envelope has no samples")]
    EmptySamples,
}

/// Result type for pulse IR operations.
pub type PulseResult<T> = Result<T, PulseError>;
