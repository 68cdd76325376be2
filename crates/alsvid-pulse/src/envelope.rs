//! Parametric pulse envelopes.
//!
//! An envelope is the time-domain waveform applied to a channel. The three
//! parametric families (Gaussian, flat-top GaussianSquare, Drag) cover the
//! standard single- and two-qubit gate pulses on superconducting hardware;
//! [`Envelope::Sampled`] holds explicit complex samples for anything else.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{PulseError, PulseResult};

/// Slack on the unit-amplitude check, absorbing round-off from amplitude
/// re-solving.
const AMP_SLACK: f64 = 1e-9;

/// A pulse envelope on a single channel.
///
/// Envelopes are immutable: transformations ([`Envelope::stretched`],
/// [`Envelope::with_amplitude`]) return new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Envelope {
    /// Truncated Gaussian.
    Gaussian {
        /// Pulse length in device time units.
        duration: f64,
        /// Peak complex amplitude, |amplitude| <= 1.
        amplitude: Complex64,
        /// Gaussian standard deviation.
        sigma: f64,
    },
    /// Flat-top pulse with Gaussian rise and fall edges.
    GaussianSquare {
        /// Pulse length in device time units.
        duration: f64,
        /// Plateau complex amplitude, |amplitude| <= 1.
        amplitude: Complex64,
        /// Standard deviation of the rise/fall edges.
        sigma: f64,
        /// Plateau length, 0 <= width <= duration.
        width: f64,
    },
    /// Gaussian with a derivative correction term suppressing leakage to
    /// non-computational states.
    Drag {
        /// Pulse length in device time units.
        duration: f64,
        /// Peak complex amplitude, |amplitude| <= 1.
        amplitude: Complex64,
        /// Gaussian standard deviation.
        sigma: f64,
        /// Derivative-correction coefficient.
        beta: f64,
    },
    /// Explicit complex samples, one per device time step.
    ///
    /// Stands in for envelope families this crate has no parametric model
    /// for; consumers must handle it explicitly.
    Sampled {
        /// The sample values.
        samples: Vec<Complex64>,
    },
}

impl Envelope {
    /// Create a Gaussian envelope.
    pub fn gaussian(duration: f64, amplitude: Complex64, sigma: f64) -> PulseResult<Self> {
        validate_shape(duration, amplitude, sigma)?;
        Ok(Envelope::Gaussian {
            duration,
            amplitude,
            sigma,
        })
    }

    /// Create a flat-top GaussianSquare envelope.
    pub fn gaussian_square(
        duration: f64,
        amplitude: Complex64,
        sigma: f64,
        width: f64,
    ) -> PulseResult<Self> {
        validate_shape(duration, amplitude, sigma)?;
        if !(0.0..=duration).contains(&width) {
            return Err(PulseError::InvalidWidth { width, duration });
        }
        Ok(Envelope::GaussianSquare {
            duration,
            amplitude,
            sigma,
            width,
        })
    }

    /// Create a Drag envelope.
    pub fn drag(duration: f64, amplitude: Complex64, sigma: f64, beta: f64) -> PulseResult<Self> {
        validate_shape(duration, amplitude, sigma)?;
        Ok(Envelope::Drag {
            duration,
            amplitude,
            sigma,
            beta,
        })
    }

    /// Create a sampled envelope from explicit complex samples.
    pub fn sampled(samples: Vec<Complex64>) -> PulseResult<Self> {
        if samples.is_empty() {
            return Err(PulseError::EmptySamples);
        }
        Ok(Envelope::Sampled { samples })
    }

    /// Pulse length in device time units (sample count for [`Envelope::Sampled`]).
    pub fn duration(&self) -> f64 {
        match self {
            Envelope::Gaussian { duration, .. }
            | Envelope::GaussianSquare { duration, .. }
            | Envelope::Drag { duration, .. } => *duration,
            Envelope::Sampled { samples } => samples.len() as f64,
        }
    }

    /// Peak amplitude, if the family has one.
    pub fn amplitude(&self) -> Option<Complex64> {
        match self {
            Envelope::Gaussian { amplitude, .. }
            | Envelope::GaussianSquare { amplitude, .. }
            | Envelope::Drag { amplitude, .. } => Some(*amplitude),
            Envelope::Sampled { .. } => None,
        }
    }

    /// Gaussian width, if the family has one.
    pub fn sigma(&self) -> Option<f64> {
        match self {
            Envelope::Gaussian { sigma, .. }
            | Envelope::GaussianSquare { sigma, .. }
            | Envelope::Drag { sigma, .. } => Some(*sigma),
            Envelope::Sampled { .. } => None,
        }
    }

    /// The family name, for diagnostics.
    pub fn family(&self) -> &'static str {
        match self {
            Envelope::Gaussian { .. } => "gaussian",
            Envelope::GaussianSquare { .. } => "gaussian_square",
            Envelope::Drag { .. } => "drag",
            Envelope::Sampled { .. } => "sampled",
        }
    }

    /// Time-stretch the shape parameters by `factor`, keeping the amplitude.
    ///
    /// Duration, sigma and the family-specific parameters (plateau width,
    /// drag coefficient) all scale proportionally. Sampled envelopes have no
    /// parametric shape to stretch and are returned unchanged.
    #[must_use]
    pub fn stretched(&self, factor: f64) -> Self {
        match self {
            Envelope::Gaussian {
                duration,
                amplitude,
                sigma,
            } => Envelope::Gaussian {
                duration: duration * factor,
                amplitude: *amplitude,
                sigma: sigma * factor,
            },
            Envelope::GaussianSquare {
                duration,
                amplitude,
                sigma,
                width,
            } => Envelope::GaussianSquare {
                duration: duration * factor,
                amplitude: *amplitude,
                sigma: sigma * factor,
                width: width * factor,
            },
            Envelope::Drag {
                duration,
                amplitude,
                sigma,
                beta,
            } => Envelope::Drag {
                duration: duration * factor,
                amplitude: *amplitude,
                sigma: sigma * factor,
                beta: beta * factor,
            },
            Envelope::Sampled { .. } => self.clone(),
        }
    }

    /// Replace the amplitude, keeping the shape.
    ///
    /// Sampled envelopes carry no amplitude parameter and are returned
    /// unchanged.
    pub fn with_amplitude(&self, amplitude: Complex64) -> PulseResult<Self> {
        if amplitude.norm() > 1.0 + AMP_SLACK {
            return Err(PulseError::AmplitudeOutOfRange(amplitude.norm()));
        }
        let mut out = self.clone();
        match &mut out {
            Envelope::Gaussian { amplitude: a, .. }
            | Envelope::GaussianSquare { amplitude: a, .. }
            | Envelope::Drag { amplitude: a, .. } => *a = amplitude,
            Envelope::Sampled { .. } => {}
        }
        Ok(out)
    }
}

fn validate_shape(duration: f64, amplitude: Complex64, sigma: f64) -> PulseResult<()> {
    // `!(x > 0.0)` also rejects NaN.
    if !(duration > 0.0) {
        return Err(PulseError::InvalidDuration(duration));
    }
    if !(sigma > 0.0) {
        return Err(PulseError::InvalidSigma(sigma));
    }
    if amplitude.norm() > 1.0 + AMP_SLACK {
        return Err(PulseError::AmplitudeOutOfRange(amplitude.norm()));
    }
    Ok(())
}
