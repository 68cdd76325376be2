//! `alsvid-scale` — area-preserving time-dilation of pulse programs.
//!
//! Stretching a control pulse in time amplifies the incoherent noise it
//! accumulates without, ideally, changing the rotation it implements. The
//! rotation angle is set by the pulse's complex area, so this crate:
//!
//! - integrates parametric envelopes with adaptive quadrature
//!   ([`integrate`]),
//! - re-solves the complex amplitude of a stretched shape so its area
//!   matches the original ([`solve`]),
//! - rewrites whole schedules, pulse by pulse, appending the calibrated
//!   measurement segment at the stretched end time ([`scaler`]).
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_pulse::Envelope;
//! use alsvid_scale::{QuadConfig, SolverConfig, integrate, scaled_amplitude};
//! use num_complex::Complex64;
//!
//! let pulse = Envelope::drag(160.0, Complex64::new(0.1, 0.0), 40.0, 1.5).unwrap();
//! let quad = QuadConfig::default();
//!
//! // Stretch 2x in time, keep the area.
//! let fit = scaled_amplitude(&pulse, 2.0, &quad, &SolverConfig::default()).unwrap();
//! let stretched = pulse.stretched(2.0).with_amplitude(fit.amplitude).unwrap();
//!
//! let original = integrate::area(&pulse, &quad);
//! let rescaled = integrate::area(&stretched, &quad);
//! assert!((rescaled.value - original.value).norm() < 1e-3 * original.value.norm());
//! ```

pub mod error;
pub mod integrate;
pub mod quadrature;
pub mod scaler;
pub mod solve;

pub use error::{ScaleError, ScaleResult};
pub use integrate::PulseIntegrator;
pub use quadrature::{Area, QuadConfig, complex_quadrature};
pub use scaler::{ScaleConfig, ScheduleScaler};
pub use solve::{AmplitudeFit, SolverConfig, scaled_amplitude};
