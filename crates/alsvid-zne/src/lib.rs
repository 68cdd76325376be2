//! `alsvid-zne` — zero-noise extrapolation.
//!
//! Given expectation values measured at several noise-amplification scale
//! factors, estimates the zero-noise limit:
//!
//! - [`linear`] / [`richardson`] — least-squares polynomial fits evaluated
//!   at scale 0,
//! - [`epsilon`] — nonlinear series acceleration for slowly converging
//!   estimate sequences,
//! - [`polynomial`] — reserved fixed-order mode, currently unimplemented.
//!
//! # Quick start
//!
//! ```rust
//! // Expectation decays linearly with the noise scale.
//! let scales = [1.0, 2.0, 3.0];
//! let values = [0.93, 0.88, 0.83];
//!
//! let mitigated = alsvid_zne::linear(&scales, &values).unwrap();
//! assert!((mitigated - 0.98).abs() < 1e-10);
//! ```

pub mod epsilon;
pub mod error;
pub mod extrapolate;
mod polyfit;

pub use epsilon::epsilon;
pub use error::{ZneError, ZneResult};
pub use extrapolate::{linear, polynomial, richardson};
