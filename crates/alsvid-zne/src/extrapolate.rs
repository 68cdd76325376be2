//! Polynomial extrapolation to the zero-noise limit.

use tracing::debug;

use crate::error::{ZneError, ZneResult};
use crate::polyfit::polyfit;

/// Linear extrapolation: degree-1 fit, evaluated at scale 0.
///
/// With two points this is ordinary linear extrapolation; with more it is
/// the least-squares line through all of them.
pub fn linear(scales: &[f64], values: &[f64]) -> ZneResult<f64> {
    check_series(scales, values)?;
    let coeffs = polyfit(scales, values, 1)?;
    Ok(coeffs[coeffs.len() - 1])
}

/// Richardson extrapolation: degree-(K−1) fit through all K points,
/// evaluated at scale 0.
pub fn richardson(scales: &[f64], values: &[f64]) -> ZneResult<f64> {
    check_series(scales, values)?;
    let order = values.len() - 1;
    debug!(points = values.len(), order, "Richardson extrapolation");
    let coeffs = polyfit(scales, values, order)?;
    Ok(coeffs[coeffs.len() - 1])
}

/// General fixed-order polynomial extrapolation.
///
/// Documented mode with no implementation yet; callers must treat it as
/// unsupported rather than fall back to another fit.
pub fn polynomial(scales: &[f64], values: &[f64], order: usize) -> ZneResult<f64> {
    let _ = (scales, values, order);
    Err(ZneError::NotImplemented("polynomial extrapolation"))
}

fn check_series(scales: &[f64], values: &[f64]) -> ZneResult<()> {
    if scales.len() != values.len() {
        return Err(ZneError::LengthMismatch {
            scales: scales.len(),
            values: values.len(),
        });
    }
    if values.is_empty() {
        return Err(ZneError::EmptySeries);
    }
    Ok(())
}
