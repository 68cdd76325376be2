//! Epsilon-algorithm series acceleration.
//!
//! Estimates the limit of a convergent sequence of estimates by recursively
//! building rows of inverse differences:
//!
//!   next[i] = prev[i+1] + 1 / (cur[i+1] − cur[i])
//!
//! starting from the input row and an all-zero auxiliary row, until a single
//! value remains; the result averages that value with the first input
//! element. Each row is one element shorter, so the recursion always
//! terminates.
//!
//! Two equal consecutive values make an inverse difference divide by zero;
//! IEEE infinities then propagate through the remaining rows. Callers must
//! feed a strictly monotone (or noise-perturbed) series.

use crate::error::{ZneError, ZneResult};

/// Accelerate `series` toward its limit.
pub fn epsilon(series: &[f64]) -> ZneResult<f64> {
    if series.is_empty() {
        return Err(ZneError::EmptySeries);
    }
    let reference = series[0];
    let previous = vec![0.0; series.len()];
    Ok(accelerate(series.to_vec(), previous, reference))
}

fn accelerate(current: Vec<f64>, previous: Vec<f64>, reference: f64) -> f64 {
    if current.len() <= 1 {
        return (current[0] + reference) / 2.0;
    }
    let next: Vec<f64> = (0..current.len() - 1)
        .map(|i| previous[i + 1] + 1.0 / (current[i + 1] - current[i]))
        .collect();
    accelerate(next, current, reference)
}
