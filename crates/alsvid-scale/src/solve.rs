//! Amplitude re-solving for stretched pulse shapes.
//!
//! Stretching a pulse in time grows its area; the solver finds the complex
//! amplitude that restores the original area under the stretched shape. The
//! amplitude is treated as a point in ℝ², the residual is the complex area
//! defect split into components, and the root is found with Broyden's
//! derivative-free secant method (finite-difference initial Jacobian,
//! rank-one updates).
//!
//! Ref: Press et al., "Numerical Recipes" (2007), §9.7.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use alsvid_pulse::Envelope;

use crate::integrate::{drag_area, gaussian_square_area};
use crate::quadrature::QuadConfig;

/// Relative step for the finite-difference Jacobian seed.
const FD_STEP: f64 = 1e-6;

/// Stopping tolerances for the amplitude root-solve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Residual norm below which the solve stops.
    pub tol: f64,
    /// Iteration cap.
    pub max_iter: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tol: 1.49e-8,
            max_iter: 100,
        }
    }
}

/// A solved amplitude with its final residual norm.
///
/// The residual is diagnostic only: the solve returns its final iterate
/// whether or not the residual reached tolerance, so callers get the same
/// permissive behavior either way.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmplitudeFit {
    /// The amplitude reproducing the original area under the new shape.
    pub amplitude: Complex64,
    /// Final residual norm (area defect magnitude).
    pub residual: f64,
    /// Secant iterations taken.
    pub iterations: usize,
}

/// Solve for the amplitude that keeps `envelope`'s area constant when its
/// shape is stretched in time by `factor`.
///
/// Drag and GaussianSquare, the families drive schedules actually play,
/// have solve implementations. Plain Gaussian and sampled envelopes return
/// `None`: scaling is not implemented for those shapes and the caller must
/// decide what to do with them.
pub fn scaled_amplitude(
    envelope: &Envelope,
    factor: f64,
    quad: &QuadConfig,
    solver: &SolverConfig,
) -> Option<AmplitudeFit> {
    match *envelope {
        Envelope::Drag {
            duration,
            amplitude,
            sigma,
            beta,
        } => {
            let target = drag_area(duration, sigma, beta, amplitude, quad).value;
            let (d, s, b) = (duration * factor, sigma * factor, beta * factor);
            Some(broyden2(
                |a| drag_area(d, s, b, a, quad).value - target,
                amplitude,
                solver,
            ))
        }
        Envelope::GaussianSquare {
            duration,
            amplitude,
            sigma,
            width,
        } => {
            let target = gaussian_square_area(duration, width, sigma, amplitude, quad).value;
            let (d, s, w) = (duration * factor, sigma * factor, width * factor);
            Some(broyden2(
                |a| gaussian_square_area(d, w, s, a, quad).value - target,
                amplitude,
                solver,
            ))
        }
        Envelope::Gaussian { .. } | Envelope::Sampled { .. } => None,
    }
}

/// Broyden's method on a complex residual viewed as ℝ² → ℝ².
///
/// Runs until the residual norm or step size drops below tolerance, the
/// Jacobian goes singular, or the iteration cap is hit. The final iterate
/// is returned in every case.
fn broyden2<F>(residual: F, seed: Complex64, cfg: &SolverConfig) -> AmplitudeFit
where
    F: Fn(Complex64) -> Complex64,
{
    let eval = |x: [f64; 2]| {
        let r = residual(Complex64::new(x[0], x[1]));
        [r.re, r.im]
    };

    let mut x = [seed.re, seed.im];
    let mut fx = eval(x);

    // Forward-difference seed Jacobian.
    let mut jac = [[0.0_f64; 2]; 2];
    for col in 0..2 {
        let step = FD_STEP * (1.0 + x[col].abs());
        let mut xh = x;
        xh[col] += step;
        let fh = eval(xh);
        jac[0][col] = (fh[0] - fx[0]) / step;
        jac[1][col] = (fh[1] - fx[1]) / step;
    }

    let mut iterations = 0;
    while iterations < cfg.max_iter && norm2(fx) > cfg.tol {
        let Some(dx) = solve_2x2(&jac, [-fx[0], -fx[1]]) else {
            // Singular Jacobian: nothing better than the current iterate.
            break;
        };
        let x_next = [x[0] + dx[0], x[1] + dx[1]];
        let f_next = eval(x_next);

        // Rank-one secant update: J += (Δf − J·Δx) Δxᵀ / (Δx·Δx).
        let jdx = [
            jac[0][0] * dx[0] + jac[0][1] * dx[1],
            jac[1][0] * dx[0] + jac[1][1] * dx[1],
        ];
        let df = [f_next[0] - fx[0], f_next[1] - fx[1]];
        let dot = dx[0] * dx[0] + dx[1] * dx[1];
        if dot > 0.0 {
            let u = [(df[0] - jdx[0]) / dot, (df[1] - jdx[1]) / dot];
            jac[0][0] += u[0] * dx[0];
            jac[0][1] += u[0] * dx[1];
            jac[1][0] += u[1] * dx[0];
            jac[1][1] += u[1] * dx[1];
        }

        x = x_next;
        fx = f_next;
        iterations += 1;

        if norm2(dx) <= cfg.tol * (1.0 + norm2(x)) {
            break;
        }
    }

    let residual_norm = norm2(fx);
    if residual_norm > cfg.tol {
        warn!(
            residual = residual_norm,
            iterations, "amplitude solve stopped above tolerance"
        );
    }
    debug!(
        re = x[0],
        im = x[1],
        residual = residual_norm,
        iterations,
        "amplitude solve finished"
    );
    AmplitudeFit {
        amplitude: Complex64::new(x[0], x[1]),
        residual: residual_norm,
        iterations,
    }
}

/// Solve `J·x = b` for a 2×2 system; `None` when the determinant vanishes.
fn solve_2x2(jac: &[[f64; 2]; 2], b: [f64; 2]) -> Option<[f64; 2]> {
    let det = jac[0][0] * jac[1][1] - jac[0][1] * jac[1][0];
    if det.abs() < f64::EPSILON {
        return None;
    }
    Some([
        (b[0] * jac[1][1] - b[1] * jac[0][1]) / det,
        (b[1] * jac[0][0] - b[0] * jac[1][0]) / det,
    ])
}

fn norm2(v: [f64; 2]) -> f64 {
    v[0].hypot(v[1])
}
