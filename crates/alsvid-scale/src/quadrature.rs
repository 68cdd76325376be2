//! Adaptive quadrature for complex-valued integrands.
//!
//! The real and imaginary parts are integrated separately with adaptive
//! Simpson refinement and a Richardson error estimate per panel, then
//! recombined. Each result carries the two accumulated absolute-error
//! estimates alongside the value.
//!
//! Ref: Press et al., "Numerical Recipes" (2007), §4.7.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Tolerances and recursion cap for one quadrature call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuadConfig {
    /// Absolute tolerance on each integral component.
    pub abs_tol: f64,
    /// Relative tolerance on each integral component.
    pub rel_tol: f64,
    /// Maximum panel-bisection depth.
    pub max_depth: u32,
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1.49e-8,
            rel_tol: 1.49e-8,
            max_depth: 50,
        }
    }
}

/// The integral of a complex envelope over its window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    /// Integral value.
    pub value: Complex64,
    /// Absolute-error estimate of the real-part integration.
    pub real_error: f64,
    /// Absolute-error estimate of the imaginary-part integration.
    pub imag_error: f64,
}

/// Integrate a complex-valued function over `[lower, upper]`.
pub fn complex_quadrature<F>(f: F, lower: f64, upper: f64, cfg: &QuadConfig) -> Area
where
    F: Fn(f64) -> Complex64,
{
    let (re, real_error) = adaptive_simpson(|t| f(t).re, lower, upper, cfg);
    let (im, imag_error) = adaptive_simpson(|t| f(t).im, lower, upper, cfg);
    Area {
        value: Complex64::new(re, im),
        real_error,
        imag_error,
    }
}

/// Integrate a real-valued function over `[lower, upper]`.
///
/// Returns the value and an absolute-error estimate.
pub fn adaptive_simpson<F>(f: F, lower: f64, upper: f64, cfg: &QuadConfig) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let fa = f(lower);
    let fb = f(upper);
    let mid = 0.5 * (lower + upper);
    let fm = f(mid);
    let whole = simpson(lower, upper, fa, fm, fb);

    let mut exhausted = false;
    let (value, error) = refine(
        &f,
        Panel {
            a: lower,
            b: upper,
            fa,
            fm,
            fb,
            estimate: whole,
        },
        cfg.abs_tol,
        cfg.rel_tol,
        cfg.max_depth,
        &mut exhausted,
    );
    if exhausted {
        warn!(error, "quadrature hit the depth limit before tolerance");
    }
    (value, error)
}

/// One Simpson panel with its endpoint/midpoint samples.
struct Panel {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    estimate: f64,
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn refine<F>(
    f: &F,
    panel: Panel,
    abs_tol: f64,
    rel_tol: f64,
    depth: u32,
    exhausted: &mut bool,
) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let mid = 0.5 * (panel.a + panel.b);
    let lmid = 0.5 * (panel.a + mid);
    let rmid = 0.5 * (mid + panel.b);
    let flm = f(lmid);
    let frm = f(rmid);

    let left = Panel {
        a: panel.a,
        b: mid,
        fa: panel.fa,
        fm: flm,
        fb: panel.fm,
        estimate: simpson(panel.a, mid, panel.fa, flm, panel.fm),
    };
    let right = Panel {
        a: mid,
        b: panel.b,
        fa: panel.fm,
        fm: frm,
        fb: panel.fb,
        estimate: simpson(mid, panel.b, panel.fm, frm, panel.fb),
    };

    let refined = left.estimate + right.estimate;
    // Richardson: the halved-step estimate is fourth-order, so the defect
    // against the parent panel bounds the error at refined/15.
    let delta = refined - panel.estimate;
    let error = delta.abs() / 15.0;
    let tol = abs_tol.max(rel_tol * refined.abs());

    if error <= tol || depth == 0 {
        if depth == 0 && error > tol {
            *exhausted = true;
        }
        return (refined + delta / 15.0, error);
    }

    // Halve the absolute budget per child so the panel errors stay additive.
    let (lv, le) = refine(f, left, 0.5 * abs_tol, rel_tol, depth - 1, exhausted);
    let (rv, re) = refine(f, right, 0.5 * abs_tol, rel_tol, depth - 1, exhausted);
    (lv + rv, le + re)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_polynomial_is_near_exact() {
        // Simpson integrates cubics exactly; x^2 over [0,1] = 1/3.
        let (value, error) = adaptive_simpson(|x| x * x, 0.0, 1.0, &QuadConfig::default());
        assert!((value - 1.0 / 3.0).abs() < 1e-12);
        assert!(error < 1e-10);
    }

    #[test]
    fn test_sine_integral() {
        let (value, _) = adaptive_simpson(f64::sin, 0.0, PI, &QuadConfig::default());
        assert!((value - 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_complex_exponential() {
        // Int_0^{pi/2} e^{it} dt = 1 + i.
        let area = complex_quadrature(
            |t| Complex64::new(0.0, t).exp(),
            0.0,
            PI / 2.0,
            &QuadConfig::default(),
        );
        assert!((area.value - Complex64::new(1.0, 1.0)).norm() < 1e-8);
        assert!(area.real_error < 1e-6);
        assert!(area.imag_error < 1e-6);
    }

    #[test]
    fn test_tolerance_passthrough() {
        let loose = QuadConfig {
            abs_tol: 1e-3,
            rel_tol: 1e-3,
            max_depth: 50,
        };
        let tight = QuadConfig::default();
        let (_, loose_err) = adaptive_simpson(|x| (-x * x).exp(), 0.0, 4.0, &loose);
        let (_, tight_err) = adaptive_simpson(|x| (-x * x).exp(), 0.0, 4.0, &tight);
        assert!(tight_err <= loose_err);
    }
}
