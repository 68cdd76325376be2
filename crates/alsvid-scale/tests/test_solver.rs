//! Tests for amplitude re-solving under time stretches.

use alsvid_pulse::Envelope;
use alsvid_scale::{QuadConfig, SolverConfig, integrate, scaled_amplitude};
use num_complex::Complex64;

fn amp(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn quad() -> QuadConfig {
    QuadConfig::default()
}

fn solver() -> SolverConfig {
    SolverConfig::default()
}

/// Re-integrate `envelope` stretched by `factor` with the solved amplitude
/// and return the area defect against the original.
fn area_defect(envelope: &Envelope, factor: f64) -> f64 {
    let fit = scaled_amplitude(envelope, factor, &quad(), &solver()).unwrap();
    let stretched = envelope
        .stretched(factor)
        .with_amplitude(fit.amplitude)
        .unwrap();
    let original = integrate::area(envelope, &quad());
    let rescaled = integrate::area(&stretched, &quad());
    (rescaled.value - original.value).norm() / original.value.norm()
}

// ---------------------------------------------------------------------------
// Area invariance
// ---------------------------------------------------------------------------

#[test]
fn drag_area_survives_stretching() {
    let env = Envelope::drag(160.0, amp(0.1, 0.02), 40.0, 1.5).unwrap();
    for factor in [1.5, 2.0, 3.0] {
        assert!(area_defect(&env, factor) < 1e-3);
    }
}

#[test]
fn gaussian_square_area_survives_stretching() {
    let env = Envelope::gaussian_square(1200.0, amp(0.2, 0.0), 60.0, 900.0).unwrap();
    for factor in [1.5, 2.0] {
        assert!(area_defect(&env, factor) < 1e-3);
    }
}

#[test]
fn identity_stretch_returns_the_original_amplitude() {
    // Unchanged shape means the seed is already the root; the solve must
    // not wander off it.
    let env = Envelope::drag(160.0, amp(0.1, -0.03), 40.0, 2.0).unwrap();
    let fit = scaled_amplitude(&env, 1.0, &quad(), &solver()).unwrap();
    assert!((fit.amplitude - amp(0.1, -0.03)).norm() < 1e-12);
    assert!(fit.residual < 1e-12);
}

#[test]
fn solved_amplitude_shrinks_for_longer_pulses() {
    let env = Envelope::drag(160.0, amp(0.1, 0.0), 40.0, 1.0).unwrap();
    let fit = scaled_amplitude(&env, 2.0, &quad(), &solver()).unwrap();
    // Twice the support needs roughly half the height for the same area.
    assert!(fit.amplitude.norm() < 0.1);
    assert!(fit.amplitude.norm() > 0.025);
}

#[test]
fn solver_reports_a_small_residual_on_solvable_shapes() {
    let env = Envelope::gaussian_square(800.0, amp(0.15, 0.05), 50.0, 600.0).unwrap();
    let fit = scaled_amplitude(&env, 2.0, &quad(), &solver()).unwrap();
    assert!(fit.residual < 1e-6);
}

// ---------------------------------------------------------------------------
// Unsupported families
// ---------------------------------------------------------------------------

#[test]
fn gaussian_family_has_no_solve() {
    let env = Envelope::gaussian(160.0, amp(0.1, 0.0), 40.0).unwrap();
    assert!(scaled_amplitude(&env, 2.0, &quad(), &solver()).is_none());
}

#[test]
fn sampled_family_has_no_solve() {
    let env = Envelope::sampled(vec![amp(0.1, 0.0); 64]).unwrap();
    assert!(scaled_amplitude(&env, 2.0, &quad(), &solver()).is_none());
}
