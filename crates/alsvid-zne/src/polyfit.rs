//! Least-squares polynomial fitting.
//!
//! Solves the Vandermonde normal equations `VᵀV·a = Vᵀy` by Gaussian
//! elimination with partial pivoting. Coefficients come back highest degree
//! first, so the last entry is the fitted value at x = 0.
//!
//! Conditioning degrades quickly with degree, as it does for any
//! normal-equations fit; extrapolation series are short (a handful of scale
//! factors), which keeps the systems small and benign.

use ndarray::{Array1, Array2};

use crate::error::{ZneError, ZneResult};

/// Fit a degree-`degree` polynomial through `(xs, ys)` in the least-squares
/// sense.
pub(crate) fn polyfit(xs: &[f64], ys: &[f64], degree: usize) -> ZneResult<Vec<f64>> {
    let n = degree + 1;

    // Vandermonde with columns x^degree .. x^0.
    let mut vander = Array2::<f64>::zeros((xs.len(), n));
    for (row, &x) in xs.iter().enumerate() {
        let mut power = 1.0;
        for col in (0..n).rev() {
            vander[[row, col]] = power;
            power *= x;
        }
    }

    let vt = vander.t();
    let normal = vt.dot(&vander);
    let rhs = vt.dot(&Array1::from(ys.to_vec()));
    solve_dense(normal, rhs)
}

/// Solve a small dense symmetric system in place.
fn solve_dense(mut a: Array2<f64>, mut b: Array1<f64>) -> ZneResult<Vec<f64>> {
    let n = b.len();
    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if scale == 0.0 {
        return Err(ZneError::SingularFit);
    }

    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if a[[row, col]].abs() > a[[pivot, col]].abs() {
                pivot = row;
            }
        }
        if a[[pivot, col]].abs() < scale * 1e-13 {
            return Err(ZneError::SingularFit);
        }
        if pivot != col {
            for k in 0..n {
                let tmp = a[[col, k]];
                a[[col, k]] = a[[pivot, k]];
                a[[pivot, k]] = tmp;
            }
            b.swap(col, pivot);
        }
        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                let elim = factor * a[[col, k]];
                a[[row, k]] -= elim;
            }
            let elim = factor * b[col];
            b[row] -= elim;
        }
    }

    let mut x = vec![0.0; n];
    for col in (0..n).rev() {
        let mut acc = b[col];
        for k in col + 1..n {
            acc -= a[[col, k]] * x[k];
        }
        x[col] = acc / a[[col, col]];
    }
    Ok(x)
}
