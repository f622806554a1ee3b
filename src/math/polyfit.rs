//! Polynomial and power-law regression.

use nalgebra::{DMatrix, DVector};

use crate::domain::PowerLawFit;
use crate::error::FitError;
use crate::math::ols::solve_least_squares;

/// Least-squares polynomial fit of `y` against `x`.
///
/// Returns coefficients lowest order first (`c[0] + c[1]·x + ...`). Degree 0 is
/// the arithmetic mean of `y`.
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Result<Vec<f64>, FitError> {
    if x.len() != y.len() {
        return Err(FitError::DegenerateFit(format!(
            "x and y lengths differ ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    let needed = degree + 1;
    let distinct = distinct_count(x);
    if distinct < needed {
        return Err(FitError::InsufficientData {
            needed,
            got: distinct,
        });
    }

    // Center x so higher powers stay well conditioned; the shift is undone below.
    let shift = x.iter().sum::<f64>() / x.len() as f64;
    let n = x.len();
    let cols = degree + 1;
    let mut design = DMatrix::<f64>::zeros(n, cols);
    for (i, &xi) in x.iter().enumerate() {
        let u = xi - shift;
        let mut p = 1.0;
        for j in 0..cols {
            design[(i, j)] = p;
            p *= u;
        }
    }
    let rhs = DVector::from_row_slice(y);
    let beta = solve_least_squares(&design, &rhs).ok_or(FitError::Solve)?;

    Ok(unshift(beta.as_slice(), shift))
}

/// Fit `y ≈ a·x^omega` by a degree-1 regression of `ln y` on `ln x`.
///
/// Rows are used in input order. Every `x` and `y` must be positive and finite.
pub fn power_law_fit(x: &[f64], y: &[f64]) -> Result<PowerLawFit, FitError> {
    if x.len() != y.len() {
        return Err(FitError::DegenerateFit(format!(
            "x and y lengths differ ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    let mut ln_x = Vec::with_capacity(x.len());
    let mut ln_y = Vec::with_capacity(y.len());
    for (&xi, &yi) in x.iter().zip(y) {
        if !(xi.is_finite() && xi > 0.0) {
            return Err(FitError::Domain {
                quantity: "temperature",
                value: xi,
            });
        }
        if !(yi.is_finite() && yi > 0.0) {
            return Err(FitError::BadSample {
                quantity: "property value",
                temperature: xi,
                value: yi,
            });
        }
        ln_x.push(xi.ln());
        ln_y.push(yi.ln());
    }

    let coeffs = polyfit(&ln_x, &ln_y, 1)?;
    let fit = PowerLawFit {
        omega: coeffs[1],
        a: coeffs[0].exp(),
    };
    if !(fit.omega.is_finite() && fit.a.is_finite() && fit.a > 0.0) {
        return Err(FitError::DegenerateFit(format!(
            "power-law regression produced omega = {}, A = {}",
            fit.omega, fit.a
        )));
    }
    Ok(fit)
}

fn distinct_count(x: &[f64]) -> usize {
    let mut sorted: Vec<f64> = x.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    sorted.len()
}

/// Expand `Σ c_j (x - s)^j` into plain powers of `x`.
fn unshift(c: &[f64], s: f64) -> Vec<f64> {
    let n = c.len();
    let mut out = vec![0.0; n];
    for (j, &cj) in c.iter().enumerate() {
        // (x - s)^j = Σ_k binom(j, k) x^k (-s)^(j-k)
        let mut binom = 1.0;
        for k in 0..=j {
            out[k] += cj * binom * (-s).powi((j - k) as i32);
            binom = binom * (j - k) as f64 / (k + 1) as f64;
        }
    }
    out
}
