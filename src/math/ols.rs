//! Least squares solver.
//!
//! Every regression in this crate is a small linear problem of the form:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! Implementation choices:
//! - SVD solves the least-squares problem robustly even when the design matrix
//!   is tall (more rows than columns).
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - The parameter dimension is tiny (1-2 columns for the kinetic fits), so SVD
//!   cost is negligible next to sampling the property functions.
//! - A rank-deficient design is an error, never a truncated solution.

use nalgebra::{DMatrix, DVector};

/// Singular values below this fraction of the largest one count as zero.
pub const RANK_TOLERANCE: f64 = 1e-12;

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the design matrix is rank deficient (relative to
/// [`RANK_TOLERANCE`]) or the solution is not finite.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    let s_max = svd.singular_values.iter().copied().fold(0.0, f64::max);
    if !(s_max.is_finite() && s_max > 0.0) {
        return None;
    }
    let tol = s_max * RANK_TOLERANCE;
    if svd.rank(tol) < x.ncols() {
        return None;
    }

    let beta = svd.solve(y, tol).ok()?;
    beta.iter().all(|v| v.is_finite()).then_some(beta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn least_squares_averages_overdetermined_constant() {
        let x = DMatrix::from_element(4, 1, 1.0);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0, 6.0]);
        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn rank_deficient_design_is_rejected() {
        // Second column is exactly twice the first.
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        assert!(solve_least_squares(&x, &y).is_none());

        // Nearly collinear columns below the relative cutoff.
        let x = DMatrix::from_row_slice(3, 2, &[1.0, -1e-14, 1.0, 0.0, 1.0, 1e-14]);
        assert!(solve_least_squares(&x, &y).is_none());
    }

    #[test]
    fn zero_design_is_rejected() {
        let x = DMatrix::<f64>::zeros(3, 2);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        assert!(solve_least_squares(&x, &y).is_none());
    }
}
