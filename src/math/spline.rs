//! Not-a-knot cubic spline interpolation.
//!
//! Several literature tables are read with a cubic interpolant. The not-a-knot
//! end condition (third derivative continuous across the second and
//! second-to-last knots) reproduces any cubic exactly, so the interpolant agrees
//! with the usual "cubic" table readers.

use nalgebra::{DMatrix, DVector};

/// Cubic spline through `(x_i, y_i)` with strictly increasing `x`.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Second derivatives at the knots.
    m: Vec<f64>,
}

impl CubicSpline {
    /// Build the spline. Needs at least four knots.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, String> {
        let n = x.len();
        if n != y.len() {
            return Err(format!("x has {} points but y has {}", n, y.len()));
        }
        if n < 4 {
            return Err(format!("cubic spline needs at least 4 points, got {n}"));
        }
        if x.windows(2).any(|w| !(w[1] > w[0])) {
            return Err("x must be strictly increasing".to_string());
        }
        if x.iter().chain(&y).any(|v| !v.is_finite()) {
            return Err("data must be finite".to_string());
        }

        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let mut a = DMatrix::<f64>::zeros(n, n);
        let mut b = DVector::<f64>::zeros(n);

        a[(0, 0)] = h[1];
        a[(0, 1)] = -(h[0] + h[1]);
        a[(0, 2)] = h[0];

        for i in 1..n - 1 {
            a[(i, i - 1)] = h[i - 1];
            a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
            a[(i, i + 1)] = h[i];
            b[i] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
        }

        let k = n - 2;
        a[(n - 1, n - 3)] = h[k];
        a[(n - 1, n - 2)] = -(h[k - 1] + h[k]);
        a[(n - 1, n - 1)] = h[k - 1];

        let m = a
            .lu()
            .solve(&b)
            .ok_or_else(|| "spline system is singular".to_string())?;

        Ok(Self {
            x,
            y,
            m: m.iter().copied().collect(),
        })
    }

    pub fn x_min(&self) -> f64 {
        self.x[0]
    }

    pub fn x_max(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Evaluate inside `[x_min, x_max]`; `None` outside.
    pub fn eval(&self, t: f64) -> Option<f64> {
        if !(t >= self.x_min() && t <= self.x_max()) {
            return None;
        }
        // Index of the interval containing t.
        let i = match self.x.partition_point(|&xi| xi <= t) {
            0 => 0,
            p => (p - 1).min(self.x.len() - 2),
        };
        let h = self.x[i + 1] - self.x[i];
        let a = (self.x[i + 1] - t) / h;
        let b = (t - self.x[i]) / h;
        let value = a * self.y[i]
            + b * self.y[i + 1]
            + ((a * a * a - a) * self.m[i] + (b * b * b - b) * self.m[i + 1]) * h * h / 6.0;
        Some(value)
    }
}
