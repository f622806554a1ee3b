//! Interpolated lookup of tabulated literature data.
//!
//! Tables are static slices transcribed from the papers; each is turned into an
//! interpolant once, on first use, and shared. Lookups outside the tabulated
//! temperatures return [`PropertyError::OutOfRange`] rather than extrapolating.

use std::sync::LazyLock;

use ndarray::Array1;
use ninterp::prelude::{Interp1DOwned, Interpolator};

use crate::error::PropertyError;
use crate::math::CubicSpline;

/// How a table is read between its nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Linear,
    /// Not-a-knot cubic spline.
    Cubic,
}

/// A literature table: temperatures (K) and values in the paper's units.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    pub temperature: &'static [f64],
    pub values: &'static [f64],
    /// Factor converting `values` to SI units.
    pub scale: f64,
    pub interpolation: Interpolation,
}

impl TableSpec {
    /// Table nodes in SI units.
    pub fn nodes(&self) -> Vec<(f64, f64)> {
        self.temperature
            .iter()
            .zip(self.values)
            .map(|(&t, &v)| (t, v * self.scale))
            .collect()
    }
}

enum Interpolant {
    Linear(Interp1DOwned<f64, ninterp::strategy::Linear>),
    Cubic(CubicSpline),
}

/// A table ready for lookups.
pub struct Tabulated {
    name: &'static str,
    t_min: f64,
    t_max: f64,
    interpolant: Interpolant,
}

/// Lazily built, shared interpolant.
pub type SharedTable = LazyLock<Result<Tabulated, PropertyError>>;

impl Tabulated {
    pub fn new(spec: &TableSpec) -> Result<Self, PropertyError> {
        let failed = |message: String| PropertyError::Interpolation {
            correlation: spec.name,
            message,
        };
        let (t, v): (Vec<f64>, Vec<f64>) = spec.nodes().into_iter().unzip();
        let (Some(&t_min), Some(&t_max)) = (t.first(), t.last()) else {
            return Err(failed("table is empty".to_string()));
        };

        let interpolant = match spec.interpolation {
            Interpolation::Linear => Interpolant::Linear(
                Interp1DOwned::new(
                    Array1::from(t),
                    Array1::from(v),
                    ninterp::strategy::Linear,
                    ninterp::interpolator::Extrapolate::Error,
                )
                .map_err(|e| failed(e.to_string()))?,
            ),
            Interpolation::Cubic => Interpolant::Cubic(CubicSpline::new(t, v).map_err(failed)?),
        };

        Ok(Self {
            name: spec.name,
            t_min,
            t_max,
            interpolant,
        })
    }

    pub fn range(&self) -> (f64, f64) {
        (self.t_min, self.t_max)
    }

    pub fn eval(&self, t: f64) -> Result<f64, PropertyError> {
        if !(t >= self.t_min && t <= self.t_max) {
            return Err(PropertyError::OutOfRange {
                correlation: self.name,
                temperature: t,
                min: self.t_min,
                max: self.t_max,
            });
        }
        match &self.interpolant {
            Interpolant::Linear(interp) => {
                interp
                    .interpolate(&[t])
                    .map_err(|e| PropertyError::Interpolation {
                        correlation: self.name,
                        message: e.to_string(),
                    })
            }
            Interpolant::Cubic(spline) => spline.eval(t).ok_or(PropertyError::OutOfRange {
                correlation: self.name,
                temperature: t,
                min: self.t_min,
                max: self.t_max,
            }),
        }
    }
}

/// Look `t` up in a shared table.
pub fn lookup(table: &SharedTable, t: f64) -> Result<f64, PropertyError> {
    match &**table {
        Ok(table) => table.eval(t),
        Err(err) => Err(err.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const T: [f64; 5] = [100.0, 200.0, 300.0, 400.0, 500.0];
    const V: [f64; 5] = [1.0, 4.0, 9.0, 16.0, 25.0];

    fn spec(interpolation: Interpolation) -> TableSpec {
        TableSpec {
            name: "test table",
            temperature: &T,
            values: &V,
            scale: 1e-3,
            interpolation,
        }
    }

    #[test]
    fn linear_table_interpolates_between_nodes() {
        let table = Tabulated::new(&spec(Interpolation::Linear)).unwrap();
        assert_relative_eq!(table.eval(150.0).unwrap(), 2.5e-3, max_relative = 1e-12);
        assert_relative_eq!(table.eval(500.0).unwrap(), 25e-3, max_relative = 1e-12);
    }

    #[test]
    fn cubic_table_reproduces_nodes_and_quadratic() {
        let table = Tabulated::new(&spec(Interpolation::Cubic)).unwrap();
        for (t, v) in spec(Interpolation::Cubic).nodes() {
            assert_relative_eq!(table.eval(t).unwrap(), v, max_relative = 1e-12);
        }
        // Values are (T/100)^2 scaled; a cubic spline reproduces a quadratic.
        assert_relative_eq!(table.eval(250.0).unwrap(), 6.25e-3, max_relative = 1e-10);
    }

    #[test]
    fn lookups_outside_table_are_out_of_range() {
        for interpolation in [Interpolation::Linear, Interpolation::Cubic] {
            let table = Tabulated::new(&spec(interpolation)).unwrap();
            for t in [99.9, 500.1, f64::NAN] {
                assert!(matches!(
                    table.eval(t),
                    Err(PropertyError::OutOfRange { min: 100.0, max: 500.0, .. })
                ));
            }
        }
    }

    #[test]
    fn short_cubic_table_fails_to_build() {
        let short = TableSpec {
            temperature: &T[..3],
            values: &V[..3],
            ..spec(Interpolation::Cubic)
        };
        assert!(matches!(
            Tabulated::new(&short),
            Err(PropertyError::Interpolation { .. })
        ));
    }
}
