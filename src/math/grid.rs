//! Temperature grid generation.

use crate::error::FitError;

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
///
/// The first and last points are exactly `min` and `max`.
pub fn linspace(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, FitError> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(FitError::InvalidRange {
            t_min: min,
            t_max: max,
        });
    }
    if steps < 2 {
        return Err(FitError::InsufficientData {
            needed: 2,
            got: steps,
        });
    }

    let step = (max - min) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps - 1 {
        out.push(min + step * i as f64);
    }
    out.push(max);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints_exactly() {
        let v = linspace(700.0, 1000.0, 100).unwrap();
        assert_eq!(v.len(), 100);
        assert_eq!(v[0], 700.0);
        assert_eq!(v[99], 1000.0);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(linspace(5.0, 5.0, 10).is_err());
        assert!(linspace(1.0, 5.0, 1).is_err());
        assert!(linspace(f64::NAN, 5.0, 10).is_err());
    }
}
