//! Shared sampling and log-log regression used by both kinetic-model fitters.
//!
//! The VSS fit is a superset of the VHS fit: both sample the viscosity function
//! on the same evenly spaced grid and regress `ln η` on `ln T`. Keeping that in
//! one place means both fitters see identical temperatures and identical
//! `(omega, A)` for the same inputs.

use crate::domain::constants::FIT_SAMPLE_COUNT;
use crate::domain::{FitWindow, PowerLawFit};
use crate::error::{FitError, PropertyError};
use crate::math::{linspace, power_law_fit};
use crate::models::require_positive;

/// Viscosity samples over a fit window and the power law through them.
#[derive(Debug, Clone, PartialEq)]
pub struct ViscositySamples {
    /// Sample temperatures, K (evenly spaced, endpoints included).
    pub temperature: Vec<f64>,
    /// Viscosity at each sample temperature, Pa s.
    pub viscosity: Vec<f64>,
    pub power_law: PowerLawFit,
    /// Reference temperature the model will be anchored at, K.
    pub t_ref: f64,
}

impl ViscositySamples {
    /// Power-law viscosity at the reference temperature, `A·T_ref^ω`.
    pub fn eta_ref(&self) -> f64 {
        self.power_law.eval(self.t_ref)
    }
}

/// Evaluate `f` at every temperature, requiring positive finite values.
pub(crate) fn sample_property<F>(
    f: &F,
    temperatures: &[f64],
    quantity: &'static str,
) -> Result<Vec<f64>, FitError>
where
    F: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    temperatures
        .iter()
        .map(|&t| {
            let value = f(t)?;
            if value.is_finite() && value > 0.0 {
                Ok(value)
            } else {
                Err(FitError::BadSample {
                    quantity,
                    temperature: t,
                    value,
                })
            }
        })
        .collect()
}

/// Sample `visc` at [`FIT_SAMPLE_COUNT`] temperatures and fit a power law.
pub fn sample_viscosity<V>(
    visc: &V,
    mass: f64,
    window: &FitWindow,
) -> Result<ViscositySamples, FitError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    sample_viscosity_with_count(visc, mass, window, FIT_SAMPLE_COUNT)
}

pub(crate) fn sample_viscosity_with_count<V>(
    visc: &V,
    mass: f64,
    window: &FitWindow,
    count: usize,
) -> Result<ViscositySamples, FitError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    let t_ref = window.reference_temperature()?;
    require_positive("mass", mass)?;

    let temperature = linspace(window.t_min, window.t_max, count)?;
    let viscosity = sample_property(visc, &temperature, "viscosity")?;
    let power_law = power_law_fit(&temperature, &viscosity)?;

    Ok(ViscositySamples {
        temperature,
        viscosity,
        power_law,
        t_ref,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn power_law(t: f64) -> Result<f64, PropertyError> {
        Ok(2.0e-7 * t.powf(0.8))
    }

    #[test]
    fn samples_cover_window_with_fixed_count() {
        let window = FitWindow::new(700.0, 1000.0);
        let s = sample_viscosity(&power_law, 1e-26, &window).unwrap();
        assert_eq!(s.temperature.len(), FIT_SAMPLE_COUNT);
        assert_eq!(s.temperature[0], 700.0);
        assert_eq!(s.temperature[FIT_SAMPLE_COUNT - 1], 1000.0);
        assert_eq!(s.t_ref, 850.0);
        assert_relative_eq!(s.power_law.omega, 0.8, max_relative = 1e-9);
        assert_relative_eq!(s.eta_ref(), power_law(850.0).unwrap(), max_relative = 1e-9);
    }

    #[test]
    fn collaborator_errors_propagate() {
        let table = |t: f64| {
            if t < 800.0 {
                Err(PropertyError::OutOfRange {
                    correlation: "test table",
                    temperature: t,
                    min: 800.0,
                    max: 2500.0,
                })
            } else {
                Ok(1e-5)
            }
        };
        let err = sample_viscosity(&table, 1e-26, &FitWindow::new(700.0, 1000.0)).unwrap_err();
        assert!(matches!(err, FitError::Property(PropertyError::OutOfRange { .. })));
    }

    #[test]
    fn non_positive_samples_are_rejected() {
        let f = |t: f64| Ok(1e-8 * (t - 800.0));
        let err = sample_viscosity(&f, 1e-26, &FitWindow::new(700.0, 1000.0)).unwrap_err();
        assert!(matches!(err, FitError::BadSample { temperature, .. } if temperature == 700.0));
    }

    #[test]
    fn window_and_mass_are_validated_first() {
        let err = sample_viscosity(&power_law, 1e-26, &FitWindow::new(1000.0, 700.0)).unwrap_err();
        assert!(matches!(err, FitError::InvalidRange { .. }));
        let err = sample_viscosity(&power_law, -1.0, &FitWindow::new(700.0, 1000.0)).unwrap_err();
        assert!(matches!(err, FitError::Domain { quantity: "mass", .. }));
    }
}
