//! Variable Hard Sphere fit to a viscosity correlation.

use crate::domain::{FitWindow, PowerLawFit, VhsModel};
use crate::error::{FitError, PropertyError};
use crate::fit::sampling::{ViscositySamples, sample_viscosity};
use crate::models::reference_diameter_vhs;

/// A VHS fit together with the samples it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct VhsFit {
    pub samples: ViscositySamples,
    pub model: VhsModel,
}

/// Fit a VHS model to `visc` over `window`.
///
/// `omega` and the prefactor come from a log-log regression over 100 evenly
/// spaced temperatures; `d_ref` reproduces the regression line (not `visc`
/// itself) at the reference temperature.
pub fn vhs_model_from_viscosity<V>(
    visc: &V,
    mass: f64,
    window: &FitWindow,
) -> Result<VhsModel, FitError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    Ok(vhs_fit(visc, mass, window)?.model)
}

/// Like [`vhs_model_from_viscosity`], also returning the samples.
pub fn vhs_fit<V>(visc: &V, mass: f64, window: &FitWindow) -> Result<VhsFit, FitError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    let samples = sample_viscosity(visc, mass, window)?;
    let model = vhs_model_from_power_law(&samples.power_law, mass, samples.t_ref)?;
    Ok(VhsFit { samples, model })
}

/// VHS model whose viscosity matches `power_law` at `t_ref`.
pub(crate) fn vhs_model_from_power_law(
    power_law: &PowerLawFit,
    mass: f64,
    t_ref: f64,
) -> Result<VhsModel, FitError> {
    let eta_ref = power_law.eval(t_ref);
    let d_ref = reference_diameter_vhs(mass, eta_ref, t_ref, power_law.omega)?;
    Ok(VhsModel {
        mass,
        t_ref,
        omega: power_law.omega,
        d_ref,
    })
}

#[cfg(test)]
pub(crate) fn vhs_model_with_count<V>(
    visc: &V,
    mass: f64,
    window: &FitWindow,
    count: usize,
) -> Result<VhsModel, FitError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    let samples = crate::fit::sampling::sample_viscosity_with_count(visc, mass, window, count)?;
    vhs_model_from_power_law(&samples.power_law, mass, samples.t_ref)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::viscosity::eta1_vargaftik_yargin_1985;
    use crate::domain::constants::LITHIUM_MASS;
    use crate::models::eta_bird_vhs;
    use approx::assert_relative_eq;

    fn scenario(t: f64) -> Result<f64, PropertyError> {
        Ok(1e-7 * 130.6 * (t / 1000.0).powf(0.7))
    }

    #[test]
    fn power_law_scenario_recovers_exponent() {
        let window = FitWindow::new(700.0, 1000.0);
        let model = vhs_model_from_viscosity(&scenario, 1.15e-26, &window).unwrap();
        assert_relative_eq!(model.omega, 0.7, epsilon = 1e-6);
        assert_eq!(model.t_ref, 850.0);
        assert_eq!(model.mass, 1.15e-26);
        assert!(model.d_ref > 1e-10 && model.d_ref < 1e-9, "d_ref = {}", model.d_ref);
        assert_relative_eq!(
            eta_bird_vhs(850.0, &model).unwrap(),
            scenario(850.0).unwrap(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn model_tracks_smooth_correlation_at_reference() {
        let window = FitWindow::new(700.0, 1000.0);
        let model = vhs_model_from_viscosity(&eta1_vargaftik_yargin_1985, LITHIUM_MASS, &window).unwrap();
        let expected = eta1_vargaftik_yargin_1985(model.t_ref).unwrap();
        let got = eta_bird_vhs(model.t_ref, &model).unwrap();
        assert!((got / expected - 1.0).abs() < 0.05);
    }

    #[test]
    fn sharp_feature_breaks_reference_agreement() {
        let spike = |t: f64| {
            let bump = 20.0 * (-((t - 850.0) / 3.0).powi(2)).exp();
            Ok(1.2e-5 * (1.0 + bump))
        };
        let window = FitWindow::new(700.0, 1000.0);
        let model = vhs_model_from_viscosity(&spike, LITHIUM_MASS, &window).unwrap();
        let got = eta_bird_vhs(850.0, &model).unwrap();
        let expected = spike(850.0).unwrap();
        assert!((got / expected - 1.0).abs() > 0.5);
    }

    #[test]
    fn explicit_reference_temperature_is_kept() {
        let window = FitWindow::new(700.0, 1000.0).with_reference(273.0);
        let model = vhs_model_from_viscosity(&scenario, 1.15e-26, &window).unwrap();
        assert_eq!(model.t_ref, 273.0);
        assert_relative_eq!(
            eta_bird_vhs(273.0, &model).unwrap(),
            scenario(273.0).unwrap(),
            max_relative = 1e-8
        );
    }

    #[test]
    fn omega_is_stable_across_sample_counts() {
        let window = FitWindow::new(700.0, 1000.0);
        let omegas: Vec<f64> = [50, 100, 400]
            .iter()
            .map(|&n| {
                vhs_model_with_count(&eta1_vargaftik_yargin_1985, LITHIUM_MASS, &window, n)
                    .unwrap()
                    .omega
            })
            .collect();
        assert!((omegas[0] - omegas[2]).abs() < 1e-3);
        assert!((omegas[1] - omegas[2]).abs() < 1e-3);
    }

    #[test]
    fn invalid_window_is_rejected() {
        let err = vhs_model_from_viscosity(&scenario, 1.15e-26, &FitWindow::new(900.0, 900.0))
            .unwrap_err();
        assert!(matches!(err, FitError::InvalidRange { .. }));
    }

    #[test]
    fn collapsed_window_is_a_solve_error_not_a_flat_model() {
        let narrow = FitWindow::new(1000.0, 1000.0 + 1e-6);
        let model = vhs_model_from_viscosity(&scenario, 1.15e-26, &narrow).unwrap();
        assert_relative_eq!(model.omega, 0.7, epsilon = 1e-4);

        let collapsed = FitWindow::new(1000.0, 1000.0 + 1e-9);
        let err = vhs_model_from_viscosity(&scenario, 1.15e-26, &collapsed).unwrap_err();
        assert!(
            matches!(err, FitError::Solve | FitError::InsufficientData { .. }),
            "{err:?}"
        );
    }
}
