//! Variable Soft Sphere fit to viscosity and self-diffusion correlations.

use crate::domain::{FitWindow, SchmidtReference, VssModel};
use crate::error::{FitError, PropertyError};
use crate::fit::sampling::{ViscositySamples, sample_property, sample_viscosity_with_count};
use crate::domain::constants::FIT_SAMPLE_COUNT;
use crate::math::polyfit;
use crate::models::{alpha_from_schmidt, check_alpha, reference_diameter_vss, schmidt_number};

/// A VSS fit and the per-sample quantities behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct VssFit {
    pub samples: ViscositySamples,
    /// Self-diffusion coefficient at each sample temperature, m²/s.
    pub diffusion: Vec<f64>,
    /// Schmidt number at each sample temperature.
    pub schmidt: Vec<f64>,
    /// Scattering exponent implied by each Schmidt number.
    pub alpha_samples: Vec<f64>,
    pub schmidt_reference: SchmidtReference,
    pub model: VssModel,
}

/// Fit a VSS model to a viscosity and a self-diffusion correlation.
///
/// The Schmidt number is always computed for lithium at 1e5 Pa, which is what
/// the bundled diffusion data describe; use
/// [`vss_model_from_eta_and_d11_with`] for another species or pressure.
pub fn vss_model_from_eta_and_d11<V, D>(
    visc: &V,
    diff: &D,
    mass: f64,
    window: &FitWindow,
) -> Result<VssModel, FitError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
    D: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    vss_model_from_eta_and_d11_with(visc, diff, mass, window, SchmidtReference::default())
}

/// [`vss_model_from_eta_and_d11`] with an explicit Schmidt-number reference.
pub fn vss_model_from_eta_and_d11_with<V, D>(
    visc: &V,
    diff: &D,
    mass: f64,
    window: &FitWindow,
    schmidt: SchmidtReference,
) -> Result<VssModel, FitError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
    D: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    Ok(vss_fit(visc, diff, mass, window, schmidt)?.model)
}

/// Full VSS fit, keeping every intermediate sample.
pub fn vss_fit<V, D>(
    visc: &V,
    diff: &D,
    mass: f64,
    window: &FitWindow,
    schmidt: SchmidtReference,
) -> Result<VssFit, FitError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
    D: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    vss_fit_with_count(visc, diff, mass, window, schmidt, FIT_SAMPLE_COUNT)
}

pub(crate) fn vss_fit_with_count<V, D>(
    visc: &V,
    diff: &D,
    mass: f64,
    window: &FitWindow,
    schmidt: SchmidtReference,
    count: usize,
) -> Result<VssFit, FitError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
    D: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    let samples = sample_viscosity_with_count(visc, mass, window, count)?;
    let omega = samples.power_law.omega;

    let diffusion = sample_property(diff, &samples.temperature, "self-diffusion coefficient")?;

    let mut schmidt_values = Vec::with_capacity(diffusion.len());
    let mut alpha_samples = Vec::with_capacity(diffusion.len());
    for ((&t, &eta), &d11) in samples
        .temperature
        .iter()
        .zip(&samples.viscosity)
        .zip(&diffusion)
    {
        let sc = schmidt_number(t, eta, d11, schmidt.pressure, schmidt.mass)?;
        alpha_samples.push(alpha_from_schmidt(sc, omega)?);
        schmidt_values.push(sc);
    }

    let alpha = polyfit(&samples.temperature, &alpha_samples, 0)?[0];
    check_alpha(alpha)?;

    let d_ref = reference_diameter_vss(mass, samples.eta_ref(), samples.t_ref, omega, alpha)?;
    let model = VssModel {
        mass,
        t_ref: samples.t_ref,
        omega,
        alpha,
        d_ref,
    };

    Ok(VssFit {
        samples,
        diffusion,
        schmidt: schmidt_values,
        alpha_samples,
        schmidt_reference: schmidt,
        model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::diffusion::d11_fialho_1993_table;
    use crate::data::viscosity::eta1_bouledroua_2005_table_i;
    use crate::domain::constants::{BOLTZMANN, DIFFUSION_REFERENCE_PRESSURE, LITHIUM_MASS};
    use crate::models::{eta_bird_vss, schmidt_number_from_vss};
    use approx::assert_relative_eq;

    fn eta(omega: f64) -> impl Fn(f64) -> Result<f64, PropertyError> {
        move |t: f64| Ok(1.3e-5 * (t / 1000.0).powf(omega))
    }

    /// Diffusion coefficient giving a temperature-independent Schmidt number.
    fn diffusion_for_schmidt(sc: f64, omega: f64) -> impl Fn(f64) -> Result<f64, PropertyError> {
        let visc = eta(omega);
        move |t: f64| {
            let rho = DIFFUSION_REFERENCE_PRESSURE * LITHIUM_MASS / (BOLTZMANN * t);
            Ok(visc(t)? / (rho * sc))
        }
    }

    #[test]
    fn constant_schmidt_round_trips_through_alpha() {
        let window = FitWindow::new(700.0, 1000.0);
        let model =
            vss_model_from_eta_and_d11(&eta(0.7), &diffusion_for_schmidt(0.75, 0.7), LITHIUM_MASS, &window)
                .unwrap();
        assert_relative_eq!(model.omega, 0.7, epsilon = 1e-9);
        assert_relative_eq!(model.alpha, 10.0 / (0.75 * 16.8 - 5.0), max_relative = 1e-8);
        assert_relative_eq!(schmidt_number_from_vss(&model).unwrap(), 0.75, max_relative = 1e-8);
        assert_relative_eq!(
            eta_bird_vss(850.0, &model).unwrap(),
            eta(0.7)(850.0).unwrap(),
            max_relative = 1e-8
        );
    }

    #[test]
    fn literature_inputs_give_positive_alpha() {
        let window = FitWindow::new(700.0, 1000.0);
        let fit = vss_fit(
            &eta1_bouledroua_2005_table_i,
            &d11_fialho_1993_table,
            LITHIUM_MASS,
            &window,
            SchmidtReference::default(),
        )
        .unwrap();
        assert!(fit.model.alpha > 0.0);
        assert!(fit.model.d_ref > 0.0);
        assert_eq!(fit.schmidt.len(), 100);
        assert_eq!(fit.alpha_samples.len(), 100);
        let mean = fit.alpha_samples.iter().sum::<f64>() / 100.0;
        assert_relative_eq!(fit.model.alpha, mean, max_relative = 1e-10);
    }

    #[test]
    fn schmidt_mass_is_independent_of_particle_mass() {
        let window = FitWindow::new(700.0, 1000.0);
        let visc = eta(0.7);
        let diff = diffusion_for_schmidt(0.75, 0.7);
        let light = vss_model_from_eta_and_d11(&visc, &diff, LITHIUM_MASS, &window).unwrap();
        let heavy = vss_model_from_eta_and_d11(&visc, &diff, 2.0 * LITHIUM_MASS, &window).unwrap();
        assert_relative_eq!(light.alpha, heavy.alpha, max_relative = 1e-12);

        let other = SchmidtReference {
            mass: 2.0 * LITHIUM_MASS,
            pressure: DIFFUSION_REFERENCE_PRESSURE,
        };
        let explicit = vss_model_from_eta_and_d11_with(&visc, &diff, LITHIUM_MASS, &window, other).unwrap();
        assert!((explicit.alpha - light.alpha).abs() > 1e-3);
    }

    #[test]
    fn degenerate_alpha_denominator_is_reported() {
        // Sc (21 - 6ω) = 5 at ω = 0.5.
        let window = FitWindow::new(700.0, 1000.0);
        let err = vss_model_from_eta_and_d11(
            &eta(0.5),
            &diffusion_for_schmidt(5.0 / 18.0, 0.5),
            LITHIUM_MASS,
            &window,
        )
        .unwrap_err();
        assert!(matches!(err, FitError::DegenerateFit(_)), "{err:?}");
    }

    #[test]
    fn negative_alpha_is_implausible() {
        let window = FitWindow::new(700.0, 1000.0);
        let err = vss_model_from_eta_and_d11(
            &eta(0.5),
            &diffusion_for_schmidt(0.1, 0.5),
            LITHIUM_MASS,
            &window,
        )
        .unwrap_err();
        assert!(matches!(err, FitError::ImplausibleAlpha { alpha } if alpha < 0.0));
    }

    #[test]
    fn diffusion_outside_table_is_surfaced() {
        let window = FitWindow::new(700.0, 1500.0);
        let err = vss_model_from_eta_and_d11(&eta(0.7), &d11_fialho_1993_table, LITHIUM_MASS, &window)
            .unwrap_err();
        assert!(matches!(err, FitError::Property(PropertyError::OutOfRange { .. })));
    }
}
