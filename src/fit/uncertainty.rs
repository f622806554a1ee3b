//! Monte Carlo uncertainty of fitted VHS parameters.
//!
//! Each draw perturbs the viscosity samples multiplicatively by `1 + N(0, σ)`,
//! with σ the relative uncertainty of the source at that temperature, and
//! refits. Draws are independent and seeded from `seed + k`, so the result does
//! not depend on how rayon schedules them.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};
use rayon::prelude::*;
use serde::Serialize;

use crate::domain::FitWindow;
use crate::error::{FitError, PropertyError};
use crate::fit::sampling::sample_viscosity;
use crate::fit::vhs::vhs_model_from_power_law;
use crate::math::power_law_fit;

/// Spread of VHS parameters across Monte Carlo draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterUncertainty {
    pub draws: usize,
    pub seed: u64,
    pub omega_mean: f64,
    pub omega_std: f64,
    pub d_ref_mean: f64,
    pub d_ref_std: f64,
}

/// Estimate the spread of `omega` and `d_ref` under relative noise.
///
/// `sigma_pct(T)` is the one-standard-deviation relative uncertainty in percent.
pub fn vhs_parameter_uncertainty<V, S>(
    visc: &V,
    mass: f64,
    window: &FitWindow,
    sigma_pct: S,
    draws: usize,
    seed: u64,
) -> Result<ParameterUncertainty, FitError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
    S: Fn(f64) -> f64,
{
    if draws == 0 {
        return Err(FitError::InvalidUncertainty(
            "at least one draw is required".to_string(),
        ));
    }

    let samples = sample_viscosity(visc, mass, window)?;
    let sigmas = samples
        .temperature
        .iter()
        .map(|&t| {
            let pct = sigma_pct(t);
            if pct.is_finite() && pct >= 0.0 {
                Ok(pct / 100.0)
            } else {
                Err(FitError::InvalidUncertainty(format!(
                    "relative uncertainty at T = {t} K is {pct}%"
                )))
            }
        })
        .collect::<Result<Vec<f64>, FitError>>()?;

    let t_ref = samples.t_ref;
    let results: Vec<(f64, f64)> = (0..draws)
        .into_par_iter()
        .map(|k| -> Result<(f64, f64), FitError> {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(k as u64));
            let perturbed = samples
                .viscosity
                .iter()
                .zip(&samples.temperature)
                .zip(&sigmas)
                .map(|((&eta, &t), &sigma)| {
                    let z: f64 = StandardNormal.sample(&mut rng);
                    let value = eta * (1.0 + sigma * z);
                    if value > 0.0 {
                        Ok(value)
                    } else {
                        Err(FitError::InvalidUncertainty(format!(
                            "draw {k}: relative uncertainty {:.1}% perturbed viscosity at T = {t} K to a non-positive value",
                            sigma * 100.0
                        )))
                    }
                })
                .collect::<Result<Vec<f64>, FitError>>()?;
            let power_law = power_law_fit(&samples.temperature, &perturbed)?;
            let model = vhs_model_from_power_law(&power_law, mass, t_ref)?;
            Ok((model.omega, model.d_ref))
        })
        .collect::<Result<Vec<_>, FitError>>()?;

    let omegas: Vec<f64> = results.iter().map(|r| r.0).collect();
    let diameters: Vec<f64> = results.iter().map(|r| r.1).collect();
    let (omega_mean, omega_std) = mean_and_std(&omegas);
    let (d_ref_mean, d_ref_std) = mean_and_std(&diameters);

    Ok(ParameterUncertainty {
        draws,
        seed,
        omega_mean,
        omega_std,
        d_ref_mean,
        d_ref_std,
    })
}

/// Mean and population standard deviation.
fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::viscosity::{eta1_vargaftik_yargin_1985, eta1_vargaftik_yargin_1985_error_pct};
    use crate::domain::constants::LITHIUM_MASS;
    use crate::fit::vhs_model_from_viscosity;
    use approx::assert_relative_eq;

    fn window() -> FitWindow {
        FitWindow::new(700.0, 1000.0)
    }

    #[test]
    fn zero_sigma_has_no_spread() {
        let u = vhs_parameter_uncertainty(&eta1_vargaftik_yargin_1985, LITHIUM_MASS, &window(), |_| 0.0, 16, 7)
            .unwrap();
        let model = vhs_model_from_viscosity(&eta1_vargaftik_yargin_1985, LITHIUM_MASS, &window()).unwrap();
        assert!(u.omega_std < 1e-12);
        assert!(u.d_ref_std < 1e-22);
        assert_relative_eq!(u.omega_mean, model.omega, max_relative = 1e-12);
        assert_relative_eq!(u.d_ref_mean, model.d_ref, max_relative = 1e-12);
    }

    #[test]
    fn same_seed_same_result() {
        let run = |seed| {
            vhs_parameter_uncertainty(
                &eta1_vargaftik_yargin_1985,
                LITHIUM_MASS,
                &window(),
                |t| eta1_vargaftik_yargin_1985_error_pct(t),
                64,
                seed,
            )
            .unwrap()
        };
        let a = run(42);
        let b = run(42);
        let c = run(43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.omega_std > 0.0);
        assert!(a.d_ref_std > 0.0);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let err = vhs_parameter_uncertainty(&eta1_vargaftik_yargin_1985, LITHIUM_MASS, &window(), |_| 1.0, 0, 1)
            .unwrap_err();
        assert!(matches!(err, FitError::InvalidUncertainty(_)));
        let err = vhs_parameter_uncertainty(&eta1_vargaftik_yargin_1985, LITHIUM_MASS, &window(), |_| -1.0, 4, 1)
            .unwrap_err();
        assert!(matches!(err, FitError::InvalidUncertainty(_)));
    }

    #[test]
    fn oversized_sigma_names_the_non_positive_draw() {
        let err = vhs_parameter_uncertainty(&eta1_vargaftik_yargin_1985, LITHIUM_MASS, &window(), |_| 200.0, 8, 3)
            .unwrap_err();
        let FitError::InvalidUncertainty(message) = err else {
            panic!("expected InvalidUncertainty, got {err:?}");
        };
        assert!(message.contains("non-positive"));
    }
}
