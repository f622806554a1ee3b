//! Variable Hard Sphere relations (Bird 2013, ch. 2).

use std::f64::consts::PI;

use crate::domain::VhsModel;
use crate::domain::constants::BOLTZMANN;
use crate::error::FitError;
use crate::models::{omega_factor, require_non_negative, require_positive, temperature_scale};

/// VHS reference diameter (m) reproducing `eta_ref` at `t_ref`.
///
/// `d = sqrt(15 sqrt(m kB T_ref / π) / (2 (5 - 2ω)(7 - 2ω) η_ref))`
pub fn reference_diameter_vhs(
    mass: f64,
    eta_ref: f64,
    t_ref: f64,
    omega: f64,
) -> Result<f64, FitError> {
    require_positive("mass", mass)?;
    require_positive("reference viscosity", eta_ref)?;
    require_positive("reference temperature", t_ref)?;
    let factor = omega_factor(omega)?;

    let radicand = 15.0 * (mass * BOLTZMANN * t_ref / PI).sqrt() / (2.0 * factor * eta_ref);
    if radicand < 0.0 {
        return Err(FitError::NegativeRadicand("VHS reference diameter"));
    }
    let d_ref = radicand.sqrt();
    if !(d_ref.is_finite() && d_ref > 0.0) {
        return Err(FitError::DegenerateFit(format!(
            "VHS reference diameter evaluated to {d_ref}"
        )));
    }
    Ok(d_ref)
}

/// VHS viscosity (Pa s) at `t` (Bird 2013 ch. 2 eq. 43).
pub fn eta_bird_vhs(t: f64, model: &VhsModel) -> Result<f64, FitError> {
    require_non_negative("temperature", t)?;
    let mu_ref = vhs_reference_viscosity(model)?;
    Ok(mu_ref * temperature_scale(t, model.t_ref, model.omega)?)
}

/// VHS thermal conductivity (W/m K) at `t` (Bird 2013 ch. 2 eq. 44).
pub fn thermal_conductivity_bird_vhs(t: f64, model: &VhsModel) -> Result<f64, FitError> {
    let mu = eta_bird_vhs(t, model)?;
    Ok(15.0 / 4.0 * BOLTZMANN * mu / model.mass)
}

fn vhs_reference_viscosity(model: &VhsModel) -> Result<f64, FitError> {
    require_positive("mass", model.mass)?;
    require_positive("reference temperature", model.t_ref)?;
    require_positive("reference diameter", model.d_ref)?;
    let factor = omega_factor(model.omega)?;
    Ok(15.0 * (BOLTZMANN * model.mass * model.t_ref / PI).sqrt()
        / (2.0 * model.d_ref * model.d_ref * factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> VhsModel {
        VhsModel {
            mass: 1.15e-26,
            t_ref: 850.0,
            omega: 0.7,
            d_ref: 4.0e-10,
        }
    }

    #[test]
    fn diameter_and_viscosity_are_inverse() {
        let m = model();
        let eta = eta_bird_vhs(m.t_ref, &m).unwrap();
        let d = reference_diameter_vhs(m.mass, eta, m.t_ref, m.omega).unwrap();
        assert_relative_eq!(d, m.d_ref, max_relative = 1e-12);
    }

    #[test]
    fn viscosity_scales_as_power_law() {
        let m = model();
        let a = eta_bird_vhs(500.0, &m).unwrap();
        let b = eta_bird_vhs(1000.0, &m).unwrap();
        assert_relative_eq!(b / a, 2f64.powf(0.7), max_relative = 1e-12);
        assert_eq!(eta_bird_vhs(0.0, &m).unwrap(), 0.0);
    }

    #[test]
    fn conductivity_is_eucken_multiple_of_viscosity() {
        let m = model();
        let mu = eta_bird_vhs(900.0, &m).unwrap();
        let k = thermal_conductivity_bird_vhs(900.0, &m).unwrap();
        assert_relative_eq!(k, 3.75 * BOLTZMANN * mu / m.mass, max_relative = 1e-12);
    }

    #[test]
    fn diameter_poles_and_negative_radicand() {
        for omega in [2.5, 3.5] {
            assert!(matches!(
                reference_diameter_vhs(1e-26, 1e-5, 800.0, omega),
                Err(FitError::DegenerateFit(_))
            ));
        }
        for omega in [2.6, 3.0, 3.4] {
            assert!(matches!(
                reference_diameter_vhs(1e-26, 1e-5, 800.0, omega),
                Err(FitError::NegativeRadicand(_))
            ));
        }
    }

    #[test]
    fn diameter_positive_for_valid_inputs() {
        for omega in [0.5, 0.7, 1.0, 2.0, 4.0] {
            for eta in [1e-6, 1e-5, 1e-4] {
                let d = reference_diameter_vhs(1.15e-26, eta, 900.0, omega).unwrap();
                assert!(d.is_finite() && d > 0.0);
            }
        }
    }

    #[test]
    fn evaluators_reject_bad_inputs() {
        let mut m = model();
        assert!(matches!(eta_bird_vhs(-1.0, &m), Err(FitError::Domain { .. })));
        m.d_ref = 0.0;
        assert!(matches!(eta_bird_vhs(900.0, &m), Err(FitError::Domain { .. })));
        assert!(matches!(
            reference_diameter_vhs(0.0, 1e-5, 800.0, 0.7),
            Err(FitError::Domain { .. })
        ));
    }
}
