//! Kinetic-theory collision models (VHS / VSS).
//!
//! Closed-form relations between model parameters and transport properties are
//! implemented as small, pure functions so that fitting and reporting code can
//! stay generic.

pub mod vhs;
pub mod vss;

pub use vhs::*;
pub use vss::*;

use crate::domain::FittedModel;
use crate::error::FitError;

impl FittedModel {
    /// Model viscosity (Pa s) at temperature `t` (K).
    pub fn viscosity(&self, t: f64) -> Result<f64, FitError> {
        match self {
            FittedModel::Vhs(m) => eta_bird_vhs(t, m),
            FittedModel::Vss(m) => eta_bird_vss(t, m),
        }
    }

    /// Schmidt number implied by the model (VSS only).
    pub fn schmidt_number(&self) -> Option<Result<f64, FitError>> {
        match self {
            FittedModel::Vhs(_) => None,
            FittedModel::Vss(m) => Some(schmidt_number_from_vss(m)),
        }
    }
}

/// `(5 - 2ω)(7 - 2ω)`, rejecting the poles at ω = 2.5 and ω = 3.5.
pub(crate) fn omega_factor(omega: f64) -> Result<f64, FitError> {
    if !omega.is_finite() {
        return Err(FitError::Domain {
            quantity: "omega",
            value: omega,
        });
    }
    let factor = (5.0 - 2.0 * omega) * (7.0 - 2.0 * omega);
    if factor == 0.0 {
        return Err(FitError::DegenerateFit(format!(
            "(5 - 2ω)(7 - 2ω) vanishes at omega = {omega}"
        )));
    }
    Ok(factor)
}

/// `(t / t_ref)^omega`; zero temperature is rejected when `omega < 0`.
pub(crate) fn temperature_scale(t: f64, t_ref: f64, omega: f64) -> Result<f64, FitError> {
    if t == 0.0 && omega < 0.0 {
        return Err(FitError::Domain {
            quantity: "temperature",
            value: t,
        });
    }
    Ok((t / t_ref).powf(omega))
}

pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<f64, FitError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FitError::Domain { quantity, value })
    }
}

pub(crate) fn require_non_negative(quantity: &'static str, value: f64) -> Result<f64, FitError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FitError::Domain { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{VhsModel, VssModel};

    #[test]
    fn fitted_model_dispatches_to_matching_formula() {
        let vhs = VhsModel {
            mass: 1.15e-26,
            t_ref: 850.0,
            omega: 0.7,
            d_ref: 4.0e-10,
        };
        let vss = VssModel {
            mass: vhs.mass,
            t_ref: vhs.t_ref,
            omega: vhs.omega,
            alpha: 1.2,
            d_ref: vhs.d_ref,
        };
        assert_eq!(
            FittedModel::Vhs(vhs).viscosity(900.0).unwrap(),
            eta_bird_vhs(900.0, &vhs).unwrap()
        );
        assert_eq!(
            FittedModel::Vss(vss).viscosity(900.0).unwrap(),
            eta_bird_vss(900.0, &vss).unwrap()
        );
        assert!(FittedModel::Vhs(vhs).schmidt_number().is_none());
        assert!(FittedModel::Vss(vss).schmidt_number().is_some());
    }

    #[test]
    fn omega_factor_poles_are_degenerate() {
        assert!(matches!(omega_factor(2.5), Err(FitError::DegenerateFit(_))));
        assert!(matches!(omega_factor(3.5), Err(FitError::DegenerateFit(_))));
        assert!(omega_factor(3.0).unwrap() < 0.0);
    }

    #[test]
    fn zero_temperature_with_negative_omega_is_a_domain_error() {
        let vhs = VhsModel {
            mass: 1.15e-26,
            t_ref: 850.0,
            omega: -0.3,
            d_ref: 4.0e-10,
        };
        let vss = VssModel {
            mass: vhs.mass,
            t_ref: vhs.t_ref,
            omega: vhs.omega,
            alpha: 1.2,
            d_ref: vhs.d_ref,
        };
        assert!(matches!(eta_bird_vhs(0.0, &vhs), Err(FitError::Domain { .. })));
        assert!(matches!(eta_bird_vss(0.0, &vss), Err(FitError::Domain { .. })));

        let positive = VhsModel { omega: 0.7, ..vhs };
        assert_eq!(eta_bird_vhs(0.0, &positive).unwrap(), 0.0);
    }
}
