//! Variable Soft Sphere relations (Bird 2013, ch. 3).

use std::f64::consts::PI;

use crate::domain::VssModel;
use crate::domain::constants::BOLTZMANN;
use crate::error::FitError;
use crate::models::{omega_factor, require_non_negative, require_positive, temperature_scale};

/// VSS reference diameter (m) reproducing `eta_ref` at `t_ref`.
///
/// `d = sqrt(5 (α+1)(α+2) sqrt(m kB T_ref / π) / (4 α (5 - 2ω)(7 - 2ω) η_ref))`
pub fn reference_diameter_vss(
    mass: f64,
    eta_ref: f64,
    t_ref: f64,
    omega: f64,
    alpha: f64,
) -> Result<f64, FitError> {
    require_positive("mass", mass)?;
    require_positive("reference viscosity", eta_ref)?;
    require_positive("reference temperature", t_ref)?;
    check_alpha(alpha)?;
    let factor = omega_factor(omega)?;

    let radicand = 5.0 * (alpha + 1.0) * (alpha + 2.0) * (mass * BOLTZMANN * t_ref / PI).sqrt()
        / (4.0 * alpha * factor * eta_ref);
    if radicand < 0.0 {
        return Err(FitError::NegativeRadicand("VSS reference diameter"));
    }
    let d_ref = radicand.sqrt();
    if !(d_ref.is_finite() && d_ref > 0.0) {
        return Err(FitError::DegenerateFit(format!(
            "VSS reference diameter evaluated to {d_ref}"
        )));
    }
    Ok(d_ref)
}

/// VSS viscosity (Pa s) at `t` (Bird 2013 ch. 3 eq. 19).
///
/// `η = 5 (α+1)(α+2) sqrt(m kB T_ref / π) / (4 α d² (5 - 2ω)(7 - 2ω)) · (T / T_ref)^ω`
pub fn eta_bird_vss(t: f64, model: &VssModel) -> Result<f64, FitError> {
    require_non_negative("temperature", t)?;
    require_positive("mass", model.mass)?;
    require_positive("reference temperature", model.t_ref)?;
    require_positive("reference diameter", model.d_ref)?;
    let alpha = check_alpha(model.alpha)?;
    let factor = omega_factor(model.omega)?;

    let mu_ref = 5.0 * (1.0 + alpha) * (2.0 + alpha) * (BOLTZMANN * model.mass * model.t_ref / PI).sqrt()
        / (4.0 * alpha * model.d_ref * model.d_ref * factor);
    Ok(mu_ref * temperature_scale(t, model.t_ref, model.omega)?)
}

/// Schmidt number `η / (ρ D)` for a gas at temperature `t` and pressure `p0`.
///
/// `ρ = p0 m / (kB T)` is the ideal-gas mass density of the diffusing species.
pub fn schmidt_number(t: f64, eta: f64, d11: f64, p0: f64, mass: f64) -> Result<f64, FitError> {
    require_positive("temperature", t)?;
    require_positive("viscosity", eta)?;
    require_positive("diffusion coefficient", d11)?;
    require_positive("pressure", p0)?;
    require_positive("mass", mass)?;
    Ok(eta / (d11 * p0 * mass / (t * BOLTZMANN)))
}

/// Schmidt number implied by a VSS model: `5 (2 + α) / (3 α (7 - 2ω))`.
pub fn schmidt_number_from_vss(model: &VssModel) -> Result<f64, FitError> {
    let denom = 3.0 * model.alpha * (7.0 - 2.0 * model.omega);
    if denom == 0.0 || !denom.is_finite() {
        return Err(FitError::DegenerateFit(format!(
            "3α(7 - 2ω) vanishes for alpha = {}, omega = {}",
            model.alpha, model.omega
        )));
    }
    Ok(5.0 * (2.0 + model.alpha) / denom)
}

/// Scattering exponent consistent with a Schmidt number: `10 / (Sc (21 - 6ω) - 5)`.
pub(crate) fn alpha_from_schmidt(schmidt: f64, omega: f64) -> Result<f64, FitError> {
    let scaled = schmidt * (21.0 - 6.0 * omega);
    let denom = scaled - 5.0;
    // Treat a cancellation down to rounding noise as an exact zero.
    if denom.abs() <= 1e-12 * scaled.abs().max(5.0) {
        return Err(FitError::DegenerateFit(format!(
            "Sc (21 - 6ω) = 5 for Sc = {schmidt}, omega = {omega}"
        )));
    }
    Ok(10.0 / denom)
}

pub(crate) fn check_alpha(alpha: f64) -> Result<f64, FitError> {
    if alpha.is_finite() && alpha > 0.0 {
        Ok(alpha)
    } else {
        Err(FitError::ImplausibleAlpha { alpha })
    }
}
