//! Equilibrium lithium vapor above the liquid.

use std::f64::consts::PI;

use crate::data::liquid::LATENT_HEAT_VAPORIZATION_KJ_PER_MOL;
use crate::data::vapor_pressure::press_best;
use crate::domain::constants::{AVOGADRO, BOLTZMANN, LITHIUM_MASS};
use crate::error::PropertyError;

/// Saturated lithium vapor, ideal gas, using the recommended vapor pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LithiumVapor {
    /// Atom mass, kg.
    pub mass: f64,
}

impl Default for LithiumVapor {
    fn default() -> Self {
        Self { mass: LITHIUM_MASS }
    }
}

impl LithiumVapor {
    /// Heat of vaporization per atom, J.
    pub fn heat_of_vaporization_per_atom(&self) -> f64 {
        LATENT_HEAT_VAPORIZATION_KJ_PER_MOL * 1e3 / AVOGADRO
    }

    /// Vapor pressure, Pa.
    pub fn vapor_pressure(&self, t: f64) -> Result<f64, PropertyError> {
        press_best(t)
    }

    /// Number density `p / (kB T)`, m⁻³. Zero for `t <= 0`.
    pub fn number_density(&self, t: f64) -> Result<f64, PropertyError> {
        if t <= 0.0 {
            return Ok(0.0);
        }
        Ok(self.vapor_pressure(t)? / (BOLTZMANN * t))
    }

    /// Mass density `m p / (kB T)`, kg/m³. Zero for `t <= 0`.
    pub fn mass_density(&self, t: f64) -> Result<f64, PropertyError> {
        Ok(self.mass * self.number_density(t)?)
    }

    /// One-way Langmuir flux of the stationary vapor, m⁻² s⁻¹. Zero for `t <= 0`.
    pub fn langmuir_flux(&self, t: f64) -> Result<f64, PropertyError> {
        if t <= 0.0 {
            return Ok(0.0);
        }
        Ok(langmuir_flux(self.number_density(t)?, t, self.mass))
    }
}

/// `Γ = n sqrt(kB T / (2π m))`, m⁻² s⁻¹.
pub fn langmuir_flux(density: f64, t: f64, mass: f64) -> f64 {
    density * (BOLTZMANN * t / (2.0 * PI * mass)).sqrt()
}

/// `(value·(1 - p/100), value·(1 + p/100))`.
pub fn error_bands(value: f64, percent: f64) -> (f64, f64) {
    ((1.0 - 0.01 * percent) * value, (1.0 + 0.01 * percent) * value)
}
