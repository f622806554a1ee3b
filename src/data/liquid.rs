//! Condensed-phase lithium properties.

use crate::data::check_temperature;
use crate::domain::constants::LITHIUM_ATOMIC_WEIGHT;
use crate::error::PropertyError;

/// Rough liquid density, kg/m³.
pub const LIQUID_DENSITY: f64 = 500.0;

/// Solid density, kg/m³.
pub const SOLID_DENSITY: f64 = 534.0;

/// Melting point, °C (CRC handbook).
pub const MELTING_POINT_CELSIUS: f64 = 180.50;

/// Melting point, K.
pub const MELTING_POINT: f64 = MELTING_POINT_CELSIUS + 273.15;

/// Enthalpy of vaporization at the normal boiling point, kJ/mol (Lange's handbook).
pub const LATENT_HEAT_VAPORIZATION_KJ_PER_MOL: f64 = 147.1;

/// Enthalpy of vaporization at the normal boiling point, J/kg.
pub const LATENT_HEAT_VAPORIZATION_J_PER_KG: f64 =
    1e3 * LATENT_HEAT_VAPORIZATION_KJ_PER_MOL / (1e-3 * LITHIUM_ATOMIC_WEIGHT);

/// Surface tension of the liquid, N/m (Davison 1968, ±1.9% standard deviation).
pub fn surface_tension_davison_1968(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Davison 1968 surface tension", t)?;
    Ok(0.447 - 1.07e-4 * t - 1.351e-8 * t * t)
}
