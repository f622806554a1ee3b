//! Literature correlations for lithium.
//!
//! All functions take temperature in K and return SI units. Formula-based
//! correlations are evaluated as published; table-backed ones interpolate and
//! refuse to extrapolate.

pub mod catalog;
pub mod diffusion;
pub mod dimer;
pub mod liquid;
pub mod lithium;
pub mod table;
pub mod thermal_conductivity;
pub mod vapor_pressure;
pub mod viscosity;

pub use catalog::{Source, Uncertainty, find_source, find_source_of, sources, sources_for};
pub use lithium::{LithiumVapor, error_bands, langmuir_flux};

use crate::error::PropertyError;

/// Reject non-positive or non-finite temperatures before evaluating a formula.
pub(crate) fn check_temperature(correlation: &'static str, t: f64) -> Result<(), PropertyError> {
    if t.is_finite() && t > 0.0 {
        Ok(())
    } else {
        Err(PropertyError::Domain {
            correlation,
            quantity: "temperature",
            value: t,
        })
    }
}
