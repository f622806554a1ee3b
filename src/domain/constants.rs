//! Physical constants and unit conversions.
//!
//! Values are CODATA 2018 (exact SI definitions where applicable) and the
//! IUPAC 2013 conventional atomic weight of lithium.

/// Boltzmann constant, J/K.
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Unified atomic mass unit, kg.
pub const ATOMIC_MASS_UNIT: f64 = 1.660_539_066_60e-27;

/// Molar gas constant, J/(mol K).
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// Electron volt, J.
pub const ELECTRON_VOLT: f64 = 1.602_176_634e-19;

/// Avogadro constant, 1/mol.
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Conventional atomic weight of lithium (IUPAC 2013).
pub const LITHIUM_ATOMIC_WEIGHT: f64 = 6.94;

/// Mass of one lithium atom, kg.
pub const LITHIUM_MASS: f64 = LITHIUM_ATOMIC_WEIGHT * ATOMIC_MASS_UNIT;

pub const TORR_TO_PASCALS: f64 = 101_325.0 / 760.0;
pub const BAR_TO_PASCALS: f64 = 1.0e5;
pub const ATM_TO_PASCALS: f64 = 101_325.0;
pub const MEGAPASCAL_TO_PASCALS: f64 = 1.0e6;
pub const INCH_TO_METERS: f64 = 0.0254;

/// Pressure at which self-diffusion coefficients are tabulated, Pa.
pub const DIFFUSION_REFERENCE_PRESSURE: f64 = 1.0e5;

/// Number of evenly spaced temperatures sampled by the kinetic model fits.
pub const FIT_SAMPLE_COUNT: usize = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lithium_mass_is_about_1_15e_minus_26_kg() {
        assert!((LITHIUM_MASS - 1.1524e-26).abs() < 1e-29);
    }

    #[test]
    fn gas_constant_matches_boltzmann_times_avogadro() {
        approx::assert_relative_eq!(GAS_CONSTANT, BOLTZMANN * AVOGADRO, max_relative = 1e-9);
    }
}
