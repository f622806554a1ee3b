//! Monomer/dimer (Li / Li₂) equilibrium in lithium vapor.

use std::sync::LazyLock;

use crate::data::check_temperature;
use crate::data::table::{Interpolation, SharedTable, TableSpec, Tabulated, lookup};
use crate::data::vapor_pressure::press_best;
use crate::domain::constants::GAS_CONSTANT;
use crate::error::PropertyError;

/// Dissociation energy of Li₂ at 0 K, J/mol (Vargaftik & Voljak: 107800 ± 1300).
pub const DEFAULT_DISSOCIATION_ENERGY: f64 = 107_800.0;

/// Vapor component for the reduced thermodynamic potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Monomer,
    Dimer,
}

/// Dimer mole fraction from pressure (kPa) and the equilibrium constant.
///
/// Vargaftik & Yargin 1985, eq. (80): `x2 = 1 - 2 / (1 + sqrt(1 + 3.9477e-2 P / K))`.
pub fn x2_vargaftik_yargin_1985(p_kpa: f64, k_eq: f64) -> Result<f64, PropertyError> {
    const NAME: &str = "Vargaftik & Yargin 1985 eq. 80";
    if !(p_kpa.is_finite() && p_kpa >= 0.0) {
        return Err(PropertyError::Domain {
            correlation: NAME,
            quantity: "pressure",
            value: p_kpa,
        });
    }
    if !(k_eq.is_finite() && k_eq > 0.0) {
        return Err(PropertyError::Domain {
            correlation: NAME,
            quantity: "equilibrium constant",
            value: k_eq,
        });
    }
    Ok(1.0 - 2.0 / (1.0 + (1.0 + 3.9477e-2 * p_kpa / k_eq).sqrt()))
}

/// Reduced thermodynamic potential φ*, J/(mol K) (Vargaftik & Yargin 1985, table 35).
pub fn phi_reduced(component: Component, t: f64) -> Result<f64, PropertyError> {
    check_temperature("Vargaftik & Yargin 1985 table 35", t)?;
    // Terms: 1, ln x, 1e-4 x^-2, 1e-2 x^-1, x, x^2, x^3 with x = 1e-4 T.
    let c: [f64; 7] = match component {
        Component::Monomer => [187.7374, 19.5189, 4.7730, -6.117, 10.9728, -21.055, 21.357],
        Component::Dimer => [284.3545, 35.8511, -7.180, 17.819, 35.8331, -73.097, 46.625],
    };
    let x = 1e-4 * t;
    Ok(c[0]
        + c[1] * x.ln()
        + c[2] * 1e-4 * x.powi(-2)
        + c[3] * 1e-2 / x
        + c[4] * x
        + c[5] * x * x
        + c[6] * x * x * x)
}

/// Chemical equilibrium constant of `Li₂ ⇌ 2 Li` with the default dissociation energy.
pub fn k_eq_vargaftik_yargin_1985(t: f64) -> Result<f64, PropertyError> {
    k_eq_with_dissociation_energy(t, DEFAULT_DISSOCIATION_ENERGY)
}

/// `K = exp((2 φ1* - φ2*) / R - D0 / (R T))`.
pub fn k_eq_with_dissociation_energy(t: f64, d00: f64) -> Result<f64, PropertyError> {
    let phi1 = phi_reduced(Component::Monomer, t)?;
    let phi2 = phi_reduced(Component::Dimer, t)?;
    Ok(((2.0 * phi1 - phi2) / GAS_CONSTANT - d00 / (GAS_CONSTANT * t)).exp())
}

/// Dimer fraction of the saturated vapor from the recommended vapor pressure
/// and the equilibrium constant.
pub fn x2_saturated(t: f64) -> Result<f64, PropertyError> {
    let p_kpa = press_best(t)? / 1000.0;
    x2_vargaftik_yargin_1985(p_kpa, k_eq_vargaftik_yargin_1985(t)?)
}

pub const X2_SAT_VARGAFTIK_VOLJAK: TableSpec = TableSpec {
    name: "Vargaftik & Voljak 1985 table 2",
    temperature: &[800.0, 850.0, 900.0, 1000.0, 1100.0, 1200.0, 1500.0, 1800.0, 2000.0],
    values: &[
        0.007953, 0.01134, 0.0155, 0.02596, 0.03894, 0.05383, 0.1035, 0.1505, 0.1767,
    ],
    scale: 1.0,
    interpolation: Interpolation::Cubic,
};

static X2_SAT_VV: SharedTable = LazyLock::new(|| Tabulated::new(&X2_SAT_VARGAFTIK_VOLJAK));

/// Dimer fraction in saturated vapor (Vargaftik & Voljak 1985, table 2 selected points).
pub fn x2_sat_vargaftik_voljak(t: f64) -> Result<f64, PropertyError> {
    lookup(&X2_SAT_VV, t)
}
