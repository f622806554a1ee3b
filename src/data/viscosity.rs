//! Dynamic viscosity of lithium vapor, Pa s.
//!
//! Monomer (`eta1_*`) correlations describe a purely atomic gas; saturated
//! (`eta_sat_*`) ones include the dimer fraction present along the saturation
//! line.

use std::sync::LazyLock;

use crate::data::check_temperature;
use crate::data::dimer::{x2_saturated, x2_vargaftik_yargin_1985, k_eq_vargaftik_yargin_1985};
use crate::data::table::{Interpolation, SharedTable, TableSpec, Tabulated, lookup};
use crate::data::vapor_pressure::press_best;
use crate::error::PropertyError;

/// Monomer viscosity, Vargaftik & Yargin 1985 eq. (56), 700 K to 2500 K.
pub fn eta1_vargaftik_yargin_1985(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Vargaftik & Yargin 1985 eq. 56", t)?;
    let dt = t - 1000.0;
    Ok(1e-7 * (130.6 + 0.1014 * dt - 4.55e-6 * dt * dt))
}

/// Estimated error (percent) of [`eta1_vargaftik_yargin_1985`].
///
/// The collision-integral error falls from 3.8% at 700 K to 1.5% at 2500 K;
/// this interpolates linearly between those points.
pub fn eta1_vargaftik_yargin_1985_error_pct(t: f64) -> f64 {
    let (x1, y1) = (700.0, 3.8);
    let (x2, y2) = (2500.0, 1.5);
    y1 + (y2 - y1) * (t - x1) / (x2 - x1)
}

/// Error at the saturation line, about 5% where the monomer error is 3%.
pub fn eta_sat_vargaftik_yargin_1985_error_pct(t: f64) -> f64 {
    5.0 / 3.0 * eta1_vargaftik_yargin_1985_error_pct(t)
}

/// Monomer/dimer mixture viscosity, Vargaftik & Yargin 1985 eq. (55).
pub fn eta_vargaftik_yargin_1985(x2: f64, t: f64) -> Result<f64, PropertyError> {
    check_fraction("Vargaftik & Yargin 1985 eq. 55", x2)?;
    let eta1 = eta1_vargaftik_yargin_1985(t)?;
    let poly = 1.0 - 3.65 * x2 + 12.5 * x2.powi(2) - 42.0 * x2.powi(3) + 142.0 * x2.powi(4)
        - 479.0 * x2.powi(5)
        + 1600.0 * x2.powi(6);
    Ok(eta1 * poly)
}

/// Eq. (55) along the saturation line, with `x2` from the recommended vapor pressure.
pub fn eta_sat_vargaftik_yargin_1985(t: f64) -> Result<f64, PropertyError> {
    eta_vargaftik_yargin_1985(x2_saturated(t)?, t)
}

pub const ETA_SAT_VARGAFTIK_YARGIN_TABLE_36: TableSpec = TableSpec {
    name: "Vargaftik & Yargin 1985 table 36",
    temperature: &[
        700.0, 725.0, 750.0, 775.0, 800.0, 825.0, 850.0, 875.0, 900.0, 925.0, 950.0, 975.0,
        1000.0, 1025.0, 1050.0, 1075.0, 1100.0, 1125.0, 1150.0, 1175.0, 1200.0, 1225.0, 1250.0,
        1275.0, 1300.0, 1325.0, 1350.0, 1375.0, 1400.0, 1425.0, 1450.0, 1475.0, 1500.0, 1525.0,
        1550.0, 1575.0, 1600.0, 1625.0, 1650.0, 1675.0, 1700.0, 1725.0, 1750.0, 1775.0, 1800.0,
        1825.0, 1850.0, 1875.0, 1900.0, 1925.0, 1950.0, 1975.0, 2000.0,
    ],
    values: &[
        98.6, 100.9, 103.0, 105.0, 107.0, 108.9, 110.6, 112.3, 113.8, 115.3, 116.6, 117.8, 119.0,
        120.0, 121.0, 121.9, 122.7, 123.4, 124.1, 124.7, 125.3, 125.8, 126.2, 126.7, 127.1, 127.4,
        127.8, 128.1, 128.4, 128.7, 129.0, 129.3, 129.6, 129.9, 130.2, 130.5, 130.7, 131.0, 131.3,
        131.7, 132.0, 132.3, 132.6, 133.0, 133.3, 133.7, 134.1, 134.4, 134.8, 135.2, 135.6, 136.0,
        136.4,
    ],
    scale: 1e-7,
    interpolation: Interpolation::Linear,
};

static ETA_SAT_VY_36: SharedTable = LazyLock::new(|| Tabulated::new(&ETA_SAT_VARGAFTIK_YARGIN_TABLE_36));

/// Saturated vapor viscosity, Vargaftik & Yargin 1985 table 36.
pub fn eta_sat_vargaftik_yargin_1985_table(t: f64) -> Result<f64, PropertyError> {
    lookup(&ETA_SAT_VY_36, t)
}

/// Linear fit to monomer viscosity, Vargaftik et al. 1991 eq. (6).
pub fn eta1_vargaftik_1991_eq6(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Vargaftik 1991 eq. 6", t)?;
    Ok((129.1 + 0.100 * (t - 1000.0)) * 1e-7)
}

/// Mixture viscosity as a function of dimer fraction, Vargaftik et al. 1991 eq. (4).
pub fn eta_vargaftik_1991_eq4(x2: f64, t: f64) -> Result<f64, PropertyError> {
    check_fraction("Vargaftik 1991 eq. 4", x2)?;
    let (b1, b2, b3, b4) = (4.094, 3.335, 0.864, -6.964e-2);
    let numerator = 1.0 + b3 * x2 + b4 * x2 * x2;
    let denominator = 1.0 + b1 * x2 + b2 * x2 * x2;
    Ok(eta1_vargaftik_1991_eq6(t)? * numerator / denominator)
}

/// Eq. (4) carried along the saturation line to low pressure.
///
/// `x2` comes from the Vargaftik & Yargin equilibrium constant and the
/// recommended vapor pressure.
pub fn eta_sat_vargaftik_1991_low_pressure(t: f64) -> Result<f64, PropertyError> {
    let k_eq = k_eq_vargaftik_yargin_1985(t)?;
    let p_kpa = press_best(t)? / 1000.0;
    let x2 = x2_vargaftik_yargin_1985(p_kpa, k_eq)?;
    eta_vargaftik_1991_eq4(x2, t)
}

const V91_TEMPERATURES: &[f64] = &[
    800.0, 900.0, 1000.0, 1100.0, 1200.0, 1300.0, 1400.0, 1500.0, 1600.0, 1700.0, 1800.0, 1900.0,
    2000.0, 2100.0, 2200.0, 2300.0, 2400.0, 2500.0,
];

pub const ETA1_VARGAFTIK_1991_TABLE_IV: TableSpec = TableSpec {
    name: "Vargaftik 1991 table IV (monomer)",
    temperature: V91_TEMPERATURES,
    values: &[
        100.0, 112.0, 123.0, 134.0, 145.0, 155.0, 166.0, 176.0, 186.0, 196.0, 205.0, 215.0, 224.0,
        233.0, 242.0, 250.0, 260.0, 268.0,
    ],
    scale: 1e-7,
    interpolation: Interpolation::Cubic,
};

pub const ETA_SAT_VARGAFTIK_1991_TABLE_IV: TableSpec = TableSpec {
    name: "Vargaftik 1991 table IV (saturated)",
    temperature: V91_TEMPERATURES,
    values: &[
        97.2, 106.0, 113.0, 118.0, 123.0, 126.0, 129.0, 131.0, 133.0, 135.0, 137.0, 139.0, 140.0,
        141.0, 143.0, 144.0, 146.0, 147.0,
    ],
    scale: 1e-7,
    interpolation: Interpolation::Cubic,
};

static ETA1_V91: SharedTable = LazyLock::new(|| Tabulated::new(&ETA1_VARGAFTIK_1991_TABLE_IV));
static ETA_SAT_V91: SharedTable = LazyLock::new(|| Tabulated::new(&ETA_SAT_VARGAFTIK_1991_TABLE_IV));

/// Monomer viscosity, Vargaftik et al. 1991 table IV (average error 5%).
pub fn eta1_vargaftik_1991_table(t: f64) -> Result<f64, PropertyError> {
    lookup(&ETA1_V91, t)
}

/// Saturated vapor viscosity, Vargaftik et al. 1991 table IV (average error 5%).
pub fn eta_sat_vargaftik_1991_table(t: f64) -> Result<f64, PropertyError> {
    lookup(&ETA_SAT_V91, t)
}

/// Bouledroua, Dalgarno & Côté 2005 power law `η = 0.234 T^0.903` µP.
pub fn eta1_bouledroua_2005(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Bouledroua 2005", t)?;
    Ok(1e-7 * 0.234 * t.powf(0.903))
}

pub const ETA1_BOULEDROUA_2005_TABLE_I: TableSpec = TableSpec {
    name: "Bouledroua 2005 table I",
    temperature: &[
        200.0, 400.0, 600.0, 800.0, 1000.0, 1200.0, 1400.0, 1600.0, 1800.0, 2000.0,
    ],
    values: &[23.0, 49.0, 75.0, 100.0, 123.0, 144.0, 164.0, 184.0, 202.0, 221.0],
    scale: 1e-7,
    interpolation: Interpolation::Cubic,
};

static ETA1_BOULEDROUA: SharedTable = LazyLock::new(|| Tabulated::new(&ETA1_BOULEDROUA_2005_TABLE_I));

/// Monomer viscosity, Bouledroua 2005 tables I and IV, 200 K to 2000 K.
pub fn eta1_bouledroua_2005_table_i(t: f64) -> Result<f64, PropertyError> {
    lookup(&ETA1_BOULEDROUA, t)
}

/// Lower temperature limit of the Stepanenko 1986 equation.
pub const STEPANENKO_1986_T_MIN: f64 = 1500.0;

/// Stepanenko et al. 1986 eq. (5), accuracy 3-4%. Undefined below 1500 K.
pub fn eta_stepanenko_1986(x2: f64, t: f64) -> Result<f64, PropertyError> {
    const NAME: &str = "Stepanenko 1986 eq. 5";
    check_fraction(NAME, x2)?;
    if !(t >= STEPANENKO_1986_T_MIN) || !t.is_finite() {
        return Err(PropertyError::OutOfRange {
            correlation: NAME,
            temperature: t,
            min: STEPANENKO_1986_T_MIN,
            max: f64::INFINITY,
        });
    }
    Ok(1e-7 * (178.0 - 530.0 * (x2 - 0.05) + 0.071 * (t - 1700.0)))
}

/// Stepanenko 1986 eq. (5) for a purely atomic gas.
pub fn eta1_stepanenko_1986(t: f64) -> Result<f64, PropertyError> {
    eta_stepanenko_1986(0.0, t)
}

/// Stepanenko 1986 eq. (5) along the saturation line.
pub fn eta_sat_stepanenko_1986(t: f64) -> Result<f64, PropertyError> {
    if !(t >= STEPANENKO_1986_T_MIN) {
        return eta_stepanenko_1986(0.0, t);
    }
    eta_stepanenko_1986(x2_saturated(t)?, t)
}

/// Stepanenko 1986 table I: measured `(T [K], η [Pa s])` at various pressures,
/// not necessarily saturated.
pub fn stepanenko_1986_table_i() -> Vec<(f64, f64)> {
    const DATA: [(f64, f64); 14] = [
        (1595.0, 163.0),
        (1607.0, 143.0),
        (1668.0, 187.0),
        (1692.0, 174.0),
        (1700.0, 183.0),
        (1715.0, 165.0),
        (1722.0, 160.0),
        (1747.0, 195.0),
        (1812.0, 184.0),
        (1815.0, 193.0),
        (1823.0, 193.0),
        (1852.0, 186.0),
        (1970.0, 210.0),
        (1983.0, 208.0),
    ];
    DATA.iter().map(|&(t, eta)| (t, 1e-7 * eta)).collect()
}

pub const ETA1_FIALHO_1993_TABLE: TableSpec = TableSpec {
    name: "Fialho 1993 monomer table",
    temperature: &[
        700.0, 800.0, 900.0, 1000.0, 1100.0, 1200.0, 1300.0, 1400.0, 1500.0, 1600.0, 1700.0,
        1800.0, 1900.0, 2000.0,
    ],
    values: &[
        8.56, 9.71, 10.82, 11.89, 12.93, 13.93, 14.91, 15.86, 16.80, 17.72, 18.63, 19.53, 20.41,
        21.30,
    ],
    scale: 1e-6,
    interpolation: Interpolation::Cubic,
};

static ETA1_FIALHO: SharedTable = LazyLock::new(|| Tabulated::new(&ETA1_FIALHO_1993_TABLE));

/// Monomer viscosity, Fialho et al. 1993.
pub fn eta1_fialho_1993_table(t: f64) -> Result<f64, PropertyError> {
    lookup(&ETA1_FIALHO, t)
}

fn check_fraction(correlation: &'static str, x2: f64) -> Result<(), PropertyError> {
    if x2.is_finite() && (0.0..=1.0).contains(&x2) {
        Ok(())
    } else {
        Err(PropertyError::Domain {
            correlation,
            quantity: "dimer fraction",
            value: x2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vargaftik_yargin_reference_value() {
        assert_relative_eq!(eta1_vargaftik_yargin_1985(1000.0).unwrap(), 130.6e-7, max_relative = 1e-12);
        assert_relative_eq!(eta_vargaftik_yargin_1985(0.0, 1200.0).unwrap(), eta1_vargaftik_yargin_1985(1200.0).unwrap());
    }

    #[test]
    fn error_estimate_endpoints() {
        assert_relative_eq!(eta1_vargaftik_yargin_1985_error_pct(700.0), 3.8);
        assert_relative_eq!(eta1_vargaftik_yargin_1985_error_pct(2500.0), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn dimers_lower_the_viscosity() {
        for t in [1200.0, 1600.0, 2000.0] {
            assert!(eta_sat_vargaftik_yargin_1985(t).unwrap() < eta1_vargaftik_yargin_1985(t).unwrap());
            assert!(eta_sat_vargaftik_1991_low_pressure(t).unwrap() < eta1_vargaftik_1991_eq6(t).unwrap());
        }
    }

    #[test]
    fn saturated_formula_tracks_table_36() {
        for t in [1100.0, 1400.0, 1800.0] {
            let formula = eta_sat_vargaftik_yargin_1985(t).unwrap();
            let table = eta_sat_vargaftik_yargin_1985_table(t).unwrap();
            assert!((formula / table - 1.0).abs() < 0.05, "T={t}: {formula} vs {table}");
        }
    }

    #[test]
    fn stepanenko_is_undefined_below_1500k() {
        assert!(matches!(
            eta1_stepanenko_1986(1499.0),
            Err(PropertyError::OutOfRange { min: 1500.0, .. })
        ));
        assert!(eta_sat_stepanenko_1986(1400.0).is_err());
        assert_relative_eq!(eta_stepanenko_1986(0.05, 1700.0).unwrap(), 178e-7, max_relative = 1e-12);
        assert_eq!(stepanenko_1986_table_i().len(), 14);
    }

    #[test]
    fn tables_reproduce_nodes_and_reject_outside() {
        let cases: [(&TableSpec, fn(f64) -> Result<f64, PropertyError>); 5] = [
            (&ETA_SAT_VARGAFTIK_YARGIN_TABLE_36, eta_sat_vargaftik_yargin_1985_table),
            (&ETA1_VARGAFTIK_1991_TABLE_IV, eta1_vargaftik_1991_table),
            (&ETA_SAT_VARGAFTIK_1991_TABLE_IV, eta_sat_vargaftik_1991_table),
            (&ETA1_BOULEDROUA_2005_TABLE_I, eta1_bouledroua_2005_table_i),
            (&ETA1_FIALHO_1993_TABLE, eta1_fialho_1993_table),
        ];
        for (spec, f) in cases {
            for (t, v) in spec.nodes() {
                assert_relative_eq!(f(t).unwrap(), v, max_relative = 1e-10);
            }
            let below = spec.temperature[0] - 1.0;
            assert!(matches!(f(below), Err(PropertyError::OutOfRange { .. })), "{}", spec.name);
        }
    }

    #[test]
    fn bouledroua_power_law_reproduces_its_table() {
        for (t, v) in ETA1_BOULEDROUA_2005_TABLE_I.nodes().into_iter().filter(|n| n.0 >= 600.0) {
            let eta = eta1_bouledroua_2005(t).unwrap();
            assert!((eta / v - 1.0).abs() < 0.03, "T={t}");
        }
    }
}
