//! Thermal conductivity of lithium vapor, W/(m K).

use std::sync::LazyLock;

use crate::data::check_temperature;
use crate::data::dimer::x2_saturated;
use crate::data::table::{Interpolation, SharedTable, TableSpec, Tabulated, lookup};
use crate::error::PropertyError;

/// Monomer conductivity, Vargaftik & Yargin 1985 eq. (66), 700 K to 2500 K (±3%).
pub fn lambda1_vargaftik_yargin_1985(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Vargaftik & Yargin 1985 eq. 66", t)?;
    let dt = t - 1000.0;
    Ok(1e-4 * (587.7 + 0.4562 * dt - 20.5e-6 * dt * dt))
}

/// Conductivity with a finite dimer fraction, Vargaftik & Yargin 1985 eqs. (65) and (67).
///
/// The last term is the reactive contribution of the `Li₂ ⇌ 2 Li` reaction.
pub fn lambda_vargaftik_yargin_1985(x2: f64, t: f64) -> Result<f64, PropertyError> {
    if !(x2.is_finite() && (0.0..=1.0).contains(&x2)) {
        return Err(PropertyError::Domain {
            correlation: "Vargaftik & Yargin 1985 eq. 65",
            quantity: "dimer fraction",
            value: x2,
        });
    }
    let lambda1 = lambda1_vargaftik_yargin_1985(t)?;
    let dt = t - 1000.0;
    let t_r = 13583.0 + 0.297 * dt + 43e-6 * dt * dt;
    let frozen = 1.0 - 3.84 * x2 + 13.6 * x2.powi(2) - 48.0 * x2.powi(3) + 166.0 * x2.powi(4)
        - 576.0 * x2.powi(5)
        + 1994.0 * x2.powi(6);
    let reactive = 0.095 * (t_r / t).powi(2) * (x2 * (1.0 - x2)) / (1.0 + x2).powi(2);
    Ok(lambda1 * (frozen + reactive))
}

/// Eqs. (65)/(67) along the saturation line (±7%).
pub fn lambda_sat_vargaftik_yargin_1985(t: f64) -> Result<f64, PropertyError> {
    lambda_vargaftik_yargin_1985(x2_saturated(t)?, t)
}

pub const LAMBDA_SAT_VARGAFTIK_YARGIN_TABLE_37: TableSpec = TableSpec {
    name: "Vargaftik & Yargin 1985 table 37",
    temperature: &[
        700.0, 725.0, 750.0, 775.0, 800.0, 825.0, 850.0, 875.0, 900.0, 925.0, 950.0, 975.0,
        1000.0, 1025.0, 1050.0, 1075.0, 1100.0, 1125.0, 1150.0, 1175.0, 1200.0, 1225.0, 1250.0,
        1275.0, 1300.0, 1325.0, 1350.0, 1375.0, 1400.0, 1425.0, 1450.0, 1475.0, 1500.0, 1525.0,
        1550.0, 1575.0, 1600.0, 1625.0, 1650.0, 1675.0, 1700.0, 1725.0, 1750.0, 1775.0, 1800.0,
        1825.0, 1850.0, 1875.0, 1900.0, 1925.0, 1950.0, 1975.0, 2000.0,
    ],
    values: &[
        497.2, 519.0, 541.6, 565.1, 589.2, 613.9, 638.8, 664.0, 689.2, 714.3, 739.2, 763.6, 787.4,
        810.6, 833.1, 854.6, 875.3, 895.0, 913.6, 931.2, 947.8, 963.3, 977.7, 991.0, 1003.4,
        1014.8, 1025.2, 1034.6, 1043.3, 1051.0, 1058.0, 1064.3, 1069.9, 1074.8, 1079.1, 1082.9,
        1086.1, 1088.9, 1091.2, 1093.2, 1094.8, 1096.0, 1097.0, 1097.7, 1098.1, 1098.3, 1098.3,
        1098.2, 1097.8, 1097.3, 1096.7, 1096.0, 1095.1,
    ],
    scale: 1e-4,
    interpolation: Interpolation::Cubic,
};

static LAMBDA_SAT_VY_37: SharedTable =
    LazyLock::new(|| Tabulated::new(&LAMBDA_SAT_VARGAFTIK_YARGIN_TABLE_37));

/// Saturated vapor conductivity, Vargaftik & Yargin 1985 table 37 (±7%).
pub fn lambda_sat_vargaftik_yargin_1985_table(t: f64) -> Result<f64, PropertyError> {
    lookup(&LAMBDA_SAT_VY_37, t)
}

/// Monomer conductivity, Vargaftik et al. 1991 eq. (5).
pub fn lambda1_vargaftik_1991_eq5(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Vargaftik 1991 eq. 5", t)?;
    Ok((541.0 + 0.485 * (t - 1000.0)) * 1e-4)
}

const V91_TEMPERATURES: &[f64] = &[
    800.0, 900.0, 1000.0, 1100.0, 1200.0, 1300.0, 1400.0, 1500.0, 1600.0, 1700.0, 1800.0, 1900.0,
    2000.0, 2100.0, 2200.0, 2300.0, 2400.0, 2500.0,
];

pub const LAMBDA1_VARGAFTIK_1991_TABLE_III: TableSpec = TableSpec {
    name: "Vargaftik 1991 table III (monomer)",
    temperature: V91_TEMPERATURES,
    values: &[
        450.0, 506.0, 558.0, 607.0, 655.0, 701.0, 745.0, 790.0, 834.0, 878.0, 921.0, 965.0,
        1008.0, 1050.0, 1092.0, 1131.0, 1169.0, 1203.0,
    ],
    scale: 1e-4,
    interpolation: Interpolation::Cubic,
};

pub const LAMBDA_SAT_VARGAFTIK_1991_TABLE_III: TableSpec = TableSpec {
    name: "Vargaftik 1991 table III (saturated)",
    temperature: V91_TEMPERATURES,
    values: &[
        543.0, 652.0, 753.0, 841.0, 913.0, 966.0, 1003.0, 1029.0, 1045.0, 1055.0, 1058.0, 1058.0,
        1054.0, 1048.0, 1041.0, 1031.0, 1020.0, 1006.0,
    ],
    scale: 1e-4,
    interpolation: Interpolation::Cubic,
};

static LAMBDA1_V91: SharedTable = LazyLock::new(|| Tabulated::new(&LAMBDA1_VARGAFTIK_1991_TABLE_III));
static LAMBDA_SAT_V91: SharedTable =
    LazyLock::new(|| Tabulated::new(&LAMBDA_SAT_VARGAFTIK_1991_TABLE_III));

/// Monomer conductivity, Vargaftik et al. 1991 table III (average error 5%).
pub fn lambda1_vargaftik_1991_table(t: f64) -> Result<f64, PropertyError> {
    lookup(&LAMBDA1_V91, t)
}

/// Saturated vapor conductivity, Vargaftik et al. 1991 table III.
pub fn lambda_sat_vargaftik_1991_table(t: f64) -> Result<f64, PropertyError> {
    lookup(&LAMBDA_SAT_V91, t)
}

pub const LAMBDA1_BOULEDROUA_2005_TABLE_V: TableSpec = TableSpec {
    name: "Bouledroua 2005 table V",
    temperature: &[
        200.0, 400.0, 600.0, 800.0, 1000.0, 1200.0, 1400.0, 1600.0, 1800.0, 2000.0,
    ],
    values: &[10.31, 21.97, 33.63, 44.84, 55.15, 64.57, 73.54, 82.51, 90.58, 99.10],
    scale: 1e-3,
    interpolation: Interpolation::Cubic,
};

static LAMBDA1_BOULEDROUA: SharedTable =
    LazyLock::new(|| Tabulated::new(&LAMBDA1_BOULEDROUA_2005_TABLE_V));

/// Monomer conductivity, Bouledroua 2005 table V, 200 K to 2000 K.
pub fn lambda1_bouledroua_2005_table_v(t: f64) -> Result<f64, PropertyError> {
    lookup(&LAMBDA1_BOULEDROUA, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn monomer_reference_values() {
        assert_relative_eq!(lambda1_vargaftik_yargin_1985(1000.0).unwrap(), 587.7e-4, max_relative = 1e-12);
        assert_relative_eq!(lambda1_vargaftik_1991_eq5(1000.0).unwrap(), 541.0e-4, max_relative = 1e-12);
        assert_relative_eq!(
            lambda_vargaftik_yargin_1985(0.0, 1300.0).unwrap(),
            lambda1_vargaftik_yargin_1985(1300.0).unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn saturated_formula_tracks_table_37() {
        for t in [1100.0, 1400.0, 1800.0] {
            let formula = lambda_sat_vargaftik_yargin_1985(t).unwrap();
            let table = lambda_sat_vargaftik_yargin_1985_table(t).unwrap();
            assert!((formula / table - 1.0).abs() < 0.1, "T={t}: {formula} vs {table}");
        }
    }

    #[test]
    fn tables_reproduce_nodes() {
        let cases: [(&TableSpec, fn(f64) -> Result<f64, PropertyError>); 4] = [
            (&LAMBDA_SAT_VARGAFTIK_YARGIN_TABLE_37, lambda_sat_vargaftik_yargin_1985_table),
            (&LAMBDA1_VARGAFTIK_1991_TABLE_III, lambda1_vargaftik_1991_table),
            (&LAMBDA_SAT_VARGAFTIK_1991_TABLE_III, lambda_sat_vargaftik_1991_table),
            (&LAMBDA1_BOULEDROUA_2005_TABLE_V, lambda1_bouledroua_2005_table_v),
        ];
        for (spec, f) in cases {
            for (t, v) in spec.nodes() {
                assert_relative_eq!(f(t).unwrap(), v, max_relative = 1e-10);
            }
            let above = spec.temperature[spec.temperature.len() - 1] + 1.0;
            assert!(f(above).is_err(), "{}", spec.name);
        }
    }
}
