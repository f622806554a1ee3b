//! Saturated vapor pressure of liquid lithium.
//!
//! Every function takes temperature in K and returns pressure in Pa. The
//! correlations are evaluated as published; see the source catalog for each
//! one's validity range.

use crate::data::check_temperature;
use crate::domain::constants::{
    ATM_TO_PASCALS, BAR_TO_PASCALS, MEGAPASCAL_TO_PASCALS, TORR_TO_PASCALS,
};
use crate::error::PropertyError;

/// Recommended vapor pressure (Browning & Potter 1985).
pub fn press_best(t: f64) -> Result<f64, PropertyError> {
    press_browning_potter_1985(t)
}

/// Browning & Potter 1985, section 6.2, eq. (2). Valid 1057 K to 2156 K.
///
/// `ln P(MPa) = 13.0719 - 18880.659 / T - 0.4942 ln T`
pub fn press_browning_potter_1985(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Browning & Potter 1985", t)?;
    let p_mpa = (13.0719 - 18880.659 / t - 0.4942 * t.ln()).exp();
    Ok(p_mpa * MEGAPASCAL_TO_PASCALS)
}

/// Alcock, Itkin & Horrigan 1984, liquid lithium, melting point to 1000 K (±5%).
pub fn press_alcock_1984(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Alcock 1984", t)?;
    let p_atm = 10f64.powf(5.055 - 8023.0 / t);
    Ok(ATM_TO_PASCALS * p_atm)
}

/// Bohdansky 1967, table III. Data span 1374 K to 1881 K.
pub fn press_bohdansky_1967(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Bohdansky 1967", t)?;
    let p_torr = 10f64.powf(7.67 - 7740.0 / t);
    Ok(TORR_TO_PASCALS * p_torr)
}

/// NIST webbook Antoine fit to the Hicks 1963 evaluation, 298.14 K to 1599.99 K.
pub fn press_nist_webbook(t: f64) -> Result<f64, PropertyError> {
    check_temperature("NIST webbook", t)?;
    let p_bar = 10f64.powf(4.98831 - 7918.984 / (t - 9.52));
    Ok(BAR_TO_PASCALS * p_bar)
}

/// Davison 1968 (NASA TN D-4650), 800 K to 1800 K, 3.38% standard deviation.
pub fn press_davison_1968(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Davison 1968", t)?;
    Ok(10f64.powf(10.015 - 8064.5 / t))
}

/// Maucherat 1939, 735 K to 915 K.
pub fn press_maucherat_1939(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Maucherat 1939", t)?;
    let p_torr = 10f64.powf(8.012 - 8172.0 / t);
    Ok(TORR_TO_PASCALS * p_torr)
}

/// Yargin & Sidorov 1982, synthesized from data between roughly 1050 K and 1700 K.
pub fn press_yargin_sidorov_1982(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Yargin & Sidorov 1982", t)?;
    let log_p_atm = 8.5088 - 8363.0 / t - 1.02573 * t.log10() - 1.3091e-4 * t
        + 1.08872 * (-2940.0 / t).exp();
    Ok(ATM_TO_PASCALS * 10f64.powf(log_p_atm))
}

/// As reported by Golubchikov 1996, 453 K to 1573 K.
pub fn press_golubchikov_1996(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Golubchikov 1996", t)?;
    Ok(10f64.powf(12.4037 - 8283.1 / t - 0.7081 * t.log10()))
}

/// Bystrov 1988, 700 K to 2000 K, δP = 2%.
pub fn press_bystrov_1988(t: f64) -> Result<f64, PropertyError> {
    check_temperature("Bystrov 1988", t)?;
    let tau = t * 1.0e-3;
    let p_mpa = (-2.0532 * tau.ln() - 19.4268 / tau + 9.4993 + 0.7530 * tau).exp();
    Ok(p_mpa * MEGAPASCAL_TO_PASCALS)
}

/// JSME Data Book: Heat Transfer (2009) Antoine fit, as cited by Kanemura 2017.
pub fn press_jsme_data_book(t: f64) -> Result<f64, PropertyError> {
    check_temperature("JSME data book", t)?;
    Ok(10f64.powf(9.94079 - 8001.8 / (t + 6.676)))
}

#[cfg(test)]
mod tests {
    use super::*;

    type Correlation = fn(f64) -> Result<f64, PropertyError>;

    const ALL: [(&str, Correlation); 10] = [
        ("browning", press_browning_potter_1985),
        ("alcock", press_alcock_1984),
        ("bohdansky", press_bohdansky_1967),
        ("nist", press_nist_webbook),
        ("davison", press_davison_1968),
        ("maucherat", press_maucherat_1939),
        ("yargin", press_yargin_sidorov_1982),
        ("golubchikov", press_golubchikov_1996),
        ("bystrov", press_bystrov_1988),
        ("jsme", press_jsme_data_book),
    ];

    #[test]
    fn normal_boiling_point_is_near_one_atmosphere() {
        // Lithium boils at about 1615 K.
        let p = press_best(1615.0).unwrap();
        assert!(p > 0.8 * ATM_TO_PASCALS && p < 1.25 * ATM_TO_PASCALS, "p = {p}");
    }

    #[test]
    fn correlations_agree_within_a_factor_of_two_at_1100k() {
        let best = press_best(1100.0).unwrap();
        for (name, f) in ALL {
            let p = f(1100.0).unwrap();
            let ratio = p / best;
            assert!(ratio > 0.5 && ratio < 2.0, "{name}: ratio {ratio}");
        }
    }

    #[test]
    fn pressure_increases_with_temperature() {
        for (name, f) in ALL {
            assert!(f(1000.0).unwrap() < f(1200.0).unwrap(), "{name}");
        }
    }

    #[test]
    fn non_positive_temperature_is_rejected() {
        for (_, f) in ALL {
            assert!(matches!(f(0.0), Err(PropertyError::Domain { .. })));
        }
    }
}
