//! Registry of literature correlations.
//!
//! Every entry is addressable by a stable id (used on the command line and in
//! saved model files) and evaluates as a plain `fn(f64) -> Result<f64, _>` so it
//! can be passed straight to the fitters.

use crate::data::{diffusion, thermal_conductivity as tc, vapor_pressure as vp, viscosity as visc};
use crate::domain::PropertyKind;
use crate::error::PropertyError;

pub type Evaluator = fn(f64) -> Result<f64, PropertyError>;

/// Relative uncertainty a source quotes, percent.
#[derive(Debug, Clone, Copy)]
pub enum Uncertainty {
    Percent(f64),
    /// Temperature-dependent estimate.
    Function(fn(f64) -> f64),
}

impl Uncertainty {
    pub fn percent_at(&self, t: f64) -> f64 {
        match self {
            Uncertainty::Percent(p) => *p,
            Uncertainty::Function(f) => f(t),
        }
    }
}

/// One literature correlation.
#[derive(Debug, Clone, Copy)]
pub struct Source {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: PropertyKind,
    /// Validity range, K.
    pub t_min: f64,
    pub t_max: f64,
    pub uncertainty: Option<Uncertainty>,
    pub eval: Evaluator,
}

impl Source {
    pub fn value(&self, t: f64) -> Result<f64, PropertyError> {
        (self.eval)(t)
    }

    pub fn covers(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }

    /// Value at `t` if `t` lies in the validity range and the correlation evaluates.
    pub fn value_in_range(&self, t: f64) -> Option<f64> {
        if self.covers(t) {
            self.value(t).ok()
        } else {
            None
        }
    }
}

const fn source(
    id: &'static str,
    label: &'static str,
    kind: PropertyKind,
    range: (f64, f64),
    uncertainty: Option<Uncertainty>,
    eval: Evaluator,
) -> Source {
    Source {
        id,
        label,
        kind,
        t_min: range.0,
        t_max: range.1,
        uncertainty,
        eval,
    }
}

use PropertyKind::{SelfDiffusion, ThermalConductivity, VaporPressure, Viscosity};
use Uncertainty::{Function, Percent};

#[rustfmt::skip]
static SOURCES: &[Source] = &[
    // Vapor pressure
    source("browning-potter-1985", "Browning & Potter 1985 (recommended)", VaporPressure, (1057.0, 2156.0), None, vp::press_browning_potter_1985),
    source("alcock-1984", "Alcock 1984", VaporPressure, (453.65, 1000.0), Some(Percent(5.0)), vp::press_alcock_1984),
    source("bohdansky-1967", "Bohdansky 1967", VaporPressure, (1374.0, 1881.0), None, vp::press_bohdansky_1967),
    source("nist-webbook", "NIST webbook (Hicks 1963)", VaporPressure, (298.14, 1599.99), None, vp::press_nist_webbook),
    source("davison-1968", "Davison 1968", VaporPressure, (800.0, 1800.0), Some(Percent(3.38)), vp::press_davison_1968),
    source("maucherat-1939", "Maucherat 1939", VaporPressure, (735.0, 915.0), None, vp::press_maucherat_1939),
    source("yargin-sidorov-1982", "Yargin & Sidorov 1982", VaporPressure, (1050.0, 1700.0), None, vp::press_yargin_sidorov_1982),
    source("golubchikov-1996", "Golubchikov 1996", VaporPressure, (453.0, 1573.0), None, vp::press_golubchikov_1996),
    source("bystrov-1988", "Bystrov 1988", VaporPressure, (700.0, 2000.0), Some(Percent(2.0)), vp::press_bystrov_1988),
    source("jsme", "JSME data book", VaporPressure, (453.65, 2000.0), None, vp::press_jsme_data_book),
    // Viscosity
    source("vy85-eq56", "Vargaftik & Yargin 1985 eq. 56 (monomer)", Viscosity, (700.0, 2500.0), Some(Function(visc::eta1_vargaftik_yargin_1985_error_pct)), visc::eta1_vargaftik_yargin_1985),
    source("vy85-eq55-sat", "Vargaftik & Yargin 1985 eq. 55 (saturated)", Viscosity, (1057.0, 2000.0), Some(Function(visc::eta_sat_vargaftik_yargin_1985_error_pct)), visc::eta_sat_vargaftik_yargin_1985),
    source("vy85-table36", "Vargaftik & Yargin 1985 table 36 (saturated)", Viscosity, (700.0, 2000.0), Some(Function(visc::eta_sat_vargaftik_yargin_1985_error_pct)), visc::eta_sat_vargaftik_yargin_1985_table),
    source("v91-eq6", "Vargaftik 1991 eq. 6 (monomer)", Viscosity, (700.0, 2000.0), None, visc::eta1_vargaftik_1991_eq6),
    source("v91-eq4-sat", "Vargaftik 1991 eq. 4 extrapolated (saturated)", Viscosity, (600.0, 2000.0), None, visc::eta_sat_vargaftik_1991_low_pressure),
    source("v91-table4", "Vargaftik 1991 table IV (monomer)", Viscosity, (800.0, 2500.0), Some(Percent(5.0)), visc::eta1_vargaftik_1991_table),
    source("v91-table4-sat", "Vargaftik 1991 table IV (saturated)", Viscosity, (800.0, 2500.0), Some(Percent(5.0)), visc::eta_sat_vargaftik_1991_table),
    source("bouledroua-2005", "Bouledroua 2005 power law (monomer)", Viscosity, (200.0, 2000.0), None, visc::eta1_bouledroua_2005),
    source("bouledroua-2005-table1", "Bouledroua 2005 table I (monomer)", Viscosity, (200.0, 2000.0), None, visc::eta1_bouledroua_2005_table_i),
    source("stepanenko-1986", "Stepanenko 1986 eq. 5 (monomer)", Viscosity, (1500.0, 2000.0), Some(Percent(3.5)), visc::eta1_stepanenko_1986),
    source("stepanenko-1986-sat", "Stepanenko 1986 eq. 5 (saturated)", Viscosity, (1500.0, 2000.0), Some(Percent(3.5)), visc::eta_sat_stepanenko_1986),
    source("fialho-1993", "Fialho 1993 (monomer)", Viscosity, (700.0, 2000.0), None, visc::eta1_fialho_1993_table),
    // Thermal conductivity
    source("vy85-eq66", "Vargaftik & Yargin 1985 eq. 66 (monomer)", ThermalConductivity, (700.0, 2500.0), Some(Percent(3.0)), tc::lambda1_vargaftik_yargin_1985),
    source("vy85-eq65-sat", "Vargaftik & Yargin 1985 eqs. 65/67 (saturated)", ThermalConductivity, (1057.0, 2156.0), Some(Percent(7.0)), tc::lambda_sat_vargaftik_yargin_1985),
    source("vy85-table37", "Vargaftik & Yargin 1985 table 37 (saturated)", ThermalConductivity, (700.0, 2000.0), Some(Percent(7.0)), tc::lambda_sat_vargaftik_yargin_1985_table),
    source("v91-eq5", "Vargaftik 1991 eq. 5 (monomer)", ThermalConductivity, (700.0, 2000.0), None, tc::lambda1_vargaftik_1991_eq5),
    source("v91-table3", "Vargaftik 1991 table III (monomer)", ThermalConductivity, (800.0, 2500.0), Some(Percent(5.0)), tc::lambda1_vargaftik_1991_table),
    source("v91-table3-sat", "Vargaftik 1991 table III (saturated)", ThermalConductivity, (800.0, 2500.0), Some(Percent(5.0)), tc::lambda_sat_vargaftik_1991_table),
    source("bouledroua-2005-table5", "Bouledroua 2005 table V (monomer)", ThermalConductivity, (200.0, 2000.0), None, tc::lambda1_bouledroua_2005_table_v),
    // Self-diffusion
    source("fialho-1993-d11", "Fialho 1993 table 3 (0.1 MPa)", SelfDiffusion, (700.0, 1200.0), Some(Percent(1.0)), diffusion::d11_fialho_1993_table),
];

/// All registered sources.
pub fn sources() -> &'static [Source] {
    SOURCES
}

/// Sources describing one property, in registry order.
pub fn sources_for(kind: PropertyKind) -> impl Iterator<Item = &'static Source> {
    SOURCES.iter().filter(move |s| s.kind == kind)
}

/// Look a source up by id.
pub fn find_source(id: &str) -> Result<&'static Source, PropertyError> {
    SOURCES
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| PropertyError::UnknownSource(id.to_string()))
}

/// Look a source up by id and require a given property kind.
pub fn find_source_of(id: &str, kind: PropertyKind) -> Result<&'static Source, PropertyError> {
    let source = find_source(id)?;
    if source.kind != kind {
        return Err(PropertyError::UnknownSource(format!(
            "{id} (a {} source, expected {})",
            source.kind.display_name().to_lowercase(),
            kind.display_name().to_lowercase()
        )));
    }
    Ok(source)
}
