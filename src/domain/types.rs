//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - produced by a fit and consumed read-only by the model evaluators
//! - exported to JSON
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::constants::{DIFFUSION_REFERENCE_PRESSURE, LITHIUM_MASS};
use crate::error::FitError;

/// Temperature interval a fit samples, plus the reference temperature the
/// fitted model is anchored at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitWindow {
    /// Lower bound, K.
    pub t_min: f64,
    /// Upper bound, K.
    pub t_max: f64,
    /// Reference temperature, K. Defaults to the midpoint of the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_ref: Option<f64>,
}

impl FitWindow {
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self {
            t_min,
            t_max,
            t_ref: None,
        }
    }

    pub fn with_reference(mut self, t_ref: f64) -> Self {
        self.t_ref = Some(t_ref);
        self
    }

    /// Check `0 < t_min < t_max` (all finite).
    pub fn validate(&self) -> Result<(), FitError> {
        let ok = self.t_min.is_finite()
            && self.t_max.is_finite()
            && self.t_min > 0.0
            && self.t_max > self.t_min;
        if !ok {
            return Err(FitError::InvalidRange {
                t_min: self.t_min,
                t_max: self.t_max,
            });
        }
        Ok(())
    }

    /// Validated reference temperature (explicit, or the window midpoint).
    pub fn reference_temperature(&self) -> Result<f64, FitError> {
        self.validate()?;
        let t_ref = self.t_ref.unwrap_or((self.t_min + self.t_max) / 2.0);
        if !(t_ref.is_finite() && t_ref > 0.0) {
            return Err(FitError::Domain {
                quantity: "reference temperature",
                value: t_ref,
            });
        }
        Ok(t_ref)
    }
}

/// Variable Hard Sphere model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VhsModel {
    /// Particle mass, kg.
    pub mass: f64,
    /// Reference temperature, K.
    pub t_ref: f64,
    /// Viscosity temperature exponent: `η ~ T^omega`.
    pub omega: f64,
    /// Reference diameter, m.
    pub d_ref: f64,
}

/// Variable Soft Sphere model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VssModel {
    pub mass: f64,
    pub t_ref: f64,
    pub omega: f64,
    /// Scattering exponent.
    pub alpha: f64,
    pub d_ref: f64,
}

/// Species and pressure used to turn `η` and `D11` into a Schmidt number.
///
/// The diffusion data in this library are lithium self-diffusion coefficients at
/// 0.1 MPa, so the default is the lithium atom mass at 1e5 Pa regardless of the
/// particle mass being fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchmidtReference {
    /// Mass of the diffusing species, kg.
    pub mass: f64,
    /// Pressure the diffusion coefficients refer to, Pa.
    pub pressure: f64,
}

impl Default for SchmidtReference {
    fn default() -> Self {
        Self {
            mass: LITHIUM_MASS,
            pressure: DIFFUSION_REFERENCE_PRESSURE,
        }
    }
}

/// Power law `y = a * T^omega` from a log-log regression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLawFit {
    pub omega: f64,
    pub a: f64,
}

impl PowerLawFit {
    pub fn eval(&self, t: f64) -> f64 {
        self.a * t.powf(self.omega)
    }
}

/// A fitted kinetic model of either kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FittedModel {
    Vhs(VhsModel),
    Vss(VssModel),
}

impl FittedModel {
    /// Human-readable label for terminal output.
    pub fn display_name(&self) -> &'static str {
        match self {
            FittedModel::Vhs(_) => "VHS",
            FittedModel::Vss(_) => "VSS",
        }
    }

    pub fn t_ref(&self) -> f64 {
        match self {
            FittedModel::Vhs(m) => m.t_ref,
            FittedModel::Vss(m) => m.t_ref,
        }
    }
}

/// Which physical property a correlation describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyKind {
    VaporPressure,
    Viscosity,
    ThermalConductivity,
    SelfDiffusion,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 4] = [
        PropertyKind::VaporPressure,
        PropertyKind::Viscosity,
        PropertyKind::ThermalConductivity,
        PropertyKind::SelfDiffusion,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            PropertyKind::VaporPressure => "Vapor pressure",
            PropertyKind::Viscosity => "Viscosity",
            PropertyKind::ThermalConductivity => "Thermal conductivity",
            PropertyKind::SelfDiffusion => "Self-diffusion",
        }
    }

    pub fn unit_label(self) -> &'static str {
        match self {
            PropertyKind::VaporPressure => "Pa",
            PropertyKind::Viscosity => "Pa s",
            PropertyKind::ThermalConductivity => "W/m K",
            PropertyKind::SelfDiffusion => "m^2/s",
        }
    }

    /// Whether values span many decades and read better on a log axis.
    pub fn prefers_log_axis(self) -> bool {
        matches!(self, PropertyKind::VaporPressure)
    }
}

/// Which kinetic model to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Vhs,
    Vss,
}

/// A full fit run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub kind: ModelKind,
    /// Catalog id of the viscosity correlation to fit.
    pub viscosity_source: String,
    /// Catalog id of the self-diffusion correlation (VSS only).
    pub diffusion_source: Option<String>,
    pub window: FitWindow,
    /// Particle mass, kg.
    pub mass: f64,

    /// Monte Carlo draws for parameter uncertainty (0 disables).
    pub draws: usize,
    pub seed: u64,
    /// Relative uncertainty (percent) used when the source quotes none.
    pub noise_pct: Option<f64>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_model: Option<PathBuf>,
    pub debug: bool,
}

/// Configuration for a property comparison across literature sources.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub property: PropertyKind,
    pub t_min: f64,
    pub t_max: f64,
    pub steps: usize,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export: Option<PathBuf>,
}

/// A saved model file (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub generated: DateTime<Utc>,
    pub model: FittedModel,
    pub window: FitWindow,
    pub viscosity_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffusion_source: Option<String>,
    pub grid: ModelGrid,
}

/// Model viscosity precomputed on a temperature grid for quick plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelGrid {
    pub temperature_k: Vec<f64>,
    pub viscosity_pa_s: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_reference_to_midpoint() {
        let w = FitWindow::new(700.0, 1000.0);
        assert_eq!(w.reference_temperature().unwrap(), 850.0);
        let w = w.with_reference(900.0);
        assert_eq!(w.reference_temperature().unwrap(), 900.0);
    }

    #[test]
    fn window_rejects_bad_ranges() {
        for (lo, hi) in [(1000.0, 700.0), (800.0, 800.0), (0.0, 500.0), (-5.0, 500.0), (f64::NAN, 1.0)] {
            let err = FitWindow::new(lo, hi).validate().unwrap_err();
            assert!(matches!(err, FitError::InvalidRange { .. }), "{lo}..{hi}");
        }
    }

    #[test]
    fn window_rejects_non_positive_reference() {
        let w = FitWindow::new(700.0, 1000.0).with_reference(0.0);
        assert!(matches!(
            w.reference_temperature(),
            Err(FitError::Domain { .. })
        ));
    }

    #[test]
    fn fitted_model_json_is_tagged_by_kind() {
        let model = FittedModel::Vhs(VhsModel {
            mass: 1.0e-26,
            t_ref: 850.0,
            omega: 0.7,
            d_ref: 4.0e-10,
        });
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"kind\":\"vhs\""));
        let back: FittedModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
