//! Shared fit/compare pipeline used by both CLI and TUI front-ends.
//!
//! source lookup -> sampling + regression -> model -> normalized comparison
//! -> optional Monte Carlo uncertainty
//!
//! The CLI and the TUI then only deal with presentation (printing vs widgets).

use crate::data::{Source, find_source_of};
use crate::domain::{
    CompareConfig, FitConfig, FittedModel, ModelKind, PropertyKind, SchmidtReference,
};
use crate::error::{AppError, FitError};
use crate::fit::{ParameterUncertainty, VhsFit, VssFit, vhs_fit, vhs_parameter_uncertainty, vss_fit};
use crate::math::linspace;
use crate::report::{ComparisonTable, NormalizedPoint, normalized_comparison, property_comparison};

/// Per-sample intermediates of whichever model was fit.
#[derive(Debug, Clone, PartialEq)]
pub enum FitDetails {
    Vhs(VhsFit),
    Vss(VssFit),
}

impl FitDetails {
    pub fn temperatures(&self) -> &[f64] {
        match self {
            FitDetails::Vhs(fit) => &fit.samples.temperature,
            FitDetails::Vss(fit) => &fit.samples.temperature,
        }
    }

    pub fn viscosities(&self) -> &[f64] {
        match self {
            FitDetails::Vhs(fit) => &fit.samples.viscosity,
            FitDetails::Vss(fit) => &fit.samples.viscosity,
        }
    }
}

/// All computed outputs of a single fit run.
#[derive(Debug, Clone)]
pub struct FitOutput {
    pub model: FittedModel,
    pub details: FitDetails,
    pub viscosity: &'static Source,
    pub diffusion: Option<&'static Source>,
    pub normalized: Vec<NormalizedPoint>,
    pub uncertainty: Option<ParameterUncertainty>,
}

/// Execute the fit pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<FitOutput, AppError> {
    let viscosity = find_source_of(&config.viscosity_source, PropertyKind::Viscosity)?;

    let (model, details, diffusion) = match config.kind {
        ModelKind::Vhs => {
            let fit = vhs_fit(&viscosity.eval, config.mass, &config.window)?;
            (FittedModel::Vhs(fit.model), FitDetails::Vhs(fit), None)
        }
        ModelKind::Vss => {
            let id = config
                .diffusion_source
                .as_deref()
                .ok_or_else(|| AppError::new(2, "A VSS fit needs a self-diffusion source (--diffusion)."))?;
            let diffusion = find_source_of(id, PropertyKind::SelfDiffusion)?;
            let fit = vss_fit(
                &viscosity.eval,
                &diffusion.eval,
                config.mass,
                &config.window,
                SchmidtReference::default(),
            )?;
            (FittedModel::Vss(fit.model), FitDetails::Vss(fit), Some(diffusion))
        }
    };

    let normalized = normalized_comparison(&viscosity.eval, &model, details.temperatures())?;

    let uncertainty = if config.draws > 0 {
        Some(run_uncertainty(config, viscosity)?)
    } else {
        None
    };

    Ok(FitOutput {
        model,
        details,
        viscosity,
        diffusion,
        normalized,
        uncertainty,
    })
}

fn run_uncertainty(
    config: &FitConfig,
    viscosity: &'static Source,
) -> Result<ParameterUncertainty, AppError> {
    if config.kind != ModelKind::Vhs {
        return Err(AppError::new(
            2,
            "Monte Carlo uncertainty is only available for VHS fits.",
        ));
    }

    let uncertainty = match (config.noise_pct, viscosity.uncertainty) {
        (Some(pct), _) => vhs_parameter_uncertainty(
            &viscosity.eval,
            config.mass,
            &config.window,
            |_| pct,
            config.draws,
            config.seed,
        ),
        (None, Some(quoted)) => vhs_parameter_uncertainty(
            &viscosity.eval,
            config.mass,
            &config.window,
            |t| quoted.percent_at(t),
            config.draws,
            config.seed,
        ),
        (None, None) => Err(FitError::InvalidUncertainty(format!(
            "{} quotes no uncertainty; pass --noise-pct",
            viscosity.id
        ))),
    }?;
    Ok(uncertainty)
}

/// Tabulate every source of the configured property over the configured grid.
pub fn run_compare(config: &CompareConfig) -> Result<ComparisonTable, AppError> {
    let temperatures = linspace(config.t_min, config.t_max, config.steps)?;
    Ok(property_comparison(config.property, &temperatures))
}
