//! Read/write model JSON files.
//!
//! Model JSON is the portable representation of a fit:
//! - model kind + parameters
//! - the window and source ids it was fit to
//! - a precomputed viscosity grid for quick plotting
//!
//! The schema is defined by `domain::ModelFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{FitWindow, FittedModel, ModelFile, ModelGrid};
use crate::error::AppError;
use crate::math::linspace;

const GRID_POINTS: usize = 101;

/// Assemble a model file, evaluating the model on a grid over `window`.
pub fn build_model_file(
    model: FittedModel,
    window: FitWindow,
    viscosity_source: &str,
    diffusion_source: Option<&str>,
) -> Result<ModelFile, AppError> {
    let temperature_k = linspace(window.t_min, window.t_max, GRID_POINTS)?;
    let viscosity_pa_s = temperature_k
        .iter()
        .map(|&t| model.viscosity(t))
        .collect::<Result<Vec<f64>, _>>()?;

    Ok(ModelFile {
        tool: "livapor".to_string(),
        generated: Utc::now(),
        model,
        window,
        viscosity_source: viscosity_source.to_string(),
        diffusion_source: diffusion_source.map(str::to_string),
        grid: ModelGrid {
            temperature_k,
            viscosity_pa_s,
        },
    })
}

/// Write a model JSON file.
pub fn write_model_json(path: &Path, file: &ModelFile) -> Result<(), AppError> {
    let out = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create model JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(out, file)
        .map_err(|e| AppError::new(2, format!("Failed to write model JSON: {e}")))?;
    Ok(())
}

/// Read a model JSON file.
pub fn read_model_json(path: &Path) -> Result<ModelFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open model JSON '{}': {e}", path.display())))?;
    let model: ModelFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid model JSON: {e}")))?;
    Ok(model)
}
