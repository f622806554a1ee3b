//! Debug bundle writer for inspecting fit inputs and per-sample intermediates.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::pipeline::{FitDetails, FitOutput};
use crate::domain::{FitConfig, FittedModel};
use crate::error::AppError;

/// Write a markdown debug bundle under `./debug` and return its path.
pub fn write_debug_bundle(run: &FitOutput, config: &FitConfig) -> Result<PathBuf, AppError> {
    write_debug_bundle_in(Path::new("debug"), run, config)
}

/// Write a markdown debug bundle under `dir` and return its path.
pub fn write_debug_bundle_in(dir: &Path, run: &FitOutput, config: &FitConfig) -> Result<PathBuf, AppError> {
    create_dir_all(dir).map_err(|e| AppError::new(4, format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!(
        "livapor_debug_{}_{}_{}.md",
        run.model.display_name().to_lowercase(),
        run.viscosity.id,
        ts
    ));

    let mut file = File::create(&path)
        .map_err(|e| AppError::new(4, format!("Failed to create debug file: {e}")))?;
    write_bundle(&mut file, run, config)
        .map_err(|e| AppError::new(4, format!("Failed to write debug bundle: {e}")))?;

    Ok(path)
}

fn write_bundle(out: &mut impl Write, run: &FitOutput, config: &FitConfig) -> std::io::Result<()> {
    writeln!(out, "# livapor debug bundle")?;
    writeln!(out, "- generated: {}", Local::now().to_rfc3339())?;
    writeln!(out, "- model: {}", run.model.display_name())?;
    writeln!(out, "- viscosity_source: {} ({})", run.viscosity.id, run.viscosity.label)?;
    if let Some(diffusion) = run.diffusion {
        writeln!(out, "- diffusion_source: {} ({})", diffusion.id, diffusion.label)?;
    }
    writeln!(out, "- window: {:.3}..{:.3} K", config.window.t_min, config.window.t_max)?;
    writeln!(out, "- t_ref: {:.6} K", run.model.t_ref())?;
    writeln!(out, "- mass: {:.6e} kg", config.mass)?;

    writeln!(out, "\n## Fitted parameters")?;
    match run.model {
        FittedModel::Vhs(m) => {
            writeln!(out, "| omega | d_ref [m] |")?;
            writeln!(out, "| - | - |")?;
            writeln!(out, "| {:.9} | {:.9e} |", m.omega, m.d_ref)?;
        }
        FittedModel::Vss(m) => {
            writeln!(out, "| omega | alpha | d_ref [m] |")?;
            writeln!(out, "| - | - | - |")?;
            writeln!(out, "| {:.9} | {:.9} | {:.9e} |", m.omega, m.alpha, m.d_ref)?;
        }
    }

    writeln!(out, "\n## Samples")?;
    match &run.details {
        FitDetails::Vhs(fit) => {
            writeln!(
                out,
                "power law: eta = {:.6e} * T^{:.6}",
                fit.samples.power_law.a, fit.samples.power_law.omega
            )?;
            writeln!(out, "| T [K] | eta [Pa s] | ratio |")?;
            writeln!(out, "| - | - | - |")?;
            for (i, (&t, &eta)) in fit
                .samples
                .temperature
                .iter()
                .zip(&fit.samples.viscosity)
                .enumerate()
            {
                writeln!(out, "| {t:.3} | {eta:.6e} | {} |", fmt_opt(run.normalized.get(i).map(|p| p.ratio)))?;
            }
        }
        FitDetails::Vss(fit) => {
            writeln!(
                out,
                "schmidt reference: m = {:.6e} kg, p0 = {:.3e} Pa",
                fit.schmidt_reference.mass, fit.schmidt_reference.pressure
            )?;
            writeln!(out, "| T [K] | eta [Pa s] | D11 [m^2/s] | Sc | alpha_i |")?;
            writeln!(out, "| - | - | - | - | - |")?;
            for i in 0..fit.samples.temperature.len() {
                writeln!(
                    out,
                    "| {:.3} | {:.6e} | {:.6e} | {} | {} |",
                    fit.samples.temperature[i],
                    fit.samples.viscosity[i],
                    fit.diffusion.get(i).copied().unwrap_or(f64::NAN),
                    fmt_opt(fit.schmidt.get(i).copied()),
                    fmt_opt(fit.alpha_samples.get(i).copied()),
                )?;
            }
        }
    }

    if let Some(u) = &run.uncertainty {
        writeln!(out, "\n## Monte Carlo")?;
        writeln!(out, "- draws: {} (seed {})", u.draws, u.seed)?;
        writeln!(out, "- omega: {:.9} +/- {:.9}", u.omega_mean, u.omega_std)?;
        writeln!(out, "- d_ref: {:.9e} +/- {:.3e}", u.d_ref_mean, u.d_ref_std)?;
    }

    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.6}"),
        _ => "-".to_string(),
    }
}
