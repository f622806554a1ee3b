//! Command-line parsing for the lithium vapor property tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::PropertyKind;
use crate::domain::constants::LITHIUM_ATOMIC_WEIGHT;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "livapor",
    version,
    about = "Lithium vapor properties and VHS/VSS kinetic model fits"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a Variable Hard Sphere model to a viscosity correlation.
    FitVhs(FitArgs),
    /// Fit a Variable Soft Sphere model to viscosity and self-diffusion correlations.
    FitVss(FitArgs),
    /// Tabulate every literature source of one property over a temperature range.
    Compare(CompareArgs),
    /// Plot a previously exported model JSON.
    Plot(PlotArgs),
    /// List the registered literature sources.
    Sources(SourcesArgs),
    /// Launch the interactive TUI.
    Tui,
}

/// Options shared by `fit-vhs` and `fit-vss`.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Viscosity source id (see `livapor sources --property viscosity`).
    #[arg(long, default_value = "bouledroua-2005-table1")]
    pub viscosity: String,

    /// Self-diffusion source id (VSS only).
    #[arg(long, default_value = "fialho-1993-d11")]
    pub diffusion: String,

    /// Lower end of the fit window (K).
    #[arg(long, default_value_t = 700.0)]
    pub t_min: f64,

    /// Upper end of the fit window (K).
    #[arg(long, default_value_t = 1000.0)]
    pub t_max: f64,

    /// Reference temperature (K); defaults to the window midpoint.
    #[arg(long)]
    pub t_ref: Option<f64>,

    /// Particle mass in atomic mass units.
    #[arg(long, default_value_t = LITHIUM_ATOMIC_WEIGHT)]
    pub mass_amu: f64,

    /// Monte Carlo draws for parameter uncertainty (VHS only, 0 disables).
    #[arg(long, default_value_t = 0)]
    pub draws: usize,

    /// Seed for the Monte Carlo draws.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Relative 1-sigma noise (percent); defaults to the source's quoted uncertainty.
    #[arg(long)]
    pub noise_pct: Option<f64>,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    #[command(flatten)]
    pub size: PlotSize,

    /// Export the fitted model (parameters + viscosity grid) to JSON.
    #[arg(long = "export-model")]
    pub export_model: Option<PathBuf>,

    /// Write a markdown debug bundle under ./debug.
    #[arg(long)]
    pub debug: bool,
}

/// Options for `compare`.
#[derive(Debug, Parser, Clone)]
pub struct CompareArgs {
    /// Property to compare.
    #[arg(long, value_enum, default_value_t = PropertyKind::Viscosity)]
    pub property: PropertyKind,

    /// Lower end of the temperature range (K).
    #[arg(long, default_value_t = 700.0)]
    pub t_min: f64,

    /// Upper end of the temperature range (K).
    #[arg(long, default_value_t = 2000.0)]
    pub t_max: f64,

    /// Number of grid temperatures.
    #[arg(long, default_value_t = 14)]
    pub steps: usize,

    /// Export the table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Render an ASCII plot in the terminal.
    #[arg(long)]
    pub plot: bool,

    #[command(flatten)]
    pub size: PlotSize,
}

/// Options for plotting a saved model.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Model JSON file produced by `fit-vhs/fit-vss --export-model`.
    #[arg(long, value_name = "JSON")]
    pub model: PathBuf,

    #[command(flatten)]
    pub size: PlotSize,
}

/// Options for listing sources.
#[derive(Debug, Parser)]
pub struct SourcesArgs {
    /// Only list sources of this property.
    #[arg(long, value_enum)]
    pub property: Option<PropertyKind>,
}

/// Terminal plot dimensions.
#[derive(Debug, Args, Clone, Copy)]
pub struct PlotSize {
    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_defaults_parse() {
        let cli = Cli::try_parse_from(["livapor", "fit-vhs"]).unwrap();
        let Command::FitVhs(args) = cli.command else {
            panic!("expected fit-vhs");
        };
        assert_eq!(args.viscosity, "bouledroua-2005-table1");
        assert_eq!(args.t_min, 700.0);
        assert_eq!(args.t_max, 1000.0);
        assert_eq!(args.mass_amu, LITHIUM_ATOMIC_WEIGHT);
        assert!(args.t_ref.is_none());
        assert_eq!(args.size.width, 100);
    }

    #[test]
    fn compare_accepts_kebab_case_properties() {
        let cli = Cli::try_parse_from([
            "livapor",
            "compare",
            "--property",
            "vapor-pressure",
            "--steps",
            "5",
            "--plot",
        ])
        .unwrap();
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.property, PropertyKind::VaporPressure);
        assert_eq!(args.steps, 5);
        assert!(args.plot);
    }

    #[test]
    fn plot_requires_a_model_file() {
        assert!(Cli::try_parse_from(["livapor", "plot"]).is_err());
    }
}
