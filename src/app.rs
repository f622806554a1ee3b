//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs fits and source comparisons
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, CompareArgs, FitArgs, PlotArgs, SourcesArgs};
use crate::domain::constants::ATOMIC_MASS_UNIT;
use crate::domain::{CompareConfig, FitConfig, FitWindow, ModelKind};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `livapor` binary.
pub fn run() -> Result<(), AppError> {
    // A bare `livapor` opens the TUI.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::FitVhs(args) => handle_fit(&args, ModelKind::Vhs),
        Command::FitVss(args) => handle_fit(&args, ModelKind::Vss),
        Command::Compare(args) => handle_compare(&args),
        Command::Plot(args) => handle_plot(&args),
        Command::Sources(args) => handle_sources(&args),
        Command::Tui => crate::tui::run(),
    }
}

fn handle_fit(args: &FitArgs, kind: ModelKind) -> Result<(), AppError> {
    let config = fit_config_from_args(args, kind);
    let run = pipeline::run_fit(&config)?;

    println!("{}", crate::report::format_fit_summary(&run, &config));
    if let Some(warning) = crate::report::deviation_warning(&run.normalized) {
        eprintln!("{warning}");
    }

    if config.plot {
        let plot = crate::plot::render_fit_plot(&run, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_model {
        let file = crate::io::build_model_file(
            run.model,
            config.window,
            run.viscosity.id,
            run.diffusion.map(|s| s.id),
        )?;
        crate::io::write_model_json(path, &file)?;
        println!("Wrote model: {}", path.display());
    }
    if config.debug {
        let path = crate::debug::write_debug_bundle(&run, &config)?;
        println!("Wrote debug bundle: {}", path.display());
    }

    Ok(())
}

fn handle_compare(args: &CompareArgs) -> Result<(), AppError> {
    let config = compare_config_from_args(args);
    let table = pipeline::run_compare(&config)?;

    println!("{}", crate::report::format_comparison_table(&table));

    if config.plot {
        let plot = crate::plot::render_comparison_plot(&table, config.plot_width, config.plot_height);
        println!("{plot}");
    }
    if let Some(path) = &config.export {
        crate::io::write_comparison_csv(path, &table)?;
        println!("Wrote table: {}", path.display());
    }
    Ok(())
}

fn handle_plot(args: &PlotArgs) -> Result<(), AppError> {
    let file = crate::io::read_model_json(&args.model)?;

    println!("{}", crate::report::format_model_file(&file));
    let plot = crate::plot::render_model_file_plot(&file, args.size.width, args.size.height);
    println!("{plot}");
    Ok(())
}

fn handle_sources(args: &SourcesArgs) -> Result<(), AppError> {
    print!("{}", crate::report::format_sources(args.property));
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs, kind: ModelKind) -> FitConfig {
    let mut window = FitWindow::new(args.t_min, args.t_max);
    if let Some(t_ref) = args.t_ref {
        window = window.with_reference(t_ref);
    }

    FitConfig {
        kind,
        viscosity_source: args.viscosity.clone(),
        diffusion_source: match kind {
            ModelKind::Vhs => None,
            ModelKind::Vss => Some(args.diffusion.clone()),
        },
        window,
        mass: args.mass_amu * ATOMIC_MASS_UNIT,
        draws: args.draws,
        seed: args.seed,
        noise_pct: args.noise_pct,
        plot: args.plot && !args.no_plot,
        plot_width: args.size.width,
        plot_height: args.size.height,
        export_model: args.export_model.clone(),
        debug: args.debug,
    }
}

pub fn compare_config_from_args(args: &CompareArgs) -> CompareConfig {
    CompareConfig {
        property: args.property,
        t_min: args.t_min,
        t_max: args.t_max,
        steps: args.steps,
        plot: args.plot,
        plot_width: args.size.width,
        plot_height: args.size.height,
        export: args.export.clone(),
    }
}

/// Rewrite argv so `livapor` defaults to `livapor tui`.
///
/// Rules:
/// - `livapor`                      -> `livapor tui`
/// - `livapor --help/--version/-h`  -> unchanged (show top-level help/version)
/// - anything else                  -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    if argv.len() <= 1 {
        argv.push("tui".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::domain::constants::LITHIUM_MASS;
    use approx::assert_relative_eq;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_the_tui() {
        assert_eq!(rewrite_args(argv(&["livapor"])), argv(&["livapor", "tui"]));
        assert_eq!(rewrite_args(argv(&["livapor", "--help"])), argv(&["livapor", "--help"]));
        assert_eq!(
            rewrite_args(argv(&["livapor", "sources"])),
            argv(&["livapor", "sources"])
        );
    }

    #[test]
    fn fit_args_map_into_config() {
        let cli = Cli::parse_from([
            "livapor", "fit-vss", "--t-min", "800", "--t-max", "1100", "--t-ref", "900", "--no-plot",
        ]);
        let Command::FitVss(args) = cli.command else {
            panic!("expected fit-vss");
        };
        let config = fit_config_from_args(&args, ModelKind::Vss);
        assert_eq!(config.window.reference_temperature().unwrap(), 900.0);
        assert_eq!(config.diffusion_source.as_deref(), Some("fialho-1993-d11"));
        assert!(!config.plot);
        assert_relative_eq!(config.mass, LITHIUM_MASS, max_relative = 1e-12);

        let vhs = fit_config_from_args(&args, ModelKind::Vhs);
        assert!(vhs.diffusion_source.is_none());
    }
}
