//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::app::pipeline::{FitDetails, FitOutput};
use crate::data::{Source, Uncertainty, sources, sources_for};
use crate::domain::constants::ATOMIC_MASS_UNIT;
use crate::domain::{FitConfig, FittedModel, ModelFile, PropertyKind};
use crate::report::{ComparisonTable, NormalizedPoint, max_deviation};

/// Format the fit summary (inputs, fitted parameters, diagnostics).
pub fn format_fit_summary(run: &FitOutput, config: &FitConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== livapor - {} fit ===\n",
        run.model.display_name()
    ));
    out.push_str(&format!(
        "Viscosity: {} [{}]\n",
        run.viscosity.label, run.viscosity.id
    ));
    if let Some(diffusion) = run.diffusion {
        out.push_str(&format!("Diffusion: {} [{}]\n", diffusion.label, diffusion.id));
    }
    out.push_str(&format!(
        "Window: T=[{:.1}, {:.1}] K | T_ref={:.1} K | n={}\n",
        config.window.t_min,
        config.window.t_max,
        run.model.t_ref(),
        run.details.temperatures().len()
    ));
    out.push_str(&format!(
        "Mass: {:.4e} kg ({:.3} amu)\n",
        config.mass,
        config.mass / ATOMIC_MASS_UNIT
    ));

    out.push_str("\nFitted model:\n");
    out.push_str(&format_model_parameters(&run.model));

    if let FitDetails::Vss(fit) = &run.details {
        let n = fit.schmidt.len().max(1) as f64;
        let sc_mean = fit.schmidt.iter().sum::<f64>() / n;
        out.push_str(&format!(
            "- Sc (sampled mean) : {sc_mean:.4} (p0={:.3e} Pa)\n",
            fit.schmidt_reference.pressure
        ));
    }

    out.push_str("\nSource / model viscosity:\n");
    out.push_str(&format!(
        "- max |ratio - 1|: {:.3}%\n",
        max_deviation(&run.normalized) * 100.0
    ));
    out.push_str(&format_normalized_table(&run.normalized, 11));

    if let Some(u) = &run.uncertainty {
        out.push_str(&format!(
            "\nMonte Carlo ({} draws, seed {}):\n",
            u.draws, u.seed
        ));
        out.push_str(&format!(
            "- omega: {:.6} +/- {:.6}\n",
            u.omega_mean, u.omega_std
        ));
        out.push_str(&format!(
            "- d_ref: {:.6e} +/- {:.3e} m\n",
            u.d_ref_mean, u.d_ref_std
        ));
    }
    out.push('\n');

    out
}

/// One line per model parameter, plus the implied Schmidt number for VSS.
pub fn format_model_parameters(model: &FittedModel) -> String {
    let mut out = String::new();
    match model {
        FittedModel::Vhs(m) => {
            out.push_str(&format!("- omega : {:.6}\n", m.omega));
            out.push_str(&format!("- d_ref : {:.6e} m\n", m.d_ref));
            out.push_str(&format!("- T_ref : {:.2} K\n", m.t_ref));
        }
        FittedModel::Vss(m) => {
            out.push_str(&format!("- omega : {:.6}\n", m.omega));
            out.push_str(&format!("- alpha : {:.6}\n", m.alpha));
            out.push_str(&format!("- d_ref : {:.6e} m\n", m.d_ref));
            out.push_str(&format!("- T_ref : {:.2} K\n", m.t_ref));
        }
    }
    match model.schmidt_number() {
        Some(Ok(sc)) => out.push_str(&format!("- Sc (implied) : {sc:.4}\n")),
        Some(Err(err)) => out.push_str(&format!("- Sc (implied) : n/a ({err})\n")),
        None => {}
    }
    out
}

/// Table of normalized viscosity at up to `max_rows` evenly picked samples.
pub fn format_normalized_table(points: &[NormalizedPoint], max_rows: usize) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>10} {:>14} {:>14} {:>10}\n",
            "T [K]", "source", "model", "ratio"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<10} {:-<14} {:-<14} {:-<10}\n", "", "", "", "").trim_end());
    out.push('\n');

    for p in pick_rows(points, max_rows) {
        out.push_str(
            format!(
                "{:>10.1} {:>14.6e} {:>14.6e} {:>10.5}\n",
                p.temperature, p.source_value, p.model_value, p.ratio
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

fn pick_rows(points: &[NormalizedPoint], max_rows: usize) -> Vec<&NormalizedPoint> {
    if points.len() <= max_rows || max_rows < 2 {
        return points.iter().collect();
    }
    let last = points.len() - 1;
    (0..max_rows)
        .map(|i| &points[(i * last + (max_rows - 1) / 2) / (max_rows - 1)])
        .collect()
}

/// Format a cross-source comparison; empty cells print as `-`.
pub fn format_comparison_table(table: &ComparisonTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} [{}]\n",
        table.property.display_name(),
        table.property.unit_label()
    ));

    let mut header = format!("{:>8}", "T [K]");
    let mut rule = format!("{:-<8}", "");
    for column in &table.columns {
        header.push_str(&format!(" {:>12}", truncate(column.id, 12)));
        rule.push_str(&format!(" {:-<12}", ""));
    }
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for (row, &t) in table.temperatures.iter().enumerate() {
        let mut line = format!("{t:>8.1}");
        for column in &table.columns {
            let cell = match column.values.get(row).copied().flatten() {
                Some(v) => format!("{v:.4e}"),
                None => "-".to_string(),
            };
            line.push_str(&format!(" {cell:>12}"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push('\n');
    for column in &table.columns {
        out.push_str(&format!("{:<24} {}\n", column.id, column.label));
    }
    out
}

/// List registered sources, optionally for one property only.
pub fn format_sources(property: Option<PropertyKind>) -> String {
    let selected: Vec<&Source> = match property {
        Some(kind) => sources_for(kind).collect(),
        None => sources().iter().collect(),
    };

    let mut out = String::new();
    out.push_str(
        format!(
            "{:<24} {:<20} {:>15} {:>12} {}\n",
            "id", "property", "range [K]", "uncertainty", "label"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<24} {:-<20} {:-<15} {:-<12} {:-<5}\n", "", "", "", "", "").trim_end());
    out.push('\n');

    for s in selected {
        let uncertainty = match s.uncertainty {
            Some(Uncertainty::Percent(p)) => format!("{p}%"),
            Some(Uncertainty::Function(_)) => "f(T)".to_string(),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "{:<24} {:<20} {:>15} {:>12} {}\n",
            s.id,
            s.kind.display_name(),
            format!("{:.0}-{:.0}", s.t_min, s.t_max),
            uncertainty,
            s.label
        ));
    }
    out
}

/// Short description of a saved model file.
pub fn format_model_file(file: &ModelFile) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== {} model ({}) ===\n",
        file.model.display_name(),
        file.tool
    ));
    out.push_str(&format!("Generated: {}\n", file.generated.to_rfc3339()));
    out.push_str(&format!("Viscosity: {}\n", file.viscosity_source));
    if let Some(diffusion) = &file.diffusion_source {
        out.push_str(&format!("Diffusion: {diffusion}\n"));
    }
    out.push_str(&format!(
        "Window: T=[{:.1}, {:.1}] K\n",
        file.window.t_min, file.window.t_max
    ));
    out.push_str(&format_model_parameters(&file.model));
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VhsModel;
    use crate::report::ComparisonColumn;

    #[test]
    fn comparison_table_marks_missing_cells() {
        let table = ComparisonTable {
            property: PropertyKind::Viscosity,
            temperatures: vec![800.0, 900.0],
            columns: vec![
                ComparisonColumn {
                    id: "a",
                    label: "Source A",
                    values: vec![Some(1.5e-5), None],
                },
                ComparisonColumn {
                    id: "a-very-long-source-id",
                    label: "Source B",
                    values: vec![Some(2.0e-5), Some(2.5e-5)],
                },
            ],
        };
        let txt = format_comparison_table(&table);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "Viscosity [Pa s]");
        assert_eq!(lines[1], "   T [K]            a a-very-long.");
        assert_eq!(lines[3], "   800.0    1.5000e-5    2.0000e-5");
        assert_eq!(lines[4], "   900.0            -    2.5000e-5");
        assert!(txt.contains("a-very-long-source-id    Source B"));
    }

    #[test]
    fn normalized_table_keeps_first_and_last_rows() {
        let points: Vec<NormalizedPoint> = (0..100)
            .map(|i| NormalizedPoint {
                temperature: 700.0 + i as f64,
                source_value: 1.0,
                model_value: 1.0,
                ratio: 1.0,
            })
            .collect();
        let rows = pick_rows(&points, 11);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].temperature, 700.0);
        assert_eq!(rows[10].temperature, 799.0);

        let txt = format_normalized_table(&points, 11);
        assert_eq!(txt.lines().count(), 13);
    }

    #[test]
    fn vhs_parameters_omit_schmidt_number() {
        let txt = format_model_parameters(&FittedModel::Vhs(VhsModel {
            mass: 1.15e-26,
            t_ref: 850.0,
            omega: 0.7,
            d_ref: 4.0e-10,
        }));
        assert!(txt.contains("- omega : 0.700000"));
        assert!(txt.contains("- d_ref : 4.000000e-10 m"));
        assert!(!txt.contains("Sc"));
    }

    #[test]
    fn sources_listing_filters_by_property() {
        let txt = format_sources(Some(PropertyKind::SelfDiffusion));
        assert!(txt.contains("fialho-1993-d11"));
        assert!(!txt.contains("bouledroua"));
        assert_eq!(txt.lines().count(), 3);
    }
}
