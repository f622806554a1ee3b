//! Reporting utilities: model-vs-source comparisons and cross-source tables.

mod format;

pub use format::*;

use serde::Serialize;

use crate::data::sources_for;
use crate::domain::{FittedModel, PropertyKind};
use crate::error::{AppError, PropertyError};

/// Normalized residual above which a fit is flagged on stderr.
pub const DEVIATION_WARNING: f64 = 0.05;

/// Source value divided by model value at one temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedPoint {
    pub temperature: f64,
    pub source_value: f64,
    pub model_value: f64,
    pub ratio: f64,
}

/// Evaluate `source / model` viscosity at each temperature.
pub fn normalized_comparison<V>(
    source: &V,
    model: &FittedModel,
    temperatures: &[f64],
) -> Result<Vec<NormalizedPoint>, AppError>
where
    V: Fn(f64) -> Result<f64, PropertyError> + ?Sized,
{
    let mut out = Vec::with_capacity(temperatures.len());
    for &t in temperatures {
        let source_value = source(t)?;
        let model_value = model.viscosity(t)?;
        let ratio = source_value / model_value;
        if !ratio.is_finite() {
            return Err(AppError::new(
                4,
                format!("Non-finite normalized viscosity at T = {t} K."),
            ));
        }
        out.push(NormalizedPoint {
            temperature: t,
            source_value,
            model_value,
            ratio,
        });
    }
    Ok(out)
}

/// Largest `|ratio - 1|` over the comparison (0 when empty).
pub fn max_deviation(points: &[NormalizedPoint]) -> f64 {
    points
        .iter()
        .map(|p| (p.ratio - 1.0).abs())
        .fold(0.0, f64::max)
}

/// Warning text when the model misses the source by more than [`DEVIATION_WARNING`].
pub fn deviation_warning(points: &[NormalizedPoint]) -> Option<String> {
    let worst = points.iter().max_by(|a, b| {
        (a.ratio - 1.0)
            .abs()
            .partial_cmp(&(b.ratio - 1.0).abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;
    let dev = (worst.ratio - 1.0).abs();
    if dev > DEVIATION_WARNING {
        Some(format!(
            "warning: model deviates from the source by {:.1}% at T = {:.1} K",
            dev * 100.0,
            worst.temperature
        ))
    } else {
        None
    }
}

/// One source's values on the comparison grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonColumn {
    pub id: &'static str,
    pub label: &'static str,
    /// `None` outside the source's validity range or where it fails to evaluate.
    pub values: Vec<Option<f64>>,
}

/// Every source of one property evaluated on a shared temperature grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub property: PropertyKind,
    pub temperatures: Vec<f64>,
    pub columns: Vec<ComparisonColumn>,
}

impl ComparisonTable {
    /// `(T, value)` pairs of one column, skipping empty cells.
    pub fn points(&self, column: &ComparisonColumn) -> Vec<(f64, f64)> {
        self.temperatures
            .iter()
            .zip(&column.values)
            .filter_map(|(&t, v)| v.map(|v| (t, v)))
            .collect()
    }
}

/// Tabulate all sources of `property` at the given temperatures.
pub fn property_comparison(property: PropertyKind, temperatures: &[f64]) -> ComparisonTable {
    let columns = sources_for(property)
        .map(|source| ComparisonColumn {
            id: source.id,
            label: source.label,
            values: temperatures
                .iter()
                .map(|&t| source.value_in_range(t))
                .collect(),
        })
        .collect();

    ComparisonTable {
        property,
        temperatures: temperatures.to_vec(),
        columns,
    }
}
