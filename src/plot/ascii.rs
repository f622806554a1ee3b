//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Every series gets its own marker character. Lines are drawn first and only
//! fill empty cells; point series are drawn last so they stay visible.

use crate::app::pipeline::FitOutput;
use crate::data::viscosity::stepanenko_1986_table_i;
use crate::domain::{ModelFile, PropertyKind};
use crate::report::ComparisonTable;

const MARKERS: &[char] = &[
    '*', '+', 'x', '#', '%', '@', '=', '~', '^', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
];

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    Points,
}

/// A labeled set of `(T, y)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
    pub marker: char,
}

impl Series {
    pub fn line(label: impl Into<String>, points: Vec<(f64, f64)>, marker: char) -> Self {
        Self {
            label: label.into(),
            points,
            style: SeriesStyle::Line,
            marker,
        }
    }

    pub fn points(label: impl Into<String>, points: Vec<(f64, f64)>, marker: char) -> Self {
        Self {
            label: label.into(),
            points,
            style: SeriesStyle::Points,
            marker,
        }
    }
}

/// Plot the sampled source viscosity (`o`) against the fitted model (`-`).
pub fn render_fit_plot(run: &FitOutput, width: usize, height: usize) -> String {
    let samples: Vec<(f64, f64)> = run
        .details
        .temperatures()
        .iter()
        .copied()
        .zip(run.details.viscosities().iter().copied())
        .collect();
    let model: Vec<(f64, f64)> = run
        .normalized
        .iter()
        .map(|p| (p.temperature, p.model_value))
        .collect();

    let series = [
        Series::line(format!("{} model", run.model.display_name()), model, '-'),
        Series::points(run.viscosity.label, thin(&samples, width), 'o'),
    ];
    render_series_plot(&series, PropertyKind::Viscosity.unit_label(), false, width, height)
}

/// Plot the viscosity grid stored in a model file.
pub fn render_model_file_plot(file: &ModelFile, width: usize, height: usize) -> String {
    let points: Vec<(f64, f64)> = file
        .grid
        .temperature_k
        .iter()
        .copied()
        .zip(file.grid.viscosity_pa_s.iter().copied())
        .collect();
    let series = [Series::line(
        format!("{} model", file.model.display_name()),
        points,
        '-',
    )];
    render_series_plot(&series, PropertyKind::Viscosity.unit_label(), false, width, height)
}

/// Plot every column of a comparison table.
///
/// For viscosity the Stepanenko (1986) measurements inside the table range are
/// overlaid as points.
pub fn render_comparison_plot(table: &ComparisonTable, width: usize, height: usize) -> String {
    let mut series: Vec<Series> = table
        .columns
        .iter()
        .zip(MARKERS.iter().cycle())
        .map(|(column, &marker)| Series::line(column.label, table.points(column), marker))
        .filter(|s| !s.points.is_empty())
        .collect();

    if table.property == PropertyKind::Viscosity {
        if let (Some(&lo), Some(&hi)) = (table.temperatures.first(), table.temperatures.last()) {
            let measured: Vec<(f64, f64)> = stepanenko_1986_table_i()
                .into_iter()
                .filter(|&(t, _)| t >= lo && t <= hi)
                .collect();
            if !measured.is_empty() {
                series.push(Series::points("Stepanenko 1986 table I", measured, 'o'));
            }
        }
    }

    render_series_plot(
        &series,
        table.property.unit_label(),
        table.property.prefers_log_axis(),
        width,
        height,
    )
}

/// Render series onto a fixed grid with a range header and a legend.
pub fn render_series_plot(
    series: &[Series],
    unit: &str,
    log_y: bool,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let transform = |y: f64| if log_y { y.log10() } else { y };
    let mapped: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| {
            s.points
                .iter()
                .map(|&(t, y)| (t, transform(y)))
                .filter(|&(t, y)| t.is_finite() && y.is_finite())
                .collect()
        })
        .collect();

    let (t_min, t_max) = range(mapped.iter().flatten().map(|&(t, _)| t)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = range(mapped.iter().flatten().map(|&(_, y)| y)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Lines first (so points can overlay).
    for (s, points) in series.iter().zip(&mapped) {
        if s.style == SeriesStyle::Line {
            draw_curve(&mut grid, points, s.marker, (t_min, t_max), (y_min, y_max));
        }
    }
    for (s, points) in series.iter().zip(&mapped) {
        if s.style == SeriesStyle::Points {
            for &(t, y) in points {
                let x = map_x(t, t_min, t_max, width);
                let yy = map_y(y, y_min, y_max, height);
                grid[yy][x] = s.marker;
            }
        }
    }

    let (lo, hi, scale) = if log_y {
        (10f64.powf(y_min), 10f64.powf(y_max), " (log)")
    } else {
        (y_min, y_max, "")
    };
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: T=[{t_min:.1}, {t_max:.1}] K | y=[{lo:.3e}, {hi:.3e}] {unit}{scale}\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    for s in series {
        out.push_str(&format!("  {} {}\n", s.marker, s.label));
    }

    out
}

/// Keep at most `max` points, evenly spaced, so markers don't smear into a line.
fn thin(points: &[(f64, f64)], max: usize) -> Vec<(f64, f64)> {
    let keep = (max / 4).max(2);
    if points.len() <= keep {
        return points.to_vec();
    }
    let last = points.len() - 1;
    (0..keep)
        .map(|i| points[i * last / (keep - 1)])
        .collect()
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else if min.is_finite() && max.is_finite() {
        Some((min - 0.5, max + 0.5))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    ch: char,
    (t_min, t_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(t, y) in curve {
        let x = map_x(t, t_min, t_max, width);
        let yy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, yy, ch);
        } else if grid[yy][x] == ' ' {
            grid[yy][x] = ch;
        }
        prev = Some((x, yy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
