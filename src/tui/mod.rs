//! Ratatui-based terminal UI.
//!
//! The TUI offers a settings panel for choosing a view (one property across all
//! literature sources, or a VHS/VSS fit), the temperature window and the
//! viscosity source to fit, then renders every series in a Plotters chart.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::pipeline::{FitOutput, run_compare, run_fit};
use crate::data::sources_for;
use crate::data::viscosity::stepanenko_1986_table_i;
use crate::domain::constants::LITHIUM_MASS;
use crate::domain::{CompareConfig, FitConfig, FitWindow, FittedModel, ModelKind, PropertyKind};
use crate::error::AppError;
use crate::report::max_deviation;

mod plotters_chart;

use plotters_chart::{ChartSeries, PALETTE, PropertyChart};

const COMPARE_STEPS: usize = 120;
const T_STEP: f64 = 50.0;
const T_FLOOR: f64 = 100.0;

/// Start the TUI.
pub fn run() -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new();
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Property(PropertyKind),
    Fit(ModelKind),
}

const VIEWS: [View; 6] = [
    View::Property(PropertyKind::VaporPressure),
    View::Property(PropertyKind::Viscosity),
    View::Property(PropertyKind::ThermalConductivity),
    View::Property(PropertyKind::SelfDiffusion),
    View::Fit(ModelKind::Vhs),
    View::Fit(ModelKind::Vss),
];

impl View {
    fn title(self) -> String {
        match self {
            View::Property(kind) => format!("{} (all sources)", kind.display_name()),
            View::Fit(ModelKind::Vhs) => "VHS fit".to_string(),
            View::Fit(ModelKind::Vss) => "VSS fit".to_string(),
        }
    }
}

/// Series prepared for drawing, in plotted units.
struct ChartData {
    series: Vec<(String, Vec<(f64, f64)>, bool)>,
    unit: &'static str,
    log_y: bool,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

struct App {
    view: usize,
    t_min: f64,
    t_max: f64,
    viscosity_ids: Vec<&'static str>,
    viscosity: usize,
    selected_field: usize,
    status: String,
    chart: Option<ChartData>,
    fit: Option<FitOutput>,
}

impl App {
    fn new() -> Self {
        let viscosity_ids: Vec<&'static str> =
            sources_for(PropertyKind::Viscosity).map(|s| s.id).collect();
        let viscosity = viscosity_ids
            .iter()
            .position(|&id| id == "bouledroua-2005-table1")
            .unwrap_or(0);

        let mut app = Self {
            view: 1,
            t_min: 700.0,
            t_max: 1200.0,
            viscosity_ids,
            viscosity,
            selected_field: 0,
            status: String::new(),
            chart: None,
            fit: None,
        };
        app.refresh();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                self.selected_field = self.selected_field.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_field < 3 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Char('d') => self.write_debug(),
            _ => {}
        }
        false
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            0 => self.view = step_index(self.view, VIEWS.len(), delta),
            1 => {
                let next = self.t_min + T_STEP * delta as f64;
                if next >= T_FLOOR && next < self.t_max {
                    self.t_min = next;
                }
            }
            2 => {
                let next = self.t_max + T_STEP * delta as f64;
                if next > self.t_min {
                    self.t_max = next;
                }
            }
            3 => self.viscosity = step_index(self.viscosity, self.viscosity_ids.len(), delta),
            _ => {}
        }
        self.refresh();
    }

    fn fit_config(&self, kind: ModelKind) -> FitConfig {
        FitConfig {
            kind,
            viscosity_source: self.viscosity_ids.get(self.viscosity).copied().unwrap_or("").to_string(),
            diffusion_source: Some("fialho-1993-d11".to_string()),
            window: FitWindow::new(self.t_min, self.t_max),
            mass: LITHIUM_MASS,
            draws: 0,
            seed: 0,
            noise_pct: None,
            plot: false,
            plot_width: 0,
            plot_height: 0,
            export_model: None,
            debug: false,
        }
    }

    fn refresh(&mut self) {
        let result = match VIEWS[self.view] {
            View::Property(kind) => self.compare_chart(kind).map(|chart| (chart, None)),
            View::Fit(kind) => self.fit_chart(kind).map(|(chart, fit)| (chart, Some(fit))),
        };
        match result {
            Ok((chart, fit)) => {
                self.status = format!("{} | T=[{:.0}, {:.0}] K", VIEWS[self.view].title(), self.t_min, self.t_max);
                self.chart = Some(chart);
                self.fit = fit;
            }
            Err(err) => {
                self.status = err.to_string();
                self.chart = None;
                self.fit = None;
            }
        }
    }

    fn compare_chart(&self, kind: PropertyKind) -> Result<ChartData, AppError> {
        let table = run_compare(&CompareConfig {
            property: kind,
            t_min: self.t_min,
            t_max: self.t_max,
            steps: COMPARE_STEPS,
            plot: false,
            plot_width: 0,
            plot_height: 0,
            export: None,
        })?;

        let mut series: Vec<(String, Vec<(f64, f64)>, bool)> = table
            .columns
            .iter()
            .map(|c| (c.label.to_string(), table.points(c), false))
            .filter(|(_, points, _)| !points.is_empty())
            .collect();
        if kind == PropertyKind::Viscosity {
            let measured: Vec<(f64, f64)> = stepanenko_1986_table_i()
                .into_iter()
                .filter(|&(t, _)| t >= self.t_min && t <= self.t_max)
                .collect();
            if !measured.is_empty() {
                series.push(("Stepanenko 1986 table I".to_string(), measured, true));
            }
        }
        if series.is_empty() {
            return Err(AppError::new(3, "No source covers this temperature window."));
        }

        Ok(chart_data(series, kind.unit_label(), kind.prefers_log_axis(), [self.t_min, self.t_max]))
    }

    fn fit_chart(&self, kind: ModelKind) -> Result<(ChartData, FitOutput), AppError> {
        let run = run_fit(&self.fit_config(kind))?;
        let source: Vec<(f64, f64)> = run
            .normalized
            .iter()
            .map(|p| (p.temperature, p.source_value))
            .collect();
        let model: Vec<(f64, f64)> = run
            .normalized
            .iter()
            .map(|p| (p.temperature, p.model_value))
            .collect();
        let series = vec![
            (run.viscosity.label.to_string(), source, true),
            (format!("{} model", run.model.display_name()), model, false),
        ];
        let chart = chart_data(series, PropertyKind::Viscosity.unit_label(), false, [self.t_min, self.t_max]);
        Ok((chart, run))
    }

    fn write_debug(&mut self) {
        let View::Fit(kind) = VIEWS[self.view] else {
            self.status = "Debug bundles are written for fit views.".to_string();
            return;
        };
        let Some(run) = &self.fit else {
            self.status = "No fit available.".to_string();
            return;
        };
        match crate::debug::write_debug_bundle(run, &self.fit_config(kind)) {
            Ok(path) => self.status = format!("Wrote debug bundle: {}", path.display()),
            Err(err) => self.status = format!("Debug write failed: {err}"),
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("livapor", Style::default().fg(Color::Cyan)),
            Span::raw(" lithium vapor properties and kinetic models"),
        ]));

        let detail = match &self.fit {
            Some(run) => match run.model {
                FittedModel::Vhs(m) => format!(
                    "omega={:.4} | d_ref={:.4e} m | T_ref={:.1} K | max dev={:.2}%",
                    m.omega,
                    m.d_ref,
                    m.t_ref,
                    max_deviation(&run.normalized) * 100.0
                ),
                FittedModel::Vss(m) => format!(
                    "omega={:.4} | alpha={:.4} | d_ref={:.4e} m | T_ref={:.1} K | max dev={:.2}%",
                    m.omega,
                    m.alpha,
                    m.d_ref,
                    m.t_ref,
                    max_deviation(&run.normalized) * 100.0
                ),
            },
            None => VIEWS[self.view].title(),
        };
        lines.push(Line::from(Span::styled(detail, Style::default().fg(Color::Gray))));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(44)])
            .split(rows[0]);

        self.draw_chart(frame, cols[0]);
        self.draw_legend(frame, cols[1]);
        self.draw_settings(frame, rows[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title(VIEWS[self.view].title()).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(chart) = &self.chart else {
            let msg = Paragraph::new("No data for these settings.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let series: Vec<ChartSeries<'_>> = chart
            .series
            .iter()
            .zip(PALETTE.iter().cycle())
            .map(|((_, points, scatter), &color)| ChartSeries {
                points,
                color,
                scatter: *scatter,
            })
            .collect();

        let y_label = if chart.log_y {
            format!("log10 [{}]", chart.unit)
        } else {
            format!("[{}]", chart.unit)
        };
        let widget = PropertyChart {
            series: &series,
            x_bounds: chart.x_bounds,
            y_bounds: chart.y_bounds,
            x_label: "T (K)",
            y_label,
            fmt_x: fmt_axis_x,
            fmt_y: if chart.log_y { fmt_axis_log } else { fmt_axis_sci },
        };
        frame.render_widget(widget, inner);
    }

    fn draw_legend(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .chart
            .iter()
            .flat_map(|chart| chart.series.iter())
            .zip(PALETTE.iter().cycle())
            .map(|((label, _, scatter), color)| {
                let marker = if *scatter { "·" } else { "─" };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{marker} "),
                        Style::default().fg(Color::Rgb(color.0, color.1, color.2)),
                    ),
                    Span::raw(label.clone()),
                ]))
            })
            .collect();
        let list = List::new(items).block(Block::default().title("Series").borders(Borders::ALL));
        frame.render_widget(list, area);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let viscosity = self.viscosity_ids.get(self.viscosity).copied().unwrap_or("-");
        let items = vec![
            ListItem::new(format!("View: {}", VIEWS[self.view].title())),
            ListItem::new(format!("T min: {:.0} K", self.t_min)),
            ListItem::new(format!("T max: {:.0} K", self.t_max)),
            ListItem::new(format!("Viscosity source (fits): {viscosity}")),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  d debug  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn step_index(current: usize, len: usize, delta: i32) -> usize {
    if len == 0 {
        return 0;
    }
    if delta >= 0 {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// Transform to plotted units and compute padded bounds.
fn chart_data(
    series: Vec<(String, Vec<(f64, f64)>, bool)>,
    unit: &'static str,
    log_y: bool,
    x_bounds: [f64; 2],
) -> ChartData {
    let series: Vec<(String, Vec<(f64, f64)>, bool)> = series
        .into_iter()
        .map(|(label, points, scatter)| {
            let points = points
                .into_iter()
                .map(|(t, y)| (t, if log_y { y.log10() } else { y }))
                .filter(|&(_, y)| y.is_finite())
                .collect();
            (label, points, scatter)
        })
        .collect();

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for (_, points, _) in &series {
        for &(_, y) in points {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }
    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);

    ChartData {
        series,
        unit,
        log_y,
        x_bounds,
        y_bounds: [y_min - pad, y_max + pad],
    }
}

fn fmt_axis_x(v: f64) -> String {
    format!("{v:.0}")
}

fn fmt_axis_sci(v: f64) -> String {
    format!("{v:.2e}")
}

fn fmt_axis_log(v: f64) -> String {
    format!("1e{v:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn step_index_wraps_both_ways() {
        assert_eq!(step_index(0, 6, -1), 5);
        assert_eq!(step_index(5, 6, 1), 0);
        assert_eq!(step_index(2, 6, 1), 3);
        assert_eq!(step_index(0, 0, 1), 0);
    }

    #[test]
    fn chart_data_pads_bounds_and_takes_logs() {
        let chart = chart_data(
            vec![("p".to_string(), vec![(800.0, 10.0), (900.0, 1000.0)], false)],
            "Pa",
            true,
            [800.0, 900.0],
        );
        let points = &chart.series[0].1;
        assert_relative_eq!(points[0].1, 1.0, epsilon = 1e-12);
        assert_relative_eq!(points[1].1, 3.0, epsilon = 1e-12);
        assert!(chart.y_bounds[0] < 1.0 && chart.y_bounds[1] > 3.0);
    }
}
