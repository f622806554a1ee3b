//! Plotters-powered property chart widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// High-contrast palette for terminal rendering, cycled per series.
pub const PALETTE: [RGBColor; 8] = [
    RGBColor(0, 255, 255),
    RGBColor(255, 255, 0),
    RGBColor(0, 255, 0),
    RGBColor(255, 0, 255),
    RGBColor(255, 128, 0),
    RGBColor(128, 160, 255),
    RGBColor(255, 0, 0),
    RGBColor(200, 200, 200),
];

/// One series as the widget draws it.
pub struct ChartSeries<'a> {
    pub points: &'a [(f64, f64)],
    pub color: RGBColor,
    /// Draw as dots instead of a connected line.
    pub scatter: bool,
}

/// A lightweight, render-only chart description.
///
/// All series and bounds are computed outside the render call.
pub struct PropertyChart<'a> {
    pub series: &'a [ChartSeries<'a>],
    /// X bounds (temperature, K).
    pub x_bounds: [f64; 2],
    /// Y bounds, already in plotted units (log10 for log axes).
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: String,
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for PropertyChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to build a chart in a tiny area.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 8)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(&self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            for s in self.series {
                if s.scatter {
                    // `Circle` radii are mis-scaled by the ratatui backend; pixels render cleanly.
                    chart.draw_series(s.points.iter().map(|&(x, y)| Pixel::new((x, y), s.color)))?;
                } else {
                    chart.draw_series(LineSeries::new(s.points.iter().copied(), &s.color))?;
                }
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}
