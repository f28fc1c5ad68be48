//! Draws curves onto a log-scale chart with plotters.

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::debug;

use crate::config::{ImageFormat, MarkerShape};
use crate::error::{Result, WigplotError};
use crate::plot::series::Curve;

pub struct Figure<'a> {
    pub title: &'a str,
    pub y_desc: &'a str,
    pub curves: &'a [Curve],
    pub size: (u32, u32),
}

/// Points that can sit on a log y axis.
fn plottable(curve: &Curve) -> Vec<(f64, f64)> {
    let pts: Vec<(f64, f64)> = curve
        .points
        .iter()
        .copied()
        .filter(|&(x, y)| x.is_finite() && y.is_finite() && y > 0.0)
        .collect();
    if pts.len() < curve.points.len() {
        debug!(
            legend = %curve.legend,
            dropped = curve.points.len() - pts.len(),
            "skipping non-positive values on log axis"
        );
    }
    pts
}

fn x_range(curves: &[Curve]) -> (f64, f64) {
    let (lo, hi) = curves
        .iter()
        .flat_map(|c| c.points.iter().map(|&(x, _)| x))
        .filter(|x| x.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < 1e-12 {
        return (lo - 0.5, hi + 0.5);
    }
    (lo, hi)
}

/// Whole decades enclosing every positive y value.
fn log_y_range(curves: &[Curve]) -> (f64, f64) {
    let (lo, hi) = curves
        .iter()
        .flat_map(|c| c.points.iter().map(|&(_, y)| y))
        .filter(|y| y.is_finite() && *y > 0.0)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });
    if !lo.is_finite() {
        return (1e-16, 1.0);
    }
    let lo = 10f64.powf(lo.log10().floor());
    let mut hi = 10f64.powf(hi.log10().ceil());
    if hi <= lo {
        hi = lo * 10.0;
    }
    (lo, hi)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure<'_>,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (x_lo, x_hi) = x_range(figure.curves);
    let (y_lo, y_hi) = log_y_range(figure.curves);

    let mut chart = ChartBuilder::on(root)
        .caption(figure.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Jmax")
        .y_desc(figure.y_desc)
        .y_label_formatter(&|y| format!("{y:.0e}"))
        .draw()?;

    for curve in figure.curves {
        let color = curve.color;
        let pts = plottable(curve);

        chart
            .draw_series(LineSeries::new(pts.iter().copied(), color.stroke_width(1)))?
            .label(curve.legend.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        match curve.marker {
            MarkerShape::Cross => {
                chart.draw_series(pts.iter().map(|&p| Cross::new(p, 4, color.stroke_width(1))))?;
            }
            MarkerShape::Dot => {
                chart.draw_series(pts.iter().map(|&p| Circle::new(p, 2, color.filled())))?;
            }
            MarkerShape::Circle => {
                chart.draw_series(pts.iter().map(|&p| Circle::new(p, 4, color.stroke_width(1))))?;
            }
            MarkerShape::Triangle => {
                chart.draw_series(pts.iter().map(|&p| TriangleMarker::new(p, 4, color.filled())))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()
}

/// Render `figure` to `path`, replacing any existing file.
pub fn render_figure(path: &Path, format: ImageFormat, figure: &Figure<'_>) -> Result<()> {
    let outcome = match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, figure.size).into_drawing_area();
            draw(&root, figure).map_err(|e| e.to_string())
        }
        ImageFormat::Png if !ImageFormat::png_has_text() => {
            Err("png output needs the `ttf` feature for text".to_string())
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, figure.size).into_drawing_area();
            draw(&root, figure).map_err(|e| e.to_string())
        }
    };
    outcome.map_err(|message| WigplotError::Render {
        path: path.to_path_buf(),
        message,
    })
}
