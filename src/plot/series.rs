//! Error curves derived from benchmark matrices, ready to draw.

use plotters::style::RGBColor;

use crate::bench::{Matrices, Matrix};
use crate::config::{MarkerShape, MetricGroup, VariantSpec};
use crate::error::{Result, WigplotError};
use crate::plot::color::parse_color;

/// A variant's matrix paired with its display color.
#[derive(Clone, Copy, Debug)]
pub struct PlotInput<'a> {
    pub label: &'a str,
    pub matrix: &'a Matrix,
    pub color: RGBColor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub label: String,
    pub legend: String,
    pub color: RGBColor,
    pub marker: MarkerShape,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|&(x, _)| x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }
}

/// Pair every configured variant with its matrix and parsed color.
pub fn plot_inputs<'a>(
    matrices: &'a Matrices,
    variants: &'a [VariantSpec],
) -> Result<Vec<PlotInput<'a>>> {
    variants
        .iter()
        .map(|v| {
            let matrix = matrices.get(v.label.as_str()).ok_or_else(|| {
                WigplotError::Config(format!("no data block for variant {:?}", v.label))
            })?;
            Ok(PlotInput {
                label: v.label.as_str(),
                matrix,
                color: parse_color(&v.color)?,
            })
        })
        .collect()
}

/// Jmax values: column 0 (twice the angular momentum) halved, from `offset`.
pub fn jmax_axis(matrix: &Matrix, offset: usize) -> Vec<f64> {
    matrix
        .column_from(0, offset)
        .into_iter()
        .map(|dj| dj / 2.0)
        .collect()
}

/// One curve per variant and metric of `group`, skipping the first
/// `offset` rows of every matrix.
pub fn group_curves(
    inputs: &[PlotInput<'_>],
    group: &MetricGroup,
    offset: usize,
) -> Result<Vec<Curve>> {
    let mut curves = Vec::with_capacity(inputs.len() * group.metrics.len());
    for input in inputs {
        let rows = input.matrix.rows();
        if rows <= offset {
            return Err(WigplotError::EmptyData {
                label: input.label.to_string(),
                rows,
                offset,
            });
        }
        let xs = jmax_axis(input.matrix, offset);
        for metric in &group.metrics {
            if metric.column >= input.matrix.cols() {
                return Err(WigplotError::Config(format!(
                    "{}: metric {:?} reads column {} of a {}-column matrix",
                    input.label,
                    metric.name,
                    metric.column,
                    input.matrix.cols()
                )));
            }
            let ys = input.matrix.column_from(metric.column, offset);
            curves.push(Curve {
                label: input.label.to_string(),
                legend: format!("{} {}", input.label, metric.name),
                color: input.color,
                marker: metric.marker,
                points: xs.iter().copied().zip(ys).collect(),
            });
        }
    }
    Ok(curves)
}
