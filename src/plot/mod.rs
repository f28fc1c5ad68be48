pub mod color;
pub mod render;
pub mod series;

pub use render::{Figure, render_figure};
pub use series::{Curve, PlotInput, group_curves, jmax_axis, plot_inputs};

use std::path::PathBuf;

use tracing::info;

use crate::bench::Matrices;
use crate::config::{BenchmarkConfig, OutputConfig};
use crate::error::Result;

/// Draw every metric group of `bench` and return the written paths.
///
/// All curves are derived before the first file is written, so a bad
/// matrix never leaves a partial set of plots behind.
pub fn plot_benchmark(
    bench: &BenchmarkConfig,
    matrices: &Matrices,
    output: &OutputConfig,
) -> Result<Vec<PathBuf>> {
    let inputs = plot_inputs(matrices, &bench.variants)?;
    let figures = bench
        .groups
        .iter()
        .map(|group| Ok((group, group_curves(&inputs, group, bench.row_offset)?)))
        .collect::<Result<Vec<_>>>()?;

    let mut written = Vec::with_capacity(figures.len());
    for (group, curves) in &figures {
        let path = bench.output_path(&output.dir, group, output.format);
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| bench.output_base.clone());
        render_figure(
            &path,
            output.format,
            &Figure {
                title: &title,
                y_desc: &group.y_desc,
                curves,
                size: (output.width, output.height),
            },
        )?;
        info!(benchmark = %bench.name, curves = curves.len(), "wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
