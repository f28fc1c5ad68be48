//! Parse, reshape and plot one configured benchmark kind.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::bench::{Matrices, build_matrices, parse_blocks_file};
use crate::config::{BenchmarkConfig, OutputConfig};
use crate::error::{Result, WigplotError};
use crate::plot::plot_benchmark;

#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub name: String,
    /// Parsed row count per variant, before the row offset.
    pub rows: Vec<(String, usize)>,
    pub outputs: Vec<PathBuf>,
}

/// Read `bench.input_path` into one matrix per variant.
pub fn load_matrices(bench: &BenchmarkConfig) -> Result<Matrices> {
    let labels = bench.labels();
    let blocks = parse_blocks_file(&bench.input_path, &labels, bench.header_rule())?;
    for (label, rows) in &blocks {
        debug!(benchmark = %bench.name, label = %label, lines = rows.len(), "parsed block");
    }
    build_matrices(&blocks, bench.columns)
}

pub fn run_benchmark(bench: &BenchmarkConfig, output: &OutputConfig) -> Result<BenchmarkReport> {
    bench.validate()?;
    output.validate()?;
    let matrices = load_matrices(bench)?;
    let rows: Vec<(String, usize)> = matrices
        .iter()
        .map(|(label, m)| (label.clone(), m.rows()))
        .collect();

    fs::create_dir_all(&output.dir).map_err(|e| WigplotError::io(&output.dir, e))?;
    let outputs = plot_benchmark(bench, &matrices, output)?;

    info!(
        benchmark = %bench.name,
        input = %bench.input_path.display(),
        files = outputs.len(),
        "benchmark plotted"
    );
    Ok(BenchmarkReport {
        name: bench.name.clone(),
        rows,
        outputs,
    })
}
