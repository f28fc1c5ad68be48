//! Benchmarks for block parsing and reshaping.
//!
//! Run:
//! - cargo bench --bench parse_blocks

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wigplot::bench::{HeaderRule, build_matrices, parse_blocks};

const LABELS: [&str; 2] = ["wigner_6j", "gsl_6j"];
const ROW_COUNTS: [usize; 3] = [100, 1_000, 10_000];

fn make_log(rows: usize) -> String {
    let mut text = String::new();
    for label in LABELS {
        text.push_str(label);
        text.push_str(":\n");
        for r in 0..rows {
            let dj = r + 1;
            text.push_str(&format!(
                "{dj} {} {:e} {:e} {:e}\n",
                dj * 40,
                1e-17 * dj as f64,
                3e-17 * dj as f64,
                2e-16 * dj as f64
            ));
        }
        text.push('\n');
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_blocks");
    for &rows in &ROW_COUNTS {
        let text = make_log(rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &text, |b, text| {
            b.iter(|| parse_blocks(black_box(text), &LABELS, HeaderRule::default()).unwrap());
        });
    }
    group.finish();
}

fn bench_reshape(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_matrices");
    for &rows in &ROW_COUNTS {
        let blocks = parse_blocks(&make_log(rows), &LABELS, HeaderRule::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("rows", rows), &blocks, |b, blocks| {
            b.iter(|| build_matrices(black_box(blocks), 5).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_reshape);
criterion_main!(benches);
