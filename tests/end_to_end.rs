use std::fs;
use std::path::{Path, PathBuf};

use wigplot::WigplotError;
use wigplot::config::{BenchmarkConfig, ImageFormat, OutputConfig};
use wigplot::pipeline::run_benchmark;

fn unique_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "wigplot_e2e_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&path).unwrap();
    path
}

fn output_in(dir: &Path) -> OutputConfig {
    OutputConfig {
        dir: dir.join("plots"),
        format: ImageFormat::Svg,
        width: 640,
        height: 480,
    }
}

fn block(label: &str, rows: usize, cols: usize) -> String {
    let mut text = format!("{label}:\n");
    for r in 0..rows {
        let dj = r + 1;
        let stats: Vec<String> = (2..cols)
            .map(|c| format!("{:e}", 1e-17 * ((r + 1) * c) as f64))
            .collect();
        text.push_str(&format!("{dj} {} {}\n\n", 10 * dj, stats.join(" ")));
    }
    text
}

#[test]
fn three_j_writes_err_and_rel_err_svgs() {
    let dir = unique_dir("3j");
    let mut bench = BenchmarkConfig::default_3j();
    bench.input_path = dir.join("bench_3j.txt");
    fs::write(
        &bench.input_path,
        block("wigner_3j", 12, 6) + &block("gsl_3j", 10, 6),
    )
    .unwrap();

    let output = output_in(&dir);
    let report = run_benchmark(&bench, &output).unwrap();

    assert_eq!(
        report.rows,
        [("wigner_3j".to_string(), 12), ("gsl_3j".to_string(), 10)]
    );
    assert_eq!(
        report.outputs,
        [
            output.dir.join("bench_3j_err.svg"),
            output.dir.join("bench_3j_rel_err.svg")
        ]
    );
    for path in &report.outputs {
        let svg = fs::read_to_string(path).unwrap();
        assert!(svg.contains("<svg"), "{} is not an svg", path.display());
        assert!(svg.contains("Jmax"));
        assert!(svg.contains("wigner_3j max error") || svg.contains("wigner_3j max relative error"));
    }
    let rel = fs::read_to_string(&report.outputs[1]).unwrap();
    assert!(rel.contains("Relative Error"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn six_j_writes_single_combined_figure() {
    let dir = unique_dir("6j");
    let mut bench = BenchmarkConfig::default_6j();
    bench.input_path = dir.join("bench_6j.txt");
    fs::write(
        &bench.input_path,
        block("wigner_6j", 30, 5) + &block("gsl_6j", 25, 5),
    )
    .unwrap();

    let output = output_in(&dir);
    let report = run_benchmark(&bench, &output).unwrap();
    assert_eq!(report.outputs, [output.dir.join("bench_6j.svg")]);

    let svg = fs::read_to_string(&report.outputs[0]).unwrap();
    assert!(svg.contains("gsl_6j std error"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn existing_output_is_overwritten() {
    let dir = unique_dir("overwrite");
    let mut bench = BenchmarkConfig::default_9j();
    bench.input_path = dir.join("bench_9j.txt");
    fs::write(
        &bench.input_path,
        block("wigner_9j", 4, 6) + &block("gsl_9j", 4, 6),
    )
    .unwrap();

    let output = output_in(&dir);
    fs::create_dir_all(&output.dir).unwrap();
    let target = output.dir.join("bench_9j_err.svg");
    fs::write(&target, "stale").unwrap();

    run_benchmark(&bench, &output).unwrap();
    assert_ne!(fs::read_to_string(&target).unwrap(), "stale");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn png_output_is_written_or_rejected_up_front() {
    let dir = unique_dir("png");
    let mut bench = BenchmarkConfig::default_3j();
    bench.input_path = dir.join("bench_3j.txt");
    fs::write(
        &bench.input_path,
        block("wigner_3j", 6, 6) + &block("gsl_3j", 6, 6),
    )
    .unwrap();

    let output = OutputConfig {
        format: ImageFormat::Png,
        ..output_in(&dir)
    };
    let result = run_benchmark(&bench, &output);

    if ImageFormat::png_has_text() {
        let report = result.unwrap();
        assert_eq!(
            report.outputs,
            [
                output.dir.join("bench_3j_err.png"),
                output.dir.join("bench_3j_rel_err.png")
            ]
        );
        for path in &report.outputs {
            let bytes = fs::read(path).unwrap();
            assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "{} is not a png", path.display());
        }
    } else {
        let err = result.unwrap_err();
        assert!(matches!(err, WigplotError::Config(_)), "unexpected error: {err}");
        assert!(!output.dir.join("bench_3j_err.png").exists());
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn short_block_fails_before_writing_any_plot() {
    let dir = unique_dir("short");
    let mut bench = BenchmarkConfig::default_6j();
    bench.input_path = dir.join("bench_6j.txt");
    // gsl_6j has fewer rows than the 20-row offset.
    fs::write(
        &bench.input_path,
        block("wigner_6j", 30, 5) + &block("gsl_6j", 20, 5),
    )
    .unwrap();

    let output = output_in(&dir);
    let err = run_benchmark(&bench, &output).unwrap_err();
    assert!(matches!(
        err,
        WigplotError::EmptyData { ref label, rows: 20, offset: 20 } if label == "gsl_6j"
    ));
    assert!(!output.dir.join("bench_6j.svg").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_header_aborts_the_run() {
    let dir = unique_dir("noheader");
    let mut bench = BenchmarkConfig::default_3j();
    bench.input_path = dir.join("bench_3j.txt");
    fs::write(&bench.input_path, "2 4 0.1 0.2 0.3 0.4\n").unwrap();

    let err = run_benchmark(&bench, &output_in(&dir)).unwrap_err();
    assert!(matches!(err, WigplotError::MissingHeader { line: 1, .. }));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_is_io_error() {
    let dir = unique_dir("noinput");
    let mut bench = BenchmarkConfig::default_3j();
    bench.input_path = dir.join("absent.txt");
    let err = run_benchmark(&bench, &output_in(&dir)).unwrap_err();
    assert!(matches!(err, WigplotError::Io { .. }));
    let _ = fs::remove_dir_all(&dir);
}
