// Entry point: plots every configured benchmark kind and exits non-zero on the first error.
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use wigplot::Result;
use wigplot::cli::Args;
use wigplot::config::AppConfig;
use wigplot::pipeline::run_benchmark;

fn run(args: &Args) -> Result<()> {
    let mut cfg = AppConfig::load_or_default(&args.config)?;
    args.apply(&mut cfg);
    cfg.validate()?;

    for bench in cfg.select(&args.kinds)? {
        run_benchmark(bench, &cfg.output)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            err.exit_code()
        }
    }
}
