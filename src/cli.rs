use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, ImageFormat};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML (written with defaults when missing)
    #[arg(long, default_value = "wigplot.toml")]
    pub config: PathBuf,

    /// Only plot these benchmark kinds (repeatable)
    #[arg(long = "kind", value_name = "NAME")]
    pub kinds: Vec<String>,

    /// Output directory (overrides config)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Image format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<ImageFormat>,

    /// Reject header-like lines with unknown labels
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, cfg: &mut AppConfig) {
        if let Some(dir) = &self.out_dir {
            cfg.output.dir = dir.clone();
        }
        if let Some(format) = self.format {
            cfg.output.format = format;
        }
        if self.strict {
            for b in &mut cfg.benchmarks {
                b.strict = true;
            }
        }
    }
}
