use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::bench::HeaderRule;
use crate::error::{Result, WigplotError};
use crate::plot::color::parse_color;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    /// Bitmap output only gets text when a font backend is compiled in.
    pub fn png_has_text() -> bool {
        cfg!(feature = "ttf")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerShape {
    #[default]
    Cross,
    Dot,
    Circle,
    Triangle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub format: ImageFormat,
    #[serde(default = "OutputConfig::default_width")]
    pub width: u32,
    #[serde(default = "OutputConfig::default_height")]
    pub height: u32,
}

impl OutputConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from("data")
    }
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        800
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WigplotError::Config("image size must be non-zero".into()));
        }
        if self.format == ImageFormat::Png && !ImageFormat::png_has_text() {
            return Err(WigplotError::Config(
                "png output needs the `ttf` feature to draw axis labels and legends; use svg".into(),
            ));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            format: ImageFormat::default(),
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

/// One plotted statistic: a matrix column and its legend name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSpec {
    pub column: usize,
    pub name: String,
    #[serde(default)]
    pub marker: MarkerShape,
}

/// Metrics drawn together on one figure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricGroup {
    /// Appended to the output base name; empty for a single combined figure.
    #[serde(default)]
    pub suffix: String,
    #[serde(default = "MetricGroup::default_y_desc")]
    pub y_desc: String,
    pub metrics: Vec<MetricSpec>,
}

impl MetricGroup {
    fn default_y_desc() -> String {
        "Error".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantSpec {
    pub label: String,
    pub color: String,
}

/// Everything needed to turn one benchmark log into plots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkConfig {
    pub name: String,
    pub input_path: PathBuf,
    pub output_base: String,
    #[serde(default = "BenchmarkConfig::default_delimiter")]
    pub delimiter: char,
    pub columns: usize,
    #[serde(default)]
    pub row_offset: usize,
    #[serde(default)]
    pub strict: bool,
    pub variants: Vec<VariantSpec>,
    pub groups: Vec<MetricGroup>,
}

impl BenchmarkConfig {
    fn default_delimiter() -> char {
        ':'
    }

    pub fn labels(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.label.as_str()).collect()
    }

    pub fn header_rule(&self) -> HeaderRule {
        HeaderRule {
            delimiter: self.delimiter,
            strict: self.strict,
        }
    }

    /// `<dir>/<output_base><suffix>.<ext>`
    pub fn output_path(&self, dir: &Path, group: &MetricGroup, format: ImageFormat) -> PathBuf {
        dir.join(format!(
            "{}{}.{}",
            self.output_base,
            group.suffix,
            format.extension()
        ))
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| -> Result<()> {
            Err(WigplotError::Config(format!("[{}] {msg}", self.name)))
        };

        if self.output_base.trim().is_empty() {
            return fail("output_base is empty".into());
        }
        if self.delimiter.is_whitespace() {
            return fail("delimiter must not be whitespace".into());
        }
        if self.columns == 0 {
            return fail("columns must be at least 1".into());
        }
        if self.variants.is_empty() {
            return fail("no variants".into());
        }
        let mut seen = HashSet::new();
        for v in &self.variants {
            if v.label.is_empty() || v.label.chars().any(char::is_whitespace) {
                return fail(format!("invalid variant label {:?}", v.label));
            }
            if !seen.insert(v.label.as_str()) {
                return fail(format!("duplicate variant label {:?}", v.label));
            }
            parse_color(&v.color)?;
        }
        if self.groups.is_empty() {
            return fail("no metric groups".into());
        }
        let mut suffixes = HashSet::new();
        for g in &self.groups {
            if g.metrics.is_empty() {
                return fail(format!("metric group {:?} has no metrics", g.suffix));
            }
            if !suffixes.insert(g.suffix.as_str()) {
                return fail(format!("duplicate group suffix {:?}", g.suffix));
            }
            for m in &g.metrics {
                if m.column == 0 || m.column >= self.columns {
                    return fail(format!(
                        "metric {:?} column {} outside 1..{}",
                        m.name, m.column, self.columns
                    ));
                }
            }
        }
        Ok(())
    }

    fn variants(pairs: &[(&str, &str)]) -> Vec<VariantSpec> {
        pairs
            .iter()
            .map(|&(label, color)| VariantSpec {
                label: label.to_string(),
                color: color.to_string(),
            })
            .collect()
    }

    fn metric(column: usize, name: &str, marker: MarkerShape) -> MetricSpec {
        MetricSpec {
            column,
            name: name.to_string(),
            marker,
        }
    }

    /// `2j count max_diff max_rel_diff std_diff std_rel_diff`
    pub fn default_3j() -> Self {
        Self {
            name: "3j".into(),
            input_path: PathBuf::from("data/bench_3j.txt"),
            output_base: "bench_3j".into(),
            delimiter: Self::default_delimiter(),
            columns: 6,
            row_offset: 0,
            strict: false,
            variants: Self::variants(&[("wigner_3j", "green"), ("gsl_3j", "red")]),
            groups: vec![
                MetricGroup {
                    suffix: "_err".into(),
                    y_desc: "Error".into(),
                    metrics: vec![
                        Self::metric(2, "max error", MarkerShape::Cross),
                        Self::metric(4, "std error", MarkerShape::Dot),
                    ],
                },
                MetricGroup {
                    suffix: "_rel_err".into(),
                    y_desc: "Relative Error".into(),
                    metrics: vec![
                        Self::metric(3, "max relative error", MarkerShape::Cross),
                        Self::metric(5, "std relative error", MarkerShape::Dot),
                    ],
                },
            ],
        }
    }

    /// `2j count mean_err std_err max_err`, first 20 rows skipped.
    pub fn default_6j() -> Self {
        Self {
            name: "6j".into(),
            input_path: PathBuf::from("data/bench_6j.txt"),
            output_base: "bench_6j".into(),
            delimiter: Self::default_delimiter(),
            columns: 5,
            row_offset: 20,
            strict: false,
            variants: Self::variants(&[("wigner_6j", "green"), ("gsl_6j", "red")]),
            groups: vec![MetricGroup {
                suffix: String::new(),
                y_desc: "Error".into(),
                metrics: vec![
                    Self::metric(4, "max error", MarkerShape::Cross),
                    Self::metric(3, "std error", MarkerShape::Dot),
                ],
            }],
        }
    }

    /// `2j count max_diff max_rel_diff std_diff std_rel_diff`
    pub fn default_9j() -> Self {
        Self {
            name: "9j".into(),
            input_path: PathBuf::from("data/bench_9j.txt"),
            output_base: "bench_9j".into(),
            delimiter: Self::default_delimiter(),
            columns: 6,
            row_offset: 0,
            strict: false,
            variants: Self::variants(&[("wigner_9j", "green"), ("gsl_9j", "red")]),
            groups: vec![
                MetricGroup {
                    suffix: "_err".into(),
                    y_desc: "Error".into(),
                    metrics: vec![
                        Self::metric(2, "max error", MarkerShape::Cross),
                        Self::metric(4, "std error", MarkerShape::Dot),
                    ],
                },
                MetricGroup {
                    suffix: "_rel_err".into(),
                    y_desc: "Relative Error".into(),
                    metrics: vec![
                        Self::metric(3, "max relative error", MarkerShape::Cross),
                        Self::metric(5, "std relative error", MarkerShape::Dot),
                    ],
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "AppConfig::default_benchmarks")]
    pub benchmarks: Vec<BenchmarkConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            benchmarks: Self::default_benchmarks(),
        }
    }
}

impl AppConfig {
    fn default_benchmarks() -> Vec<BenchmarkConfig> {
        vec![
            BenchmarkConfig::default_3j(),
            BenchmarkConfig::default_6j(),
            BenchmarkConfig::default_9j(),
        ]
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| WigplotError::io(path, e))?;
        let cfg: Self = toml::from_str(&text)
            .map_err(|e| WigplotError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load `path`, or write the defaults there when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        let cfg = Self::default();
        match toml::to_string_pretty(&cfg) {
            Ok(text) => match fs::write(path, text) {
                Ok(()) => info!("wrote default config to {}", path.display()),
                Err(err) => warn!("failed to write default config to {}: {err}", path.display()),
            },
            Err(err) => warn!("failed to serialize default config: {err}"),
        }
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.output.validate()?;
        let mut names = HashSet::new();
        for b in &self.benchmarks {
            if !names.insert(b.name.as_str()) {
                return Err(WigplotError::Config(format!(
                    "duplicate benchmark name {:?}",
                    b.name
                )));
            }
            b.validate()?;
        }
        Ok(())
    }

    /// Benchmarks named in `names`, or all of them when `names` is empty.
    pub fn select(&self, names: &[String]) -> Result<Vec<&BenchmarkConfig>> {
        if names.is_empty() {
            return Ok(self.benchmarks.iter().collect());
        }
        names
            .iter()
            .map(|n| {
                self.benchmarks
                    .iter()
                    .find(|b| &b.name == n)
                    .ok_or_else(|| WigplotError::Config(format!("unknown benchmark {n:?}")))
            })
            .collect()
    }
}
