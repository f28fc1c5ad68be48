//! Error type shared by parsing, reshaping, plotting and configuration.

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WigplotError>;

#[derive(Error, Debug)]
pub enum WigplotError {
    /// Reading an input or config file, or creating the output directory.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data row seen before any recognized header line.
    #[error("line {line}: data row before any variant header: {text:?}")]
    MissingHeader { line: usize, text: String },

    /// Header-like line whose label is not known (strict mode only).
    #[error("line {line}: unrecognized variant header {text:?}")]
    UnrecognizedLabel { line: usize, text: String },

    #[error("{label}: {count} values cannot be reshaped into rows of {columns}")]
    InvalidElementCount {
        label: String,
        count: usize,
        columns: usize,
    },

    #[error("{label}: {token:?} is not a number")]
    NumericParse { label: String, token: String },

    #[error("{label}: no rows left to plot ({rows} rows, offset {offset})")]
    EmptyData {
        label: String,
        rows: usize,
        offset: usize,
    },

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("config: {0}")]
    Config(String),

    #[error("failed to render {path}: {message}")]
    Render { path: PathBuf, message: String },
}

impl WigplotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io { .. } => ExitCode::from(3),
            Self::MissingHeader { .. } | Self::UnrecognizedLabel { .. } => ExitCode::from(4),
            Self::InvalidElementCount { .. } | Self::NumericParse { .. } => ExitCode::from(5),
            Self::EmptyData { .. } => ExitCode::from(6),
            Self::InvalidColor(_) | Self::Config(_) => ExitCode::from(2),
            Self::Render { .. } => ExitCode::from(7),
        }
    }
}
