//! Splits a benchmark log into per-variant blocks of raw data rows.
//!
//! A header is a line of the form `<label><delimiter>` (e.g. `gsl_6j:`)
//! for one of the known labels. Every other non-blank line is a data row of
//! the most recent header. Blank lines are skipped and never end a block.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Result, WigplotError};

/// Raw data rows per variant label, in the order the labels were given.
pub type Blocks = IndexMap<String, Vec<String>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderRule {
    pub delimiter: char,
    /// Reject header-like lines with an unknown label instead of keeping them as data.
    pub strict: bool,
}

impl Default for HeaderRule {
    fn default() -> Self {
        Self {
            delimiter: ':',
            strict: false,
        }
    }
}

impl HeaderRule {
    /// Label named by `line` if it is a header for one of `blocks`' keys.
    fn match_header<'a>(&self, line: &'a str, blocks: &Blocks) -> Option<&'a str> {
        let label = line.strip_suffix(self.delimiter)?;
        blocks.contains_key(label).then_some(label)
    }

    fn looks_like_header(&self, line: &str) -> bool {
        match line.strip_suffix(self.delimiter) {
            Some(label) => label
                .split_whitespace()
                .next()
                .is_some_and(|first| first.parse::<f64>().is_err()),
            None => false,
        }
    }
}

/// Parse benchmark text into blocks keyed by `labels`.
///
/// Every label is present in the result, with an empty list when its header
/// never appears. Repeated headers append to the same block.
pub fn parse_blocks<S: AsRef<str>>(text: &str, labels: &[S], rule: HeaderRule) -> Result<Blocks> {
    let mut blocks: Blocks = labels
        .iter()
        .map(|l| (l.as_ref().to_string(), Vec::new()))
        .collect();
    let mut active: Option<usize> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        if let Some(label) = rule.match_header(line, &blocks) {
            debug!(line = line_no, label, "variant header");
            active = blocks.get_index_of(label);
            continue;
        }

        if rule.strict && rule.looks_like_header(line) {
            return Err(WigplotError::UnrecognizedLabel {
                line: line_no,
                text: line.to_string(),
            });
        }

        let Some(slot) = active else {
            return Err(WigplotError::MissingHeader {
                line: line_no,
                text: line.to_string(),
            });
        };
        if let Some((_, rows)) = blocks.get_index_mut(slot) {
            rows.push(line.to_string());
        }
    }

    Ok(blocks)
}

/// Read a UTF-8 benchmark file and parse it with [`parse_blocks`].
pub fn parse_blocks_file<S: AsRef<str>>(
    path: impl AsRef<Path>,
    labels: &[S],
    rule: HeaderRule,
) -> Result<Blocks> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| WigplotError::io(path, e))?;
    parse_blocks(&text, labels, rule)
}
