//! Row-major numeric matrix built from a variant's raw data rows.

use crate::error::{Result, WigplotError};

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Parse every whitespace-separated token of `rows` and reshape the
    /// stream into rows of `columns` values.
    ///
    /// Line boundaries carry no meaning; only the total token count has to
    /// be a multiple of `columns`.
    pub fn from_rows<S: AsRef<str>>(label: &str, rows: &[S], columns: usize) -> Result<Self> {
        let mut data = Vec::new();
        for token in rows.iter().flat_map(|r| r.as_ref().split_whitespace()) {
            let value = token
                .parse::<f64>()
                .map_err(|_| WigplotError::NumericParse {
                    label: label.to_string(),
                    token: token.to_string(),
                })?;
            data.push(value);
        }
        Self::from_flat(label, data, columns)
    }

    pub fn from_flat(label: &str, data: Vec<f64>, columns: usize) -> Result<Self> {
        if columns == 0 || data.len() % columns != 0 {
            return Err(WigplotError::InvalidElementCount {
                label: label.to_string(),
                count: data.len(),
                columns,
            });
        }
        Ok(Self {
            rows: data.len() / columns,
            cols: columns,
            data,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Values of column `col` from row `offset` to the end; empty when
    /// `col` is out of range or `offset` is past the last row.
    pub fn column_from(&self, col: usize, offset: usize) -> Vec<f64> {
        if col >= self.cols {
            return Vec::new();
        }
        (offset..self.rows)
            .map(|r| self.data[r * self.cols + col])
            .collect()
    }

    pub fn column(&self, col: usize) -> Vec<f64> {
        self.column_from(col, 0)
    }
}
