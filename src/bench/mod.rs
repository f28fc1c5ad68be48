pub mod matrix;
pub mod parser;

pub use matrix::Matrix;
pub use parser::{Blocks, HeaderRule, parse_blocks, parse_blocks_file};

use indexmap::IndexMap;

/// Matrices per variant label, in label order.
pub type Matrices = IndexMap<String, Matrix>;

/// Reshape every block into a matrix of `columns` columns.
pub fn build_matrices(blocks: &Blocks, columns: usize) -> crate::Result<Matrices> {
    blocks
        .iter()
        .map(|(label, rows)| Ok((label.clone(), Matrix::from_rows(label, rows, columns)?)))
        .collect()
}
