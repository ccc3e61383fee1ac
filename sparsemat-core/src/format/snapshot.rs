//! Owned, ordered view of a matrix for serialization

use alloc::vec::Vec;

use super::Entry;
use crate::{DokMatrix, MatrixElement};

/// A matrix flattened to its shape and row-major entry list
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixSnapshot<T> {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<Entry<T>>,
}

impl<T: MatrixElement> MatrixSnapshot<T> {
    /// Rebuild a matrix; zero entries are dropped like any other `set`
    pub fn into_matrix(self) -> DokMatrix<T> {
        DokMatrix::from_entries(self.rows, self.cols, self.entries)
    }
}

impl<T: MatrixElement> From<&DokMatrix<T>> for MatrixSnapshot<T> {
    fn from(matrix: &DokMatrix<T>) -> Self {
        let (rows, cols) = matrix.dimensions();
        Self {
            rows,
            cols,
            entries: matrix.sorted_entries(),
        }
    }
}
