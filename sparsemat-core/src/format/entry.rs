//! A single `(row, col, value)` line of a matrix file

use crate::MatrixElement;
#[cfg(feature = "alloc")]
use crate::{validation::parse_entry_line, Result};

/// One stored coordinate and its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T: MatrixElement> Entry<T> {
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Parse an entry line; `line_no` is 1-based and only used in errors
    #[cfg(feature = "alloc")]
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let (row, col, value) = parse_entry_line(line, line_no)?;
        Ok(Self { row, col, value })
    }

    pub const fn coordinate(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl<T: MatrixElement> core::fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}
