//! Whole-document parsing and writing of the matrix text format
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (row, col, value)
//! ...
//! ```

use alloc::string::String;
use core::fmt::Write;

use super::{Entry, Header};
use crate::validation::{check_in_bounds, is_blank};
use crate::{DokMatrix, MatrixElement, Result};

/// Parse matrix text, accepting coordinates outside the declared shape
pub fn parse_matrix<T: MatrixElement>(text: &str) -> Result<DokMatrix<T>> {
    parse_matrix_with(text, false)
}

/// Parse matrix text
///
/// Blank entry lines are skipped. The first malformed entry line aborts the
/// parse. Entries go through [`DokMatrix::set`], so a later entry for the same
/// coordinate overwrites an earlier one and an explicit zero erases it. With
/// `strict_bounds` an entry outside the declared shape is an error; without
/// it such entries are stored as-is.
pub fn parse_matrix_with<T: MatrixElement>(text: &str, strict_bounds: bool) -> Result<DokMatrix<T>> {
    let mut lines = text.lines();
    let header = Header::read(&mut lines)?;
    let mut matrix = DokMatrix::new(header.rows, header.cols);

    // Header occupies lines 1 and 2
    for (line_no, line) in (3..).zip(lines) {
        if is_blank(line) {
            continue;
        }

        let entry = Entry::<T>::parse(line, line_no)?;
        if strict_bounds {
            check_in_bounds(header.shape(), entry.row, entry.col, line_no)?;
        }
        matrix.set(entry.row, entry.col, entry.value);
    }

    Ok(matrix)
}

/// Render a matrix in the text format, entries in row-major order
pub fn write_matrix<T: MatrixElement>(matrix: &DokMatrix<T>) -> String {
    let (rows, cols) = matrix.dimensions();
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", Header::new(rows, cols));
    for entry in matrix.sorted_entries() {
        let _ = writeln!(out, "{entry}");
    }

    out
}
