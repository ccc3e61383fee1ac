//! Shape compatibility and coordinate bounds checks
//!
//! Pure functions over `(rows, cols)` pairs with no knowledge of storage.

use crate::{FormatErrorKind, MatrixError, Operation, Result};

/// Validate that two shapes are identical, as addition and subtraction need
pub const fn check_same_shape(
    op: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(MatrixError::dimension_mismatch(op, left, right));
    }
    Ok(())
}

/// Validate that `left.cols == right.rows`, as multiplication needs
///
/// Returns the shape of the product.
pub const fn check_multiply_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize)> {
    if left.1 != right.0 {
        return Err(MatrixError::dimension_mismatch(
            Operation::Multiply,
            left,
            right,
        ));
    }
    Ok((left.0, right.1))
}

/// Whether a coordinate lies inside a shape
pub const fn in_bounds(shape: (usize, usize), row: usize, col: usize) -> bool {
    row < shape.0 && col < shape.1
}

/// Validate that an entry read from `line_no` lies inside the declared shape
pub const fn check_in_bounds(
    shape: (usize, usize),
    row: usize,
    col: usize,
    line_no: usize,
) -> Result<()> {
    if !in_bounds(shape, row, col) {
        return Err(MatrixError::format(
            line_no,
            FormatErrorKind::CoordinateOutOfBounds,
        ));
    }
    Ok(())
}
