//! The two-line `rows=`/`cols=` header of a matrix file

use super::constants::{COLS_KEY, ROWS_KEY};
use crate::validation::parse_header_line;
use crate::{FormatErrorKind, MatrixError, Result};

/// Declared shape of a matrix file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Header {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape as (rows, cols)
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Read the header from the first two lines of a file
    ///
    /// Consumes exactly two lines from `lines`. A missing line is
    /// `MissingHeader`; a malformed one is `InvalidHeader`.
    pub fn read<'a, I>(lines: &mut I) -> Result<Self>
    where
        I: Iterator<Item = &'a str>,
    {
        let rows_line = lines
            .next()
            .ok_or(MatrixError::format(1, FormatErrorKind::MissingHeader))?;
        let rows = parse_header_line(rows_line, ROWS_KEY, 1)?;

        let cols_line = lines
            .next()
            .ok_or(MatrixError::format(2, FormatErrorKind::MissingHeader))?;
        let cols = parse_header_line(cols_line, COLS_KEY, 2)?;

        Ok(Self { rows, cols })
    }
}

impl core::fmt::Display for Header {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{ROWS_KEY}={}\n{COLS_KEY}={}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_header() {
        let mut lines = "rows=4\ncols=7\n(0, 0, 1)".lines();
        assert_eq!(Header::read(&mut lines), Ok(Header::new(4, 7)));
        assert_eq!(lines.next(), Some("(0, 0, 1)"));
    }

    #[test]
    fn test_read_header_missing_lines() {
        assert_eq!(
            Header::read(&mut "".lines()),
            Err(MatrixError::format(1, FormatErrorKind::MissingHeader))
        );
        assert_eq!(
            Header::read(&mut "rows=4".lines()),
            Err(MatrixError::format(2, FormatErrorKind::MissingHeader))
        );
    }

    #[test]
    fn test_read_header_swapped_keys() {
        assert_eq!(
            Header::read(&mut "cols=4\nrows=7".lines()),
            Err(MatrixError::format(1, FormatErrorKind::InvalidHeader))
        );
    }
}
