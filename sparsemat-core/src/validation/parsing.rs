//! Parsing utilities for matrix text lines
//!
//! Pure functions over single lines; line numbers are passed in so errors can
//! point at the offending line. Line numbers are 1-based.

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::format::constants::HEADER_SEPARATOR;
#[cfg(feature = "alloc")]
use crate::format::constants::{BRACKETS, FIELD_SEPARATOR};
#[cfg(feature = "alloc")]
use crate::MatrixElement;
use crate::{FormatErrorKind, MatrixError, Result};

/// Parse a `key=<count>` header line and return the count
///
/// The key must match `expected_key` after trimming. The count is the text
/// after the first `=`, trimmed, and must be a non-negative integer.
pub fn parse_header_line(line: &str, expected_key: &str, line_no: usize) -> Result<usize> {
    let invalid = MatrixError::format(line_no, FormatErrorKind::InvalidHeader);

    let (key, value) = line.trim().split_once(HEADER_SEPARATOR).ok_or(invalid)?;
    if key.trim() != expected_key {
        return Err(invalid);
    }

    value.trim().parse::<usize>().map_err(|_| invalid)
}

/// Parse an entry line of the form `(row, col, value)`
///
/// Every `(` and `)` is removed and the remainder split on `,` into exactly
/// three fields. Coordinates must be non-negative (`NegativeCoordinate`
/// otherwise); the value must fit `T`.
/// Zero values are returned as-is; whether they are stored is the caller's
/// decision.
#[cfg(feature = "alloc")]
pub fn parse_entry_line<T: MatrixElement>(line: &str, line_no: usize) -> Result<(usize, usize, T)> {
    let stripped: String = line.trim().replace(&BRACKETS[..], "");

    let mut fields = stripped.split(FIELD_SEPARATOR).map(str::trim);
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(MatrixError::format(line_no, FormatErrorKind::WrongFieldCount));
    };

    let row = parse_coordinate(row, line_no)?;
    let col = parse_coordinate(col, line_no)?;
    let value = value
        .parse::<T>()
        .map_err(|_| MatrixError::format(line_no, FormatErrorKind::InvalidInteger))?;

    Ok((row, col, value))
}

/// Parse a row or column index, telling negative integers apart from garbage
#[cfg(feature = "alloc")]
fn parse_coordinate(field: &str, line_no: usize) -> Result<usize> {
    if let Ok(index) = field.parse::<usize>() {
        return Ok(index);
    }

    match field.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            // `-0` is still zero
            if digits.bytes().all(|b| b == b'0') {
                Ok(0)
            } else {
                Err(MatrixError::format(line_no, FormatErrorKind::NegativeCoordinate))
            }
        }
        _ => Err(MatrixError::format(line_no, FormatErrorKind::InvalidInteger)),
    }
}

/// Whether a line carries no content and should be skipped
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_line() {
        assert_eq!(parse_header_line("rows=3", "rows", 1), Ok(3));
        assert_eq!(parse_header_line("  cols = 12 \n", "cols", 2), Ok(12));
        assert_eq!(parse_header_line("rows=0", "rows", 1), Ok(0));

        let invalid = Err(MatrixError::format(1, FormatErrorKind::InvalidHeader));
        assert_eq!(parse_header_line("rows 3", "rows", 1), invalid);
        assert_eq!(parse_header_line("cols=3", "rows", 1), invalid);
        assert_eq!(parse_header_line("rows=-3", "rows", 1), invalid);
        assert_eq!(parse_header_line("rows=three", "rows", 1), invalid);
        assert_eq!(parse_header_line("rows=3=4", "rows", 1), invalid);
        assert_eq!(parse_header_line("", "rows", 1), invalid);
    }

    #[test]
    fn test_parse_entry_line() {
        assert_eq!(parse_entry_line::<i64>("(0, 1, 5)", 3), Ok((0, 1, 5)));
        assert_eq!(parse_entry_line::<i64>("  (7,2,-40)  ", 3), Ok((7, 2, -40)));
        assert_eq!(parse_entry_line::<i32>("1, 2, 3", 3), Ok((1, 2, 3)));
        assert_eq!(parse_entry_line::<i32>("(1, 2, 0)", 3), Ok((1, 2, 0)));
        assert_eq!(parse_entry_line::<i32>("((1), 2, +3)", 3), Ok((1, 2, 3)));
    }

    #[test]
    fn test_parse_entry_line_wrong_field_count() {
        let wrong = Err(MatrixError::format(5, FormatErrorKind::WrongFieldCount));
        assert_eq!(parse_entry_line::<i64>("(1, 2)", 5), wrong);
        assert_eq!(parse_entry_line::<i64>("(1, 2, 3, 4)", 5), wrong);
        assert_eq!(parse_entry_line::<i64>("(1 2 3)", 5), wrong);
    }

    #[test]
    fn test_parse_entry_line_invalid_integer() {
        let invalid = Err(MatrixError::format(4, FormatErrorKind::InvalidInteger));
        assert_eq!(parse_entry_line::<i64>("(1, two, 3)", 4), invalid);
        assert_eq!(parse_entry_line::<i64>("(1, 2, 3.5)", 4), invalid);
        assert_eq!(parse_entry_line::<i64>("(1, 2, )", 4), invalid);
        assert_eq!(parse_entry_line::<i64>("(1-, 2, 3)", 4), invalid);
        assert_eq!(parse_entry_line::<i64>("(-, 2, 3)", 4), invalid);
    }

    #[test]
    fn test_parse_entry_line_value_out_of_range() {
        assert_eq!(
            parse_entry_line::<i8>("(1, 2, 300)", 4),
            Err(MatrixError::format(4, FormatErrorKind::InvalidInteger))
        );
        assert_eq!(parse_entry_line::<i8>("(1, 2, -128)", 4), Ok((1, 2, -128)));
    }

    #[test]
    fn test_parse_entry_line_negative_coordinate() {
        let negative = Err(MatrixError::format(3, FormatErrorKind::NegativeCoordinate));
        assert_eq!(parse_entry_line::<i64>("(-1, 0, 5)", 3), negative);
        assert_eq!(parse_entry_line::<i64>("(0, -12, 5)", 3), negative);
        assert_eq!(parse_entry_line::<i64>("(-0, 1, 5)", 3), Ok((0, 1, 5)));

        // A negative value is fine; only coordinates must be non-negative
        assert_eq!(parse_entry_line::<i64>("(0, 1, -5)", 3), Ok((0, 1, -5)));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\r"));
        assert!(!is_blank(" (0, 0, 1)"));
    }
}
