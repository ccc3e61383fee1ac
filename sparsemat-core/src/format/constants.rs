//! Lexical constants for the matrix text format

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Separator between the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';

/// Characters stripped from entry lines before splitting
pub const BRACKETS: [char; 2] = ['(', ')'];

/// Number of header lines at the top of a file
pub const HEADER_LINES: usize = 2;
