//! Error types for sparse matrix operations

/// Binary operation that produced a dimension error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Lowercase name used on the command line and in messages
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// What was wrong with a line of matrix text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// The `rows=` or `cols=` line is absent
    MissingHeader,
    /// A header line has no `=`, the wrong key, or a bad count
    InvalidHeader,
    /// An entry line did not split into exactly three fields
    WrongFieldCount,
    /// An entry field is not an integer of the expected type
    InvalidInteger,
    /// An entry has a row or column below zero
    NegativeCoordinate,
    /// An entry lies outside the declared shape (strict loading only)
    CoordinateOutOfBounds,
}

impl core::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatErrorKind::MissingHeader => "missing header line",
            FormatErrorKind::InvalidHeader => "invalid header line",
            FormatErrorKind::WrongFieldCount => "expected exactly three fields",
            FormatErrorKind::InvalidInteger => "field is not a valid integer",
            FormatErrorKind::NegativeCoordinate => "coordinate is negative",
            FormatErrorKind::CoordinateOutOfBounds => "coordinate outside declared dimensions",
        };
        write!(f, "{msg}")
    }
}

/// Broad error category, for callers that only need to branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed matrix text
    Format,
    /// Shape-incompatible operands
    Dimension,
    /// Element arithmetic left the range of the element type
    Arithmetic,
}

/// Errors that can occur while parsing or combining sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Input text is malformed; `line` is 1-based
    Format { line: usize, kind: FormatErrorKind },
    /// Operand shapes are incompatible for `op`
    DimensionMismatch {
        op: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Accumulating the result at (row, col) overflowed the element type
    Overflow { row: usize, col: usize },
}

impl MatrixError {
    /// Shorthand for a format error at a 1-based line
    pub const fn format(line: usize, kind: FormatErrorKind) -> Self {
        MatrixError::Format { line, kind }
    }

    /// Shorthand for a dimension mismatch between two shapes
    pub const fn dimension_mismatch(
        op: Operation,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        MatrixError::DimensionMismatch { op, left, right }
    }

    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::Format { .. } => ErrorCategory::Format,
            MatrixError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            MatrixError::Overflow { .. } => ErrorCategory::Arithmetic,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::Format { line, kind } => {
                write!(f, "Input file has wrong format: line {line}: {kind}")
            }
            MatrixError::DimensionMismatch { op, left, right } => write!(
                f,
                "Matrix dimensions do not match for {op}: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::Overflow { row, col } => {
                write!(f, "Integer overflow computing element ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
