//! Dictionary-of-keys sparse matrix
//!
//! Entries live in a hash map keyed by `(row, col)`. Zero is represented by
//! absence: every mutator removes a coordinate whose value becomes zero, so
//! the map never holds a zero value.
//!
//! Coordinates are not checked against the declared shape. Storing outside
//! `rows x cols` is allowed and the entry is kept as-is; use
//! [`DokMatrix::out_of_bounds`] to find such entries.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::format::Entry;
use crate::validation::{check_multiply_shape, check_same_shape, in_bounds};
use crate::{MatrixElement, MatrixError, MatrixOperations, Operation, Result, SparseMatrix};

/// Sparse matrix of signed integers storing only non-zero entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DokMatrix<T: MatrixElement> {
    rows: usize,
    cols: usize,
    elements: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> DokMatrix<T> {
    /// Create an empty matrix with the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elements: HashMap::new(),
        }
    }

    /// Create a matrix from entries, applying each through [`Self::set`]
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<T>>,
    {
        let mut matrix = Self::new(rows, cols);
        for entry in entries {
            matrix.set(entry.row, entry.col, entry.value);
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Value at (row, col), zero when nothing is stored there
    pub fn get(&self, row: usize, col: usize) -> T {
        self.elements.get(&(row, col)).copied().unwrap_or(T::ZERO)
    }

    /// Whether a non-zero value is stored at (row, col)
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.elements.contains_key(&(row, col))
    }

    /// Store `value` at (row, col); zero removes the entry
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.elements.remove(&(row, col));
        } else {
            self.elements.insert((row, col), value);
        }
    }

    /// Stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.elements
            .iter()
            .map(|(&(row, col), &value)| Entry::new(row, col, value))
    }

    /// Stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<Entry<T>> {
        let mut entries: Vec<Entry<T>> = self.iter().collect();
        entries.sort_unstable_by_key(Entry::coordinate);
        entries
    }

    /// Stored entries whose coordinate lies outside the declared shape
    pub fn out_of_bounds(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        let shape = self.dimensions();
        self.iter()
            .filter(move |entry| !in_bounds(shape, entry.row, entry.col))
    }

    /// Element-wise sum; shapes must be identical
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Add, <T as MatrixElement>::checked_add)
    }

    /// Element-wise difference `self - other`; shapes must be identical
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Subtract, <T as MatrixElement>::checked_sub)
    }

    /// Start from a copy of `self` and fold every entry of `other` into it
    fn combine<F>(&self, other: &Self, op: Operation, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> Option<T>,
    {
        check_same_shape(op, self.dimensions(), other.dimensions())?;

        let mut result = Self {
            rows: self.rows,
            cols: self.cols,
            elements: self.elements.clone(),
        };

        for (&(row, col), &value) in &other.elements {
            let combined =
                f(result.get(row, col), value).ok_or(MatrixError::Overflow { row, col })?;
            result.set(row, col, combined);
        }

        Ok(result)
    }

    /// Matrix product `self * other`; requires `self.cols == other.rows`
    ///
    /// Entries of `other` are grouped by row once, so each entry of `self`
    /// only meets the entries of `other` it actually multiplies with.
    /// Entries of `other` stored beyond `other.cols` never contribute.
    ///
    /// Each output cell is accumulated in `i128` and narrowed to `T` once, so
    /// `Overflow` means the final value does not fit `T`. When several cells
    /// overflow, the smallest coordinate is reported. Only `i64` and `i128`
    /// elements with extreme values can exceed the `i128` accumulator itself.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let (rows, cols) = check_multiply_shape(self.dimensions(), other.dimensions())?;

        let by_row = other.row_index();
        let mut sums: HashMap<(usize, usize), i128> = HashMap::new();

        for (&(row, inner), &lhs) in &self.elements {
            let Some(rhs_row) = by_row.get(&inner) else {
                continue;
            };

            for &(col, rhs) in rhs_row {
                let overflow = MatrixError::Overflow { row, col };
                let product = lhs.widen().checked_mul(rhs.widen()).ok_or(overflow)?;
                let sum = sums.entry((row, col)).or_insert(0);
                *sum = sum.checked_add(product).ok_or(overflow)?;
            }
        }

        let mut result = Self::new(rows, cols);
        let mut overflowed: Option<(usize, usize)> = None;
        for ((row, col), sum) in sums {
            match T::narrow(sum) {
                Some(value) => result.set(row, col, value),
                None => {
                    overflowed = Some(overflowed.map_or((row, col), |first| first.min((row, col))));
                }
            }
        }

        match overflowed {
            Some((row, col)) => Err(MatrixError::Overflow { row, col }),
            None => Ok(result),
        }
    }

    /// Group in-range entries by row: `row -> [(col, value)]`
    fn row_index(&self) -> HashMap<usize, Vec<(usize, T)>> {
        let mut index: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (&(row, col), &value) in &self.elements {
            if col < self.cols {
                index.entry(row).or_default().push((col, value));
            }
        }
        index
    }
}

impl<T: MatrixElement> SparseMatrix for DokMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.elements.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.elements.len()
    }
}

impl<T: MatrixElement> MatrixOperations for DokMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<(usize, T)> = self
            .elements
            .iter()
            .filter(|&(&(r, _), _)| r == row_index)
            .map(|(&(_, c), &v)| (c, v))
            .collect();
        row.sort_unstable_by_key(|&(c, _)| c);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<(usize, T)> = self
            .elements
            .iter()
            .filter(|&(&(_, c), _)| c == col_index)
            .map(|(&(r, _), &v)| (r, v))
            .collect();
        col.sort_unstable_by_key(|&(r, _)| r);
        col
    }
}

impl<T: MatrixElement> core::fmt::Display for DokMatrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SparseMatrix({}, {}, {{", self.rows, self.cols)?;
        for (i, entry) in self.sorted_entries().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {}): {}", entry.row, entry.col, entry.value)?;
        }
        f.write_str("})")
    }
}
