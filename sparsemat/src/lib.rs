//! sparsemat - sparse integer matrices loaded from text files
//!
//! This library reads dictionary-of-keys sparse matrices from a small text
//! format and combines them with addition, subtraction and multiplication.
//!
//! ## Architecture
//!
//! - **sparsemat-core**: matrix type, text format, traits and validation (no I/O)
//! - **sparsemat**: file loading and saving, loader configuration, utilities
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sparsemat::{DokMatrix, LoadError, MatrixFile};
//!
//! fn example() -> Result<(), LoadError> {
//!     let a: DokMatrix<i64> = MatrixFile::load("a.txt")?;
//!     let b: DokMatrix<i64> = MatrixFile::load("b.txt")?;
//!
//!     let product = a.multiply(&b)?;
//!     println!("{product}");
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 1, 5)
//! (2, 2, -1)
//! ```

// Re-export core abstractions and format definitions
pub use sparsemat_core::{
    // Matrix type and traits
    DokMatrix, MatrixElement, MatrixOperations, SparseMatrix,
    // Format definitions
    parse_matrix, parse_matrix_with, write_matrix, Entry, Header, MatrixSnapshot,
    // Error handling
    ErrorCategory, FormatErrorKind, MatrixError, Operation, Result,
};

pub mod config;
pub mod file_io;
pub mod unique_ints;

pub use config::LoadConfig;
pub use file_io::{LoadError, MatrixFile};
pub use unique_ints::{extract_unique, process_file, UniqueIntError, UniqueIntStats};
