#![no_std]

//! sparsemat-core - dictionary-of-keys sparse integer matrices
//!
//! This crate provides the matrix type, the text format definitions, the
//! element and matrix traits, and pure validation helpers. It performs no
//! I/O; reading and writing files lives in the `sparsemat` crate.
//!
//! ```
//! use sparsemat_core::{parse_matrix, DokMatrix};
//!
//! let a: DokMatrix<i64> = parse_matrix("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)").unwrap();
//! let b: DokMatrix<i64> = parse_matrix("rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)").unwrap();
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.get(0, 0), 4);
//! assert_eq!(sum.get(0, 1), 4);
//! assert_eq!(sum.get(1, 1), 2);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dok;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

#[cfg(feature = "alloc")]
pub use dok::DokMatrix;
pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{check_multiply_shape, check_same_shape};
