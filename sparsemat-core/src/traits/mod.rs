//! Abstract interfaces for sparse matrices
//!
//! This module defines the element constraint and the read-only matrix
//! traits. Concrete storage lives in [`crate::dok`].

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use matrix::SparseMatrix;
