//! Text format definitions for matrix files
//!
//! A file is a `rows=`/`cols=` header followed by one `(row, col, value)`
//! line per entry.

pub mod constants;
pub mod entry;
pub mod header;
#[cfg(feature = "alloc")]
pub mod snapshot;
#[cfg(feature = "alloc")]
pub mod text;

pub use entry::Entry;
pub use header::Header;
#[cfg(feature = "alloc")]
pub use snapshot::MatrixSnapshot;
#[cfg(feature = "alloc")]
pub use text::{parse_matrix, parse_matrix_with, write_matrix};
