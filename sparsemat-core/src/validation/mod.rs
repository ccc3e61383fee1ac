//! Validation utilities for matrix text and shapes
//!
//! Pure functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_in_bounds, check_multiply_shape, check_same_shape, in_bounds};
#[cfg(feature = "alloc")]
pub use parsing::parse_entry_line;
pub use parsing::{is_blank, parse_header_line};
