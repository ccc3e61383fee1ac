//! Loader configuration
//!
//! Controls how strictly matrix files are checked against their own header.

/// Configuration for loading matrix files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadConfig {
    /// Reject entries outside the declared `rows x cols` shape
    pub strict_bounds: bool,
}

impl LoadConfig {
    /// Config that rejects out-of-shape entries
    pub fn strict() -> Self {
        Self {
            strict_bounds: true,
        }
    }

    /// Set whether out-of-shape entries are rejected
    pub fn with_strict_bounds(mut self, strict_bounds: bool) -> Self {
        self.strict_bounds = strict_bounds;
        self
    }

    pub fn strict_bounds(&self) -> bool {
        self.strict_bounds
    }
}
