//! Unique integer extraction
//!
//! Reads one integer per line, keeps the distinct values inside
//! [`MIN_VALUE`, `MAX_VALUE`] and writes them back sorted ascending, one per
//! line. Blank lines and lines that are not a single integer are skipped.

use std::collections::BTreeSet;
use std::{fs, path::Path, path::PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Smallest value kept
pub const MIN_VALUE: i32 = -1023;

/// Largest value kept
pub const MAX_VALUE: i32 = 1023;

/// Errors from the unique integer utility
#[derive(Debug, Error)]
pub enum UniqueIntError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Counters describing one extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniqueIntStats {
    /// Lines in the input, blank ones included
    pub lines_read: usize,
    /// Non-blank lines that were not a single integer
    pub skipped: usize,
    /// Integers outside the accepted range
    pub out_of_range: usize,
    /// Distinct values written
    pub unique: usize,
}

/// Extract the sorted distinct in-range integers from `text`
pub fn extract_unique(text: &str) -> (Vec<i32>, UniqueIntStats) {
    let mut stats = UniqueIntStats::default();
    let mut seen = BTreeSet::new();

    for line in text.lines() {
        stats.lines_read += 1;

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<i64>() {
            Ok(n) if (i64::from(MIN_VALUE)..=i64::from(MAX_VALUE)).contains(&n) => {
                seen.insert(n as i32);
            }
            Ok(_) => stats.out_of_range += 1,
            // Too many digits for i64 is still an integer, just a large one
            Err(_) if is_integer_literal(line) => stats.out_of_range += 1,
            Err(_) => {
                debug!(line, "skipping non-integer line");
                stats.skipped += 1;
            }
        }
    }

    stats.unique = seen.len();
    (seen.into_iter().collect(), stats)
}

/// Optional sign followed by at least one ASCII digit
fn is_integer_literal(line: &str) -> bool {
    let digits = line.strip_prefix(['+', '-']).unwrap_or(line);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Read `input`, write its sorted distinct in-range integers to `output`
pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<UniqueIntStats, UniqueIntError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let text = fs::read_to_string(input).map_err(|source| UniqueIntError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let (values, stats) = extract_unique(&text);

    let mut out = String::with_capacity(values.len() * 5);
    for value in &values {
        out.push_str(&value.to_string());
        out.push('\n');
    }
    fs::write(output, out).map_err(|source| UniqueIntError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        lines = stats.lines_read,
        skipped = stats.skipped,
        out_of_range = stats.out_of_range,
        unique = stats.unique,
        "extracted unique integers"
    );
    Ok(stats)
}
