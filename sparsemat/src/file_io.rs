//! File I/O for matrix text files
//!
//! Each load is a single read of the whole file followed by an in-memory
//! parse; the file handle is closed before parsing starts.

use std::{fs, path::Path, path::PathBuf};

use sparsemat_core::{parse_matrix_with, write_matrix, DokMatrix, MatrixElement, MatrixError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LoadConfig;

/// Errors from reading or writing matrix files
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is not a valid matrix
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl LoadError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The matrix error, if this is not an I/O failure
    pub fn matrix_error(&self) -> Option<&MatrixError> {
        match self {
            Self::Matrix(err) => Some(err),
            Self::Io { .. } => None,
        }
    }
}

/// Entry point for reading and writing matrix files
pub struct MatrixFile;

impl MatrixFile {
    /// Load a matrix, accepting entries outside the declared shape
    pub fn load<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<DokMatrix<T>, LoadError> {
        Self::load_with_config(path, LoadConfig::default())
    }

    /// Load a matrix with explicit configuration
    pub fn load_with_config<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        config: LoadConfig,
    ) -> Result<DokMatrix<T>, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;

        let matrix = parse_matrix_with::<T>(&text, config.strict_bounds())?;

        let outside = matrix.out_of_bounds().count();
        if outside > 0 {
            warn!(
                path = %path.display(),
                entries = outside,
                rows = matrix.rows(),
                cols = matrix.cols(),
                "matrix has entries outside its declared dimensions"
            );
        }

        debug!(
            path = %path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            element = T::NAME,
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Write a matrix in the text format, replacing any existing file
    pub fn save<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        matrix: &DokMatrix<T>,
    ) -> Result<(), LoadError> {
        let path = path.as_ref();
        fs::write(path, write_matrix(matrix)).map_err(|e| LoadError::io(path, e))?;

        debug!(path = %path.display(), nnz = matrix.nnz(), "saved matrix");
        Ok(())
    }
}
