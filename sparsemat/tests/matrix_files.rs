//! End-to-end tests that go through files on disk

use std::fs;
use std::path::PathBuf;

use sparsemat::{
    DokMatrix, ErrorCategory, FormatErrorKind, LoadConfig, LoadError, MatrixError, MatrixFile,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn entries(matrix: &DokMatrix<i64>) -> Vec<(usize, usize, i64)> {
    matrix
        .sorted_entries()
        .into_iter()
        .map(|e| (e.row, e.col, e.value))
        .collect()
}

#[test]
fn test_two_by_two_scenario() {
    let dir = TempDir::new().unwrap();
    let a_path = write(&dir, "a.txt", "rows=2\ncols=2\n(0,0,1)\n(1,1,2)");
    let b_path = write(&dir, "b.txt", "rows=2\ncols=2\n(0,0,3)\n(0,1,4)");

    let a: DokMatrix<i64> = MatrixFile::load(&a_path).unwrap();
    let b: DokMatrix<i64> = MatrixFile::load(&b_path).unwrap();

    let sum = a.add(&b).unwrap();
    assert_eq!(entries(&sum), vec![(0, 0, 4), (0, 1, 4), (1, 1, 2)]);

    let product = a.multiply(&b).unwrap();
    assert_eq!(entries(&product), vec![(0, 0, 3), (0, 1, 4)]);
    assert_eq!(product.to_string(), "SparseMatrix(2, 2, {(0, 0): 3, (0, 1): 4})");
}

#[test]
fn test_format_rejection_returns_no_matrix() {
    let dir = TempDir::new().unwrap();

    for (name, third_line, kind) in [
        ("short.txt", "(1, 2)", FormatErrorKind::WrongFieldCount),
        ("word.txt", "(1, two, 3)", FormatErrorKind::InvalidInteger),
    ] {
        let path = write(&dir, name, &format!("rows=3\ncols=3\n{third_line}\n(0, 0, 1)\n"));
        let result: Result<DokMatrix<i64>, LoadError> = MatrixFile::load(&path);

        let err = result.unwrap_err();
        assert_eq!(err.matrix_error(), Some(&MatrixError::format(3, kind)));
        assert_eq!(err.matrix_error().unwrap().category(), ErrorCategory::Format);
    }
}

#[test]
fn test_explicit_zero_in_file_is_not_stored() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "zero.txt", "rows=2\ncols=2\n(0, 0, 0)\n(1, 0, 6)\n");

    let matrix: DokMatrix<i64> = MatrixFile::load(&path).unwrap();
    assert_eq!(matrix.nnz(), 1);
    assert!(!matrix.contains(0, 0));
    assert_eq!(matrix.get(0, 0), 0);
}

#[test]
fn test_strict_bounds_config() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "tall.txt", "rows=2\ncols=2\n(2, 0, 1)\n");

    let loaded: DokMatrix<i64> = MatrixFile::load(&path).unwrap();
    assert_eq!(loaded.out_of_bounds().count(), 1);

    let config = LoadConfig::default().with_strict_bounds(true);
    let err = MatrixFile::load_with_config::<i64, _>(&path, config).unwrap_err();
    assert_eq!(
        err.matrix_error(),
        Some(&MatrixError::format(3, FormatErrorKind::CoordinateOutOfBounds))
    );
}

#[test]
fn test_result_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let a: DokMatrix<i64> =
        MatrixFile::load(write(&dir, "a.txt", "rows=2\ncols=3\n(0,0,2)\n(1,2,-3)")).unwrap();
    let b: DokMatrix<i64> =
        MatrixFile::load(write(&dir, "b.txt", "rows=3\ncols=1\n(0,0,5)\n(2,0,4)")).unwrap();

    let product = a.multiply(&b).unwrap();
    let out = dir.path().join("product.txt");
    MatrixFile::save(&out, &product).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "rows=2\ncols=1\n(0, 0, 10)\n(1, 0, -12)\n");
    let reloaded: DokMatrix<i64> = MatrixFile::load(&out).unwrap();
    assert_eq!(reloaded, product);
}

#[cfg(feature = "serde")]
#[test]
fn test_snapshot_json() {
    let mut matrix = DokMatrix::<i64>::new(2, 2);
    matrix.set(1, 0, 7);

    let json = serde_json::to_value(sparsemat::MatrixSnapshot::from(&matrix)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "rows": 2,
            "cols": 2,
            "entries": [{"row": 1, "col": 0, "value": 7}]
        })
    );

    let back: sparsemat::MatrixSnapshot<i64> = serde_json::from_value(json).unwrap();
    assert_eq!(back.into_matrix(), matrix);
}
