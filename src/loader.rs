//! Single-file loaders for CSV and JSON inflammation tables.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::error::{InflammationError, Result};
use crate::table::Table;

/// One patient entry of a JSON inflammation document.
///
/// Keys other than `observations` are ignored.
#[derive(Debug, Deserialize)]
struct PatientRecord {
    observations: Option<Vec<f64>>,
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| InflammationError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_error(path: &Path, message: impl Into<String>) -> InflammationError {
    InflammationError::Parse {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

/// Loads a comma-delimited table with one patient per line and no header row.
///
/// Blank lines are skipped and lines starting with `#` are treated as comments.
///
/// # Errors
///
/// Returns [`InflammationError::Parse`] for a cell that is not a number,
/// [`InflammationError::ShapeMismatch`] when rows differ in length, and
/// [`InflammationError::FileRead`] when the file cannot be opened or read.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_csv(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file = open(path)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(|e| {
            let message = e.to_string();
            match e.into_kind() {
                csv::ErrorKind::Io(source) => InflammationError::FileRead {
                    path: path.to_path_buf(),
                    source,
                },
                _ => parse_error(path, message),
            }
        })?;
        let line = record.position().map_or(0, csv::Position::line);

        let row = record
            .iter()
            .enumerate()
            .map(|(column, field)| {
                field.parse::<f64>().map_err(|e| {
                    parse_error(
                        path,
                        format!("line {line}, column {column}: invalid number '{field}': {e}"),
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        rows.push(row);
    }

    let table = Table::new(rows)?;
    debug!(
        patients = table.patients(),
        days = table.days(),
        "CSV table loaded"
    );
    Ok(table)
}

/// Loads a JSON array of patient records, one row per record's `observations`.
///
/// Expected format:
/// ```json
/// [
///   { "observations": [0, 1] },
///   { "observations": [0, 2] }
/// ]
/// ```
///
/// # Errors
///
/// Returns [`InflammationError::Parse`] when the document is not valid JSON of
/// that shape, [`InflammationError::MissingField`] when a record has no
/// `observations`, and [`InflammationError::ShapeMismatch`] for ragged rows.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_json(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let reader = BufReader::new(open(path)?);

    let records: Vec<PatientRecord> =
        serde_json::from_reader(reader).map_err(|e| parse_error(path, e.to_string()))?;

    let rows = records
        .into_iter()
        .enumerate()
        .map(|(record, entry)| {
            entry
                .observations
                .ok_or_else(|| InflammationError::MissingField {
                    path: path.to_path_buf(),
                    record,
                    field: "observations",
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let table = Table::new(rows)?;
    debug!(
        patients = table.patients(),
        days = table.days(),
        "JSON table loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_csv() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "inflammation-01.csv", "0,1,2\n3,4,5\n");

        let table = load_csv(&path).unwrap();
        assert_eq!(table.rows(), &[vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);
    }

    #[test]
    fn test_load_csv_skips_blank_and_comment_lines() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "inflammation-01.csv", "# day 0..2\n0, 1, 2\n\n3,4,5\n");

        let table = load_csv(&path).unwrap();
        assert_eq!(table.patients(), 2);
        assert_eq!(table.days(), 3);
    }

    #[test]
    fn test_load_csv_non_numeric_cell() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "inflammation-01.csv", "0,1\n2,high\n");

        let err = load_csv(&path).unwrap_err();
        match err {
            InflammationError::Parse { message, .. } => {
                assert!(message.contains("line 2"), "{message}");
                assert!(message.contains("'high'"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_csv_ragged_rows() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "inflammation-01.csv", "0,1,2\n3,4\n");

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, InflammationError::ShapeMismatch { index: 1, .. }));
    }

    #[test]
    fn test_load_csv_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_csv(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, InflammationError::FileRead { .. }));
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "inflammation-01.json",
            r#"[{"observations": [0, 1]}, {"name": "Bob", "observations": [0, 2.5]}]"#,
        );

        let table = load_json(&path).unwrap();
        assert_eq!(table.rows(), &[vec![0.0, 1.0], vec![0.0, 2.5]]);
    }

    #[test]
    fn test_load_json_invalid_document() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "inflammation-01.json", "[{\"observations\": [0, 1]");

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, InflammationError::Parse { .. }));
    }

    #[test]
    fn test_load_json_non_numeric_observation() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "inflammation-01.json", r#"[{"observations": [0, "x"]}]"#);

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, InflammationError::Parse { .. }));
    }

    #[test]
    fn test_load_json_missing_observations() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "inflammation-01.json",
            r#"[{"observations": [0, 1]}, {"readings": [0, 2]}]"#,
        );

        let err = load_json(&path).unwrap_err();
        assert!(matches!(
            err,
            InflammationError::MissingField {
                record: 1,
                field: "observations",
                ..
            }
        ));
    }

    #[test]
    fn test_load_json_ragged_rows() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "inflammation-01.json",
            r#"[{"observations":[0,1]},{"observations":[0]}]"#,
        );

        let err = load_json(&path).unwrap_err();
        assert!(matches!(
            err,
            InflammationError::ShapeMismatch {
                index: 1,
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_load_csv_invalid_utf8_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inflammation-01.csv");
        std::fs::write(&path, b"0,1\n\xff,2\n").unwrap();

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, InflammationError::Parse { .. }));
    }

    #[test]
    fn test_load_csv_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_csv(dir.path()).unwrap_err();
        assert!(matches!(err, InflammationError::FileRead { .. }));
    }

    #[test]
    fn test_load_json_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "inflammation-01.json", "[]");

        let table = load_json(&path).unwrap();
        assert!(table.is_empty());
    }
}
