//! Rectangular inflammation tables: rows are patients, columns are days.

use serde::Serialize;

use crate::error::{InflammationError, Result};

/// One value per day.
pub type Series = Vec<f64>;

/// A rectangular table of inflammation readings.
///
/// Every row holds the same number of days. A table may hold zero rows,
/// in which case it has zero days and every daily reduction fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    rows: Vec<Vec<f64>>,
    days: usize,
}

impl Table {
    /// Builds a table, rejecting rows whose length differs from the first row.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let days = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != days) {
            return Err(InflammationError::ShapeMismatch {
                what: "row",
                index,
                expected: days,
                found: row.len(),
            });
        }

        Ok(Self { rows, days })
    }

    /// Builds a table from text cells, failing on the first cell that is not a number.
    ///
    /// Entry point for callers holding raw text rows (spreadsheets, forms)
    /// rather than a file the loaders can read.
    pub fn from_text_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let mut parsed = Vec::with_capacity(rows.len());

        for (row_index, row) in rows.iter().enumerate() {
            let cells = row
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    let text = cell.as_ref();
                    text.trim()
                        .parse::<f64>()
                        .map_err(|_| InflammationError::NonNumeric {
                            row: row_index,
                            column,
                            value: text.to_string(),
                        })
                })
                .collect::<Result<Vec<f64>>>()?;
            parsed.push(cells);
        }

        Self::new(parsed)
    }

    pub fn patients(&self) -> usize {
        self.rows.len()
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, patient: usize) -> Option<&[f64]> {
        self.rows.get(patient).map(Vec::as_slice)
    }

    /// Readings of every patient on `day`, in row order.
    pub fn column(&self, day: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[day])
    }
}
