//! Variability of the daily mean across datasets.

use tracing::debug;

use crate::analysis::daily::daily_mean;
use crate::analysis::utility::{mean, stddev};
use crate::error::{InflammationError, Result};
use crate::source::DataSource;
use crate::table::{Series, Table};

/// Population standard deviation, per day, of every table's daily mean.
///
/// The per-table means are stacked in the order given, one row per table.
///
/// # Errors
///
/// Returns [`InflammationError::EmptyTable`] for an empty slice or a table
/// without patients, and [`InflammationError::ShapeMismatch`] when tables
/// cover a different number of days.
pub fn compute_standard_deviation_by_day(tables: &[Table]) -> Result<Series> {
    let means = tables.iter().map(daily_mean).collect::<Result<Vec<_>>>()?;

    let Some(first) = means.first() else {
        return Err(InflammationError::EmptyTable {
            statistic: "standard deviation by day",
        });
    };
    let days = first.len();

    if let Some((index, series)) = means.iter().enumerate().find(|(_, m)| m.len() != days) {
        return Err(InflammationError::ShapeMismatch {
            what: "daily mean of table",
            index,
            expected: days,
            found: series.len(),
        });
    }

    let mut column = Vec::with_capacity(means.len());

    Ok((0..days)
        .map(|day| {
            column.clear();
            column.extend(means.iter().map(|m| m[day]));
            stddev(&column, mean(&column))
        })
        .collect())
}

/// Loads every table from `source` and computes the standard deviation by day
/// of their daily means.
pub fn analyse_data<S: DataSource + ?Sized>(source: &S) -> Result<Series> {
    let tables = source.load_inflammation_data()?;
    debug!(tables = tables.len(), "Stacking daily means");

    compute_standard_deviation_by_day(&tables)
}
