//! Per-day reductions of a single table.

use crate::analysis::utility::{max, mean, min};
use crate::error::{InflammationError, Result};
use crate::table::{Series, Table};

/// Applies `reduce` to every day's column of readings.
fn reduce_days(
    table: &Table,
    statistic: &'static str,
    reduce: fn(&[f64]) -> f64,
) -> Result<Series> {
    if table.is_empty() {
        return Err(InflammationError::EmptyTable { statistic });
    }

    let mut column = Vec::with_capacity(table.patients());

    Ok((0..table.days())
        .map(|day| {
            column.clear();
            column.extend(table.column(day));
            reduce(&column)
        })
        .collect())
}

/// Mean inflammation of all patients for each day.
pub fn daily_mean(table: &Table) -> Result<Series> {
    reduce_days(table, "daily mean", mean)
}

/// Highest inflammation of any patient for each day.
pub fn daily_max(table: &Table) -> Result<Series> {
    reduce_days(table, "daily max", max)
}

/// Lowest inflammation of any patient for each day.
pub fn daily_min(table: &Table) -> Result<Series> {
    reduce_days(table, "daily min", min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[[f64; 2]]) -> Table {
        Table::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_daily_mean_zeros() {
        let t = table(&[[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]]);
        assert_eq!(daily_mean(&t).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_daily_mean_integers() {
        let t = table(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(daily_mean(&t).unwrap(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_daily_max() {
        assert_eq!(
            daily_max(&table(&[[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]])).unwrap(),
            vec![0.0, 0.0]
        );
        assert_eq!(
            daily_max(&table(&[[1.0, 2.0], [5.0, 4.0], [3.0, 6.0]])).unwrap(),
            vec![5.0, 6.0]
        );
    }

    #[test]
    fn test_daily_min() {
        assert_eq!(
            daily_min(&table(&[[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]])).unwrap(),
            vec![0.0, 0.0]
        );
        assert_eq!(
            daily_min(&table(&[[1.0, 4.0], [3.0, 6.0], [5.0, 2.0]])).unwrap(),
            vec![1.0, 2.0]
        );
    }

    #[test]
    fn test_series_length_matches_days() {
        let t = Table::new(vec![vec![1.0, 2.0, 3.0, 4.0]; 5]).unwrap();
        assert_eq!(daily_mean(&t).unwrap().len(), 4);
        assert_eq!(daily_max(&t).unwrap().len(), 4);
        assert_eq!(daily_min(&t).unwrap().len(), 4);
    }

    #[test]
    fn test_empty_table() {
        let t = Table::new(vec![]).unwrap();
        for result in [daily_mean(&t), daily_max(&t), daily_min(&t)] {
            assert!(matches!(result, Err(InflammationError::EmptyTable { .. })));
        }
    }

    #[test]
    fn test_text_cells_never_reach_a_reduction() {
        let rows = vec![vec!["Hello", "there"], vec!["General", "Kenobi"]];
        let result = Table::from_text_rows(&rows).and_then(|t| daily_min(&t));
        assert!(matches!(result, Err(InflammationError::NonNumeric { .. })));
    }

    #[test]
    fn test_nan_cell_propagates() {
        let t = Table::new(vec![vec![f64::NAN, 1.0], vec![2.0, 3.0]]).unwrap();

        for series in [daily_mean(&t), daily_max(&t), daily_min(&t)] {
            let series = series.unwrap();
            assert!(series[0].is_nan());
            assert!(!series[1].is_nan());
        }
    }

    #[test]
    fn test_reductions_are_repeatable() {
        let t = table(&[[0.1, 0.7], [0.2, 0.3], [0.3, 1.9]]);
        let first = daily_mean(&t).unwrap();
        let second = daily_mean(&t).unwrap();
        assert_eq!(
            first.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
            second.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        );
    }
}
