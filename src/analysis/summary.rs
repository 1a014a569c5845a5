//! Graph data for the two analysis paths.

use crate::analysis::daily::{daily_max, daily_mean, daily_min};
use crate::analysis::types::{AVERAGE, GraphData, MAX, MIN, STANDARD_DEVIATION_BY_DAY};
use crate::error::Result;
use crate::table::{Series, Table};

/// Daily average, max and min of one table.
pub fn daily_summary(table: &Table) -> Result<GraphData> {
    Ok(GraphData::new()
        .with(AVERAGE, daily_mean(table)?)
        .with(MAX, daily_max(table)?)
        .with(MIN, daily_min(table)?))
}

/// Wraps a cross-dataset result under its display label.
pub fn standard_deviation_graph(series: Series) -> GraphData {
    GraphData::new().with(STANDARD_DEVIATION_BY_DAY, series)
}
