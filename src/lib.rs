//! Loading and daily statistics of patient inflammation data.
//!
//! Each data file holds one table: a row per patient and a column per day.
//! [`loader`] reads a single CSV or JSON file, [`source`] loads every
//! `inflammation*` file of a directory, and [`analysis`] reduces tables to
//! per-day series.

pub mod analysis;
pub mod error;
pub mod loader;
pub mod models;
pub mod output;
pub mod source;
pub mod table;

pub use analysis::cross_dataset::{analyse_data, compute_standard_deviation_by_day};
pub use analysis::daily::{daily_max, daily_mean, daily_min};
pub use error::{InflammationError, Result};
pub use loader::{load_csv, load_json};
pub use source::{CsvDataSource, DataSource, JsonDataSource, SourceFormat};
pub use table::{Series, Table};
