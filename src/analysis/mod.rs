//! Daily statistics and cross-dataset analysis.
//!
//! Tables are reduced down each column (across patients) to give one value
//! per day. The cross-dataset path reduces every table to its daily means,
//! stacks them, and takes the population standard deviation per day.

pub mod cross_dataset;
pub mod daily;
pub mod summary;
pub mod types;
pub mod utility;
