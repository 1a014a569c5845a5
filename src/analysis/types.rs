//! Labelled series handed to the output layer.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, Serializer};

use crate::table::Series;

pub const AVERAGE: &str = "average";
pub const MAX: &str = "max";
pub const MIN: &str = "min";
pub const STANDARD_DEVIATION_BY_DAY: &str = "standard deviation by day";

/// Ordered mapping from a series label to its values.
///
/// Labels keep their insertion order; inserting an existing label replaces
/// its values in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphData {
    series: Vec<(String, Series)>,
}

impl GraphData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, values: Series) {
        let label = label.into();
        match self.series.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = values,
            None => self.series.push((label, values)),
        }
    }

    /// Builder form of [`GraphData::insert`].
    pub fn with(mut self, label: impl Into<String>, values: Series) -> Self {
        self.insert(label, values);
        self
    }

    pub fn get(&self, label: &str) -> Option<&Series> {
        self.series
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, values)| values)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.series.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl Serialize for GraphData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Rendered analysis result, written out as JSON.
#[derive(Debug, serde::Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub graph: GraphData,
}

impl Report {
    pub fn new(source: impl Into<String>, graph: GraphData) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.into(),
            graph,
        }
    }
}
