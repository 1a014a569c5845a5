//! Directory-backed sources of inflammation tables.
//!
//! A [`DataSource`] lists every `inflammation*` file of one format in a
//! directory and loads each into a [`Table`]. [`CsvDataSource`] and
//! [`JsonDataSource`] are the two implementations; [`SourceFormat`] picks
//! between them from a file extension.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{InflammationError, Result};
use crate::loader::{load_csv, load_json};
use crate::table::Table;

/// File name prefix shared by every inflammation data file.
pub const FILE_PREFIX: &str = "inflammation";

/// Anything that can produce all inflammation tables of a study.
pub trait DataSource {
    /// Loads every matching table, in file name order.
    ///
    /// # Errors
    ///
    /// Fails with [`InflammationError::NoDataFound`] when nothing matches, or
    /// with the first per-file load error.
    fn load_inflammation_data(&self) -> Result<Vec<Table>>;
}

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
}

impl SourceFormat {
    /// Picks the format from a file's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            other => Err(InflammationError::UnsupportedFormat {
                extension: other.map(|ext| format!(".{ext}")).unwrap_or_default(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Glob-style pattern of the files this format reads.
    pub fn pattern(self) -> String {
        format!("{FILE_PREFIX}*.{}", self.extension())
    }

    /// Whether `file_name` matches [`SourceFormat::pattern`].
    pub fn matches(self, file_name: &str) -> bool {
        file_name
            .strip_prefix(FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(self.extension()))
            .is_some_and(|stem| stem.ends_with('.'))
    }

    /// Loads a single file of this format.
    pub fn load(self, path: &Path) -> Result<Table> {
        match self {
            Self::Csv => load_csv(path),
            Self::Json => load_json(path),
        }
    }

    /// A data source of this format over `dir`.
    pub fn data_source(self, dir: impl Into<PathBuf>) -> Box<dyn DataSource> {
        match self {
            Self::Csv => Box::new(CsvDataSource::new(dir)),
            Self::Json => Box::new(JsonDataSource::new(dir)),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Lists the files in `dir` matching `format`, sorted by file name.
///
/// Only regular files directly inside `dir` are considered.
pub fn matching_files(dir: &Path, format: SourceFormat) -> Result<Vec<PathBuf>> {
    let read_error = |e: std::io::Error| InflammationError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_match = entry
            .file_name()
            .to_str()
            .is_some_and(|name| format.matches(name));

        if is_match {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

fn load_all(dir: &Path, format: SourceFormat) -> Result<Vec<Table>> {
    let files = matching_files(dir, format)?;

    if files.is_empty() {
        return Err(InflammationError::NoDataFound {
            dir: dir.to_path_buf(),
            pattern: format.pattern(),
        });
    }

    debug!(count = files.len(), "Matching data files found");

    let tables = files
        .iter()
        .map(|path| format.load(path))
        .collect::<Result<Vec<_>>>()?;

    info!(tables = tables.len(), format = %format, "Inflammation data loaded");
    Ok(tables)
}

/// Loads all `inflammation*.csv` files within a directory.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    dir: PathBuf,
}

impl CsvDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DataSource for CsvDataSource {
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load_inflammation_data(&self) -> Result<Vec<Table>> {
        load_all(&self.dir, SourceFormat::Csv)
    }
}

/// Loads all `inflammation*.json` files within a directory.
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    dir: PathBuf,
}

impl JsonDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DataSource for JsonDataSource {
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load_inflammation_data(&self) -> Result<Vec<Table>> {
        load_all(&self.dir, SourceFormat::Json)
    }
}
