//! CSV Series Adapter
//!
//! Reads one scenario's load channels from a comma-separated export of an
//! aero-hydro-servo-elastic simulation. Only the four mapped columns are
//! read; any other columns (time, rotor speed, ...) are ignored.
//!
//! Layout expected:
//! - `header_row` leading lines skipped (units banners, titles)
//! - one header line naming the columns
//! - one data row per 1 Hz sample
//!
//! Header matching ignores surrounding whitespace and ASCII case. Blank lines
//! are skipped. Every mapped cell must parse as a finite number: a bad
//! sample rejects the whole file rather than silently shortening a column.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::SeriesSource;
use crate::config::defaults;
use crate::types::ScenarioLoadSeries;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Series not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{}: no header at line {line}", path.display())]
    MissingHeader { path: PathBuf, line: usize },

    #[error("{}: column '{column}' not found (available: {})", path.display(), available.join(", "))]
    MissingColumn {
        path: PathBuf,
        column: String,
        available: Vec<String>,
    },

    #[error("{}:{line}: column '{column}' has non-numeric value '{value}'", path.display())]
    BadValue {
        path: PathBuf,
        line: usize,
        column: String,
        value: String,
    },
}

// ============================================================================
// Column Mapping
// ============================================================================

/// Names of the four channels in the source header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub radial_force: String,
    pub axial_force: String,
    pub moment: String,
    pub oscillation_angle: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            radial_force: defaults::DEFAULT_RADIAL_FORCE_COLUMN.to_string(),
            axial_force: defaults::DEFAULT_AXIAL_FORCE_COLUMN.to_string(),
            moment: defaults::DEFAULT_MOMENT_COLUMN.to_string(),
            oscillation_angle: defaults::DEFAULT_ANGLE_COLUMN.to_string(),
        }
    }
}

impl ColumnMapping {
    /// Column names in series order: radial, axial, moment, angle
    fn names(&self) -> [&str; 4] {
        [
            &self.radial_force,
            &self.axial_force,
            &self.moment,
            &self.oscillation_angle,
        ]
    }
}

/// Resolved header positions of the mapped columns
struct ColumnIndex {
    indices: [usize; 4],
    width: usize,
}

impl ColumnIndex {
    fn from_header(header: &str, mapping: &ColumnMapping, path: &Path) -> Result<Self, IngestError> {
        let columns: Vec<String> = csv_split(header)
            .into_iter()
            .map(|c| c.trim().to_string())
            .collect();

        let mut indices = [0usize; 4];
        for (slot, name) in indices.iter_mut().zip(mapping.names()) {
            let wanted = name.trim();
            *slot = columns
                .iter()
                .position(|c| c.eq_ignore_ascii_case(wanted))
                .ok_or_else(|| IngestError::MissingColumn {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                    available: columns.clone(),
                })?;
        }

        Ok(Self { indices, width: columns.len() })
    }
}

// ============================================================================
// CSV Source
// ============================================================================

/// Reads scenario series from CSV files under a data directory.
#[derive(Debug, Clone)]
pub struct CsvSeriesSource {
    data_dir: PathBuf,
    header_row: usize,
    columns: ColumnMapping,
}

impl CsvSeriesSource {
    pub fn new(data_dir: impl Into<PathBuf>, header_row: usize, columns: ColumnMapping) -> Self {
        Self {
            data_dir: data_dir.into(),
            header_row,
            columns,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Relative locations resolve against the data directory.
    fn resolve(&self, location: &Path) -> PathBuf {
        if location.is_absolute() {
            location.to_path_buf()
        } else {
            self.data_dir.join(location)
        }
    }

    /// Parse one CSV file into a scenario series.
    pub fn read_file(&self, scenario: &str, path: &Path) -> Result<ScenarioLoadSeries, IngestError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IngestError::NotFound(path.to_path_buf()),
            _ => IngestError::Io { path: path.to_path_buf(), source: e },
        })?;
        let io_err = |e: std::io::Error| IngestError::Io { path: path.to_path_buf(), source: e };

        let mut lines = BufReader::new(file).lines();

        for _ in 0..self.header_row {
            if lines.next().transpose().map_err(io_err)?.is_none() {
                return Err(IngestError::MissingHeader {
                    path: path.to_path_buf(),
                    line: self.header_row + 1,
                });
            }
        }

        let header = lines
            .next()
            .transpose()
            .map_err(io_err)?
            .ok_or_else(|| IngestError::MissingHeader {
                path: path.to_path_buf(),
                line: self.header_row + 1,
            })?;
        let index = ColumnIndex::from_header(&header, &self.columns, path)?;

        let mut series = ScenarioLoadSeries::new(scenario);
        let names = self.columns.names();

        for (offset, line_result) in lines.enumerate() {
            // 1-based, counting skipped lines and the header
            let line_num = self.header_row + offset + 2;
            let line = line_result.map_err(io_err)?;
            if line.trim().is_empty() {
                continue;
            }

            let fields = csv_split(&line);
            let mut values = [0.0f64; 4];
            for ((value, &idx), name) in values.iter_mut().zip(&index.indices).zip(names) {
                let raw = fields.get(idx).map(|f| f.trim()).unwrap_or("");
                *value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| IngestError::BadValue {
                        path: path.to_path_buf(),
                        line: line_num,
                        column: name.to_string(),
                        value: raw.to_string(),
                    })?;
            }
            let [radial, axial, moment, angle] = values;
            series.push_sample(radial, axial, moment, angle);
        }

        tracing::info!(
            scenario = scenario,
            file = %path.display(),
            samples = series.len(),
            header_columns = index.width,
            "Scenario series loaded"
        );

        Ok(series)
    }
}

impl SeriesSource for CsvSeriesSource {
    fn load_series(
        &self,
        scenario: &str,
        location: &Path,
    ) -> Result<ScenarioLoadSeries, IngestError> {
        self.read_file(scenario, &self.resolve(location))
    }

    fn source_name(&self) -> &str {
        "CSV"
    }
}

/// List the series files in a data directory, sorted by name.
pub fn discover_series_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, IngestError> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(defaults::SERIES_FILE_EXTENSION))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Split a CSV line, honouring double-quoted fields with `""` escapes.
fn csv_split(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

// ============================================================================
// Tests
// ============================================================================
