//! Load series acquisition module
//!
//! Reads per-scenario force, moment and angle series from simulation
//! exports.

mod csv_series;
mod source;

pub use csv_series::{discover_series_files, ColumnMapping, CsvSeriesSource, IngestError};
pub use source::{InMemorySource, SeriesSource};
