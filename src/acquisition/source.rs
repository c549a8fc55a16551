//! Series source abstraction for scenario load ingestion.
//!
//! The pipeline asks a source for one scenario's raw series at a time. CSV
//! files are the production source; the in-memory source serves embedding
//! callers and tests.

use std::collections::HashMap;
use std::path::Path;

use super::IngestError;
use crate::types::ScenarioLoadSeries;

/// Trait abstracting where scenario load series come from.
///
/// Sources are shared across the rayon worker pool, so implementations must
/// be `Send + Sync` and take `&self`.
pub trait SeriesSource: Send + Sync {
    /// Load the raw series of `scenario` stored at `location`.
    fn load_series(&self, scenario: &str, location: &Path)
        -> Result<ScenarioLoadSeries, IngestError>;

    /// Human-readable name for logging (e.g. "CSV", "memory").
    fn source_name(&self) -> &str;
}

// ============================================================================
// In-Memory Source
// ============================================================================

/// Serves pre-built series keyed by scenario name; the location is ignored.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    series: HashMap<String, ScenarioLoadSeries>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a series under its own scenario name.
    pub fn insert(&mut self, series: ScenarioLoadSeries) {
        self.series.insert(series.scenario.clone(), series);
    }

    #[must_use]
    pub fn with_series(mut self, series: ScenarioLoadSeries) -> Self {
        self.insert(series);
        self
    }
}

impl SeriesSource for InMemorySource {
    fn load_series(
        &self,
        scenario: &str,
        location: &Path,
    ) -> Result<ScenarioLoadSeries, IngestError> {
        self.series
            .get(scenario)
            .cloned()
            .ok_or_else(|| IngestError::NotFound(location.to_path_buf()))
    }

    fn source_name(&self) -> &str {
        "memory"
    }
}
