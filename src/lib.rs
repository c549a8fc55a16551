//! bearing-life: Oscillating Bearing Fatigue Life
//!
//! Estimates the L10 fatigue life of pitch and yaw slewing bearings in tidal
//! turbines from simulated load series, following ISO 281 with the NREL DG03
//! oscillation correction.
//!
//! ## Architecture
//!
//! - **Acquisition**: Per-scenario force, moment and angle series (CSV)
//! - **Physics Engine**: Load reduction, duty-cycle combination, life equation
//! - **Pipeline**: Parallel scenario reduction and report assembly
//! - **Config**: Bearing, lubrication and tidal profile from TOML

pub mod acquisition;
pub mod config;
pub mod physics_engine;
pub mod pipeline;
pub mod types;

// Re-export configuration
pub use config::{ConfigError, LifeConfig};

// Re-export commonly used types
pub use types::{
    BearingKind, BearingParams, BearingSpecification, ContaminationLevel, IsoCorrection,
    LifeError, LifeEstimate, LifeReport, OscillatoryDutySummary, ReducedLoadCase,
    ReliabilityLevel, ScenarioLoadSeries, TidalProfile,
};

// Re-export ingestion and pipeline entry points
pub use acquisition::{CsvSeriesSource, IngestError, SeriesSource};
pub use pipeline::{run_pipeline, LifePipeline, PipelineError};
