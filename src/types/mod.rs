//! Shared data structures for oscillating bearing life calculations
//!
//! This module defines the value objects flowing through the pipeline:
//! - BearingSpecification (static design and catalogue data)
//! - ScenarioLoadSeries (raw per-scenario time series)
//! - ReducedLoadCase and TidalProfile (per-scenario statistics with duty cycles)
//! - OscillatoryDutySummary (duty-weighted combination and oscillatory rating)
//! - LifeEstimateInputs, LifeEstimate and LifeReport (life equation in and out)

mod bearing;
mod errors;
mod life;
mod load_case;

pub use bearing::*;
pub use errors::*;
pub use life::*;
pub use load_case::*;
