//! Life Calculation Pipeline
//!
//! ## 4-Phase Architecture
//!
//! ```text
//! PHASE 1: Bearing resolution (validation, rotational rating Ca)
//! PHASE 2: Scenario reduction (rayon, one task per scenario)
//! PHASE 3: Duty-cycle combination
//! PHASE 4: Life equation
//! ```
//!
//! Phases 3 and 4 only run once every scenario has reduced successfully;
//! the first failing scenario aborts the run.

mod coordinator;
mod report;

pub use coordinator::{run_pipeline, LifePipeline, PipelineError};
