//! Pipeline Coordinator - 4-Phase Life Calculation Sequence
//!
//! ```text
//! PHASE 1: Bearing validation and rotational rating Ca
//! PHASE 2: Scenario reduction (parallel, one task per scenario)
//! PHASE 3: Duty-cycle combination (P_osc, θ_equiv, N_ave, Ca_osc)
//! PHASE 4: Life equation (eta, a_iso, a1, L10)
//! ```
//!
//! Categorical inputs are parsed before any series is read so a typo in the
//! config fails fast. Scenario order in the report follows the config, no
//! matter which worker finished first.

use rayon::prelude::*;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::acquisition::{IngestError, SeriesSource};
use crate::config::defaults::DUTY_SUM_TOLERANCE;
use crate::config::{LifeConfig, ScenarioConfig};
use crate::physics_engine::{combine_profile, estimate_life, reduce_load_case};
use crate::types::{LifeError, LifeEstimateInputs, LifeReport, ReducedLoadCase, TidalProfile};

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Life(#[from] LifeError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("Scenario '{name}': {reason}")]
    InvalidScenario { name: String, reason: String },
}

// ============================================================================
// Coordinator
// ============================================================================

/// Runs one life calculation over a config and a series source.
pub struct LifePipeline<'a> {
    config: &'a LifeConfig,
    source: &'a dyn SeriesSource,
    rating_override: Option<f64>,
}

impl<'a> LifePipeline<'a> {
    pub fn new(config: &'a LifeConfig, source: &'a dyn SeriesSource) -> Self {
        Self {
            config,
            source,
            rating_override: None,
        }
    }

    /// Use a catalogue Ca (N) for this run instead of the stored or
    /// computed rating. A non-positive value fails the run in phase 1.
    #[must_use]
    pub fn with_rating_override(mut self, rating: f64) -> Self {
        self.rating_override = Some(rating);
        self
    }

    /// Execute all four phases and assemble the report.
    pub fn run(&self) -> Result<LifeReport, PipelineError> {
        let started = Instant::now();

        // PHASE 1: bearing and categorical inputs
        let spec = self.config.bearing_specification()?;
        let (rotational_rating, rating_source) =
            spec.resolve_rating(self.config.bearing.catalogue_fc, self.rating_override)?;
        let contamination = self.config.contamination_level()?;
        let reliability = self.config.reliability_level()?;
        let iso_correction = self.config.iso_correction()?;
        let dp = spec.pitch_diameter_mm();

        info!(
            kind = %spec.kind(),
            dp_mm = dp,
            ca = rotational_rating,
            source = %rating_source,
            "Bearing resolved"
        );

        // PHASE 2: scenario reduction
        let profile = self.reduce_scenarios(dp)?;

        let duty_sum = profile.duty_cycle_sum();
        if (duty_sum - 1.0).abs() > DUTY_SUM_TOLERANCE {
            warn!(duty_sum, "Duty cycles do not sum to 1; using them as given");
        }

        // PHASE 3: duty-cycle combination
        let combined = combine_profile(&profile, spec.kind(), rotational_rating, spec.element_count())?;

        // PHASE 4: life equation
        let inputs = LifeEstimateInputs {
            oscillatory_rating: combined.oscillatory_rating,
            equivalent_load: combined.equivalent_load,
            kind: spec.kind(),
            pitch_diameter_mm: dp,
            fatigue_limit_load: spec.fatigue_limit_load(),
            contamination,
            lubrication_k: self.config.lubrication.k,
            reliability,
            iso_correction,
        };
        let estimate = estimate_life(&inputs, combined.average_speed_opm)?;

        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "Pipeline finished");

        let (load_cases, duty_cycles): (Vec<_>, Vec<_>) = profile
            .entries()
            .iter()
            .map(|e| (e.load_case.clone(), e.duty_cycle))
            .unzip();

        Ok(LifeReport {
            generated_at: chrono::Utc::now(),
            kind: spec.kind(),
            pitch_diameter_mm: dp,
            rotational_rating,
            rating_source,
            load_cases,
            duty_cycles,
            combined,
            inputs,
            estimate,
        })
    }

    /// Reduce every configured scenario, in parallel, into a tidal profile
    /// ordered as in the config.
    pub fn reduce_scenarios(&self, pitch_diameter_mm: f64) -> Result<TidalProfile, PipelineError> {
        info!(
            scenarios = self.config.scenarios.len(),
            source = self.source.source_name(),
            "Reducing scenarios"
        );

        let cases: Vec<ReducedLoadCase> = self
            .config
            .scenarios
            .par_iter()
            .map(|scenario| self.reduce_scenario(scenario, pitch_diameter_mm))
            .collect::<Result<Vec<_>, PipelineError>>()?;

        Ok(cases
            .into_iter()
            .zip(&self.config.scenarios)
            .map(|(case, scenario)| (case, scenario.duty_cycle))
            .collect())
    }

    fn reduce_scenario(
        &self,
        scenario: &ScenarioConfig,
        pitch_diameter_mm: f64,
    ) -> Result<ReducedLoadCase, PipelineError> {
        match (&scenario.file, &scenario.reduced) {
            (Some(file), None) => {
                let series = self.source.load_series(&scenario.name, file)?;
                Ok(reduce_load_case(&series, pitch_diameter_mm)?)
            }
            (None, Some(stats)) => Ok(stats.to_load_case(&scenario.name, pitch_diameter_mm)),
            (Some(_), Some(_)) => Err(PipelineError::InvalidScenario {
                name: scenario.name.clone(),
                reason: "both 'file' and 'reduced' are set".to_string(),
            }),
            (None, None) => Err(PipelineError::InvalidScenario {
                name: scenario.name.clone(),
                reason: "neither 'file' nor 'reduced' is set".to_string(),
            }),
        }
    }
}

/// Run the full pipeline with the config's own rating data.
pub fn run_pipeline(
    config: &LifeConfig,
    source: &dyn SeriesSource,
) -> Result<LifeReport, PipelineError> {
    LifePipeline::new(config, source).run()
}
