//! Load case reduction: one scenario time series to scalar statistics

use super::metrics::{mean_amplitude, oscillation_speed, rms};
use crate::config::defaults::SAMPLES_PER_MINUTE;
use crate::types::{LifeError, ReducedLoadCase, ScenarioLoadSeries};

/// Radial load weight in the equivalent load combination
pub const RADIAL_WEIGHT: f64 = 0.75;
/// Axial load weight in the equivalent load combination
pub const AXIAL_WEIGHT: f64 = 1.0;
/// Moment weight, applied to My / (dp in metres)
pub const MOMENT_WEIGHT: f64 = 2.0;

/// Minimum samples for a difference-based statistic
const MIN_SAMPLES: usize = 2;

/// Equivalent static/peak load from RMS components (N)
///
/// P = 0.75 × Fr + Fa + 2 × My / (dp / 1000)
///
/// Where dp is the pitch diameter in mm and My is in N·m.
pub fn equivalent_load(radial_rms: f64, axial_rms: f64, moment_rms: f64, pitch_diameter_mm: f64) -> f64 {
    RADIAL_WEIGHT * radial_rms
        + AXIAL_WEIGHT * axial_rms
        + MOMENT_WEIGHT * moment_rms / (pitch_diameter_mm / 1000.0)
}

/// Reduce one scenario to RMS loads, equivalent load and motion statistics.
///
/// The series is taken as sampled at 1 Hz. Every column needs at least two
/// samples, otherwise amplitude and speed are undefined.
pub fn reduce_load_case(
    series: &ScenarioLoadSeries,
    pitch_diameter_mm: f64,
) -> Result<ReducedLoadCase, LifeError> {
    let columns: [(&str, &[f64]); 4] = [
        ("radial_force", &series.radial_force),
        ("axial_force", &series.axial_force),
        ("moment", &series.moment),
        ("oscillation_angle", &series.oscillation_angle),
    ];
    for (name, column) in columns {
        if column.len() < MIN_SAMPLES {
            return Err(LifeError::InsufficientData {
                series: format!("{}/{}", series.scenario, name),
                needed: MIN_SAMPLES,
                available: column.len(),
            });
        }
    }

    let radial_rms = rms(&series.radial_force);
    let axial_rms = rms(&series.axial_force);
    let moment_rms = rms(&series.moment);
    let amplitude_deg = mean_amplitude(&series.oscillation_angle);
    let speed_opm = oscillation_speed(&series.oscillation_angle, SAMPLES_PER_MINUTE);

    let reduced = ReducedLoadCase {
        scenario: series.scenario.clone(),
        radial_rms,
        axial_rms,
        moment_rms,
        equivalent_load: equivalent_load(radial_rms, axial_rms, moment_rms, pitch_diameter_mm),
        amplitude_deg,
        speed_opm,
    };

    tracing::debug!(
        scenario = %reduced.scenario,
        samples = series.len(),
        fr_rms = reduced.radial_rms,
        fa_rms = reduced.axial_rms,
        my_rms = reduced.moment_rms,
        p_eq = reduced.equivalent_load,
        amplitude_deg = reduced.amplitude_deg,
        speed_opm = reduced.speed_opm,
        "Load case reduced"
    );

    Ok(reduced)
}
