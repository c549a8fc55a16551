//! Load case types: raw scenario series, reduced statistics, tidal profile

use serde::{Deserialize, Serialize};

/// Time series for one operating scenario, sampled once per second.
///
/// Columns share the row index. Forces in N, moment in N·m, angle in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioLoadSeries {
    pub scenario: String,
    /// Radial force magnitude (Fxy)
    pub radial_force: Vec<f64>,
    /// Axial force (Fz)
    pub axial_force: Vec<f64>,
    /// Bending moment about a transverse axis (My)
    pub moment: Vec<f64>,
    /// Pitch/yaw oscillation angle (deg)
    pub oscillation_angle: Vec<f64>,
}

impl ScenarioLoadSeries {
    pub fn new(scenario: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            radial_force: Vec::new(),
            axial_force: Vec::new(),
            moment: Vec::new(),
            oscillation_angle: Vec::new(),
        }
    }

    /// Append one time step
    pub fn push_sample(&mut self, radial: f64, axial: f64, moment: f64, angle: f64) {
        self.radial_force.push(radial);
        self.axial_force.push(axial);
        self.moment.push(moment);
        self.oscillation_angle.push(angle);
    }

    /// Number of time steps (length of the angle column)
    pub fn len(&self) -> usize {
        self.oscillation_angle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oscillation_angle.is_empty()
    }
}

/// Scalar statistics for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReducedLoadCase {
    pub scenario: String,
    /// RMS radial force (N)
    pub radial_rms: f64,
    /// RMS axial force (N)
    pub axial_rms: f64,
    /// RMS moment (N·m)
    pub moment_rms: f64,
    /// Equivalent static/peak load (N)
    pub equivalent_load: f64,
    /// Mean oscillation amplitude (deg)
    pub amplitude_deg: f64,
    /// Oscillations per minute
    pub speed_opm: f64,
}

/// One scenario in a tidal profile with its share of operating time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub load_case: ReducedLoadCase,
    pub duty_cycle: f64,
}

/// Ordered scenarios with duty-cycle fractions.
///
/// Fractions are used as given. They are not rescaled to sum to one;
/// [`TidalProfile::duty_cycle_sum`] is there for callers that want to check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TidalProfile {
    entries: Vec<ProfileEntry>,
}

impl TidalProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, load_case: ReducedLoadCase, duty_cycle: f64) {
        self.entries.push(ProfileEntry { load_case, duty_cycle });
    }

    /// Builder form of [`Self::push`]
    #[must_use]
    pub fn with_case(mut self, load_case: ReducedLoadCase, duty_cycle: f64) -> Self {
        self.push(load_case, duty_cycle);
        self
    }

    pub fn entries(&self) -> &[ProfileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duty_cycle_sum(&self) -> f64 {
        self.entries.iter().map(|e| e.duty_cycle).sum()
    }
}

impl FromIterator<(ReducedLoadCase, f64)> for TidalProfile {
    fn from_iter<I: IntoIterator<Item = (ReducedLoadCase, f64)>>(iter: I) -> Self {
        let mut profile = Self::new();
        for (load_case, duty_cycle) in iter {
            profile.push(load_case, duty_cycle);
        }
        profile
    }
}

/// Duty-cycle weighted combination of a tidal profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatoryDutySummary {
    /// Equivalent oscillatory dynamic load P_osc (N)
    pub equivalent_load: f64,
    /// Equivalent oscillation angle (deg)
    pub equivalent_angle_deg: f64,
    /// Duty-weighted average speed N_ave (oscillations per minute)
    pub average_speed_opm: f64,
    /// Oscillatory dynamic axial load rating Ca_osc (N)
    pub oscillatory_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(name: &str) -> ReducedLoadCase {
        ReducedLoadCase {
            scenario: name.to_string(),
            radial_rms: 1.0,
            axial_rms: 1.0,
            moment_rms: 1.0,
            equivalent_load: 1.0,
            amplitude_deg: 1.0,
            speed_opm: 1.0,
        }
    }

    #[test]
    fn test_duty_cycles_are_not_normalised() {
        let profile: TidalProfile = vec![(case("flood"), 0.4), (case("ebb"), 0.4)]
            .into_iter()
            .collect();
        assert_eq!(profile.len(), 2);
        assert!((profile.duty_cycle_sum() - 0.8).abs() < 1e-12);
        assert_eq!(profile.entries()[1].duty_cycle, 0.4);
    }

    #[test]
    fn test_series_push_keeps_columns_aligned() {
        let mut series = ScenarioLoadSeries::new("slack");
        series.push_sample(1.0, 2.0, 3.0, 4.0);
        series.push_sample(5.0, 6.0, 7.0, 8.0);
        assert_eq!(series.len(), 2);
        assert_eq!(series.moment, vec![3.0, 7.0]);
    }
}
