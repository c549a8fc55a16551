//! Life calculation inputs, lookup tables and results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{
    BearingKind, LifeError, OscillatoryDutySummary, RatingSource, ReducedLoadCase,
};

/// Lubricant particulate contamination (NREL DG03 Table 7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContaminationLevel {
    HighCleanliness,
    NormalCleanliness,
    TypicalContamination,
    SevereContamination,
    VerySevereContamination,
}

impl ContaminationLevel {
    pub const ALL: [ContaminationLevel; 5] = [
        ContaminationLevel::HighCleanliness,
        ContaminationLevel::NormalCleanliness,
        ContaminationLevel::TypicalContamination,
        ContaminationLevel::SevereContamination,
        ContaminationLevel::VerySevereContamination,
    ];

    /// (c1, c2) constants of the contamination factor
    pub const fn coefficients(self) -> (f64, f64) {
        match self {
            ContaminationLevel::HighCleanliness => (0.0864, 0.6796),
            ContaminationLevel::NormalCleanliness => (0.0432, 1.141),
            ContaminationLevel::TypicalContamination => (0.0177, 1.887),
            ContaminationLevel::SevereContamination => (0.0115, 2.662),
            ContaminationLevel::VerySevereContamination => (0.00617, 4.06),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ContaminationLevel::HighCleanliness => "high cleanliness",
            ContaminationLevel::NormalCleanliness => "normal cleanliness",
            ContaminationLevel::TypicalContamination => "typical contamination",
            ContaminationLevel::SevereContamination => "severe contamination",
            ContaminationLevel::VerySevereContamination => "very severe contamination",
        }
    }
}

impl fmt::Display for ContaminationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContaminationLevel {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.label() == wanted)
            .ok_or_else(|| LifeError::UnknownContaminationLevel(s.to_string()))
    }
}

/// Reliability level with its a1 life modification factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReliabilityLevel {
    R90,
    R95,
    R96,
    R97,
    R98,
    R99,
    R99_95,
}

impl ReliabilityLevel {
    const ALL: [ReliabilityLevel; 7] = [
        ReliabilityLevel::R90,
        ReliabilityLevel::R95,
        ReliabilityLevel::R96,
        ReliabilityLevel::R97,
        ReliabilityLevel::R98,
        ReliabilityLevel::R99,
        ReliabilityLevel::R99_95,
    ];

    /// Exact lookup; no interpolation between tabulated levels.
    #[allow(clippy::float_cmp)]
    pub fn from_percent(percent: f64) -> Result<Self, LifeError> {
        Self::ALL
            .into_iter()
            .find(|level| level.percent() == percent)
            .ok_or(LifeError::UnknownReliabilityLevel(percent))
    }

    pub const fn percent(self) -> f64 {
        self.row().0
    }

    /// a1 life modification factor
    pub const fn a1(self) -> f64 {
        self.row().1
    }

    /// (reliability %, a1)
    const fn row(self) -> (f64, f64) {
        match self {
            ReliabilityLevel::R90 => (90.0, 1.0),
            ReliabilityLevel::R95 => (95.0, 0.64),
            ReliabilityLevel::R96 => (96.0, 0.55),
            ReliabilityLevel::R97 => (97.0, 0.47),
            ReliabilityLevel::R98 => (98.0, 0.37),
            ReliabilityLevel::R99 => (99.0, 0.25),
            ReliabilityLevel::R99_95 => (99.95, 0.077),
        }
    }
}

/// Whether the ISO 281 correction (a_iso and a1) enters the life equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsoCorrection {
    Enabled,
    Disabled,
}

impl IsoCorrection {
    pub const fn is_enabled(self) -> bool {
        matches!(self, IsoCorrection::Enabled)
    }
}

impl fmt::Display for IsoCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsoCorrection::Enabled => write!(f, "enabled"),
            IsoCorrection::Disabled => write!(f, "disabled"),
        }
    }
}

impl FromStr for IsoCorrection {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "on" | "enabled" => Ok(IsoCorrection::Enabled),
            "no" | "false" | "off" | "disabled" => Ok(IsoCorrection::Disabled),
            _ => Err(LifeError::InvalidCorrectionFlag(s.to_string())),
        }
    }
}

/// Everything the life equation needs, fixed before evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifeEstimateInputs {
    /// Oscillatory dynamic axial load rating Ca_osc (N)
    pub oscillatory_rating: f64,
    /// Oscillatory equivalent dynamic load P_osc (N)
    pub equivalent_load: f64,
    pub kind: BearingKind,
    pub pitch_diameter_mm: f64,
    /// Fatigue limit load pu (N)
    pub fatigue_limit_load: f64,
    pub contamination: ContaminationLevel,
    /// Lubrication adequacy constant k
    pub lubrication_k: f64,
    pub reliability: ReliabilityLevel,
    pub iso_correction: IsoCorrection,
}

/// L10 life result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeEstimate {
    /// Lubrication adequacy parameter eta (only evaluated with ISO correction)
    pub eta: Option<f64>,
    /// ISO correction factor a_iso (only evaluated with ISO correction)
    pub a_iso: Option<f64>,
    /// Reliability factor a1 (only applied with ISO correction)
    pub a1: Option<f64>,
    pub l10_million_oscillations: f64,
    pub l10_hours: f64,
}

/// Full diagnostic record of one life calculation run
#[derive(Debug, Clone, Serialize)]
pub struct LifeReport {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub kind: BearingKind,
    pub pitch_diameter_mm: f64,
    /// Rotational dynamic axial load rating Ca (N)
    pub rotational_rating: f64,
    pub rating_source: RatingSource,
    pub load_cases: Vec<ReducedLoadCase>,
    pub duty_cycles: Vec<f64>,
    pub combined: OscillatoryDutySummary,
    pub inputs: LifeEstimateInputs,
    pub estimate: LifeEstimate,
}
