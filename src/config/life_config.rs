//! Life Configuration - bearing, lubrication, reliability and tidal profile as TOML
//!
//! Every input the calculation needs is a field in this module. There is no
//! built-in bearing: a run without a config file is a startup error.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;
use crate::acquisition::ColumnMapping;
use crate::physics_engine::equivalent_load;
use crate::types::{
    BearingParams, BearingSpecification, ContaminationLevel, IsoCorrection, LifeError,
    ReducedLoadCase, ReliabilityLevel,
};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one life calculation.
///
/// Load with `LifeConfig::load()` which searches:
/// 1. An explicit path (CLI `--config`)
/// 2. `$BEARING_LIFE_CONFIG`
/// 3. `./life_config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Bearing geometry and catalogue data
    pub bearing: BearingConfig,

    /// Grease contamination and lubrication adequacy
    pub lubrication: LubricationConfig,

    /// Reliability level and ISO correction switch
    pub life: LifeSettings,

    /// Where and how scenario series are read
    #[serde(default)]
    pub ingestion: IngestionConfig,

    /// Scenarios of the tidal profile with their duty cycles
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}

/// `[bearing]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingConfig {
    #[serde(flatten)]
    pub params: BearingParams,

    /// ISO 281 fc coefficient, needed only without a manufacturer rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalogue_fc: Option<f64>,
}

/// `[lubrication]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LubricationConfig {
    /// One of: high cleanliness, normal cleanliness, typical contamination,
    /// severe contamination, very severe contamination
    pub contamination_level: String,

    /// Lubrication adequacy constant k
    #[serde(default = "default_lubrication_k")]
    pub k: f64,
}

fn default_lubrication_k() -> f64 {
    defaults::DEFAULT_LUBRICATION_K
}

/// `[life]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeSettings {
    /// Reliability percentage (90, 95, 96, 97, 98, 99 or 99.95)
    pub reliability_percent: f64,

    /// "yes"/"no" (or a TOML boolean)
    #[serde(deserialize_with = "flag_as_string")]
    pub iso_correction: String,
}

/// `[ingestion]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Directory scenario files are resolved against
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Zero-based line index of the header row (lines above are skipped)
    #[serde(default)]
    pub header_row: usize,

    /// Column names of the four required channels
    #[serde(default)]
    pub columns: ColumnMapping,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            header_row: 0,
            columns: ColumnMapping::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

/// One `[[scenarios]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,

    /// Fraction of operating time spent in this scenario
    pub duty_cycle: f64,

    /// Series file, relative to `ingestion.data_dir`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Statistics already reduced elsewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced: Option<ReducedStatsConfig>,
}

/// Inline per-scenario statistics (N, N·m, deg, oscillations/min)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReducedStatsConfig {
    pub radial_rms: f64,
    pub axial_rms: f64,
    pub moment_rms: f64,
    pub amplitude_deg: f64,
    pub speed_opm: f64,
}

impl ReducedStatsConfig {
    /// Build the reduced load case, deriving the equivalent load from the
    /// RMS components at pitch diameter `dp` (mm).
    pub fn to_load_case(&self, scenario: &str, pitch_diameter_mm: f64) -> ReducedLoadCase {
        ReducedLoadCase {
            scenario: scenario.to_string(),
            radial_rms: self.radial_rms,
            axial_rms: self.axial_rms,
            moment_rms: self.moment_rms,
            equivalent_load: equivalent_load(
                self.radial_rms,
                self.axial_rms,
                self.moment_rms,
                pitch_diameter_mm,
            ),
            amplitude_deg: self.amplitude_deg,
            speed_opm: self.speed_opm,
        }
    }
}

/// Accepts either a TOML boolean or a string for yes/no flags
fn flag_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(true) => "yes".to_string(),
        Flag::Bool(false) => "no".to_string(),
        Flag::Text(s) => s,
    })
}

// ============================================================================
// Loading
// ============================================================================

impl LifeConfig {
    /// Load configuration using the standard search order, returning the
    /// path it came from.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let mut searched = Vec::new();

        // 1. Explicit path
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            info!(path = %path.display(), scenarios = config.scenarios.len(), "Loaded life config");
            return Ok((config, path.to_path_buf()));
        }

        // 2. Env var
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                let config = Self::load_from_file(&p)?;
                info!(path = %p.display(), "Loaded life config from {}", defaults::CONFIG_ENV_VAR);
                return Ok((config, p));
            }
            warn!(path = %path, "{} points to non-existent file, falling back", defaults::CONFIG_ENV_VAR);
            searched.push(p);
        }

        // 3. ./life_config.toml
        let local = PathBuf::from(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            let config = Self::load_from_file(&local)?;
            info!("Loaded life config from ./{}", defaults::LOCAL_CONFIG_FILE);
            return Ok((config, local));
        }
        searched.push(local);

        Err(ConfigError::NotFound(searched))
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&contents, path)
    }

    /// Parse and validate a TOML string (for embedding and tests).
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    fn parse(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        // Two-pass: check for unknown keys first (warnings only)
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(origin.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate physical ranges and categorical values.
    ///
    /// Errors are collected so one pass reports every problem; warnings are
    /// logged and never fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (mut errors, warnings) = super::validation::validate_physical_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }

        if let Err(e) = self.bearing_specification() {
            errors.push(e.to_string());
        }
        if let Err(e) = self.contamination_level() {
            errors.push(e.to_string());
        }
        if let Err(e) = self.reliability_level() {
            errors.push(e.to_string());
        }
        if let Err(e) = self.iso_correction() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    // ------------------------------------------------------------------------
    // Typed views
    // ------------------------------------------------------------------------

    pub fn bearing_specification(&self) -> Result<BearingSpecification, LifeError> {
        BearingSpecification::new(&self.bearing.params)
    }

    pub fn contamination_level(&self) -> Result<ContaminationLevel, LifeError> {
        self.lubrication.contamination_level.parse()
    }

    pub fn reliability_level(&self) -> Result<ReliabilityLevel, LifeError> {
        ReliabilityLevel::from_percent(self.life.reliability_percent)
    }

    pub fn iso_correction(&self) -> Result<IsoCorrection, LifeError> {
        self.life.iso_correction.parse()
    }

    /// Sum of all scenario duty cycles
    pub fn duty_cycle_sum(&self) -> f64 {
        self.scenarios.iter().map(|s| s.duty_cycle).sum()
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {1}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {1}", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),

    #[error("No life config found (searched: {})", display_paths(.0))]
    NotFound(Vec<PathBuf>),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
