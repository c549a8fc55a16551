//! System-wide default constants.
//!
//! Centralises values shared between the config layer, ingestion and the
//! physics engine.

// ============================================================================
// Config Discovery
// ============================================================================

/// Environment variable holding the path to the life config TOML.
pub const CONFIG_ENV_VAR: &str = "BEARING_LIFE_CONFIG";

/// Config file looked up in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "life_config.toml";

// ============================================================================
// Sampling
// ============================================================================

/// Load series are sampled at 1 Hz: 60 samples per minute.
///
/// Series recorded at other rates must be resampled before ingestion.
pub const SAMPLES_PER_MINUTE: f64 = 60.0;

// ============================================================================
// Lubrication
// ============================================================================

/// Lubrication adequacy constant k for grease-lubricated pitch/yaw bearings
/// (NREL DG03).
pub const DEFAULT_LUBRICATION_K: f64 = 0.076;

// ============================================================================
// Ingestion
// ============================================================================

/// Radial force magnitude column
pub const DEFAULT_RADIAL_FORCE_COLUMN: &str = "Fxy";

/// Axial force column
pub const DEFAULT_AXIAL_FORCE_COLUMN: &str = "Fz";

/// Bending moment column
pub const DEFAULT_MOMENT_COLUMN: &str = "My";

/// Pitch/yaw angle column (degrees)
pub const DEFAULT_ANGLE_COLUMN: &str = "PS deg";

/// File extension picked up when scanning a data directory.
pub const SERIES_FILE_EXTENSION: &str = "csv";

// ============================================================================
// Validation
// ============================================================================

/// Duty-cycle fractions summing further than this from 1.0 get a warning.
pub const DUTY_SUM_TOLERANCE: f64 = 0.01;
