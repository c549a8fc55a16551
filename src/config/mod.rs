//! Life Configuration Module
//!
//! Bearing, lubrication, reliability and tidal-profile inputs loaded from a
//! TOML file.
//!
//! ## Loading Order
//!
//! 1. Explicit path (`--config`)
//! 2. `BEARING_LIFE_CONFIG` environment variable
//! 3. `life_config.toml` in the current working directory
//!
//! There are no built-in bearing defaults; finding no file is an error.
//!
//! ## Usage
//!
//! ```ignore
//! let (config, path) = LifeConfig::load(None)?;
//! let spec = config.bearing_specification()?;
//! ```

pub mod defaults;
mod life_config;
pub mod validation;

pub use life_config::*;
