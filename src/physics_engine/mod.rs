//! Physics Engine Module
//!
//! Deterministic calculations for oscillating bearing fatigue life.
//! All math here is closed-form ISO 281 / NREL DG03 correlations.
//!
//! ## Stages
//! - `reduce_load_case()` - RMS loads, equivalent load, amplitude and speed of one scenario
//! - `combine_profile()` - duty-cycle weighted P_osc, θ_equiv, N_ave and Ca_osc
//! - `estimate_life()` - eta, a_iso, a1 and L10 in oscillations and hours
//!
//! Every stage is a pure function of its inputs, so scenarios can be reduced
//! in any order or in parallel.

pub mod bearing_models;
pub mod duty_cycle;
pub mod life;
pub mod load_reduction;
pub mod metrics;

pub use bearing_models::{
    ball_axial_rating, ball_oscillatory_rating, roller_axial_rating, roller_oscillatory_rating,
};
pub use duty_cycle::{
    average_speed, combine_profile, equivalent_oscillation_angle, equivalent_oscillatory_load,
    oscillatory_rating,
};
pub use life::{a1_lookup, a_iso, basic_rating_life, estimate_life, eta, l10_hours};
pub use load_reduction::{equivalent_load, reduce_load_case};
pub use metrics::{mean_amplitude, oscillation_speed, rms};
