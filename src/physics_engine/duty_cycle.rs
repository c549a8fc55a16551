//! Duty-cycle combination of reduced load cases across a tidal profile
//!
//! Each load case is weighted by `speed × duty` (time spent oscillating) and,
//! for the load and angle, additionally by its amplitude (angular travel).

use super::bearing_models::{ball_oscillatory_rating, roller_oscillatory_rating};
use crate::types::{BearingKind, LifeError, OscillatoryDutySummary, TidalProfile};

/// Equivalent oscillatory dynamic load P_osc (N)
///
/// P_osc = (Σ Pᵢ^p · Nᵢ · tᵢ · θᵢ / Σ Nᵢ · tᵢ · θᵢ)^(1/p)
///
/// Where Nᵢ is speed, tᵢ duty fraction and θᵢ amplitude of load case i.
pub fn equivalent_oscillatory_load(profile: &TidalProfile, kind: BearingKind) -> Result<f64, LifeError> {
    let p = kind.life_exponent();
    let (numerator, denominator) = profile.entries().iter().fold((0.0, 0.0), |(num, den), e| {
        let lc = &e.load_case;
        let weight = lc.speed_opm * e.duty_cycle * lc.amplitude_deg;
        (num + lc.equivalent_load.powf(p) * weight, den + weight)
    });

    if denominator == 0.0 || !denominator.is_finite() {
        return Err(LifeError::UndefinedEquivalentLoad { denominator });
    }
    Ok((numerator / denominator).powf(1.0 / p))
}

/// Equivalent oscillation angle θ_equiv (deg)
///
/// θ_equiv = Σ Nᵢ · tᵢ · θᵢ / Σ Nᵢ · tᵢ
pub fn equivalent_oscillation_angle(profile: &TidalProfile) -> Result<f64, LifeError> {
    let (numerator, denominator) = profile.entries().iter().fold((0.0, 0.0), |(num, den), e| {
        let lc = &e.load_case;
        let time_weight = lc.speed_opm * e.duty_cycle;
        (num + time_weight * lc.amplitude_deg, den + time_weight)
    });

    if denominator == 0.0 || !denominator.is_finite() {
        return Err(LifeError::UndefinedEquivalentLoad { denominator });
    }
    Ok(numerator / denominator)
}

/// Duty-weighted average oscillation speed N_ave = Σ Nᵢ · tᵢ
pub fn average_speed(profile: &TidalProfile) -> f64 {
    profile
        .entries()
        .iter()
        .map(|e| e.load_case.speed_opm * e.duty_cycle)
        .sum()
}

/// Oscillatory dynamic axial load rating Ca_osc (N) from the rotational rating
pub fn oscillatory_rating(
    rotational_rating: f64,
    theta_equiv_deg: f64,
    elements: u32,
    kind: BearingKind,
) -> Result<f64, LifeError> {
    if !(theta_equiv_deg.is_finite() && theta_equiv_deg > 0.0) {
        return Err(LifeError::InvalidAngle(theta_equiv_deg));
    }
    Ok(match kind {
        BearingKind::Roller => roller_oscillatory_rating(rotational_rating, theta_equiv_deg, elements),
        BearingKind::Ball => ball_oscillatory_rating(rotational_rating, theta_equiv_deg, elements),
    })
}

/// Combine a tidal profile into the oscillatory duty summary.
///
/// `rotational_rating` is the bearing's Ca (N) and `elements` its rolling
/// elements per row.
pub fn combine_profile(
    profile: &TidalProfile,
    kind: BearingKind,
    rotational_rating: f64,
    elements: u32,
) -> Result<OscillatoryDutySummary, LifeError> {
    let equivalent_load = equivalent_oscillatory_load(profile, kind)?;
    let equivalent_angle_deg = equivalent_oscillation_angle(profile)?;
    let average_speed_opm = average_speed(profile);
    let oscillatory_rating = oscillatory_rating(rotational_rating, equivalent_angle_deg, elements, kind)?;

    tracing::info!(
        scenarios = profile.len(),
        duty_sum = profile.duty_cycle_sum(),
        p_osc = equivalent_load,
        theta_equiv = equivalent_angle_deg,
        n_ave = average_speed_opm,
        ca_osc = oscillatory_rating,
        "Tidal profile combined"
    );

    Ok(OscillatoryDutySummary {
        equivalent_load,
        equivalent_angle_deg,
        average_speed_opm,
        oscillatory_rating,
    })
}
