//! ISO 281 life equation with contamination and reliability correction
//!
//! L10 = a_iso × a1 × (Ca_osc / P_osc)^p   (millions of oscillations)
//! L10h = L10 × 10⁶ / (60 × N_ave)

use crate::types::{
    BearingKind, ContaminationLevel, LifeError, LifeEstimate, LifeEstimateInputs, ReliabilityLevel,
};

/// Viscosity ratio the a_iso calibration curve is evaluated at (yaw/pitch grease)
const CALIBRATION_KAPPA: f64 = 0.076;

/// Calibration tuple (p0..p5) of the a_iso curve for each bearing kind
const fn a_iso_params(kind: BearingKind) -> [f64; 6] {
    match kind {
        BearingKind::Ball => [2.5671, 2.2649, 0.053481, 0.83, 0.333, -9.3],
        BearingKind::Roller => [1.5859, 1.3993, 0.054381, 1.0, 0.4, -9.185],
    }
}

/// Contamination factor eta of the lubricant
///
/// eta = 0.173 × c1 × k^0.68 × dp^0.55 × (1 − c2 / dp^(1/3))
///
/// dp in mm; (c1, c2) from the contamination table.
pub fn eta(contamination: ContaminationLevel, k: f64, pitch_diameter_mm: f64) -> f64 {
    let (c1, c2) = contamination.coefficients();
    0.173 * c1 * k.powf(0.68) * pitch_diameter_mm.powf(0.55) * (1.0 - c2 / pitch_diameter_mm.powf(1.0 / 3.0))
}

/// ISO 281 life modification factor a_iso
///
/// a_iso = 0.1 × (1 − (p0 − p1 / 0.076^p2)^p3 × (eta × pu / P)^p4)^p5
///
/// Fails with `UndefinedCorrectionFactor` if the curve leaves the reals
/// (a negative base under a fractional exponent) or overflows.
pub fn a_iso(
    kind: BearingKind,
    eta: f64,
    fatigue_limit_load: f64,
    equivalent_load: f64,
) -> Result<f64, LifeError> {
    let [p0, p1, p2, p3, p4, p5] = a_iso_params(kind);
    let calibration = (p0 - p1 / CALIBRATION_KAPPA.powf(p2)).powf(p3);
    let load_term = (eta * fatigue_limit_load / equivalent_load).powf(p4);
    let value = 0.1 * (1.0 - calibration * load_term).powf(p5);

    if value.is_finite() {
        Ok(value)
    } else {
        Err(LifeError::UndefinedCorrectionFactor { kind, value })
    }
}

/// Basic life ratio (Ca_osc / P_osc)^p, millions of oscillations
pub fn basic_rating_life(oscillatory_rating: f64, equivalent_load: f64, kind: BearingKind) -> f64 {
    (oscillatory_rating / equivalent_load).powf(kind.life_exponent())
}

/// Convert L10 in millions of oscillations to hours at N_ave oscillations/min
pub fn l10_hours(l10_million_oscillations: f64, average_speed_opm: f64) -> Result<f64, LifeError> {
    if !l10_million_oscillations.is_finite() {
        return Err(LifeError::NonFiniteLife(l10_million_oscillations));
    }
    if average_speed_opm == 0.0 || !average_speed_opm.is_finite() {
        return Err(LifeError::UndefinedLifeHours(average_speed_opm));
    }
    Ok(l10_million_oscillations * 1_000_000.0 / (average_speed_opm * 60.0))
}

/// Evaluate the life equation.
///
/// With ISO correction disabled neither eta, a_iso nor a1 is evaluated.
/// A zero or non-finite P_osc fails with `UndefinedLife`.
pub fn estimate_life(inputs: &LifeEstimateInputs, average_speed_opm: f64) -> Result<LifeEstimate, LifeError> {
    let equivalent_load = inputs.equivalent_load;
    if !(equivalent_load.is_finite() && equivalent_load > 0.0) {
        return Err(LifeError::UndefinedLife { equivalent_load });
    }

    let basic = basic_rating_life(inputs.oscillatory_rating, inputs.equivalent_load, inputs.kind);

    let (eta_value, a_iso_value, a1, l10_million_oscillations) = if inputs.iso_correction.is_enabled() {
        let eta_value = eta(inputs.contamination, inputs.lubrication_k, inputs.pitch_diameter_mm);
        let a_iso_value = a_iso(inputs.kind, eta_value, inputs.fatigue_limit_load, inputs.equivalent_load)?;
        let a1 = reliability_factor(inputs.reliability);
        (Some(eta_value), Some(a_iso_value), Some(a1), a_iso_value * a1 * basic)
    } else {
        (None, None, None, basic)
    };

    let hours = l10_hours(l10_million_oscillations, average_speed_opm)?;

    tracing::info!(
        kind = %inputs.kind,
        iso_correction = %inputs.iso_correction,
        eta = ?eta_value,
        a_iso = ?a_iso_value,
        a1 = ?a1,
        l10_mosc = l10_million_oscillations,
        l10_hours = hours,
        "Life estimate computed"
    );

    Ok(LifeEstimate {
        eta: eta_value,
        a_iso: a_iso_value,
        a1,
        l10_million_oscillations,
        l10_hours: hours,
    })
}

/// a1 lookup by reliability percentage
pub fn a1_lookup(reliability_percent: f64) -> Result<f64, LifeError> {
    ReliabilityLevel::from_percent(reliability_percent).map(reliability_factor)
}

fn reliability_factor(level: ReliabilityLevel) -> f64 {
    level.a1()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IsoCorrection;

    const P_OSC: f64 = 279_722.222_222_222_25;

    fn relative_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs()
    }

    fn inputs(kind: BearingKind, ca_osc: f64, iso: IsoCorrection) -> LifeEstimateInputs {
        LifeEstimateInputs {
            oscillatory_rating: ca_osc,
            equivalent_load: P_OSC,
            kind,
            pitch_diameter_mm: 900.0,
            fatigue_limit_load: 500_000.0,
            contamination: ContaminationLevel::NormalCleanliness,
            lubrication_k: 0.076,
            reliability: ReliabilityLevel::R95,
            iso_correction: iso,
        }
    }

    #[test]
    fn test_eta_normal_cleanliness() {
        let value = eta(ContaminationLevel::NormalCleanliness, 0.076, 900.0);
        assert!(relative_eq(value, 0.048_161_189_053_149_88), "eta = {value}");
    }

    #[test]
    fn test_cleaner_lubricant_raises_eta() {
        let clean = eta(ContaminationLevel::HighCleanliness, 0.076, 900.0);
        let dirty = eta(ContaminationLevel::VerySevereContamination, 0.076, 900.0);
        assert!(clean > dirty);
    }

    #[test]
    fn test_a_iso_roller() {
        let eta_value = eta(ContaminationLevel::NormalCleanliness, 0.076, 900.0);
        let value = a_iso(BearingKind::Roller, eta_value, 500_000.0, P_OSC).unwrap();
        assert!(relative_eq(value, 0.092_130_785_354_797_13), "a_iso = {value}");
    }

    #[test]
    fn test_a_iso_ball_leaves_the_reals() {
        // 2.5671 − 2.2649 / 0.076^0.053481 < 0, raised to 0.83
        let eta_value = eta(ContaminationLevel::NormalCleanliness, 0.076, 900.0);
        let err = a_iso(BearingKind::Ball, eta_value, 500_000.0, P_OSC).unwrap_err();
        assert!(matches!(
            err,
            LifeError::UndefinedCorrectionFactor { kind: BearingKind::Ball, .. }
        ));
    }

    #[test]
    fn test_a1_lookup() {
        assert_eq!(a1_lookup(95.0), Ok(0.64));
        assert_eq!(a1_lookup(100.0), Err(LifeError::UnknownReliabilityLevel(100.0)));
    }

    #[test]
    fn test_uncorrected_life_ball() {
        let estimate =
            estimate_life(&inputs(BearingKind::Ball, 5_254_673.509_778_484, IsoCorrection::Disabled), 5.0)
                .unwrap();
        assert!(relative_eq(estimate.l10_million_oscillations, 6_629.126_428_192_69));
        assert!(relative_eq(estimate.l10_hours, 22_097_088.093_975_633));
        assert_eq!(estimate.a_iso, None);
        assert_eq!(estimate.a1, None);
    }

    #[test]
    fn test_corrected_life_roller() {
        let estimate =
            estimate_life(&inputs(BearingKind::Roller, 4_134_359.913_636_551, IsoCorrection::Enabled), 5.0)
                .unwrap();
        assert!(relative_eq(estimate.l10_million_oscillations, 427.103_445_197_115_26));
        assert!(relative_eq(estimate.l10_hours, 1_423_678.150_657_050_8));
        assert_eq!(estimate.a1, Some(0.64));
    }

    #[test]
    fn test_zero_speed_has_no_hours() {
        assert_eq!(l10_hours(100.0, 0.0), Err(LifeError::UndefinedLifeHours(0.0)));
    }

    #[test]
    fn test_zero_equivalent_load_is_undefined() {
        for iso in [IsoCorrection::Disabled, IsoCorrection::Enabled] {
            let mut unloaded = inputs(BearingKind::Roller, 4_134_359.913_636_551, iso);
            unloaded.equivalent_load = 0.0;
            assert_eq!(
                estimate_life(&unloaded, 5.0),
                Err(LifeError::UndefinedLife { equivalent_load: 0.0 })
            );
        }
    }

    #[test]
    fn test_non_finite_equivalent_load_is_undefined() {
        let mut bad = inputs(BearingKind::Ball, 5_254_673.509_778_484, IsoCorrection::Disabled);
        bad.equivalent_load = f64::NAN;
        assert!(matches!(
            estimate_life(&bad, 5.0),
            Err(LifeError::UndefinedLife { equivalent_load }) if equivalent_load.is_nan()
        ));
    }

    #[test]
    fn test_infinite_life_has_no_hours() {
        assert_eq!(
            l10_hours(f64::INFINITY, 5.0),
            Err(LifeError::NonFiniteLife(f64::INFINITY))
        );
    }

    #[test]
    fn test_hours_conversion() {
        // 1 million oscillations at 10/min = 100 000 min
        let hours = l10_hours(1.0, 10.0).unwrap();
        assert!((hours - 100_000.0 / 60.0).abs() < 1e-9);
    }
}
