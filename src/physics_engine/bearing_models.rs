//! Dynamic axial load rating models for slewing bearings

/// Rotational dynamic axial load rating of a ball bearing (N)
///
/// Ca = 1.1 × 3.647 × fc × i × cos(α)^0.7 × z^(2/3) × dw^1.4 × tan(α)
///
/// Where:
/// - fc = ISO 281 geometry coefficient (from the standard's tables)
/// - i = number of rows
/// - z = balls per row
/// - dw = ball diameter (mm)
/// - α = contact angle (degrees)
///
/// The 1.1 factor lifts the ISO single-row value for four-point contact.
pub fn ball_axial_rating(
    fc: f64,
    rows: u32,
    elements_per_row: u32,
    element_diameter_mm: f64,
    contact_angle_deg: f64,
) -> f64 {
    let alpha = contact_angle_deg.to_radians();
    1.1 * 3.647
        * fc
        * f64::from(rows)
        * alpha.cos().powf(0.7)
        * f64::from(elements_per_row).powf(2.0 / 3.0)
        * element_diameter_mm.powf(1.4)
        * alpha.tan()
}

/// Rotational dynamic axial load rating of a roller bearing (N)
///
/// Ca = 1.1 × fc × H × cos(α)^(7/9) × z^(3/4) × dw^(29/37) × tan(α)
///
/// H is the individual unit height (mm); row count does not enter.
pub fn roller_axial_rating(
    fc: f64,
    unit_height_mm: f64,
    elements_per_row: u32,
    element_diameter_mm: f64,
    contact_angle_deg: f64,
) -> f64 {
    let alpha = contact_angle_deg.to_radians();
    1.1 * fc
        * unit_height_mm
        * alpha.cos().powf(7.0 / 9.0)
        * f64::from(elements_per_row).powf(3.0 / 4.0)
        * element_diameter_mm.powf(29.0 / 37.0)
        * alpha.tan()
}

/// Oscillatory rating for a ball bearing: Ca × (180/θ)^(3/10) × z^0.033
pub fn ball_oscillatory_rating(rotational_rating: f64, theta_equiv_deg: f64, elements: u32) -> f64 {
    rotational_rating * (180.0 / theta_equiv_deg).powf(3.0 / 10.0) * f64::from(elements).powf(0.033)
}

/// Oscillatory rating for a roller bearing: Ca × (180/θ)^(2/9) × z^0.028
pub fn roller_oscillatory_rating(
    rotational_rating: f64,
    theta_equiv_deg: f64,
    elements: u32,
) -> f64 {
    rotational_rating * (180.0 / theta_equiv_deg).powf(2.0 / 9.0) * f64::from(elements).powf(0.028)
}
