//! Statistical reductions for sampled load and motion signals

use statrs::statistics::Statistics;

/// Root-mean-square of a signal (population form: divide by N, not N-1).
///
/// Returns NaN for an empty signal; callers check length first.
pub fn rms(signal: &[f64]) -> f64 {
    signal.iter().map(|x| x.abs()).quadratic_mean()
}

/// Absolute differences between consecutive samples
pub fn successive_abs_diffs(signal: &[f64]) -> Vec<f64> {
    signal.windows(2).map(|w| (w[1] - w[0]).abs()).collect()
}

/// Mean oscillation amplitude: mean of |Δθ| over the series (deg)
pub fn mean_amplitude(angle: &[f64]) -> f64 {
    successive_abs_diffs(angle).mean()
}

/// Oscillation speed in oscillations per minute.
///
/// Total angular travel divided by the series duration in minutes, with the
/// series taken as sampled at `samples_per_minute` (60 for 1 Hz data).
pub fn oscillation_speed(angle: &[f64], samples_per_minute: f64) -> f64 {
    let travel: f64 = successive_abs_diffs(angle).iter().sum();
    travel / (angle.len() as f64 / samples_per_minute)
}
