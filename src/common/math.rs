//! Rolling window statistics over price series.
//!
//! Every function returns a series of the same length as its input. Slots
//! without a full trailing window hold `f64::NAN`.

/// Trailing simple moving average.
///
/// `out[i]` is the mean of `values[i + 1 - period..=i]` once `i >= period - 1`,
/// `NaN` before that. A `period` longer than the series yields all `NaN`.
///
/// `period` must be at least 1.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    debug_assert!(period >= 1, "rolling window period must be >= 1");

    let mut result = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return result;
    }

    for (offset, window) in values.windows(period).enumerate() {
        let sum: f64 = window.iter().sum();
        result[offset + period - 1] = sum / period as f64;
    }

    result
}

/// Trailing population standard deviation (squared deviations divided by
/// `period`), measured around the precomputed `means`.
///
/// Slots where `means` is `NaN` stay `NaN`.
pub fn rolling_population_std_dev(values: &[f64], period: usize, means: &[f64]) -> Vec<f64> {
    debug_assert!(period >= 1, "rolling window period must be >= 1");
    debug_assert_eq!(values.len(), means.len());

    let mut result = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return result;
    }

    for (offset, window) in values.windows(period).enumerate() {
        let i = offset + period - 1;
        let mean = means[i];
        if mean.is_nan() {
            continue;
        }

        let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
        result[i] = variance.sqrt();
    }

    result
}
