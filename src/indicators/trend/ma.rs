//! Moving average selection for indicator basis lines

use crate::common::math;
use crate::models::indicators::MaType;

/// Moving average of `values` over a trailing `length` window.
///
/// Warm-up slots (`i < length - 1`) are `NaN`.
pub fn moving_average(values: &[f64], length: usize, ma_type: MaType) -> Vec<f64> {
    match ma_type {
        MaType::Sma => math::rolling_mean(values, length),
    }
}
