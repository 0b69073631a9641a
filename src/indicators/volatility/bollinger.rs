//! Bollinger Bands indicator

use tracing::debug;

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::offset::apply_offset;
use crate::indicators::trend::moving_average;
use crate::indicators::validation::{validate_candles, validate_inputs};
use crate::models::indicators::{BandPoint, BollingerInputs, Candle};

/// Basis, upper and lower band values, index-aligned with the price series.
#[derive(Debug, Clone, Default)]
pub struct BandSeries {
    pub basis: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Combine a mean and standard deviation series into bands.
///
/// Middle Band = mean
/// Upper Band = mean + (multiplier * standard deviation)
/// Lower Band = mean - (multiplier * standard deviation)
///
/// A slot where either input is `NaN` is `NaN` in all three bands.
pub fn compose_bands(means: &[f64], std_devs: &[f64], multiplier: f64) -> BandSeries {
    let len = means.len().min(std_devs.len());
    let mut bands = BandSeries {
        basis: Vec::with_capacity(len),
        upper: Vec::with_capacity(len),
        lower: Vec::with_capacity(len),
    };

    for (&mean, &sd) in means.iter().zip(std_devs) {
        if mean.is_nan() || sd.is_nan() {
            bands.basis.push(f64::NAN);
            bands.upper.push(f64::NAN);
            bands.lower.push(f64::NAN);
        } else {
            bands.basis.push(mean);
            bands.upper.push(mean + multiplier * sd);
            bands.lower.push(mean - multiplier * sd);
        }
    }

    bands
}

/// Calculate Bollinger Bands for every candle.
///
/// Returns one [`BandPoint`] per candle carrying that candle's timestamp. The
/// first `length - 1` points (before any offset) are `NaN`. Inputs are not
/// validated: `length` must be at least 1 and prices should be finite. Use
/// [`try_compute_bollinger_bands`] to have that checked.
pub fn compute_bollinger_bands(candles: &[Candle], inputs: BollingerInputs) -> Vec<BandPoint> {
    if candles.is_empty() {
        return Vec::new();
    }

    let prices: Vec<f64> = candles.iter().map(|c| c.price(inputs.source)).collect();
    let means = moving_average(&prices, inputs.length, inputs.ma_type);
    let std_devs = math::rolling_population_std_dev(&prices, inputs.length, &means);
    let mut bands = compose_bands(&means, &std_devs, inputs.std_dev_multiplier);

    if inputs.offset != 0 {
        bands = BandSeries {
            basis: apply_offset(&bands.basis, inputs.offset),
            upper: apply_offset(&bands.upper, inputs.offset),
            lower: apply_offset(&bands.lower, inputs.offset),
        };
    }

    debug!(
        candles = candles.len(),
        length = inputs.length,
        ma_type = inputs.ma_type.as_str(),
        std_dev_multiplier = inputs.std_dev_multiplier,
        offset = inputs.offset,
        "computed bollinger bands"
    );

    candles
        .iter()
        .enumerate()
        .map(|(i, candle)| BandPoint {
            timestamp: candle.timestamp,
            basis: bands.basis[i],
            upper: bands.upper[i],
            lower: bands.lower[i],
        })
        .collect()
}

/// Validate inputs and candles, then calculate Bollinger Bands.
pub fn try_compute_bollinger_bands(
    candles: &[Candle],
    inputs: BollingerInputs,
) -> Result<Vec<BandPoint>, IndicatorError> {
    validate_inputs(&inputs)?;
    validate_candles(candles, inputs.source)?;
    Ok(compute_bollinger_bands(candles, inputs))
}

/// Calculate Bollinger Bands with default parameters (20 SMA on close, 2σ, no offset)
pub fn compute_bollinger_bands_default(candles: &[Candle]) -> Vec<BandPoint> {
    compute_bollinger_bands(candles, BollingerInputs::default())
}
