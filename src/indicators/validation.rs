//! Optional input checks for callers that want an explicit error instead of
//! the unchecked band computation.

use std::ops::RangeInclusive;

use crate::indicators::error::IndicatorError;
use crate::models::indicators::{BollingerInputs, Candle, PriceSource};
use crate::models::settings::{BollingerStyle, LineStyle};

/// Ranges enforced by the settings dialog.
pub const LENGTH_RANGE: RangeInclusive<usize> = 1..=200;
pub const STD_DEV_MULTIPLIER_RANGE: RangeInclusive<f64> = 0.1..=10.0;
pub const OFFSET_RANGE: RangeInclusive<i64> = -50..=50;
pub const LINE_WIDTH_RANGE: RangeInclusive<u8> = 1..=5;
pub const OPACITY_RANGE: RangeInclusive<u8> = 0..=100;
pub const OPACITY_STEP: u8 = 5;

/// Preconditions of the band computation.
pub fn validate_inputs(inputs: &BollingerInputs) -> Result<(), IndicatorError> {
    if inputs.length == 0 {
        return Err(IndicatorError::InvalidLength(inputs.length));
    }

    let k = inputs.std_dev_multiplier;
    if !k.is_finite() || k < 0.0 {
        return Err(IndicatorError::InvalidMultiplier(k));
    }

    Ok(())
}

/// Stricter check matching what the settings dialog lets a user enter.
pub fn validate_input_ranges(inputs: &BollingerInputs) -> Result<(), IndicatorError> {
    validate_inputs(inputs)?;

    if !LENGTH_RANGE.contains(&inputs.length) {
        return Err(IndicatorError::OutOfRange {
            field: "length",
            value: inputs.length.to_string(),
        });
    }

    if !STD_DEV_MULTIPLIER_RANGE.contains(&inputs.std_dev_multiplier) {
        return Err(IndicatorError::OutOfRange {
            field: "stdDevMultiplier",
            value: inputs.std_dev_multiplier.to_string(),
        });
    }

    if !OFFSET_RANGE.contains(&inputs.offset) {
        return Err(IndicatorError::OutOfRange {
            field: "offset",
            value: inputs.offset.to_string(),
        });
    }

    Ok(())
}

/// Line widths and fill opacity as the style tab allows them.
pub fn validate_style(style: &BollingerStyle) -> Result<(), IndicatorError> {
    validate_line(&style.basis, "basis.lineWidth")?;
    validate_line(&style.upper, "upper.lineWidth")?;
    validate_line(&style.lower, "lower.lineWidth")?;

    let opacity = style.background.opacity;
    if !OPACITY_RANGE.contains(&opacity) || opacity % OPACITY_STEP != 0 {
        return Err(IndicatorError::OutOfRange {
            field: "background.opacity",
            value: opacity.to_string(),
        });
    }

    Ok(())
}

fn validate_line(line: &LineStyle, field: &'static str) -> Result<(), IndicatorError> {
    if !LINE_WIDTH_RANGE.contains(&line.line_width) {
        return Err(IndicatorError::OutOfRange {
            field,
            value: line.line_width.to_string(),
        });
    }
    Ok(())
}

/// Selected prices must be finite and timestamps non-decreasing.
pub fn validate_candles(candles: &[Candle], source: PriceSource) -> Result<(), IndicatorError> {
    for (index, candle) in candles.iter().enumerate() {
        let value = candle.price(source);
        if !value.is_finite() {
            return Err(IndicatorError::NonFinitePrice { index, value });
        }

        if index > 0 && candle.timestamp < candles[index - 1].timestamp {
            return Err(IndicatorError::UnorderedTimestamps { index });
        }
    }

    Ok(())
}
