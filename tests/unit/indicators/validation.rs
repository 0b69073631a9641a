//! Unit tests for input validation

use bandchart::indicators::error::IndicatorError;
use bandchart::indicators::validation::{
    validate_candles, validate_input_ranges, validate_inputs, validate_style,
};
use bandchart::models::indicators::{BollingerInputs, Candle, PriceSource};
use bandchart::models::settings::BollingerStyle;

fn candle(close: f64, timestamp: i64) -> Candle {
    Candle::new(close, close, close, close, 100.0, timestamp)
}

#[test]
fn test_default_inputs_are_valid() {
    assert!(validate_inputs(&BollingerInputs::default()).is_ok());
    assert!(validate_input_ranges(&BollingerInputs::default()).is_ok());
}

#[test]
fn test_zero_length_rejected() {
    let inputs = BollingerInputs {
        length: 0,
        ..BollingerInputs::default()
    };
    assert_eq!(validate_inputs(&inputs), Err(IndicatorError::InvalidLength(0)));
}

#[test]
fn test_negative_or_nan_multiplier_rejected() {
    let negative = BollingerInputs {
        std_dev_multiplier: -1.0,
        ..BollingerInputs::default()
    };
    assert!(validate_inputs(&negative).is_err());

    let nan = BollingerInputs {
        std_dev_multiplier: f64::NAN,
        ..BollingerInputs::default()
    };
    assert!(matches!(
        validate_inputs(&nan),
        Err(IndicatorError::InvalidMultiplier(_))
    ));
}

#[test]
fn test_zero_multiplier_allowed_by_engine_but_not_dialog() {
    let inputs = BollingerInputs {
        std_dev_multiplier: 0.0,
        ..BollingerInputs::default()
    };
    assert!(validate_inputs(&inputs).is_ok());
    assert!(matches!(
        validate_input_ranges(&inputs),
        Err(IndicatorError::OutOfRange { field: "stdDevMultiplier", .. })
    ));
}

#[test]
fn test_offset_range() {
    let inputs = BollingerInputs {
        offset: -51,
        ..BollingerInputs::default()
    };
    assert!(matches!(
        validate_input_ranges(&inputs),
        Err(IndicatorError::OutOfRange { field: "offset", .. })
    ));
}

#[test]
fn test_candles_valid() {
    let candles = vec![candle(1.0, 1000), candle(2.0, 1000), candle(3.0, 2000)];
    assert!(validate_candles(&candles, PriceSource::Close).is_ok());
    assert!(validate_candles(&[], PriceSource::Close).is_ok());
}

#[test]
fn test_candles_unordered() {
    let candles = vec![candle(1.0, 2000), candle(2.0, 1000)];
    assert_eq!(
        validate_candles(&candles, PriceSource::Close),
        Err(IndicatorError::UnorderedTimestamps { index: 1 })
    );
}

#[test]
fn test_candles_non_finite_close() {
    let candles = vec![candle(1.0, 1000), candle(f64::INFINITY, 2000)];
    assert!(matches!(
        validate_candles(&candles, PriceSource::Close),
        Err(IndicatorError::NonFinitePrice { index: 1, .. })
    ));
}

#[test]
fn test_default_style_is_valid() {
    assert!(validate_style(&BollingerStyle::default()).is_ok());
}

#[test]
fn test_line_width_range() {
    let mut style = BollingerStyle::default();
    style.lower.line_width = 6;
    assert!(matches!(
        validate_style(&style),
        Err(IndicatorError::OutOfRange { field: "lower.lineWidth", .. })
    ));

    style.lower.line_width = 0;
    assert!(validate_style(&style).is_err());

    style.lower.line_width = 5;
    assert!(validate_style(&style).is_ok());
}

#[test]
fn test_opacity_range_and_step() {
    let mut style = BollingerStyle::default();
    style.background.opacity = 250;
    assert!(matches!(
        validate_style(&style),
        Err(IndicatorError::OutOfRange { field: "background.opacity", .. })
    ));

    style.background.opacity = 33;
    assert!(validate_style(&style).is_err());

    style.background.opacity = 100;
    assert!(validate_style(&style).is_ok());
    style.background.opacity = 0;
    assert!(validate_style(&style).is_ok());
}
