use std::collections::HashMap;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::*;
use crate::models::indicators::*;

pub fn parse_f64(value: &str) -> Result<f64, IndicatorError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

pub fn parse_usize(value: &str) -> Result<usize, IndicatorError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

pub fn parse_i64(value: &str) -> Result<i64, IndicatorError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

pub fn parse_ma_type(value: &str) -> Result<MaType, IndicatorError> {
    match value.trim().to_ascii_uppercase().as_str() {
        "SMA" => Ok(MaType::Sma),
        _ => Err(IndicatorError::UnknownVariant {
            field: "maType",
            value: value.to_string(),
        }),
    }
}

pub fn parse_price_source(value: &str) -> Result<PriceSource, IndicatorError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "close" => Ok(PriceSource::Close),
        _ => Err(IndicatorError::UnknownVariant {
            field: "source",
            value: value.to_string(),
        }),
    }
}

/// Apply settings-form fields on top of `current`.
///
/// Absent fields keep their current value. The result is checked against the
/// dialog ranges before it is returned.
pub fn apply_input_updates(
    current: BollingerInputs,
    data: &HashMap<String, String>,
) -> Result<BollingerInputs, IndicatorError> {
    let mut inputs = current;

    if let Some(length) = data.get("length") {
        inputs.length = parse_usize(length)?;
    }

    if let Some(ma_type) = data.get("maType") {
        inputs.ma_type = parse_ma_type(ma_type)?;
    }

    if let Some(source) = data.get("source") {
        inputs.source = parse_price_source(source)?;
    }

    if let Some(k) = data.get("stdDevMultiplier") {
        inputs.std_dev_multiplier = parse_f64(k)?;
    }

    if let Some(offset) = data.get("offset") {
        inputs.offset = parse_i64(offset)?;
    }

    validate_input_ranges(&inputs)?;
    Ok(inputs)
}

/// Build inputs from a full set of form fields. Every field is required.
pub fn parse_inputs_from_map(
    data: &HashMap<String, String>,
) -> Result<BollingerInputs, IndicatorError> {
    for field in ["length", "maType", "source", "stdDevMultiplier", "offset"] {
        if !data.contains_key(field) {
            return Err(IndicatorError::MissingField(field.to_string()));
        }
    }

    apply_input_updates(BollingerInputs::default(), data)
}
