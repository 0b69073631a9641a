use std::fmt;

/// Failures reported by indicator input parsing and validation.
///
/// The band computation itself never fails; these come from the optional
/// checked entry points and the settings parser.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorError {
    InvalidNumericFormat(String),
    MissingField(String),
    InvalidLength(usize),
    InvalidMultiplier(f64),
    OutOfRange { field: &'static str, value: String },
    UnknownVariant { field: &'static str, value: String },
    NonFinitePrice { index: usize, value: f64 },
    UnorderedTimestamps { index: usize },
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::InvalidNumericFormat(value) => {
                write!(f, "invalid numeric format: {}", value)
            }
            IndicatorError::MissingField(field) => write!(f, "missing field: {}", field),
            IndicatorError::InvalidLength(length) => {
                write!(f, "length must be at least 1, got {}", length)
            }
            IndicatorError::InvalidMultiplier(k) => {
                write!(f, "std dev multiplier must be finite and >= 0, got {}", k)
            }
            IndicatorError::OutOfRange { field, value } => {
                write!(f, "{} out of range: {}", field, value)
            }
            IndicatorError::UnknownVariant { field, value } => {
                write!(f, "unknown {}: {}", field, value)
            }
            IndicatorError::NonFinitePrice { index, value } => {
                write!(f, "non-finite price {} at candle {}", value, index)
            }
            IndicatorError::UnorderedTimestamps { index } => {
                write!(f, "candle {} is older than the candle before it", index)
            }
        }
    }
}

impl std::error::Error for IndicatorError {}
