use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar. `timestamp` is milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64, timestamp: i64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Project the configured price field.
    pub fn price(&self, source: PriceSource) -> f64 {
        match source {
            PriceSource::Close => self.close,
        }
    }

    /// `None` when the timestamp is outside chrono's representable range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Moving average used for the basis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MaType {
    #[default]
    #[serde(rename = "SMA")]
    Sma,
}

impl MaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaType::Sma => "SMA",
        }
    }
}

/// Candle field fed into the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    #[default]
    Close,
}

impl PriceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSource::Close => "close",
        }
    }
}

/// Bollinger Bands parameters as edited in the settings dialog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BollingerInputs {
    pub length: usize,
    pub ma_type: MaType,
    pub source: PriceSource,
    pub std_dev_multiplier: f64,
    /// Display shift in samples; positive lags the bands, negative leads them.
    pub offset: i64,
}

impl Default for BollingerInputs {
    fn default() -> Self {
        Self {
            length: 20,
            ma_type: MaType::Sma,
            source: PriceSource::Close,
            std_dev_multiplier: 2.0,
            offset: 0,
        }
    }
}

/// Indicator output aligned with the candle at the same index.
///
/// `NaN` in any band means there was not enough history to compute it. In
/// JSON an undefined band is `null`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandPoint {
    pub timestamp: i64,
    #[serde(with = "nan_as_null")]
    pub basis: f64,
    #[serde(with = "nan_as_null")]
    pub upper: f64,
    #[serde(with = "nan_as_null")]
    pub lower: f64,
}

impl BandPoint {
    pub fn is_defined(&self) -> bool {
        !(self.basis.is_nan() || self.upper.is_nan() || self.lower.is_nan())
    }
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
