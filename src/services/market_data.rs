//! Candle sources feeding the chart.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::models::indicators::Candle;

pub trait CandleProvider {
    /// Load the full candle history, oldest first.
    fn get_candles(&self) -> Result<Vec<Candle>, Box<dyn std::error::Error>>;
}

/// Reads a JSON array of `{timestamp, open, high, low, close, volume}` objects.
pub struct JsonFileCandleProvider {
    path: PathBuf,
}

impl JsonFileCandleProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CandleProvider for JsonFileCandleProvider {
    fn get_candles(&self) -> Result<Vec<Candle>, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(&self.path)?;
        let candles: Vec<Candle> = serde_json::from_str(&raw)?;
        info!(
            path = %self.path.display(),
            count = candles.len(),
            "loaded candles from file"
        );
        Ok(candles)
    }
}

/// Fixed hourly BTC candles used when no data file is available.
pub struct DemoCandleProvider;

impl CandleProvider for DemoCandleProvider {
    fn get_candles(&self) -> Result<Vec<Candle>, Box<dyn std::error::Error>> {
        Ok(demo_candles())
    }
}

pub fn demo_candles() -> Vec<Candle> {
    vec![
        Candle::new(42500.0, 43200.0, 42100.0, 42800.0, 1_500_000.0, 1_703_721_600_000),
        Candle::new(42800.0, 43500.0, 42600.0, 43200.0, 1_800_000.0, 1_703_725_200_000),
        Candle::new(43200.0, 43800.0, 42900.0, 43600.0, 2_100_000.0, 1_703_728_800_000),
        Candle::new(43600.0, 44100.0, 43300.0, 43900.0, 1_900_000.0, 1_703_732_400_000),
        Candle::new(43900.0, 44500.0, 43700.0, 44200.0, 2_200_000.0, 1_703_736_000_000),
    ]
}
