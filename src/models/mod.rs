//! Shared data models spanning the engine and its host.

pub mod indicators;
pub mod settings;

pub use indicators::{BandPoint, BollingerInputs, Candle, MaType, PriceSource};
pub use settings::{BackgroundStyle, BollingerSettings, BollingerStyle, LineKind, LineStyle};
