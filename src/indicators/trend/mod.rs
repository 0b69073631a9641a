//! Trend indicators: moving averages

pub mod ma;

pub use ma::*;
