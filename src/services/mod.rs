//! Data sources consumed by the chart host.

pub mod market_data;

pub use market_data::*;
