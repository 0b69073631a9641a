//! Bollinger Bands overlay engine for candlestick charts.

pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod overlay;
pub mod services;
