//! Tracing subscriber for the chart host.
//!
//! `BANDCHART_ENV=production` (or `prod`) switches stderr output to one JSON
//! object per event; every other environment gets colored text.

use crate::config::{get_environment, is_production_env};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Set the global subscriber once at startup. The level filter comes from
/// `RUST_LOG` and falls back to `info`. Events are written to stderr, leaving
/// stdout for the band report.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let is_production = is_production_env(&get_environment());

    if is_production {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
