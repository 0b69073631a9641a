//! Runtime configuration loaded from the environment.
//!
//! Values come from process environment variables, after an optional `.env`
//! file has been merged in by [`Config::from_env`].

use std::path::PathBuf;

use crate::indicators::error::IndicatorError;
use crate::indicators::parser::{parse_f64, parse_i64, parse_ma_type, parse_price_source, parse_usize};
use crate::indicators::validation::validate_inputs;
use crate::models::indicators::BollingerInputs;

pub const ENV_VAR: &str = "BANDCHART_ENV";
pub const DATA_PATH_VAR: &str = "BANDCHART_DATA_PATH";
pub const DEFAULT_ENVIRONMENT: &str = "sandbox";
pub const DEFAULT_DATA_PATH: &str = "data/ohlcv.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: String,
    pub data_path: PathBuf,
    pub inputs: BollingerInputs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            inputs: BollingerInputs::default(),
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the configuration from the process
    /// environment.
    pub fn from_env() -> Result<Self, IndicatorError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndicatorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(env) = lookup(ENV_VAR) {
            config.environment = env.trim().to_ascii_lowercase();
        }
        if let Some(path) = lookup(DATA_PATH_VAR) {
            config.data_path = PathBuf::from(path);
        }

        let inputs = &mut config.inputs;
        if let Some(length) = lookup("BB_LENGTH") {
            inputs.length = parse_usize(&length)?;
        }
        if let Some(ma_type) = lookup("BB_MA_TYPE") {
            inputs.ma_type = parse_ma_type(&ma_type)?;
        }
        if let Some(source) = lookup("BB_SOURCE") {
            inputs.source = parse_price_source(&source)?;
        }
        if let Some(k) = lookup("BB_STD_DEV") {
            inputs.std_dev_multiplier = parse_f64(&k)?;
        }
        if let Some(offset) = lookup("BB_OFFSET") {
            inputs.offset = parse_i64(&offset)?;
        }

        validate_inputs(&config.inputs)?;
        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        is_production_env(&self.environment)
    }
}

/// `production` and `prod` select the production log format.
pub fn is_production_env(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

/// Current environment name, lower-cased. Defaults to `sandbox`.
pub fn get_environment() -> String {
    dotenvy::dotenv().ok();
    std::env::var(ENV_VAR)
        .map(|env| env.trim().to_ascii_lowercase())
        .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}
