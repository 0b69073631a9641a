//! Unit tests for configuration loading

use std::collections::HashMap;
use std::path::PathBuf;

use bandchart::config::{is_production_env, Config};
use bandchart::indicators::error::IndicatorError;
use bandchart::models::indicators::BollingerInputs;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.environment, "sandbox");
    assert_eq!(config.data_path, PathBuf::from("data/ohlcv.json"));
    assert_eq!(config.inputs, BollingerInputs::default());
    assert!(!config.is_production());
}

#[test]
fn test_config_overrides() {
    let config = Config::from_lookup(lookup(&[
        ("BANDCHART_ENV", "Production"),
        ("BANDCHART_DATA_PATH", "/tmp/candles.json"),
        ("BB_LENGTH", "10"),
        ("BB_STD_DEV", "2.5"),
        ("BB_OFFSET", "-4"),
    ]))
    .unwrap();
    assert!(config.is_production());
    assert_eq!(config.data_path, PathBuf::from("/tmp/candles.json"));
    assert_eq!(config.inputs.length, 10);
    assert_eq!(config.inputs.std_dev_multiplier, 2.5);
    assert_eq!(config.inputs.offset, -4);
}

#[test]
fn test_config_rejects_bad_values() {
    assert!(matches!(
        Config::from_lookup(lookup(&[("BB_LENGTH", "ten")])),
        Err(IndicatorError::InvalidNumericFormat(_))
    ));
    assert_eq!(
        Config::from_lookup(lookup(&[("BB_LENGTH", "0")])),
        Err(IndicatorError::InvalidLength(0))
    );
    assert!(matches!(
        Config::from_lookup(lookup(&[("BB_SOURCE", "volume")])),
        Err(IndicatorError::UnknownVariant { field: "source", .. })
    ));
}

#[test]
fn test_production_environment_names() {
    assert!(is_production_env("production"));
    assert!(is_production_env("prod"));
    assert!(!is_production_env("sandbox"));
    assert!(!is_production_env("staging"));
}
