use std::collections::HashMap;

use woundchart_api::config::{ApiConfig, ConfigError, LogFormat};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.bind.to_string(), "0.0.0.0:3000");
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.cors_origin.is_none());
}

#[test]
fn reads_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("WOUNDCHART_BIND", "127.0.0.1:8080"),
        ("WOUNDCHART_LOG_FORMAT", "pretty"),
        ("WOUNDCHART_CORS_ORIGIN", "https://chart.example.com"),
    ]))
    .unwrap();
    assert_eq!(config.bind.port(), 8080);
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(
        config.cors_origin.unwrap().to_str().unwrap(),
        "https://chart.example.com"
    );
}

#[test]
fn wildcard_origin_allows_any() {
    let config = ApiConfig::from_lookup(lookup(&[("WOUNDCHART_CORS_ORIGIN", "*")])).unwrap();
    assert!(config.cors_origin.is_none());
}

#[test]
fn rejects_bad_values() {
    assert!(matches!(
        ApiConfig::from_lookup(lookup(&[("WOUNDCHART_BIND", "not-an-addr")])),
        Err(ConfigError::InvalidBind(_))
    ));
    assert!(matches!(
        ApiConfig::from_lookup(lookup(&[("WOUNDCHART_LOG_FORMAT", "xml")])),
        Err(ConfigError::InvalidLogFormat(_))
    ));
}
