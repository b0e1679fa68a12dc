//! Configuration loading, environment overrides, and validation.

mod support;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rarescout::domain::threshold::ThresholdSource;
use rarescout::error::{ConfigError, DomainError, Error};
use rarescout::infrastructure::config::settings::Config;
use support::{no_env, write_temp_config};

fn env(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    move |key| map.get(key).map(|v| (*v).to_string())
}

fn required_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("COLLECTION_SLUG", "milady-maker"),
        ("CONTRACT_ADDRESS", "0x5af0d9827e0c53e4799bb226655a1de152a425a5"),
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("TELEGRAM_USER_ID", "42"),
    ]
}

#[test]
fn file_sections_are_read() {
    let toml = r#"
[opensea]
page_size = 50
timeout_ms = 2500

[monitor]
poll_interval_ms = 1500
error_backoff_ms = 9000
max_seen_listings = 10000
trait_cache_path = "data/milady_traits.json"

[logging]
level = "debug"
format = "json"
"#;
    let (_dir, path) = write_temp_config(toml);

    let config = Config::load(&path).unwrap();

    assert_eq!(config.opensea.page_size, 50);
    assert_eq!(config.opensea.timeout_ms, 2500);
    assert_eq!(config.monitor.poll_interval_ms, 1500);
    assert_eq!(config.monitor.error_backoff_ms, 9000);
    assert_eq!(config.monitor.max_seen_listings, Some(10_000));
    assert_eq!(
        config.monitor.trait_cache_path,
        PathBuf::from("data/milady_traits.json")
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn empty_content_uses_defaults() {
    let config = Config::parse_toml_with("", no_env).unwrap();

    assert_eq!(config.opensea.page_size, 25);
    assert_eq!(config.monitor.poll_interval_ms, 3000);
    assert_eq!(config.monitor.error_backoff_ms, 5000);
    assert_eq!(config.monitor.max_seen_listings, None);
    assert_eq!(config.monitor.trait_cache_path, Path::new("traits_cache.json"));
    assert_eq!(config.collection.total_supply, 4269);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn discover_requires_explicit_path_to_exist() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");
    let result = Config::discover(Some(&missing));
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn malformed_file_is_parse_error() {
    let (_dir, path) = write_temp_config("[monitor\npoll_interval_ms = ");
    let result = Config::load(&path);
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn zero_page_size_is_rejected() {
    let (_dir, path) = write_temp_config("[opensea]\npage_size = 0\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue { field, .. })) => {
            assert_eq!(field, "page_size");
        }
        other => panic!("Expected InvalidValue error, got {other:?}"),
    }
}

#[test]
fn zero_ledger_cap_is_rejected() {
    let (_dir, path) = write_temp_config("[monitor]\nmax_seen_listings = 0\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue { field, .. })) => {
            assert_eq!(field, "max_seen_listings");
        }
        other => panic!("Expected InvalidValue error, got {other:?}"),
    }
}

#[test]
fn unparseable_api_url_is_rejected() {
    let result = Config::parse_toml_with("[opensea]\napi_url = \"not a url\"\n", no_env);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue { field: "api_url", .. }))
    ));
}

#[test]
fn environment_supplies_required_inputs() {
    let config = Config::parse_toml_with("", env(&required_env())).unwrap();
    let settings = config.monitor_settings().unwrap();

    assert_eq!(settings.collection_slug, "milady-maker");
    assert_eq!(settings.threshold.threshold.value(), 150.0);
    assert_eq!(settings.threshold.source, ThresholdSource::Partial("milady"));
    assert_eq!(settings.total_supply.get(), 4269);
    assert_eq!(config.telegram.chat_id, Some(42));
}

#[test]
fn environment_overrides_file_values() {
    let toml = r#"
[collection]
slug = "azuki"
contract_address = "0xfile"
total_supply = 10000
min_score_threshold = 75.0
"#;
    let mut pairs = required_env();
    pairs.push(("TOTAL_SUPPLY", "5000"));
    pairs.push(("MIN_SCORE_THRESHOLD", "42.5"));

    let config = Config::parse_toml_with(toml, env(&pairs)).unwrap();
    let settings = config.monitor_settings().unwrap();

    assert_eq!(settings.collection_slug, "milady-maker");
    assert_eq!(settings.total_supply.get(), 5000);
    assert_eq!(settings.threshold.threshold.value(), 42.5);
    assert_eq!(settings.threshold.source, ThresholdSource::Override);
}

#[test]
fn unparseable_threshold_override_falls_back_to_file_value() {
    let toml = "[collection]\nmin_score_threshold = 75.0\n";
    let mut pairs = required_env();
    pairs.push(("MIN_SCORE_THRESHOLD", "high"));

    let config = Config::parse_toml_with(toml, env(&pairs)).unwrap();
    let settings = config.monitor_settings().unwrap();

    assert_eq!(settings.threshold.threshold.value(), 75.0);
}

#[test]
fn out_of_range_threshold_override_falls_back_to_collection_table() {
    for raw in ["inf", "NaN", "-5"] {
        let mut pairs = required_env();
        pairs.push(("MIN_SCORE_THRESHOLD", raw));

        let config = Config::parse_toml_with("", env(&pairs)).unwrap();
        let settings = config.monitor_settings().unwrap();

        assert_eq!(config.collection.min_score_threshold, None, "{raw}");
        assert_eq!(settings.threshold.threshold.value(), 150.0, "{raw}");
        assert_eq!(settings.threshold.source, ThresholdSource::Partial("milady"));
    }
}

#[test]
fn chat_id_alias_is_accepted() {
    let pairs = [("TELEGRAM_CHAT_ID", "-1001234")];
    let config = Config::parse_toml_with("", env(&pairs)).unwrap();
    assert_eq!(config.telegram.chat_id, Some(-1_001_234));
}

#[test]
fn non_integer_user_id_is_rejected() {
    let pairs = [("TELEGRAM_USER_ID", "@someone")];
    let result = Config::parse_toml_with("", env(&pairs));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "TELEGRAM_USER_ID",
            ..
        }))
    ));
}

#[test]
fn non_positive_supply_fails_at_run_settings() {
    let mut pairs = required_env();
    pairs.push(("TOTAL_SUPPLY", "0"));

    let config = Config::parse_toml_with("", env(&pairs)).unwrap();
    let result = config.monitor_settings();

    assert!(matches!(
        result,
        Err(Error::Domain(DomainError::NonPositiveSupply { supply: 0 }))
    ));
}

#[test]
fn blank_environment_values_count_as_missing() {
    let pairs = [
        ("COLLECTION_SLUG", "   "),
        ("CONTRACT_ADDRESS", "0xabc"),
        ("TELEGRAM_BOT_TOKEN", ""),
        ("TELEGRAM_USER_ID", "42"),
    ];
    let config = Config::parse_toml_with("", env(&pairs)).unwrap();

    match config.monitor_settings() {
        Err(Error::Config(ConfigError::MissingFields { fields })) => {
            assert_eq!(fields, vec!["COLLECTION_SLUG", "TELEGRAM_BOT_TOKEN"]);
        }
        other => panic!("Expected MissingFields error, got {other:?}"),
    }
}
