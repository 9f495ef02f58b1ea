//! Tests for configuration loading

use std::fs;

use tagcheck::config::{Config, RuleConfig};
use tagcheck::paths::PROJECT_CONFIG;
use tagcheck::rule::EncodingKeys;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.encoding_keys(), &EncodingKeys::default());
}

#[test]
fn test_discover_project_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(PROJECT_CONFIG),
        "[rule]\nencoding_keys = [\"json\", \"yaml\"]\n",
    )
    .unwrap();

    let config = Config::discover(temp.path());
    assert_eq!(config.encoding_keys().iter().collect::<Vec<_>>(), vec!["json", "yaml"]);
}

#[test]
fn test_load_from_reports_parse_errors() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, "[rule\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("bad.toml"));
}

#[test]
fn test_load_from_missing_file() {
    let temp = TempDir::new().unwrap();
    assert!(Config::load_from(&temp.path().join("missing.toml")).is_err());
}

#[test]
fn test_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");
    let config = Config {
        rule: RuleConfig {
            encoding_keys: EncodingKeys::new(["xml", "json"]),
        },
    };

    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}
