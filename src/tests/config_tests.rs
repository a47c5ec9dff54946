//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, KiloConfig, LogConfig, Validate};
use crate::dictionary::WordEncoding;
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = KiloConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dictionary.encoding, WordEncoding::Latin1);
    assert!(config.dictionary.ordered);
    assert_eq!(config.dictionary.max_word_length, None);
    assert!(config.checker.report_duplicates);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = KiloConfig::default();

    config.dictionary.max_word_length = Some(0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.dictionary.max_word_length = Some(32);
    config.dictionary.word_list = PathBuf::new();
    assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

    config.dictionary.word_list = PathBuf::from("words.txt");
    config.log = LogConfig {
        level: "loud".to_string(),
        ..LogConfig::default()
    };
    assert!(config.validate().is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
    [dictionary]
    word_list = "/usr/share/dict/words"
    encoding = "utf-8"
    ordered = false

    [checker]
    strict = true
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "KILO_TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.word_list, PathBuf::from("/usr/share/dict/words"));
    assert_eq!(config.dictionary.encoding, WordEncoding::Utf8);
    assert!(!config.dictionary.ordered);
    assert!(config.checker.strict);

    // Other values should be defaults
    assert!(!config.dictionary.skip_unencodable);
    assert!(config.checker.report_duplicates);
    assert_eq!(config.dictionary.max_word_length, None);
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config.json",
            r#"{ "dictionary": { "encoding": "ascii", "max_word_length": 12 } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "KILO_TEST_JSON")
        .load()
        .unwrap();
    assert_eq!(config.dictionary.encoding, WordEncoding::Ascii);
    assert_eq!(config.dictionary.max_word_length, Some(12));
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            r#"
    [dictionary]
    word_list = "file-words.txt"
    "#,
        )
        .unwrap();

    fixture.set_env("KILO_TEST_ENV__DICTIONARY__WORD_LIST", "env-words.txt");
    fixture.set_env("KILO_TEST_ENV__DICTIONARY__SKIP_UNENCODABLE", "true");

    let loader = ConfigLoader::new(Some(&config_path), "KILO_TEST_ENV");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.dictionary.word_list, PathBuf::from("env-words.txt"));
    assert!(config.dictionary.skip_unencodable);
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_load_missing_config() {
    let loader = ConfigLoader::new(Some("/nonexistent/kilo.toml"), "KILO_TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "invalid.toml",
            r#"
    [dictionary
    word_list = words.txt"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "KILO_TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that an unsupported extension is rejected.
#[test]
fn test_load_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.create_file("config.ini", "[dictionary]").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "KILO_TEST_INI");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that values from a file still go through validation.
#[test]
fn test_load_validates_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("bad_level.toml", "[log]\nlevel = \"verbose\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "KILO_TEST_LEVEL");
    assert!(matches!(loader.load(), Err(ConfigError::ValidationError(_))));
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let toml = toml::to_string_pretty(&KiloConfig::default()).unwrap();
    assert!(toml.contains("[dictionary]"));
    assert!(toml.contains("encoding = \"latin1\""));

    let parsed: KiloConfig = toml::from_str(&toml).unwrap();
    assert_eq!(parsed, KiloConfig::default());
}
