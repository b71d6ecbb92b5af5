//! Configuration tests
//!
//! The round-trip test is a compile-time guard: adding a Config field
//! without adding it to the template (or FileConfig) makes it fail.

use super::*;

#[test]
fn default_config_roundtrips_through_toml() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file = parsed.unwrap();
    assert_eq!(file.api_url.as_deref(), Some(DEFAULT_API_URL));
    assert_eq!(file.request_timeout_secs, Some(30));
    // page_size 0 in the template means "responsive"
    assert_eq!(file.page_size, Some(0));
}

#[test]
fn partial_file_config_parses() {
    let toml_str = r#"
        theme = "Nord"

        [logging]
        level = "debug"
        file_enabled = true
    "#;

    let file: FileConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(file.theme.as_deref(), Some("Nord"));
    assert!(file.api_url.is_none());

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);
    // Unset fields fall back to defaults
    assert_eq!(logging.file_prefix, "terra");
}

#[test]
fn empty_file_config_yields_defaults() {
    let file: FileConfig = toml::from_str("").unwrap();
    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "info");
    assert!(!logging.file_enabled);
    assert_eq!(logging.file_rotation, LogRotation::Daily);
}

#[test]
fn log_rotation_parsing() {
    assert_eq!(LogRotation::from_str("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_str("NEVER"), LogRotation::Never);
    assert_eq!(LogRotation::from_str("daily"), LogRotation::Daily);
    // Unknown values fall back to daily
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
}
