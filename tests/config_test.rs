//! Integration tests for configuration files and the formatter facade

use tempfile::TempDir;
use ui_format::{DisplayFormatter, FormatError, FormatterConfig, TimeZoneSetting};

#[test]
fn test_load_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[date]
locale = "en-US"
time_zone = "America/Los_Angeles"
invalid_placeholder = "-"

[display]
max_text_length = 12
"#,
    )
    .unwrap();

    let formatter = DisplayFormatter::from_file(&path).unwrap();

    // 05:00 UTC is the previous evening on the west coast
    assert_eq!(formatter.date("2024-01-15T05:00:00Z"), "Jan 14, 2024");
    assert_eq!(formatter.date("??"), "-");
    assert_eq!(formatter.truncate_default("a rather long caption"), "a rather lon...");
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = FormatterConfig::default();
    config.date.time_zone = TimeZoneSetting::utc();
    config.display.max_text_length = 40;
    config.save_to_file(&path).unwrap();

    let reloaded = FormatterConfig::load_from_file(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[date]\ntime_zone = \"Nowhere/Land\"\n").unwrap();

    let err = FormatterConfig::load_from_file(&path).unwrap_err();
    match err {
        FormatError::InvalidConfig { path: reported, .. } => {
            assert!(reported.ends_with("broken.toml"));
        }
        other => panic!("Unexpected error: {}", other),
    }
}

#[test]
fn test_empty_placeholder_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[date]\ninvalid_placeholder = \"\"\n").unwrap();

    let err = FormatterConfig::load_from_file(&path).unwrap_err();
    assert_eq!(err.category(), "configuration");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = FormatterConfig::load_from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, FormatError::Io(_)));
}
