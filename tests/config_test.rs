//! Integration tests for configuration loading

use room_series::infra::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let config_content = r#"
[logs]
folder = "/var/log/sensors"

[buckets]
default_minutes = 15
zero_fill = true
"#;

    temp_file.write_all(config_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.log_folder(), "/var/log/sensors");
    assert_eq!(config.default_bucket_minutes(), 15);
    assert!(config.zero_fill());
}

#[test]
fn test_partial_config_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[logs]\nfolder = \"data\"\n").unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(config.log_folder(), "data");
    assert_eq!(config.default_bucket_minutes(), 5);
    assert!(!config.zero_fill());
}

#[test]
fn test_load_from_path_fallback() {
    let config = Config::load_from_path("/nonexistent/config.toml");
    assert_eq!(config.log_folder(), "logs");
    assert_eq!(config.default_bucket_minutes(), 5);
    assert!(!config.zero_fill());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[buckets\ndefault_minutes = 5").unwrap();
    temp_file.flush().unwrap();

    assert!(Config::from_file(temp_file.path()).is_err());
}
