use hacker_stories::config::{Config, ConfigError};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "https://hn.algolia.com/api/v1");
    assert_eq!(config.api.search_path, "/search");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.search.default_term, "React");
    assert_eq!(config.search.storage_key, "search");
    assert!(config.search.state_file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_dir, path) = write_config(
        r#"[api]
base_url = "http://localhost:9200/api/v1"

[search]
default_term = "Rust"
state_file = "/tmp/hnstories-state.toml"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:9200/api/v1");
    assert_eq!(config.api.search_path, "/search");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.search.default_term, "Rust");
    assert_eq!(
        config.state_path(),
        PathBuf::from("/tmp/hnstories-state.toml")
    );
    assert_eq!(
        config.query_builder().unwrap().endpoint().as_str(),
        "http://localhost:9200/api/v1/search"
    );
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn invalid_endpoint_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"not a url\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("Invalid search endpoint"));
}

#[test]
fn zero_timeout_fails_validation() {
    let (_dir, path) = write_config("[api]\ntimeout_seconds = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn blank_storage_key_fails_validation() {
    let mut config = Config::default();
    config.search.storage_key = "  ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn default_state_path_is_under_hnstories() {
    let path = Config::default().state_path();
    assert!(path.ends_with("hnstories/state.toml"));
}
