//! Configuration file and environment loading tests

use std::io::Write;

use freshcheck_providers::config::{api_key_from_env, API_KEY_ENV, BASE_URL_ENV, MODEL_ENV};
use freshcheck_providers::{InferenceConfig, ProviderError};
use serial_test::serial;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_from_file_missing_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = InferenceConfig::from_file(&dir.path().join("absent.yaml")).unwrap();
    assert_eq!(config, InferenceConfig::default());
}

#[test]
fn test_from_file_reads_values() {
    let file = write_config(
        "model: claude-custom\nmax_tokens: 2048\ntimeout_seconds: 45\nbase_url: http://localhost:9000/v1\n",
    );

    let config = InferenceConfig::from_file(file.path()).unwrap();
    assert_eq!(config.model, "claude-custom");
    assert_eq!(config.max_tokens, 2048);
    assert_eq!(config.timeout_seconds, Some(45));
    assert_eq!(config.messages_url(), "http://localhost:9000/v1/messages");
}

#[test]
fn test_from_file_malformed_is_config_error() {
    let file = write_config("max_tokens: [not, a, number]\n");
    let result = InferenceConfig::from_file(file.path());
    assert!(matches!(result, Err(ProviderError::Config(_))));
}

#[test]
#[serial]
fn test_explicit_file_and_env_override() {
    let file = write_config("model: from-file\nmax_tokens: 600\n");

    std::env::set_var(MODEL_ENV, "from-env");
    std::env::remove_var(BASE_URL_ENV);
    let config = InferenceConfig::load_with_hierarchy(Some(file.path()));
    std::env::remove_var(MODEL_ENV);

    let config = config.unwrap();
    assert_eq!(config.model, "from-env");
    assert_eq!(config.max_tokens, 600);
}

#[test]
#[serial]
fn test_explicit_file_missing_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = InferenceConfig::load_with_hierarchy(Some(&dir.path().join("nope.yaml")));
    assert!(matches!(result, Err(ProviderError::Config(_))));
}

#[test]
#[serial]
fn test_api_key_from_env() {
    std::env::set_var(API_KEY_ENV, "  ");
    assert!(api_key_from_env().is_err());

    std::env::set_var(API_KEY_ENV, "sk-ant-xyz");
    assert_eq!(api_key_from_env().unwrap(), "sk-ant-xyz");

    std::env::remove_var(API_KEY_ENV);
    assert!(api_key_from_env().is_err());
}
