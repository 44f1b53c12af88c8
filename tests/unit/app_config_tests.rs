/*!
 * Tests for app configuration
 */

use crate::common::{create_temp_dir, create_test_file};
use edutrans::{Config, ServiceKind};

/// Test default configuration values
#[test]
fn test_default_config_shouldHaveSaneValues() {
    let config = Config::default();
    assert_eq!(config.chatgpt.timeout_secs, 500);
    assert_eq!(config.gemini.timeout_secs, 500);
    assert!((config.chatgpt.temperature - 0.3).abs() < f32::EPSILON);
    assert!(!config.chatgpt.model.is_empty());
    assert!(!config.gemini.model.is_empty());
    assert!(config.validate().is_ok());
}

/// Test loading a partial config file applies defaults to missing fields
#[test]
fn test_from_file_withPartialJson_shouldApplyDefaults() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        r#"{ "gemini": { "api_key": "test-key" } }"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.gemini.api_key, "test-key");
    assert!(!config.gemini.model.is_empty());
    assert_eq!(config.gemini.timeout_secs, 500);
    assert!(config.chatgpt.api_key.is_empty());
}

/// Test loading an invalid config file fails
#[test]
fn test_from_file_withInvalidJson_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        "not json at all",
    )
    .unwrap();

    assert!(Config::from_file(&path).is_err());
}

/// Test loading a missing config file fails
#[test]
fn test_from_file_withMissingFile_shouldFail() {
    assert!(Config::from_file("/nonexistent/conf.json").is_err());
}

/// Test per-service validation requires an API key
#[test]
fn test_validate_for_withMissingApiKey_shouldFail() {
    let config = Config::default();
    assert!(config.validate_for(ServiceKind::Gemini).is_err());

    let mut config = Config::default();
    config.gemini.api_key = "test-key".to_string();
    assert!(config.validate_for(ServiceKind::Gemini).is_ok());
    assert!(config.validate_for(ServiceKind::ChatGpt).is_err());
}

/// Test the generateContent URL includes the configured model
#[test]
fn test_gemini_generate_url_shouldIncludeModel() {
    let mut config = Config::default();
    config.gemini.model = "gemini-1.5-pro".to_string();
    config.gemini.endpoint = "https://example.com/models/".to_string();
    assert_eq!(
        config.gemini.generate_url(),
        "https://example.com/models/gemini-1.5-pro:generateContent"
    );
}
