/*!
 * Tests for the translation service and backend selection
 */

use std::str::FromStr;

use crate::common::mock_service;
use edutrans::providers::mock::MockBackend;
use edutrans::{Config, ServiceKind, TranslationError, TranslationService};

/// Test service name parsing is case-insensitive
#[test]
fn test_service_kind_withMixedCaseNames_shouldParse() {
    assert_eq!(ServiceKind::from_str("chatgpt").unwrap(), ServiceKind::ChatGpt);
    assert_eq!(ServiceKind::from_str("ChatGPT").unwrap(), ServiceKind::ChatGpt);
    assert_eq!(ServiceKind::from_str("GEMINI").unwrap(), ServiceKind::Gemini);
    assert_eq!(ServiceKind::from_str(" gemini ").unwrap(), ServiceKind::Gemini);
}

/// Test unknown service names are rejected
#[test]
fn test_service_kind_withUnknownName_shouldFail() {
    let result = ServiceKind::from_str("deepl");
    assert!(matches!(
        result,
        Err(TranslationError::UnsupportedService(name)) if name == "deepl"
    ));
}

/// Test service construction rejects unknown names before building a backend
#[test]
fn test_from_config_withUnsupportedService_shouldFailFast() {
    let result = TranslationService::from_config(&Config::default(), "deepl");
    assert!(matches!(
        result,
        Err(TranslationError::UnsupportedService(_))
    ));
}

/// Test known service names build a service from default config
#[test]
fn test_from_config_withKnownServices_shouldBuild() {
    let config = Config::default();
    assert!(TranslationService::from_config(&config, "chatgpt").is_ok());
    assert!(TranslationService::from_config(&config, "gemini").is_ok());
}

/// Test that blank fragments never reach the backend
#[test]
fn test_translate_one_withBlankText_shouldSkipBackend() {
    let (service, mock) = mock_service(MockBackend::tagged());

    let result = tokio_test::block_on(service.translate_one("   ", "Hindi")).unwrap();
    assert_eq!(result, "   ");
    assert_eq!(mock.single_call_count(), 0);
}

/// Test re-anchoring strips wrapping quotes from the model response
#[test]
fn test_reanchor_withQuotedResponse_shouldStripQuotes() {
    let (service, mock) =
        mock_service(MockBackend::identity().with_prompt_response("\"la phrase exacte\""));

    let anchored = tokio_test::block_on(service.reanchor("exact phrase", "la prose traduite"));
    assert_eq!(anchored, "la phrase exacte");
    assert_eq!(mock.prompt_call_count(), 1);
}

/// Test re-anchoring keeps the original phrase on upstream failure
#[test]
fn test_reanchor_withFailingCompletion_shouldReturnOriginal() {
    let (service, mock) = mock_service(MockBackend::failing_prompt());

    let anchored = tokio_test::block_on(service.reanchor("exact phrase", "some translated prose"));
    assert_eq!(anchored, "exact phrase");
    assert_eq!(mock.prompt_call_count(), 1);
}

/// Test re-anchoring with empty inputs makes no upstream call
#[test]
fn test_reanchor_withEmptyInputs_shouldReturnOriginalWithoutCall() {
    let (service, mock) = mock_service(MockBackend::identity());

    assert_eq!(tokio_test::block_on(service.reanchor("", "prose")), "");
    assert_eq!(tokio_test::block_on(service.reanchor("phrase", "  ")), "phrase");
    assert_eq!(mock.prompt_call_count(), 0);
}
