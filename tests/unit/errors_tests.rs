/*!
 * Tests for error types and their conversions
 */

use edutrans::{AppError, ProviderError, TranslationError};

/// Test provider errors carry their context in the display string
#[test]
fn test_provider_error_display_shouldIncludeContext() {
    let error = ProviderError::ApiError {
        status_code: 429,
        message: "rate limited".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "API responded with error: 429 - rate limited"
    );
}

/// Test provider errors wrap into translation errors
#[test]
fn test_translation_error_fromProviderError_shouldWrap() {
    let error: TranslationError = ProviderError::EmptyResponse.into();
    assert!(matches!(error, TranslationError::Provider(_)));
    assert!(error.to_string().contains("no usable output"));
}

/// Test translation errors wrap into the application error
#[test]
fn test_app_error_fromTranslationError_shouldWrap() {
    let error: AppError = TranslationError::UnsupportedService("deepl".to_string()).into();
    assert!(matches!(error, AppError::Translation(_)));
    assert!(error.to_string().contains("deepl"));
}

/// Test io errors map to the file variant
#[test]
fn test_app_error_fromIoError_shouldMapToFile() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing input");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(_)));
    assert!(error.to_string().contains("missing input"));
}

/// Test anyhow errors map to the unknown variant
#[test]
fn test_app_error_fromAnyhow_shouldMapToUnknown() {
    let error: AppError = anyhow::anyhow!("config went sideways").into();
    assert!(matches!(error, AppError::Unknown(_)));
    assert!(error.to_string().contains("config went sideways"));
}
