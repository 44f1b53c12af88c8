/*!
 * Tests for batch orchestration and its per-fragment fallback
 */

use crate::common::mock_service;
use edutrans::providers::mock::MockBackend;
use edutrans::TranslationError;

fn fragments(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

/// Test that an empty batch makes no upstream call
#[tokio::test]
async fn test_translate_batch_withEmptyList_shouldReturnEmpty() {
    let (service, mock) = mock_service(MockBackend::identity());

    let result = service.translate_batch(&[], "Hindi").await.unwrap();
    assert!(result.is_empty());
    assert_eq!(mock.payload_call_count(), 0);
    assert_eq!(mock.single_call_count(), 0);
}

/// Test that a singleton batch uses the single-fragment path
#[tokio::test]
async fn test_translate_batch_withSingleFragment_shouldUseSingleCall() {
    let (service, mock) = mock_service(MockBackend::tagged());

    let result = service
        .translate_batch(&fragments(&["hello"]), "Hindi")
        .await
        .unwrap();
    assert_eq!(result, vec!["[Hindi] hello"]);
    assert_eq!(mock.payload_call_count(), 0);
    assert_eq!(mock.single_call_count(), 1);
}

/// Test the happy path: one payload call, order and count preserved
#[tokio::test]
async fn test_translate_batch_withEchoedPayload_shouldPreserveOrderAndCount() {
    let (service, mock) = mock_service(MockBackend::identity());
    let input = fragments(&["first fragment", "second fragment", "third fragment"]);

    let result = service.translate_batch(&input, "Hindi").await.unwrap();
    assert_eq!(result, input);
    assert_eq!(mock.payload_call_count(), 1);
    assert_eq!(mock.single_call_count(), 0);
}

/// Test that the payload carries a unique delimiter per batch
#[tokio::test]
async fn test_translate_batch_withTwoBatches_shouldUseDistinctDelimiters() {
    let input = fragments(&["one", "two"]);

    let (service_a, mock_a) = mock_service(MockBackend::identity());
    service_a.translate_batch(&input, "Hindi").await.unwrap();
    let payload_a = mock_a.last_payload().unwrap();

    let (service_b, mock_b) = mock_service(MockBackend::identity());
    service_b.translate_batch(&input, "Hindi").await.unwrap();
    let payload_b = mock_b.last_payload().unwrap();

    let delimiter_a = payload_a
        .lines()
        .find(|line| line.starts_with("---TRANSLATION_SEPARATOR_"))
        .unwrap()
        .to_string();
    assert!(payload_b.lines().all(|line| line != delimiter_a));
    assert!(payload_a.contains("Text 1:"));
    assert!(payload_a.contains("Text 2:"));
}

/// Test fallback when the response does not split into the right count
#[tokio::test]
async fn test_translate_batch_withMismatchedResponse_shouldFallBackPerFragment() {
    let (service, mock) = mock_service(MockBackend::mismatched_payload());
    let input = fragments(&["alpha", "beta", "gamma"]);

    let result = service.translate_batch(&input, "Hindi").await.unwrap();
    assert_eq!(result, input);
    assert_eq!(mock.payload_call_count(), 1);
    assert_eq!(mock.single_call_count(), 3);
}

/// Test fallback when the whole payload is blocked by safety filters
#[tokio::test]
async fn test_translate_batch_withBlockedPayload_shouldFallBackPerFragment() {
    let (service, mock) = mock_service(MockBackend::blocked_payload());
    let input = fragments(&["alpha", "beta"]);

    let result = service.translate_batch(&input, "Hindi").await.unwrap();
    assert_eq!(result, input);
    assert_eq!(mock.payload_call_count(), 1);
    assert_eq!(mock.single_call_count(), 2);
}

/// Test fallback when the payload answer carries no usable output at all,
/// e.g. a successful response with an empty candidate list
#[tokio::test]
async fn test_translate_batch_withEmptyPayloadResponse_shouldFallBackPerFragment() {
    let (service, mock) = mock_service(MockBackend::empty_payload());
    let input = fragments(&["alpha", "beta", "gamma"]);

    let result = service.translate_batch(&input, "Hindi").await.unwrap();
    assert_eq!(result, input);
    assert_eq!(mock.payload_call_count(), 1);
    assert_eq!(mock.single_call_count(), 3);
}

/// Test that hard upstream errors propagate instead of degrading
#[tokio::test]
async fn test_translate_batch_withFailingBackend_shouldPropagateError() {
    let (service, mock) = mock_service(MockBackend::failing());
    let input = fragments(&["alpha", "beta"]);

    let result = service.translate_batch(&input, "Hindi").await;
    assert!(matches!(result, Err(TranslationError::Provider(_))));
    assert_eq!(mock.payload_call_count(), 1);
    assert_eq!(mock.single_call_count(), 0);
}
