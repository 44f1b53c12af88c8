/*!
 * Mock backend for testing.
 *
 * Simulates the translation backends without network calls:
 * - `MockBackend::identity()` - returns every input unchanged
 * - `MockBackend::tagged()` - prefixes translations with the target language
 * - `MockBackend::mismatched_payload()` - mangles batch payload structure
 * - `MockBackend::blocked_payload()` - safety-blocks every payload call
 * - `MockBackend::empty_payload()` - payload calls return no usable output
 * - `MockBackend::failing_prompt()` - fails prompt completions only
 * - `MockBackend::failing()` - fails everything
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::errors::ProviderError;
use crate::providers::TranslationBackend;
use crate::text_codec::Quirk;

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Every call echoes its input
    Identity,
    /// Translations are prefixed with the target language
    Tagged,
    /// Payload calls return an unstructured response (wrong fragment count)
    MismatchedPayload,
    /// Payload calls are blocked by safety filters
    BlockedPayload,
    /// Payload calls answer successfully but carry no usable output
    EmptyPayload,
    /// Prompt completions fail; translations succeed
    FailingPrompt,
    /// Every call fails with an API error
    Failing,
}

/// Mock translation backend with call counters
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of single-fragment translation calls
    single_calls: AtomicUsize,
    /// Number of payload calls
    payload_calls: AtomicUsize,
    /// Number of prompt-completion calls
    prompt_calls: AtomicUsize,
    /// Last payload sent to a payload call
    last_payload: Mutex<Option<String>>,
    /// Fixed response for payload calls, overriding the behavior default
    payload_response: Option<String>,
    /// Fixed response for prompt completions
    prompt_response: Option<String>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            single_calls: AtomicUsize::new(0),
            payload_calls: AtomicUsize::new(0),
            prompt_calls: AtomicUsize::new(0),
            last_payload: Mutex::new(None),
            payload_response: None,
            prompt_response: None,
        }
    }

    /// Create a mock that echoes every input
    pub fn identity() -> Self {
        Self::new(MockBehavior::Identity)
    }

    /// Create a mock that prefixes translations with the target language
    pub fn tagged() -> Self {
        Self::new(MockBehavior::Tagged)
    }

    /// Create a mock whose payload responses split into the wrong count
    pub fn mismatched_payload() -> Self {
        Self::new(MockBehavior::MismatchedPayload)
    }

    /// Create a mock whose payload calls are safety-blocked
    pub fn blocked_payload() -> Self {
        Self::new(MockBehavior::BlockedPayload)
    }

    /// Create a mock whose payload calls return no usable output
    pub fn empty_payload() -> Self {
        Self::new(MockBehavior::EmptyPayload)
    }

    /// Create a mock whose prompt completions fail
    pub fn failing_prompt() -> Self {
        Self::new(MockBehavior::FailingPrompt)
    }

    /// Create a mock that fails every call
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Fix the response returned by payload calls
    pub fn with_payload_response(mut self, response: impl Into<String>) -> Self {
        self.payload_response = Some(response.into());
        self
    }

    /// Fix the response returned by prompt completions
    pub fn with_prompt_response(mut self, response: impl Into<String>) -> Self {
        self.prompt_response = Some(response.into());
        self
    }

    /// Number of single-fragment translation calls made so far
    pub fn single_call_count(&self) -> usize {
        self.single_calls.load(Ordering::SeqCst)
    }

    /// Number of payload calls made so far
    pub fn payload_call_count(&self) -> usize {
        self.payload_calls.load(Ordering::SeqCst)
    }

    /// Number of prompt-completion calls made so far
    pub fn prompt_call_count(&self) -> usize {
        self.prompt_calls.load(Ordering::SeqCst)
    }

    /// The payload passed to the most recent payload call, if any
    pub fn last_payload(&self) -> Option<String> {
        self.last_payload.lock().ok().and_then(|guard| guard.clone())
    }

    fn api_error() -> ProviderError {
        ProviderError::ApiError {
            status_code: 500,
            message: "Simulated provider failure".to_string(),
        }
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate_one(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        self.single_calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Failing => Err(Self::api_error()),
            MockBehavior::Tagged => Ok(format!("[{}] {}", target_language, text)),
            _ => Ok(text.to_string()),
        }
    }

    async fn translate_payload(
        &self,
        payload: &str,
        _system_instruction: &str,
    ) -> Result<String, ProviderError> {
        self.payload_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_payload.lock() {
            *guard = Some(payload.to_string());
        }

        if let Some(response) = &self.payload_response {
            return Ok(response.clone());
        }

        match self.behavior {
            MockBehavior::Failing => Err(Self::api_error()),
            MockBehavior::BlockedPayload => Err(ProviderError::ContentBlocked),
            MockBehavior::EmptyPayload => Err(ProviderError::EmptyResponse),
            MockBehavior::MismatchedPayload => {
                Ok("one undifferentiated blob of translated text".to_string())
            }
            _ => Ok(payload.to_string()),
        }
    }

    async fn complete_prompt(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompt_calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Failing | MockBehavior::FailingPrompt => Err(Self::api_error()),
            _ => Ok(self
                .prompt_response
                .clone()
                .unwrap_or_else(|| prompt.to_string())),
        }
    }

    fn quirk(&self) -> Quirk {
        Quirk::None
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
