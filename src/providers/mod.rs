/*!
 * Provider implementations for the translation backends.
 *
 * This module contains client implementations for the two supported LLM
 * families:
 * - OpenAI: chat-completion API (system + user message pair)
 * - Gemini: single-prompt generateContent API with safety overrides
 *
 * A mock backend for tests lives in `providers::mock`.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::text_codec::Quirk;

/// Common trait for the translation backends
///
/// The batch orchestration (delimiter assembly, response splitting, fallback
/// on count mismatch) lives above this trait; a backend only needs to move
/// text to its API and back.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate a single text fragment to the target language.
    ///
    /// # Arguments
    /// * `text` - The fragment to translate
    /// * `target_language` - Free-form language name or code
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated fragment or an error
    async fn translate_one(&self, text: &str, target_language: &str) -> Result<String, ProviderError>;

    /// Send one pre-assembled multi-fragment payload and return the raw
    /// multi-fragment response for the orchestrator to split.
    async fn translate_payload(
        &self,
        payload: &str,
        system_instruction: &str,
    ) -> Result<String, ProviderError>;

    /// Complete a free-form prompt (used for highlight re-anchoring).
    async fn complete_prompt(&self, prompt: &str) -> Result<String, ProviderError>;

    /// The codec quirk to apply when decoding this backend's output
    fn quirk(&self) -> Quirk;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

pub mod gemini;
pub mod mock;
pub mod openai;
