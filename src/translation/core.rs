/*!
 * Core translation service implementation.
 *
 * This module contains the TranslationService struct, which selects a backend
 * from the per-request service name and wraps the single-fragment and
 * highlight re-anchoring calls.
 */

use log::warn;
use std::str::FromStr;
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::TranslationError;
use crate::providers::gemini::Gemini;
use crate::providers::openai::OpenAi;
use crate::providers::TranslationBackend;
use crate::translation::prompts;

/// Supported translation backend families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// OpenAI chat-completion family
    ChatGpt,
    /// Gemini prompt-completion family
    Gemini,
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChatGpt => write!(f, "chatgpt"),
            Self::Gemini => write!(f, "gemini"),
        }
    }
}

impl FromStr for ServiceKind {
    type Err = TranslationError;

    /// Parse a service name case-insensitively. Anything but the two known
    /// families is rejected here, before any backend is constructed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chatgpt" => Ok(Self::ChatGpt),
            "gemini" => Ok(Self::Gemini),
            _ => Err(TranslationError::UnsupportedService(s.to_string())),
        }
    }
}

/// Main translation service for structured content
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// Backend implementation
    backend: Arc<dyn TranslationBackend>,
}

impl TranslationService {
    /// Create a service for the named backend family using the given
    /// configuration
    pub fn from_config(config: &Config, service: &str) -> Result<Self, TranslationError> {
        let kind = ServiceKind::from_str(service)?;

        let backend: Arc<dyn TranslationBackend> = match kind {
            ServiceKind::ChatGpt => Arc::new(OpenAi::new(
                config.chatgpt.api_key.clone(),
                config.chatgpt.endpoint.clone(),
                config.chatgpt.model.clone(),
                config.chatgpt.timeout_secs,
                config.chatgpt.temperature,
            )),
            ServiceKind::Gemini => Arc::new(Gemini::new(
                config.gemini.api_key.clone(),
                config.gemini.generate_url(),
                config.gemini.timeout_secs,
            )),
        };

        Ok(Self { backend })
    }

    /// Create a service around an existing backend instance
    pub fn with_backend(backend: Arc<dyn TranslationBackend>) -> Self {
        Self { backend }
    }

    /// The underlying backend
    pub fn backend(&self) -> &Arc<dyn TranslationBackend> {
        &self.backend
    }

    /// Translate a single text fragment.
    ///
    /// Empty and whitespace-only fragments are returned unchanged without an
    /// upstream call.
    pub async fn translate_one(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        Ok(self.backend.translate_one(text, target_language).await?)
    }

    /// Find the phrase in `translated_prose` that corresponds to the original
    /// highlighted phrase.
    ///
    /// Re-anchoring is best effort: empty inputs and any upstream failure
    /// return the original phrase unchanged.
    pub async fn reanchor(&self, original_phrase: &str, translated_prose: &str) -> String {
        if original_phrase.trim().is_empty() || translated_prose.trim().is_empty() {
            return original_phrase.to_string();
        }

        let prompt = prompts::reanchor_prompt(original_phrase, translated_prose);
        match self.backend.complete_prompt(&prompt).await {
            Ok(response) => strip_wrapping_quotes(&response).trim().to_string(),
            Err(e) => {
                warn!(
                    "Highlight re-anchoring failed on {}, keeping original phrase: {}",
                    self.backend.name(),
                    e
                );
                original_phrase.to_string()
            }
        }
    }
}

/// Strip at most one leading and one trailing quote character
fn strip_wrapping_quotes(s: &str) -> &str {
    let s = s.trim();
    let s = s
        .strip_prefix('"')
        .or_else(|| s.strip_prefix('\''))
        .unwrap_or(s);
    s.strip_suffix('"')
        .or_else(|| s.strip_suffix('\''))
        .unwrap_or(s)
}
