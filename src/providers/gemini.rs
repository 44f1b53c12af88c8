use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use log::error;

use crate::errors::ProviderError;
use crate::providers::TranslationBackend;
use crate::text_codec::{self, Quirk};
use crate::translation::prompts;

/// Sentinel surfaced to the caller when the provider's safety filters block a
/// single-text translation. The batch path never sees this string; blocked
/// payloads degrade to per-fragment calls instead.
pub const SAFETY_BLOCKED_MESSAGE: &str = "Translation blocked due to safety filters.";

/// Gemini client for the generateContent API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for making requests
    client: Client,
    /// API key, passed as a query parameter
    api_key: String,
    /// Full generateContent endpoint URL (includes the model path)
    endpoint: String,
}

/// generateContent request
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    /// Prompt contents
    contents: Vec<Content>,
    /// Safety category overrides
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

/// A content block in a request or response
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    /// Text parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single text part
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    /// The text content
    pub text: String,
}

/// Safety category override
#[derive(Debug, Clone, Serialize)]
pub struct SafetySetting {
    /// Harm category name
    pub category: String,
    /// Block threshold name
    pub threshold: String,
}

/// generateContent response
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A response candidate
#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// Generated content
    pub content: Option<Content>,
    /// Why generation stopped ("SAFETY" when blocked)
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// All four harm categories disabled. The source material is
/// security-education content and trips the default filters constantly.
fn safety_settings() -> Vec<SafetySetting> {
    [
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ]
    .iter()
    .map(|category| SafetySetting {
        category: (*category).to_string(),
        threshold: "BLOCK_NONE".to_string(),
    })
    .collect()
}

/// Outcome of one generateContent call
enum GenerateOutcome {
    /// The model produced text
    Text(String),
    /// The model refused on safety grounds
    Blocked,
    /// A 200 response with no candidates or no text parts
    Empty,
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Run one generateContent call for the given prompt
    async fn generate(&self, prompt: &str) -> Result<GenerateOutcome, ProviderError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            safety_settings: safety_settings(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Gemini response: {}", e)))?;

        let Some(candidate) = body.candidates.first() else {
            return Ok(GenerateOutcome::Empty);
        };

        if let Some(content) = &candidate.content {
            if let Some(part) = content.parts.first() {
                return Ok(GenerateOutcome::Text(part.text.clone()));
            }
        }

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Ok(GenerateOutcome::Blocked);
        }

        Ok(GenerateOutcome::Empty)
    }
}

#[async_trait]
impl TranslationBackend for Gemini {
    /// Single-fragment translation. This family gets the full placeholder
    /// codec cycle: the fragment is encoded before it is embedded in the
    /// prompt and decoded when it comes back.
    async fn translate_one(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        let encoded = text_codec::encode(text);
        let prompt = prompts::prompt_translation_prompt(target_language, &encoded);

        match self.generate(&prompt).await? {
            GenerateOutcome::Text(translated) => {
                Ok(text_codec::decode(translated.trim(), self.quirk()))
            }
            GenerateOutcome::Blocked => Ok(SAFETY_BLOCKED_MESSAGE.to_string()),
            GenerateOutcome::Empty => Err(ProviderError::ParseError(
                "No translated text found in the response".to_string(),
            )),
        }
    }

    /// Payload calls are sent raw: the `Text N:` markers and the delimiter
    /// must survive, so the codec stays out of the way here.
    async fn translate_payload(
        &self,
        payload: &str,
        system_instruction: &str,
    ) -> Result<String, ProviderError> {
        let prompt = format!("{}\n\n{}", system_instruction, payload);

        match self.generate(&prompt).await? {
            GenerateOutcome::Text(translated) => Ok(translated),
            GenerateOutcome::Blocked => Err(ProviderError::ContentBlocked),
            // A combined payload that came back empty is retried fragment by
            // fragment upstream, like a blocked one
            GenerateOutcome::Empty => Err(ProviderError::EmptyResponse),
        }
    }

    async fn complete_prompt(&self, prompt: &str) -> Result<String, ProviderError> {
        match self.generate(prompt).await? {
            GenerateOutcome::Text(completion) => Ok(completion.trim().to_string()),
            GenerateOutcome::Blocked => Err(ProviderError::ContentBlocked),
            GenerateOutcome::Empty => Err(ProviderError::ParseError(
                "No completion found in the response".to_string(),
            )),
        }
    }

    fn quirk(&self) -> Quirk {
        Quirk::None
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
