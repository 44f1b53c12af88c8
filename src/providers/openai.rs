use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use log::error;

use crate::errors::ProviderError;
use crate::providers::TranslationBackend;
use crate::text_codec::{self, Quirk};
use crate::translation::prompts;

/// OpenAI client for the chat-completions API
#[derive(Debug)]
pub struct OpenAi {
    /// HTTP client for making requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
    /// Model name to use
    model: String,
    /// Temperature for translation requests
    temperature: f32,
}

/// Chat message object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Content of the message
    pub content: String,
}

/// Chat-completion request
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// Model name to use for generation
    model: String,
    /// Messages of the conversation
    messages: Vec<ChatMessage>,
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Chat-completion response
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// Generated choices
    pub choices: Vec<ChatChoice>,
}

/// Individual choice in a chat-completion response
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// Response message
    pub message: ChatMessage,
}

impl ChatRequest {
    /// Create a new chat request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl OpenAi {
    /// Create a new OpenAI client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
        temperature: f32,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            temperature,
        }
    }

    /// Complete a chat request
    pub async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let api_url = if self.endpoint.is_empty() {
            "https://api.openai.com/v1/chat/completions".to_string()
        } else {
            self.endpoint.clone()
        };

        let response = self
            .client
            .post(&api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("OpenAI request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("OpenAI response: {}", e)))
    }

    /// Extract the first choice's content from a response
    fn first_choice(response: &ChatResponse) -> Result<String, ProviderError> {
        response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| ProviderError::ParseError("OpenAI returned no choices".to_string()))
    }
}

#[async_trait]
impl TranslationBackend for OpenAi {
    async fn translate_one(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        let system_prompt = prompts::chat_translation_system_prompt(target_language);
        let request = ChatRequest::new(&self.model)
            .add_message("system", system_prompt)
            .add_message("user", text)
            .temperature(self.temperature);

        let response = self.complete(request).await?;
        let translated = Self::first_choice(&response)?;
        Ok(text_codec::decode(&translated, self.quirk()))
    }

    async fn translate_payload(
        &self,
        payload: &str,
        system_instruction: &str,
    ) -> Result<String, ProviderError> {
        let request = ChatRequest::new(&self.model)
            .add_message("system", system_instruction)
            .add_message("user", payload)
            .temperature(self.temperature);

        let response = self.complete(request).await?;
        // An empty choice list on the payload path triggers the upstream
        // per-fragment retry instead of failing the whole batch
        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone()),
            None => Err(ProviderError::EmptyResponse),
        }
    }

    async fn complete_prompt(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ChatRequest::new(&self.model)
            .add_message("user", prompt)
            .temperature(self.temperature);

        let response = self.complete(request).await?;
        Ok(Self::first_choice(&response)?.trim().to_string())
    }

    fn quirk(&self) -> Quirk {
        Quirk::EscapedQuotes
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
