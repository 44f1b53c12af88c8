use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::translation::core::ServiceKind;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// ChatGPT backend config
    #[serde(default)]
    pub chatgpt: ChatGptConfig,

    /// Gemini backend config
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// ChatGPT backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatGptConfig {
    /// Model name
    #[serde(default = "default_chatgpt_model")]
    pub model: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL (optional, for proxies or self-hosted gateways)
    #[serde(default = "default_chatgpt_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature for translation requests
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for ChatGptConfig {
    fn default() -> Self {
        Self {
            model: default_chatgpt_model(),
            api_key: String::new(),
            endpoint: default_chatgpt_endpoint(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
        }
    }
}

/// Gemini backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Model name
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Base URL of the models endpoint
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_gemini_model(),
            api_key: String::new(),
            endpoint: default_gemini_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Full generateContent URL for the configured model
    pub fn generate_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

fn default_chatgpt_model() -> String {
    "gpt-4o-mini-2024-07-18".to_string()
}

fn default_chatgpt_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

/// Model responses for large documents can take minutes
fn default_timeout_secs() -> u64 {
    500
}

fn default_temperature() -> f32 {
    0.3
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        let config: Config = serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", path.as_ref().display())
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values that apply to every backend
    pub fn validate(&self) -> Result<()> {
        if self.chatgpt.timeout_secs == 0 || self.gemini.timeout_secs == 0 {
            return Err(anyhow!("Request timeout must be greater than zero"));
        }
        if self.chatgpt.model.is_empty() || self.gemini.model.is_empty() {
            return Err(anyhow!("Model name cannot be empty"));
        }
        Ok(())
    }

    /// Validate the parts of the configuration needed by one backend family
    pub fn validate_for(&self, kind: ServiceKind) -> Result<()> {
        self.validate()?;
        let api_key = match kind {
            ServiceKind::ChatGpt => &self.chatgpt.api_key,
            ServiceKind::Gemini => &self.gemini.api_key,
        };
        if api_key.is_empty() {
            return Err(anyhow!("API key for {} is not configured", kind));
        }
        Ok(())
    }
}
