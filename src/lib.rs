/*!
 * # edutrans - Educational Content Translator
 *
 * A Rust library for translating structured educational content using LLM
 * backends.
 *
 * ## Features
 *
 * - Selective extraction and reinsertion of translatable fields from nested
 *   JSON documents, preserving structure and field order
 * - Placeholder codec that shields punctuation and formatting from the models
 * - Batch translation with deterministic per-fragment fallback
 * - OUTPUT passthrough so code output blocks are never translated
 * - Highlight re-anchoring against the translated prose
 * - NDJSON streams and flat app-strings maps alongside single documents
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document_processor`: Field selection and tree walking
 * - `text_codec`: Placeholder encoding and decoding
 * - `translation`: Translation orchestration:
 *   - `translation::core`: Service definition and backend selection
 *   - `translation::batch`: Combined-payload translation with fallback
 *   - `translation::pipeline`: Document, NDJSON and app-strings flows
 *   - `translation::prompts`: Prompt templates
 * - `providers`: Client implementations for the LLM backends:
 *   - `providers::openai`: OpenAI chat-completion client
 *   - `providers::gemini`: Gemini generateContent client
 *   - `providers::mock`: Mock backend for tests
 * - `errors`: Custom error types for the application
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod document_processor;
pub mod errors;
pub mod providers;
pub mod text_codec;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, TranslationError};
pub use translation::{
    translate_app_strings, translate_document, translate_ndjson, translate_ndjson_batch,
    ServiceKind, TranslationService,
};
