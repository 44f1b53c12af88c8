/*!
 * Translation service for structured educational content.
 *
 * This module contains the core functionality for translating extracted
 * content fields using the LLM backends. It is split into several submodules:
 *
 * - `core`: Service definition and backend selection
 * - `batch`: Multi-fragment payload assembly and fallback handling
 * - `pipeline`: Document, NDJSON and app-strings orchestration
 * - `prompts`: Prompt templates for the translation backends
 */

// Re-export main types for easier usage
pub use self::core::{ServiceKind, TranslationService};
pub use self::pipeline::{
    translate_app_strings, translate_document, translate_ndjson, translate_ndjson_batch,
};

// Submodules
pub mod batch;
pub mod core;
pub mod pipeline;
pub mod prompts;
