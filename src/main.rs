// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::translation::core::ServiceKind;
use crate::translation::{
    translate_app_strings, translate_document, translate_ndjson, translate_ndjson_batch,
    TranslationService,
};

mod app_config;
mod document_processor;
mod errors;
mod providers;
mod text_codec;
mod translation;

/// Input file format
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum CliFormat {
    /// One JSON document
    Json,
    /// One JSON document per line
    Ndjson,
    /// Flat key-value strings map
    App,
}

/// edutrans - Educational content translation tool
///
/// Reads a structured content file, translates its text fields using the
/// selected LLM backend and writes the translated file next to the input.
#[derive(Parser, Debug)]
#[command(name = "edutrans")]
#[command(version = "1.0.0")]
#[command(about = "LLM-powered educational content translation")]
#[command(long_about = "edutrans walks structured educational content, extracts the \
translatable text fields, translates them with the selected LLM backend and splices \
the translations back in place.

EXAMPLES:
    edutrans lessons.json -l Hindi                # Translate one document with Gemini
    edutrans lessons.json -l Hindi -s chatgpt     # Use the ChatGPT backend
    edutrans feed.ndjson -l Tamil -f ndjson       # Translate a stream line by line
    edutrans feed.ndjson -l Tamil -f ndjson -b    # One combined payload for the stream
    edutrans strings.json -l French -f app        # Translate a flat strings map

CONFIGURATION:
    API keys, endpoints, models and timeouts are read from conf.json by default.
    You can specify a different config file with --config-path.")]
struct CommandLineOptions {
    /// Input file to translate
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Target language name or code (e.g., 'Hindi', 'fr')
    #[arg(short, long)]
    language: String,

    /// Translation service to use (chatgpt or gemini)
    #[arg(short, long, default_value = "gemini")]
    service: String,

    /// Input file format
    #[arg(short, long, value_enum, default_value = "json")]
    format: CliFormat,

    /// Translate NDJSON fragments in one combined payload
    #[arg(short, long)]
    batch: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Output file path (defaults to the input path tagged with the language)
    #[arg(short, long)]
    output_path: Option<PathBuf>,
}

/// Default output path: the input path with the language inserted before the
/// extension, e.g. `lessons.json` -> `lessons.hindi.json`
fn default_output_path(input: &Path, language: &str) -> PathBuf {
    let tag = language.to_lowercase().replace(char::is_whitespace, "-");
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "translated".to_string());
    let file_name = match input.extension() {
        Some(ext) => format!("{}.{}.{}", stem, tag, ext.to_string_lossy()),
        None => format!("{}.{}", stem, tag),
    };
    input.with_file_name(file_name)
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = CommandLineOptions::parse();

    // Reject unknown services before touching config or network
    let kind = ServiceKind::from_str(&options.service)?;

    let config = if Path::new(&options.config_path).exists() {
        Config::from_file(&options.config_path)?
    } else {
        warn!(
            "Config file {} not found, using defaults (API keys from it will be missing)",
            options.config_path
        );
        Config::default()
    };
    config.validate_for(kind)?;

    let service = TranslationService::from_config(&config, &options.service)?;
    info!(
        "Translating {} to {} using {}",
        options.input_path.display(),
        options.language,
        kind
    );

    let content = std::fs::read_to_string(&options.input_path)?;

    let translated = match options.format {
        CliFormat::Json => {
            let doc: serde_json::Value =
                serde_json::from_str(&content).context("Input is not valid JSON")?;
            let result = translate_document(&service, &doc, &options.language).await?;
            serde_json::to_string_pretty(&result).context("Failed to serialize document")?
        }
        CliFormat::Ndjson => {
            if options.batch {
                translate_ndjson_batch(&service, &content, &options.language).await?
            } else {
                translate_ndjson(&service, &content, &options.language).await?
            }
        }
        CliFormat::App => {
            let strings: serde_json::Value =
                serde_json::from_str(&content).context("Input is not valid JSON")?;
            let result = translate_app_strings(&service, &strings, &options.language).await?;
            serde_json::to_string_pretty(&result).context("Failed to serialize strings")?
        }
    };

    let output_path = options
        .output_path
        .unwrap_or_else(|| default_output_path(&options.input_path, &options.language));
    info!("Writing translated content to {}", output_path.display());
    std::fs::write(&output_path, translated)?;

    Ok(())
}
