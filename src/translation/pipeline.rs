/*!
 * Document-level translation orchestration.
 *
 * Ties the tree walker, the batch orchestrator and the translation service
 * together for the three inbound shapes: a single JSON document, an NDJSON
 * stream (one document per line) and a flat app-strings map.
 */

use log::{info, warn};
use serde_json::{json, Map, Value};
use std::collections::VecDeque;

use crate::document_processor::{
    apply_highlight_titles, collect_highlight_sites, detach_output_data, extract_fragments,
    reinsert_fragments, restore_output_data,
};
use crate::errors::TranslationError;
use crate::translation::core::TranslationService;

/// Translate one structured document.
///
/// The input is never mutated. OUTPUT data fields are detached into a
/// per-call queue before extraction and restored verbatim after reinsertion,
/// so code output blocks survive untranslated.
pub async fn translate_document(
    service: &TranslationService,
    doc: &Value,
    target_language: &str,
) -> Result<Value, TranslationError> {
    let mut result = doc.clone();
    let mut output_store = VecDeque::new();

    detach_output_data(&mut result, &mut output_store);

    let fragments = extract_fragments(&result);
    info!("Extracted {} translatable fragments", fragments.len());

    let mut translated = Vec::with_capacity(fragments.len());
    for fragment in &fragments {
        translated.push(service.translate_one(&fragment.text, target_language).await?);
    }

    reinsert_fragments(&mut result, translated);
    restore_output_data(&mut result, &mut output_store);
    reanchor_highlights(service, &mut result).await;

    Ok(result)
}

/// Translate an NDJSON stream line by line.
///
/// Blank lines are dropped. A line that fails to parse or to translate is
/// replaced by an error record carrying the original line, and processing
/// continues with the next line.
pub async fn translate_ndjson(
    service: &TranslationService,
    content: &str,
    target_language: &str,
) -> Result<String, TranslationError> {
    let mut output_lines = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let translated = match serde_json::from_str::<Value>(line) {
            Ok(doc) => translate_document(service, &doc, target_language)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(format!("Invalid JSON: {}", e)),
        };

        match translated {
            Ok(doc) => output_lines.push(doc.to_string()),
            Err(message) => {
                warn!("Skipping untranslatable line: {}", message);
                output_lines.push(error_record(&message, line).to_string());
            }
        }
    }

    Ok(output_lines.join("\n"))
}

/// Translate an NDJSON stream with one combined upstream payload.
///
/// Fragments from all parseable lines are gathered into a single ordered
/// list and translated in one batch call, then redistributed to their
/// documents. Lines that fail to parse become error records in place.
pub async fn translate_ndjson_batch(
    service: &TranslationService,
    content: &str,
    target_language: &str,
) -> Result<String, TranslationError> {
    enum Line {
        ErrorRecord(Value),
        Document {
            doc: Value,
            output_store: VecDeque<String>,
            fragment_count: usize,
        },
    }

    let mut lines = Vec::new();
    let mut all_fragments = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(mut doc) => {
                let mut output_store = VecDeque::new();
                detach_output_data(&mut doc, &mut output_store);

                let fragments = extract_fragments(&doc);
                let fragment_count = fragments.len();
                all_fragments.extend(fragments.into_iter().map(|f| f.text));

                lines.push(Line::Document {
                    doc,
                    output_store,
                    fragment_count,
                });
            }
            Err(e) => {
                let message = format!("Invalid JSON: {}", e);
                warn!("Skipping untranslatable line: {}", message);
                lines.push(Line::ErrorRecord(error_record(&message, line)));
            }
        }
    }

    info!(
        "Translating {} fragments from {} documents in one batch",
        all_fragments.len(),
        lines.len()
    );
    let mut translated = service
        .translate_batch(&all_fragments, target_language)
        .await?
        .into_iter();

    let mut output_lines = Vec::new();
    for line in lines {
        match line {
            Line::ErrorRecord(record) => output_lines.push(record.to_string()),
            Line::Document {
                mut doc,
                mut output_store,
                fragment_count,
            } => {
                let share: Vec<String> = translated.by_ref().take(fragment_count).collect();
                reinsert_fragments(&mut doc, share);
                restore_output_data(&mut doc, &mut output_store);
                reanchor_highlights(service, &mut doc).await;
                output_lines.push(doc.to_string());
            }
        }
    }

    Ok(output_lines.join("\n"))
}

/// Translate a flat app-strings map.
///
/// Every key of the input appears in the output. Non-string and empty values
/// pass through verbatim; non-empty string values are translated one by one.
pub async fn translate_app_strings(
    service: &TranslationService,
    strings: &Value,
    target_language: &str,
) -> Result<Value, TranslationError> {
    let Some(map) = strings.as_object() else {
        return Err(TranslationError::InvalidDocument(
            "App strings input must be a JSON object".to_string(),
        ));
    };

    let mut result = Map::with_capacity(map.len());
    for (key, value) in map {
        let translated = match value {
            Value::String(text) if !text.trim().is_empty() => {
                Value::String(service.translate_one(text, target_language).await?)
            }
            other => other.clone(),
        };
        result.insert(key.clone(), translated);
    }

    Ok(Value::Object(result))
}

/// Rewrite highlight titles so they match phrases in the translated prose.
///
/// Best effort per site: a failed re-anchoring call keeps the existing title.
async fn reanchor_highlights(service: &TranslationService, doc: &mut Value) {
    let sites = collect_highlight_sites(doc);
    if sites.is_empty() {
        return;
    }

    let mut titles = Vec::with_capacity(sites.len());
    for site in &sites {
        if site.key_title.trim().is_empty() || site.data.trim().is_empty() {
            titles.push(site.key_title.clone());
            continue;
        }
        titles.push(service.reanchor(&site.key_title, &site.data).await);
    }

    apply_highlight_titles(doc, titles);
}

/// Error record emitted in place of an untranslatable NDJSON line
fn error_record(message: &str, original_line: &str) -> Value {
    json!({
        "error": message,
        "original_line": original_line,
    })
}
