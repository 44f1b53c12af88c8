/*!
 * Batch translation orchestration.
 *
 * Multiple fragments are combined into one payload, separated by a delimiter
 * that is unique per batch, and sent upstream as a single request. The
 * response is split back on the same delimiter. If the split does not yield
 * exactly one part per fragment, or the payload comes back blocked or without
 * usable text, the batch degrades to sequential per-fragment calls.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::errors::{ProviderError, TranslationError};
use crate::translation::core::TranslationService;
use crate::translation::prompts;

/// Leading `Text N:` marker on a split response part
static TEXT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*Text\s+\d+\s*:\s*").unwrap());

impl TranslationService {
    /// Translate a list of fragments, preserving order and length.
    ///
    /// The returned vector always has exactly one entry per input fragment.
    pub async fn translate_batch(
        &self,
        fragments: &[String],
        target_language: &str,
    ) -> Result<Vec<String>, TranslationError> {
        if fragments.is_empty() {
            return Ok(Vec::new());
        }
        if fragments.len() == 1 {
            return Ok(vec![self.translate_one(&fragments[0], target_language).await?]);
        }

        let delimiter = format!("---TRANSLATION_SEPARATOR_{}---", Uuid::new_v4());
        let payload = fragments
            .iter()
            .enumerate()
            .map(|(index, fragment)| format!("Text {}:\n{}", index + 1, fragment))
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", delimiter));
        let instruction = prompts::batch_system_instruction(target_language, &delimiter);

        debug!(
            "Sending combined payload of {} fragments to {}",
            fragments.len(),
            self.backend().name()
        );

        match self.backend().translate_payload(&payload, &instruction).await {
            Ok(response) => {
                let parts: Vec<String> = response
                    .split(delimiter.as_str())
                    .map(|part| TEXT_MARKER.replace(part.trim(), "").trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect();

                if parts.len() == fragments.len() {
                    return Ok(parts);
                }

                warn!(
                    "Combined response split into {} parts for {} fragments, retrying one by one",
                    parts.len(),
                    fragments.len()
                );
            }
            Err(e @ (ProviderError::ContentBlocked | ProviderError::EmptyResponse)) => {
                warn!("Combined payload produced no usable response ({}), retrying one by one", e);
            }
            Err(e) => return Err(e.into()),
        }

        let mut translated = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            translated.push(self.translate_one(fragment, target_language).await?);
        }
        Ok(translated)
    }
}
