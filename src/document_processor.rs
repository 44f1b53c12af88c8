/*!
 * Selective-field extraction and reinsertion for content documents.
 *
 * A content document is an ordered tree of JSON values (strings, arrays and
 * insertion-ordered maps). Only a fixed allow-list of field names carries
 * human-readable text; everything else (code snippets, identifiers,
 * placeholders) must reach the output byte-identical.
 *
 * Extraction and reinsertion are two passes of the SAME traversal function.
 * Reinsertion is positional, not keyed: the nth extracted fragment is replaced
 * by the nth translated string, so both passes must visit nodes in identical
 * order. Sharing one traversal makes that invariant structural instead of a
 * property that two hand-mirrored functions have to maintain.
 */

use std::collections::VecDeque;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Field names whose string (or list-of-string) values are translatable.
/// Membership is exact and case-sensitive.
pub const TRANSLATABLE_KEYS: &[&str] = &[
    "subject",
    "topic_name",
    "data",
    "question_text",
    "correct_explanation",
    "incorrect_explanation",
    "option",
    "info_text",
    "tap_option",
    "rhs",
    "lhs",
    "key_title",
    "hint",
    "content",
    "description",
    "title",
    "name",
    "subtopic_name",
];

/// Sibling key that suppresses translation for the next eligible field
pub const SUPPRESS_KEY: &str = "translate_content";

/// `type` value marking a node whose `data` holds raw terminal output
pub const OUTPUT_TYPE: &str = "OUTPUT";

/// Models occasionally double up question marks in translated prose
static DOUBLED_QUESTION_MARKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?{2,}").unwrap());

/// Check whether a field name is eligible for translation.
pub fn is_translatable_key(key: &str) -> bool {
    TRANSLATABLE_KEYS.contains(&key)
}

/// One extracted translatable string and its position label.
///
/// The label (`field` or `field_<index>` for list items) is diagnostic only;
/// reinsertion is purely positional.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// The extracted text
    pub text: String,
    /// Position label for diagnostics
    pub position: String,
}

/// The two passes that share the traversal
enum Pass<'a> {
    /// Collect translatable strings in visit order
    Extract(&'a mut Vec<Fragment>),
    /// Overwrite translatable strings from the iterator, in the same order
    Reinsert(&'a mut std::vec::IntoIter<String>),
}

/// Extract every translatable fragment from a document, in traversal order.
pub fn extract_fragments(doc: &Value) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut scratch = doc.clone();
    if let Value::Object(map) = &mut scratch {
        walk(map, false, &mut Pass::Extract(&mut fragments));
    }
    fragments
}

/// Reinsert translated strings into a document, in the same traversal order
/// extraction produced them.
///
/// If the translated sequence runs out early the remaining original values are
/// left untouched. That silent degrade is part of the contract: a short
/// translation list must never corrupt the rest of the document.
pub fn reinsert_fragments(doc: &mut Value, translated: Vec<String>) {
    let mut iter = translated.into_iter();
    if let Value::Object(map) = doc {
        walk(map, false, &mut Pass::Reinsert(&mut iter));
    }
}

/// Whether a `translate_content` value disables translation of the next
/// eligible sibling
fn suppresses_translation(value: &Value) -> bool {
    match value {
        Value::String(s) => s.eq_ignore_ascii_case("false"),
        Value::Bool(b) => !b,
        _ => false,
    }
}

fn fix_doubled_question_marks(text: &str) -> String {
    DOUBLED_QUESTION_MARKS.replace_all(text, "?").to_string()
}

/// The shared traversal. Entry rules, applied per map in insertion order:
///
/// 1. a `type: "OUTPUT"` entry flags the level and is skipped
/// 2. once flagged, the level's `data` entry is skipped
/// 3. a `translate_content` entry updates the suppression flag and is skipped
/// 4. an eligible, non-suppressed key collects/overwrites its non-empty string
///    value, or each non-empty string item of its list value; map items inside
///    such a list are recursed into
/// 5. independent of eligibility, map values are recursed with the same skip
///    flag, and list values recurse into their map items unless the key is
///    `option`
fn walk(map: &mut Map<String, Value>, skip: bool, pass: &mut Pass<'_>) {
    let mut is_output_type = false;
    let mut should_translate_next = true;

    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        if key == "type" && map.get(&key).and_then(Value::as_str) == Some(OUTPUT_TYPE) {
            is_output_type = true;
            continue;
        }

        if is_output_type && key == "data" {
            continue;
        }

        if key == SUPPRESS_KEY {
            should_translate_next = match map.get(&key) {
                Some(value) => !suppresses_translation(value),
                None => true,
            };
            continue;
        }

        if !skip && is_translatable_key(&key) {
            if should_translate_next {
                match map.get_mut(&key) {
                    Some(Value::String(text)) => {
                        if !text.is_empty() {
                            match pass {
                                Pass::Extract(fragments) => fragments.push(Fragment {
                                    text: text.clone(),
                                    position: key.clone(),
                                }),
                                Pass::Reinsert(translated) => {
                                    if let Some(replacement) = translated.next() {
                                        *text = fix_doubled_question_marks(&replacement);
                                    }
                                }
                            }
                        }
                    }
                    Some(Value::Array(items)) => {
                        for (index, item) in items.iter_mut().enumerate() {
                            match item {
                                Value::String(text) => {
                                    if !text.is_empty() {
                                        match pass {
                                            Pass::Extract(fragments) => fragments.push(Fragment {
                                                text: text.clone(),
                                                position: format!("{}_{}", key, index),
                                            }),
                                            Pass::Reinsert(translated) => {
                                                if let Some(replacement) = translated.next() {
                                                    *text = fix_doubled_question_marks(&replacement);
                                                }
                                            }
                                        }
                                    }
                                }
                                Value::Object(child) => walk(child, skip, pass),
                                _ => {}
                            }
                        }
                    }
                    _ => {}
                }
            }
            // The suppression flag covers exactly one eligible key
            should_translate_next = true;
        }

        match map.get_mut(&key) {
            Some(Value::Object(child)) => walk(child, skip, pass),
            Some(Value::Array(items)) if key != "option" => {
                for item in items.iter_mut() {
                    if let Value::Object(child) = item {
                        walk(child, skip, pass);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Detach every OUTPUT `data` string into a per-call FIFO queue, blanking the
/// field so the walker never sees it.
///
/// The queue is owned by the caller, one per translation request. Detach and
/// restore use the same traversal order, so pushes and pops line up as long as
/// the document structure is unchanged in between.
pub fn detach_output_data(doc: &mut Value, store: &mut VecDeque<String>) {
    if let Value::Object(map) = doc {
        detach_in_map(map, store);
    }
}

fn detach_in_map(map: &mut Map<String, Value>, store: &mut VecDeque<String>) {
    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        if key == "type" && map.get(&key).and_then(Value::as_str) == Some(OUTPUT_TYPE) {
            if let Some(Value::String(data)) = map.get_mut("data") {
                store.push_back(std::mem::take(data));
            }
            continue;
        }

        match map.get_mut(&key) {
            Some(Value::Object(child)) => detach_in_map(child, store),
            Some(Value::Array(items)) => {
                for item in items.iter_mut() {
                    if let Value::Object(child) = item {
                        detach_in_map(child, store);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Restore OUTPUT `data` strings detached by [`detach_output_data`], in the
/// same traversal order.
pub fn restore_output_data(doc: &mut Value, store: &mut VecDeque<String>) {
    if let Value::Object(map) = doc {
        restore_in_map(map, store);
    }
}

fn restore_in_map(map: &mut Map<String, Value>, store: &mut VecDeque<String>) {
    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        if key == "type" && map.get(&key).and_then(Value::as_str) == Some(OUTPUT_TYPE) {
            if let Some(Value::String(data)) = map.get_mut("data") {
                if let Some(saved) = store.pop_front() {
                    *data = saved;
                }
            }
            continue;
        }

        match map.get_mut(&key) {
            Some(Value::Object(child)) => restore_in_map(child, store),
            Some(Value::Array(items)) => {
                for item in items.iter_mut() {
                    if let Value::Object(child) = item {
                        restore_in_map(child, store);
                    }
                }
            }
            _ => {}
        }
    }
}

/// A highlighted phrase and the translated prose it must be re-located in.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightSite {
    /// The (already translated) `data` prose of the parent node
    pub data: String,
    /// The original highlighted phrase
    pub key_title: String,
}

enum HighlightPass<'a> {
    Collect(&'a mut Vec<HighlightSite>),
    Apply(&'a mut std::vec::IntoIter<String>),
}

/// Collect every highlight site in the document, in traversal order.
///
/// A site is a `highlight` array item carrying a string `key_title`, inside a
/// map that also carries a string `data` field.
pub fn collect_highlight_sites(doc: &Value) -> Vec<HighlightSite> {
    let mut sites = Vec::new();
    let mut scratch = doc.clone();
    if let Value::Object(map) = &mut scratch {
        walk_highlights(map, &mut HighlightPass::Collect(&mut sites));
    }
    sites
}

/// Write re-anchored titles back into the document, in the same traversal
/// order [`collect_highlight_sites`] produced them.
pub fn apply_highlight_titles(doc: &mut Value, titles: Vec<String>) {
    let mut iter = titles.into_iter();
    if let Value::Object(map) = doc {
        walk_highlights(map, &mut HighlightPass::Apply(&mut iter));
    }
}

fn walk_highlights(map: &mut Map<String, Value>, pass: &mut HighlightPass<'_>) {
    let data = map.get("data").and_then(Value::as_str).map(str::to_string);
    if let Some(data) = data {
        if let Some(Value::Array(highlights)) = map.get_mut("highlight") {
            for item in highlights.iter_mut() {
                if let Value::Object(entry) = item {
                    if let Some(Value::String(title)) = entry.get_mut("key_title") {
                        match pass {
                            HighlightPass::Collect(sites) => sites.push(HighlightSite {
                                data: data.clone(),
                                key_title: title.clone(),
                            }),
                            HighlightPass::Apply(titles) => {
                                if let Some(new_title) = titles.next() {
                                    *title = new_title;
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        match map.get_mut(&key) {
            Some(Value::Object(child)) => walk_highlights(child, pass),
            Some(Value::Array(items)) => {
                for item in items.iter_mut() {
                    if let Value::Object(child) = item {
                        walk_highlights(child, pass);
                    }
                }
            }
            _ => {}
        }
    }
}
