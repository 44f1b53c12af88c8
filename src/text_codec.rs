/*!
 * Placeholder codec for text sent through translation models.
 *
 * Translation models routinely mangle punctuation, quotes and escape
 * sequences. Before a fragment is sent upstream every volatile character is
 * replaced with a stable `__NAME__` sentinel token that contains nothing a
 * model would alter; after the response comes back the substitution is
 * reversed. The decode side also cleans up artifacts the models are known to
 * produce: inconsistently escaped quotes, a wrapping pair of double quotes,
 * and stray `N:` numbering prefixes.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Provider-specific cleanup applied during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quirk {
    /// No provider-specific fixups
    None,
    /// The chat-completion provider escapes quotes inconsistently and
    /// sometimes wraps the whole answer in quotes; its output gets an extra
    /// unescape pass
    EscapedQuotes,
}

/// Sentinel substitution table, applied in order during encoding.
static SENTINELS: &[(&str, &str)] = &[
    ("\n", "__NEWLINE__"),
    ("\t", "__TAB__"),
    ("\\", "__BACKSLASH__"),
    ("'", "__SINGLEQUOTE__"),
    ("\u{2019}", "__CURLYSINGLEQUOTE__"),
    ("\u{2018}", "__LSINGLEQUOTE__"),
    ("&", "__AMPERSAND__"),
    ("\"", "__DOUBLEQUOTE__"),
    ("\u{201C}", "__LDOUBLEQUOTE__"),
    ("\u{201D}", "__RDOUBLEQUOTE__"),
    ("%", "__PERCENT__"),
    ("!", "__EXCLAMATION__"),
    ("#", "__HASH__"),
    ("$", "__DOLLAR__"),
    ("(", "__LPAREN__"),
    (")", "__RPAREN__"),
    ("*", "__ASTERISK__"),
    ("+", "__PLUS__"),
    (",", "__COMMA__"),
    (".", "__DOT__"),
    ("/", "__SLASH__"),
    (":", "__COLON__"),
    (";", "__SEMICOLON__"),
    ("=", "__EQUAL__"),
    ("?", "__QUESTION__"),
    ("@", "__AT__"),
    ("[", "__LBRACKET__"),
    ("]", "__RBRACKET__"),
    ("^", "__CARET__"),
    ("`", "__BACKTICK__"),
    ("{", "__LBRACE__"),
    ("|", "__PIPE__"),
    ("}", "__RBRACE__"),
    ("~", "__TILDE__"),
];

/// Legacy tokens that can appear in payloads produced by older tooling.
/// They are decoded but never emitted.
static LEGACY_SENTINELS: &[(&str, &str)] = &[
    ("<", "__LESSTHAN__"),
    (">", "__GREATERTHAN__"),
];

/// Runs of raw line breaks left over after tokenization
static LINE_BREAK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\r]+").unwrap());

/// `N:` numbering prefixes some models prepend to list answers
static NUMBERING_ARTIFACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\d+\s*:").unwrap());

/// Runs of spaces introduced by the cleanup passes
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Encode a text fragment for transport through a translation model.
///
/// Replaces every volatile character with its sentinel token, normalizes to
/// NFC, collapses leftover raw line breaks to spaces and trims.
pub fn encode(text: &str) -> String {
    let mut encoded = text.to_string();
    for (raw, token) in SENTINELS {
        encoded = encoded.replace(raw, token);
    }

    let encoded: String = encoded.nfc().collect();
    LINE_BREAK_RUNS.replace_all(&encoded, " ").trim().to_string()
}

/// Decode a translated fragment back into its original character set.
///
/// Reverses every sentinel substitution, applies the provider quirk fixup,
/// strips exactly one layer of wrapping double quotes, re-normalizes to NFC,
/// removes stray numbering artifacts and collapses space runs.
pub fn decode(text: &str, quirk: Quirk) -> String {
    let mut decoded = text.trim().to_string();
    for (raw, token) in SENTINELS.iter().chain(LEGACY_SENTINELS) {
        decoded = decoded.replace(token, raw);
    }

    if quirk == Quirk::EscapedQuotes {
        decoded = decoded
            .replace("\\\"", "\"")
            .replace("\\\u{201C}", "\u{201C}")
            .replace("\\\u{201D}", "\u{201D}")
            .replace('"', " ");
    }

    // Exactly one layer of wrapping quotes, not recursive
    if decoded.len() >= 2 && decoded.starts_with('"') && decoded.ends_with('"') {
        decoded = decoded[1..decoded.len() - 1].to_string();
    }

    let decoded: String = decoded.nfc().collect();
    let decoded = NUMBERING_ARTIFACT.replace_all(&decoded, "");
    SPACE_RUNS.replace_all(decoded.trim(), " ").trim().to_string()
}
