/*!
 * Tests for the placeholder codec
 */

use edutrans::text_codec::{decode, encode, Quirk};

/// Test that volatile characters become sentinel tokens
#[test]
fn test_encode_withSpecialCharacters_shouldEmitSentinels() {
    let encoded = encode("Hello, world! Done.");
    assert!(encoded.contains("__COMMA__"));
    assert!(encoded.contains("__EXCLAMATION__"));
    assert!(encoded.contains("__DOT__"));
    assert!(!encoded.contains(','));
    assert!(!encoded.contains('!'));
    assert!(!encoded.contains('.'));
}

/// Test that line breaks are tokenized rather than collapsed away
#[test]
fn test_encode_withLineBreaks_shouldTokenizeThem() {
    assert_eq!(encode("first\nsecond"), "first__NEWLINE__second");
}

/// Test that encoding trims surrounding whitespace
#[test]
fn test_encode_withSurroundingWhitespace_shouldTrim() {
    assert_eq!(encode("  plain text  "), "plain text");
}

/// Test the round-trip law on representative fragments
#[test]
fn test_decode_withEncodedText_shouldRoundTrip() {
    let samples = [
        "Hello, world.",
        "Isn't this (great)?",
        "Use path/to/exploit.py with --flag",
        "Mixed; punctuation & symbols = fun!",
    ];
    for sample in samples {
        assert_eq!(decode(&encode(sample), Quirk::None), sample);
    }
}

/// Test that both directions normalize decomposed characters to NFC
#[test]
fn test_codec_withDecomposedAccent_shouldNormalizeToNfc() {
    let decomposed = "Cafe\u{0301}";
    let composed = "Caf\u{e9}";
    assert_eq!(encode(decomposed), composed);
    assert_eq!(decode(decomposed, Quirk::None), composed);
}

/// Test that legacy angle-bracket tokens still decode
#[test]
fn test_decode_withLegacyTokens_shouldRestoreAngleBrackets() {
    assert_eq!(
        decode("__LESSTHAN__html__GREATERTHAN__", Quirk::None),
        "<html>"
    );
}

/// Test the chat-provider unescape pass
#[test]
fn test_decode_withEscapedQuotesQuirk_shouldUnescapeAndBlankQuotes() {
    let decoded = decode("He said \\\"hi\\\" loudly", Quirk::EscapedQuotes);
    assert_eq!(decoded, "He said hi loudly");
}

/// Test that exactly one layer of wrapping quotes is removed
#[test]
fn test_decode_withWrappingQuotes_shouldStripOneLayer() {
    assert_eq!(decode("\"wrapped\"", Quirk::None), "wrapped");
    assert_eq!(decode("\"\"wrapped\"\"", Quirk::None), "\"wrapped\"");
}

/// Test that stray numbering prefixes are removed
#[test]
fn test_decode_withNumberingArtifact_shouldStripIt() {
    assert_eq!(decode("1: Bonjour", Quirk::None), "Bonjour");
}

/// Test that space runs left by the cleanup passes are collapsed
#[test]
fn test_decode_withSpaceRuns_shouldCollapseThem() {
    assert_eq!(decode("a    b", Quirk::None), "a b");
}
