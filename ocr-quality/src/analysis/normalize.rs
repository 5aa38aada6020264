//! Text normalization and tokenization

use regex::Regex;
use std::sync::LazyLock;

// `\s` alone misses the information separators U+001C..U+001F
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1c-\x1f]+").expect("whitespace pattern is valid"));

/// Collapse whitespace runs to a single space, trim, and lowercase.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN
        .replace_all(text, " ")
        .trim()
        .to_lowercase()
}

/// Whitespace-separated tokens of the normalized text
pub fn words(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Non-blank lines of `text`, each normalized.
///
/// Splits on the universal newline set, so `\r\n`, `\r`, form feeds and the
/// Unicode line/paragraph separators all end a line.
pub fn lines(text: &str) -> Vec<String> {
    text.split(is_line_break)
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
