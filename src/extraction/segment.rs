use std::sync::LazyLock;

use regex::Regex;

/// Runs of terminal punctuation. Abbreviations and decimals are not
/// special-cased: "Dr. Smith" and "2.5 mg" both split.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Split raw note text into trimmed, non-empty candidate sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
