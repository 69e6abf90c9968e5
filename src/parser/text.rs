use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Shortest `(`/`[` ... `)`/`]` run. Brackets need not match each other.
static ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[(\[].*?[)\]]").unwrap());
static PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\d\s'-]+").unwrap());

/// Heading text → section title: trim, strip annotations like `[edit]` or
/// `(disambiguation)`, trim again.
pub fn clean_title(raw: &str) -> String {
    ANNOTATION_RE
        .replace_all(raw.trim(), "")
        .trim()
        .to_string()
}

/// Tokenize a block's visible text and drop stopwords (case-insensitive).
/// Tokens keep their original case.
pub fn normalize_words(raw: &str, stopwords: &HashSet<String>) -> Vec<String> {
    let ascii: String = raw.trim().chars().filter(char::is_ascii).collect();
    let stripped = ANNOTATION_RE.replace_all(&ascii, "");
    let cleaned = PUNCT_RE.replace_all(&stripped, "");

    cleaned
        .split_whitespace()
        .filter(|w| !stopwords.contains(&w.to_lowercase()))
        .map(str::to_string)
        .collect()
}

// ── Tests ──
