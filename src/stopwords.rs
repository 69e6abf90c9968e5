use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

/// English stopword corpus (179 words, lowercase).
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
}

pub trait StopwordProvider {
    /// Lowercase stopwords for `language`.
    fn words_for(&self, language: Language) -> HashSet<String>;
}

/// Built-in word lists, optionally extended with user-supplied words.
#[derive(Debug, Clone, Default)]
pub struct BuiltinStopwords {
    extra: HashSet<String>,
}

impl BuiltinStopwords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words from a newline-separated file. Blank lines and `#` comments
    /// are skipped; words are lowercased.
    pub fn with_file(mut self, path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file {}", path.display()))?;
        self.extra.extend(parse_word_list(&raw));
        Ok(self)
    }
}

impl StopwordProvider for BuiltinStopwords {
    fn words_for(&self, language: Language) -> HashSet<String> {
        let base = match language {
            Language::English => ENGLISH,
        };
        base.iter()
            .map(|w| w.to_string())
            .chain(self.extra.iter().cloned())
            .collect()
    }
}

/// The built-in English set.
pub fn english() -> HashSet<String> {
    BuiltinStopwords::new().words_for(Language::English)
}

fn parse_word_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_lowercase)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_size() {
        let words = english();
        assert_eq!(words.len(), 179);
        assert!(words.contains("the"));
        assert!(words.contains("wouldn't"));
        assert!(words.iter().all(|w| *w == w.to_lowercase()));
    }

    #[test]
    fn word_list_parsing() {
        let words: Vec<_> = parse_word_list("# comment\n\n  Wikipedia \nEDIT\n").collect();
        assert_eq!(words, vec!["wikipedia", "edit"]);
    }

    #[test]
    fn extra_words_merged() {
        let provider = BuiltinStopwords {
            extra: ["retrieved".to_string()].into_iter().collect(),
        };
        let words = provider.words_for(Language::English);
        assert_eq!(words.len(), 180);
        assert!(words.contains("retrieved"));
    }

    #[test]
    fn missing_file_is_error() {
        let err = BuiltinStopwords::new()
            .with_file(Path::new("tests/fixtures/does-not-exist.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("does-not-exist.txt"));
    }
}
