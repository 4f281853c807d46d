// file: src/extractor/vocabulary.rs
// description: fixed keyword vocabulary and matcher construction
// reference: log severity and outcome terminology

use crate::error::{ExtractorError, Result};
use regex::Regex;

/// Default log-severity/outcome vocabulary. Extend through configuration
/// (`extraction.keywords`), not by editing scan logic.
pub const DEFAULT_KEYWORDS: [&str; 8] = [
    "error",
    "failed",
    "denied",
    "timeout",
    "exception",
    "forbidden",
    "unauthorized",
    "refused",
];

pub fn default_vocabulary() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

/// Compiles a case-insensitive whole-word alternation over the vocabulary.
/// Words are escaped literally, so vocabulary entries can never inject
/// pattern syntax.
pub fn build_keyword_regex(words: &[String]) -> Result<Regex> {
    if words.is_empty() {
        return Err(ExtractorError::Config(
            "keyword vocabulary must not be empty".to_string(),
        ));
    }

    if words.iter().any(|w| w.trim().is_empty()) {
        return Err(ExtractorError::Config(
            "keyword vocabulary contains a blank entry".to_string(),
        ));
    }

    let alternation = words
        .iter()
        .map(|w| regex::escape(&w.to_lowercase()))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
        .map_err(|e| ExtractorError::Config(format!("invalid keyword vocabulary: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_compiles() {
        let re = build_keyword_regex(&default_vocabulary()).unwrap();
        assert!(re.is_match("Connection DENIED"));
        assert!(re.is_match("request failed"));
        assert!(!re.is_match("failure"));
    }

    #[test]
    fn test_whole_word_matching() {
        let re = build_keyword_regex(&default_vocabulary()).unwrap();
        // "error" must not match inside "terrors"
        assert!(!re.is_match("night terrors"));
        assert!(re.is_match("an error occurred"));
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        assert!(build_keyword_regex(&[]).is_err());
        assert!(build_keyword_regex(&["  ".to_string()]).is_err());
    }

    #[test]
    fn test_custom_words_escaped() {
        let words = vec!["seg.fault".to_string()];
        let re = build_keyword_regex(&words).unwrap();
        assert!(re.is_match("got seg.fault here"));
        // the dot is literal, not a wildcard
        assert!(!re.is_match("got segXfault here"));
    }
}
