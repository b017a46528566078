//! Text cleanup and tokenization

use crate::config::MatchingConfig;
use crate::processing::stopwords::StopWordList;
use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,\-+#]").expect("Invalid punctuation regex"));

/// Normalize extracted document text before analysis.
///
/// Collapses whitespace runs to a single space, then drops every character
/// that is not a word character, whitespace, or one of `. , - + #`.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    DISALLOWED_CHARS
        .replace_all(&collapsed, "")
        .trim()
        .to_string()
}

/// Lowercasing, stopword-filtering word tokenizer
#[derive(Debug, Clone)]
pub struct TextProcessor {
    stop_words: StopWordList,
    min_token_chars: usize,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new(StopWordList::Nltk, 3)
    }
}

impl TextProcessor {
    pub fn new(stop_words: StopWordList, min_token_chars: usize) -> Self {
        Self {
            stop_words,
            min_token_chars,
        }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.tokenizer_stop_words, config.min_token_chars)
    }

    /// Tokenize text into words using Unicode segmentation
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        lowered
            .unicode_words()
            .filter(|word| word.chars().count() >= self.min_token_chars)
            .filter(|word| !self.stop_words.contains(word))
            .map(str::to_string)
            .collect()
    }
}
