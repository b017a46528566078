//! Statistical keyword extraction over a single document

use crate::config::MatchingConfig;
use crate::processing::outcome::Outcome;
use crate::processing::stopwords::StopWordList;
use crate::processing::text_processor::TextProcessor;
use crate::processing::vectorizer::{TermAnalyzer, TfidfVectorizer};

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    processor: TextProcessor,
    ngram_range: (usize, usize),
}

impl KeywordExtractor {
    pub fn new(processor: TextProcessor, ngram_range: (usize, usize)) -> Self {
        Self {
            processor,
            ngram_range,
        }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(TextProcessor::from_config(config), config.keyword_ngram_range)
    }

    /// Up to `top_n` highest-weighted terms, in alphabetical order.
    ///
    /// The text goes through the tokenizer first; the vectorizer itself
    /// applies no further stopword list.
    pub fn extract(&self, text: &str, top_n: usize) -> Outcome<Vec<String>> {
        let processed = self.processor.tokenize(text).join(" ");
        let vectorizer = TfidfVectorizer::new(
            TermAnalyzer::new(StopWordList::None, self.ngram_range),
            Some(top_n),
        );

        vectorizer
            .fit_transform(&[processed.as_str()])
            .map(|matrix| matrix.into_vocabulary())
    }

    /// Like [`extract`](Self::extract), with degenerate input mapped to no keywords
    pub fn keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        self.extract(text, top_n).unwrap_or_default()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::from_config(&MatchingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::outcome::Degeneracy;

    #[test]
    fn test_keyword_extraction() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.keywords(
            "Rust Rust programming language. Rust is memory safe. Programming with Rust is fun.",
            5,
        );

        assert!(keywords.len() <= 5);
        assert!(keywords.contains(&"rust".to_string()));
        assert!(keywords.contains(&"programming".to_string()));
    }

    #[test]
    fn test_bigrams_are_candidates() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.keywords("distributed systems distributed systems engineer", 20);
        assert!(keywords.contains(&"distributed systems".to_string()));
    }

    #[test]
    fn test_output_is_sorted_and_capped() {
        let extractor = KeywordExtractor::default();
        let text = "alpha beta gamma delta epsilon zeta theta iota kappa lambda omicron sigma";
        let keywords = extractor.keywords(text, 7);
        assert_eq!(keywords.len(), 7);
        let mut sorted = keywords.clone();
        sorted.sort();
        assert_eq!(keywords, sorted);
    }

    #[test]
    fn test_stopword_only_input_is_degenerate() {
        let extractor = KeywordExtractor::default();
        assert_eq!(
            extractor.extract("the and of it is", 20),
            Outcome::Degenerate(Degeneracy::EmptyVocabulary)
        );
        assert!(extractor.keywords("", 20).is_empty());
    }
}
