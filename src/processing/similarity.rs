//! Pairwise TF-IDF cosine similarity between resume and job description

use crate::config::MatchingConfig;
use crate::processing::outcome::Outcome;
use crate::processing::vectorizer::{TermAnalyzer, TfidfVectorizer};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("Invalid alphanumeric regex"));

/// Lowercase, blank out everything but `[a-z0-9]` and whitespace, collapse runs
pub fn normalize_for_similarity(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Round to two decimals and clamp into `[0, 100]`
pub fn to_percentage(ratio: f64) -> f64 {
    ((ratio * 100.0 * 100.0).round() / 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    vectorizer: TfidfVectorizer,
}

impl SimilarityScorer {
    pub fn from_config(config: &MatchingConfig) -> Self {
        let analyzer = TermAnalyzer::new(config.similarity_stop_words, config.similarity_ngram_range);
        Self {
            vectorizer: TfidfVectorizer::new(analyzer, Some(config.similarity_max_features)),
        }
    }

    /// Similarity percentage, or the reason none could be computed.
    ///
    /// The vector space is fitted on exactly this pair of documents.
    pub fn score(&self, resume: &str, job: &str) -> Outcome<f64> {
        let resume = normalize_for_similarity(resume);
        let job = normalize_for_similarity(job);

        let outcome = self
            .vectorizer
            .fit_transform(&[resume.as_str(), job.as_str()])
            .and_then(|matrix| matrix.cosine(0, 1))
            .map(to_percentage);

        if let Outcome::Degenerate(reason) = &outcome {
            debug!("Similarity degenerated: {:?}", reason);
        }
        outcome
    }

    /// Similarity percentage with degenerate pairs scored as 0.0
    pub fn percentage(&self, resume: &str, job: &str) -> f64 {
        self.score(resume, job).unwrap_or(0.0)
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::from_config(&MatchingConfig::default())
    }
}
