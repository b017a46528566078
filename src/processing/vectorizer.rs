//! TF-IDF term weighting over a small, explicit document set
//!
//! Weights follow the usual smoothed scheme: raw term counts multiplied by
//! `ln((1 + n) / (1 + df)) + 1`, each document row L2-normalized. When a
//! feature cap applies, terms are ranked by total count over all documents,
//! ties broken alphabetically, and the retained vocabulary is kept in
//! alphabetical order.

use crate::processing::outcome::{Degeneracy, Outcome};
use crate::processing::stopwords::StopWordList;
use log::debug;
use ndarray::{Array2, ArrayView1, Axis};
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// Tokens of two or more word characters
static TERM_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid term token regex"));

/// Turns a document into the n-gram terms counted by the vectorizer
#[derive(Debug, Clone)]
pub struct TermAnalyzer {
    stop_words: StopWordList,
    ngram_range: (usize, usize),
}

impl TermAnalyzer {
    pub fn new(stop_words: StopWordList, ngram_range: (usize, usize)) -> Self {
        Self {
            stop_words,
            ngram_range,
        }
    }

    pub fn analyze(&self, document: &str) -> Vec<String> {
        let lowered = document.to_lowercase();
        let tokens: Vec<&str> = TERM_TOKEN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(token))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n.max(1)..=max_n {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        terms
    }
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    analyzer: TermAnalyzer,
    max_features: Option<usize>,
}

/// Row-per-document weight matrix over an alphabetical vocabulary
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    weights: Array2<f64>,
}

impl TfidfVectorizer {
    pub fn new(analyzer: TermAnalyzer, max_features: Option<usize>) -> Self {
        Self {
            analyzer,
            max_features,
        }
    }

    /// Fit the vocabulary on `documents` and return their weight rows.
    ///
    /// Degenerates when no document contributes a single term.
    pub fn fit_transform(&self, documents: &[&str]) -> Outcome<TfidfMatrix> {
        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|document| {
                let mut counts = HashMap::new();
                for term in self.analyzer.analyze(document) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
        for document in &counts {
            for (term, count) in document {
                *totals.entry(term.as_str()).or_insert(0) += count;
            }
        }

        if totals.is_empty() {
            debug!("Vectorizer found no terms in {} documents", documents.len());
            return Outcome::Degenerate(Degeneracy::EmptyVocabulary);
        }

        let mut vocabulary: Vec<&str> = match self.max_features {
            Some(limit) if limit < totals.len() => {
                let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
                // Stable sort keeps alphabetical order among equal counts
                ranked.sort_by(|a, b| b.1.cmp(&a.1));
                ranked.truncate(limit);
                ranked.into_iter().map(|(term, _)| term).collect()
            }
            _ => totals.into_keys().collect(),
        };
        vocabulary.sort_unstable();

        let n_docs = documents.len();
        let mut weights = Array2::<f64>::zeros((n_docs, vocabulary.len()));
        for (row, document) in counts.iter().enumerate() {
            for (col, term) in vocabulary.iter().enumerate() {
                if let Some(&count) = document.get(*term) {
                    weights[[row, col]] = count as f64;
                }
            }
        }

        for mut column in weights.axis_iter_mut(Axis(1)) {
            let df = column.iter().filter(|&&w| w > 0.0).count() as f64;
            let idf = ((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0;
            column.mapv_inplace(|w| w * idf);
        }

        for mut row in weights.axis_iter_mut(Axis(0)) {
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|w| w / norm);
            }
        }

        Outcome::Computed(TfidfMatrix {
            vocabulary: vocabulary.into_iter().map(str::to_string).collect(),
            weights,
        })
    }
}

impl TfidfMatrix {
    pub fn into_vocabulary(self) -> Vec<String> {
        self.vocabulary
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.weights.row(index)
    }

    /// Cosine similarity of two document rows
    pub fn cosine(&self, a: usize, b: usize) -> Outcome<f64> {
        let (left, right) = (self.row(a), self.row(b));
        let norms = left.dot(&left).sqrt() * right.dot(&right).sqrt();
        if norms == 0.0 {
            return Outcome::Degenerate(Degeneracy::ZeroVector);
        }
        Outcome::Computed(left.dot(&right) / norms)
    }
}
