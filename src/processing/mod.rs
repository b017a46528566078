//! Text processing and matching engine

pub mod keywords;
pub mod matcher;
pub mod outcome;
pub mod similarity;
pub mod skills;
pub mod stopwords;
pub mod suggestions;
pub mod text_processor;
pub mod vectorizer;

use log::debug;
use std::sync::LazyLock;

/// Load the stopword tables and compile the built-in skill vocabulary.
///
/// Idempotent; the first analysis would otherwise do this lazily.
pub fn initialize_language_assets() {
    let nltk = LazyLock::force(&stopwords::NLTK_ENGLISH).len();
    let sklearn = LazyLock::force(&stopwords::SKLEARN_ENGLISH).len();
    let vocabulary = skills::SkillVocabulary::shared();
    debug!(
        "Language assets ready: {} + {} stopwords, {} skills, {} synonym groups",
        nltk,
        sklearn,
        vocabulary.skill_count(),
        vocabulary.synonym_group_count()
    );
}
