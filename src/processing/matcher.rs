//! Feature-set matching between a resume and a job description

use crate::config::{Config, MatchingConfig};
use crate::error::{EmptyInput, Result, ScreenerError};
use crate::processing::keywords::KeywordExtractor;
use crate::processing::similarity::{to_percentage, SimilarityScorer};
use crate::processing::skills::SkillVocabulary;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Skills and keywords derived from one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    pub skills: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
}

impl FeatureSet {
    /// Union of skill tags and keywords
    pub fn features(&self) -> BTreeSet<String> {
        self.skills.union(&self.keywords).cloned().collect()
    }
}

/// Outcome of comparing one resume against one job description.
///
/// All skill lists are sorted. `matched_skills` and `missing_skills`
/// partition `jd_skills`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub skill_match_percentage: f64,
    pub similarity_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub total_matched: usize,
    pub total_required: usize,
}

/// Runs skill extraction, keyword extraction and similarity scoring
pub struct Matcher {
    vocabulary: Arc<SkillVocabulary>,
    keywords: KeywordExtractor,
    similarity: SimilarityScorer,
    config: MatchingConfig,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_vocabulary(SkillVocabulary::shared(), MatchingConfig::default())
    }
}

impl Matcher {
    pub fn new(config: &Config) -> Result<Self> {
        config.matching.validate()?;
        let vocabulary = SkillVocabulary::from_config(&config.skills)?;
        Ok(Self::with_vocabulary(vocabulary, config.matching.clone()))
    }

    pub fn with_vocabulary(vocabulary: Arc<SkillVocabulary>, config: MatchingConfig) -> Self {
        Self {
            vocabulary,
            keywords: KeywordExtractor::from_config(&config),
            similarity: SimilarityScorer::from_config(&config),
            config,
        }
    }

    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        self.vocabulary.extract(text)
    }

    /// Standalone keyword extraction with the configured standalone cap
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.top_keywords(text, self.config.standalone_keyword_top_n)
    }

    pub fn top_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        self.keywords.keywords(text, top_n)
    }

    pub fn feature_set(&self, text: &str) -> FeatureSet {
        FeatureSet {
            skills: self.extract_skills(text),
            keywords: self
                .keywords
                .keywords(text, self.config.match_keyword_top_n)
                .into_iter()
                .collect(),
        }
    }

    pub fn similarity_percentage(&self, resume_text: &str, jd_text: &str) -> f64 {
        self.similarity.percentage(resume_text, jd_text)
    }

    /// Like [`analyze`](Self::analyze), refusing empty inputs.
    ///
    /// Both texts are expected to be cleaned already.
    pub fn screen(&self, resume_text: &str, jd_text: &str) -> Result<MatchResult> {
        if resume_text.trim().is_empty() {
            return Err(ScreenerError::EmptyInput(EmptyInput::Resume));
        }
        if jd_text.trim().is_empty() {
            return Err(ScreenerError::EmptyInput(EmptyInput::JobDescription));
        }
        Ok(self.analyze(resume_text, jd_text))
    }

    /// Compare a resume against a job description
    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> MatchResult {
        let resume = self.feature_set(resume_text);
        let job = self.feature_set(jd_text);

        let resume_features = resume.features();
        let jd_features = job.features();

        let matched: BTreeSet<&String> = resume_features.intersection(&jd_features).collect();
        let missing: BTreeSet<&String> = jd_features.difference(&resume_features).collect();

        let skill_match_percentage = if jd_features.is_empty() {
            0.0
        } else {
            to_percentage(matched.len() as f64 / jd_features.len() as f64)
        };

        let similarity_percentage = self.similarity_percentage(resume_text, jd_text);

        debug!(
            "Matched {} of {} job features; similarity {}%",
            matched.len(),
            jd_features.len(),
            similarity_percentage
        );

        MatchResult {
            skill_match_percentage,
            similarity_percentage,
            matched_skills: job
                .skills
                .iter()
                .filter(|skill| matched.contains(skill))
                .cloned()
                .collect(),
            missing_skills: job
                .skills
                .iter()
                .filter(|skill| missing.contains(skill))
                .cloned()
                .collect(),
            resume_skills: resume.skills.into_iter().collect(),
            jd_skills: job.skills.into_iter().collect(),
            total_matched: matched.len(),
            total_required: jd_features.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Experienced Python developer with Docker and AWS skills";
    const JOB: &str = "Looking for Python developer with Docker, Kubernetes, and AWS experience";

    #[test]
    fn test_scenario_skills() {
        let result = Matcher::default().analyze(RESUME, JOB);

        assert_eq!(result.matched_skills, vec!["aws", "docker", "python"]);
        assert_eq!(result.missing_skills, vec!["kubernetes"]);
        assert_eq!(result.jd_skills, vec!["aws", "docker", "kubernetes", "python"]);
        assert_eq!(result.resume_skills, vec!["aws", "docker", "python"]);
    }

    #[test]
    fn test_scenario_with_unigram_and_bigram_keywords() {
        let result = Matcher::default().analyze(RESUME, JOB);

        // 7 unigrams + 6 bigrams on the job side; python, developer, docker,
        // aws, "python developer" and "developer docker" are shared
        assert_eq!(result.total_required, 13);
        assert_eq!(result.total_matched, 6);
        assert_eq!(result.skill_match_percentage, 46.15);
    }

    #[test]
    fn test_scenario_with_unigram_keywords() {
        let config = MatchingConfig {
            keyword_ngram_range: (1, 1),
            ..MatchingConfig::default()
        };
        let matcher = Matcher::with_vocabulary(SkillVocabulary::shared(), config);
        let result = matcher.analyze(RESUME, JOB);

        assert_eq!(result.total_required, 7);
        assert_eq!(result.total_matched, 4);
        assert!(result.skill_match_percentage > 50.0);
        assert_eq!(result.skill_match_percentage, 57.14);
    }

    #[test]
    fn test_empty_documents() {
        let result = Matcher::default().analyze("", "");

        assert_eq!(result.skill_match_percentage, 0.0);
        assert_eq!(result.similarity_percentage, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.total_required, 0);
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let result = Matcher::default().analyze("", JOB);

        assert_eq!(result.skill_match_percentage, 0.0);
        assert_eq!(result.similarity_percentage, 0.0);
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.missing_skills, result.jd_skills);
    }

    #[test]
    fn test_control_characters_and_non_ascii_input() {
        let result = Matcher::default().analyze(
            "\u{feff}Python\u{0}developer \u{1F680} Docker, caf\u{e9}",
            "\u{feff}Python, Kubernetes\u{0}",
        );

        assert_eq!(result.matched_skills, vec!["python"]);
        assert_eq!(result.missing_skills, vec!["kubernetes"]);
        assert!((0.0..=100.0).contains(&result.similarity_percentage));
    }

    #[test]
    fn test_identical_documents() {
        let result = Matcher::default().analyze(JOB, JOB);

        assert_eq!(result.skill_match_percentage, 100.0);
        assert_eq!(result.similarity_percentage, 100.0);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let matcher = Matcher::default();
        assert_eq!(matcher.analyze(RESUME, JOB), matcher.analyze(RESUME, JOB));
    }

    #[test]
    fn test_standalone_keyword_cap() {
        let matcher = Matcher::default();
        let text = (0..40)
            .map(|i| format!("term{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(matcher.extract_keywords(&text).len(), 20);
        assert_eq!(matcher.feature_set(&text).keywords.len(), 15);
    }

    #[test]
    fn test_screen_refuses_empty_inputs() {
        let matcher = Matcher::default();
        assert!(matches!(
            matcher.screen("  ", JOB),
            Err(ScreenerError::EmptyInput(EmptyInput::Resume))
        ));
        assert!(matches!(
            matcher.screen(RESUME, ""),
            Err(ScreenerError::EmptyInput(EmptyInput::JobDescription))
        ));
        assert!(matcher.screen(RESUME, JOB).is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::default();
        config.matching.similarity_max_features = 0;
        assert!(Matcher::new(&config).is_err());
    }
}
