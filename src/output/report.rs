//! Report structures combining a match result with its suggestions

use crate::processing::matcher::MatchResult;
use crate::processing::suggestions::{generate_suggestions, CoverageLevel, MatchTier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs for one resume / job description comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: MatchResult,
    pub tier: MatchTier,
    pub coverage: CoverageLevel,
    pub suggestions: Vec<String>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_source: String,
    pub job_source: String,
    pub processing_time_ms: u64,
    pub version: String,
}

impl AnalysisReport {
    pub fn new(result: MatchResult, metadata: ReportMetadata) -> Self {
        let suggestions = generate_suggestions(&result);
        Self {
            tier: MatchTier::from_similarity(result.similarity_percentage),
            coverage: CoverageLevel::from_skill_match(result.skill_match_percentage),
            suggestions,
            result,
            metadata,
        }
    }
}

impl ReportMetadata {
    pub fn new(resume_source: impl Into<String>, job_source: impl Into<String>, processing_time_ms: u64) -> Self {
        Self {
            generated_at: Utc::now(),
            resume_source: resume_source.into(),
            job_source: job_source.into(),
            processing_time_ms,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
