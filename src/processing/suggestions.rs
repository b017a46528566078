//! Improvement suggestions derived from a match result

use crate::processing::matcher::MatchResult;
use serde::{Deserialize, Serialize};

const GENERAL_TIPS: [&str; 3] = [
    "[TIP] Use exact keywords from the job description in your resume.",
    "[TIP] Quantify your achievements with numbers and metrics.",
    "[TIP] Tailor your resume for each job application.",
];

const PRIORITY_SKILL_COUNT: usize = 5;

/// Render a percentage with at least one decimal place: `100.0`, `46.15`
pub fn format_percentage(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{:.1}", percentage)
    } else {
        percentage.to_string()
    }
}

/// Overall assessment tier from the similarity percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl MatchTier {
    pub fn from_similarity(percentage: f64) -> Self {
        if percentage >= 80.0 {
            MatchTier::Excellent
        } else if percentage >= 60.0 {
            MatchTier::Good
        } else if percentage >= 40.0 {
            MatchTier::Moderate
        } else {
            MatchTier::Low
        }
    }

    fn message(&self) -> &'static str {
        match self {
            MatchTier::Excellent => {
                "[EXCELLENT] Excellent match! Your resume aligns very well with the job requirements."
            }
            MatchTier::Good => "[GOOD] Good match! Your resume shows strong alignment with the job.",
            MatchTier::Moderate => {
                "[MODERATE] Moderate match. Consider tailoring your resume more closely to the job description."
            }
            MatchTier::Low => "[LOW] Low match. Significant resume optimization needed for this role.",
        }
    }
}

/// Skill coverage level from the skill-match percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageLevel {
    Strong,
    Decent,
    Limited,
}

impl CoverageLevel {
    pub fn from_skill_match(percentage: f64) -> Self {
        if percentage >= 70.0 {
            CoverageLevel::Strong
        } else if percentage >= 50.0 {
            CoverageLevel::Decent
        } else {
            CoverageLevel::Limited
        }
    }

    fn message(&self, percentage: f64) -> String {
        let percentage = format_percentage(percentage);
        match self {
            CoverageLevel::Strong => format!(
                "[STRONG] Strong skill coverage: {}% of required skills matched.",
                percentage
            ),
            CoverageLevel::Decent => format!(
                "[DECENT] Decent skill coverage: {}% matched, but room for improvement.",
                percentage
            ),
            CoverageLevel::Limited => format!(
                "[LIMITED] Limited skill coverage: only {}% matched. Focus on adding key skills.",
                percentage
            ),
        }
    }
}

/// Ordered suggestions: assessment tier, coverage, missing skills, tips
pub fn generate_suggestions(result: &MatchResult) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(7);

    suggestions.push(
        MatchTier::from_similarity(result.similarity_percentage)
            .message()
            .to_string(),
    );
    suggestions.push(
        CoverageLevel::from_skill_match(result.skill_match_percentage)
            .message(result.skill_match_percentage),
    );

    let mut missing = result.missing_skills.chunks(PRIORITY_SKILL_COUNT);
    if let Some(priority) = missing.next() {
        suggestions.push(format!("[PRIORITY] Priority skills to add: {}", priority.join(", ")));
    }
    if let Some(further) = missing.next() {
        suggestions.push(format!("[LEARN] Also consider learning: {}", further.join(", ")));
    }

    suggestions.extend(GENERAL_TIPS.iter().map(|tip| tip.to_string()));
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(similarity: f64, skill_match: f64, missing: &[&str]) -> MatchResult {
        MatchResult {
            skill_match_percentage: skill_match,
            similarity_percentage: similarity,
            matched_skills: Vec::new(),
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            resume_skills: Vec::new(),
            jd_skills: missing.iter().map(|s| s.to_string()).collect(),
            total_matched: 0,
            total_required: missing.len(),
        }
    }

    #[test]
    fn test_tier_thresholds_are_inclusive() {
        assert_eq!(MatchTier::from_similarity(80.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_similarity(79.99), MatchTier::Good);
        assert_eq!(MatchTier::from_similarity(60.0), MatchTier::Good);
        assert_eq!(MatchTier::from_similarity(40.0), MatchTier::Moderate);
        assert_eq!(MatchTier::from_similarity(39.99), MatchTier::Low);

        assert_eq!(CoverageLevel::from_skill_match(70.0), CoverageLevel::Strong);
        assert_eq!(CoverageLevel::from_skill_match(50.0), CoverageLevel::Decent);
        assert_eq!(CoverageLevel::from_skill_match(49.99), CoverageLevel::Limited);
    }

    #[test]
    fn test_format_percentage_keeps_a_decimal() {
        assert_eq!(format_percentage(100.0), "100.0");
        assert_eq!(format_percentage(0.0), "0.0");
        assert_eq!(format_percentage(46.15), "46.15");
        assert_eq!(format_percentage(57.1), "57.1");
    }

    #[test]
    fn test_whole_percentages_in_coverage_line() {
        let suggestions = generate_suggestions(&result(100.0, 100.0, &[]));
        assert_eq!(
            suggestions[1],
            "[STRONG] Strong skill coverage: 100.0% of required skills matched."
        );

        let suggestions = generate_suggestions(&result(0.0, 0.0, &["aws"]));
        assert!(suggestions[1].contains("only 0.0% matched"));
    }

    #[test]
    fn test_minimal_suggestions() {
        let suggestions = generate_suggestions(&result(85.0, 75.5, &[]));

        assert_eq!(suggestions.len(), 5);
        assert!(suggestions[0].starts_with("[EXCELLENT]"));
        assert!(suggestions[1].starts_with("[STRONG]"));
        assert!(suggestions[1].contains("75.5%"));
        assert_eq!(&suggestions[2..], &GENERAL_TIPS.map(String::from)[..]);
    }

    #[test]
    fn test_priority_skills_line() {
        let suggestions = generate_suggestions(&result(45.0, 30.0, &["aws", "docker", "kubernetes"]));

        assert_eq!(suggestions.len(), 6);
        assert!(suggestions[0].starts_with("[MODERATE]"));
        assert!(suggestions[1].starts_with("[LIMITED]"));
        assert_eq!(suggestions[2], "[PRIORITY] Priority skills to add: aws, docker, kubernetes");
    }

    #[test]
    fn test_second_line_lists_items_six_to_ten() {
        let missing = [
            "a1", "a2", "a3", "a4", "a5", "b6", "b7", "b8", "b9", "b10", "c11", "c12",
        ];
        let suggestions = generate_suggestions(&result(10.0, 55.0, &missing));

        assert_eq!(suggestions.len(), 7);
        assert!(suggestions[0].starts_with("[LOW]"));
        assert!(suggestions[1].starts_with("[DECENT]"));
        assert_eq!(suggestions[2], "[PRIORITY] Priority skills to add: a1, a2, a3, a4, a5");
        assert_eq!(suggestions[3], "[LEARN] Also consider learning: b6, b7, b8, b9, b10");
        assert!(!suggestions.iter().any(|s| s.contains("c11")));
    }

    #[test]
    fn test_exactly_five_missing_has_no_second_line() {
        let suggestions = generate_suggestions(&result(65.0, 20.0, &["a", "b", "c", "d", "e"]));
        assert_eq!(suggestions.len(), 6);
        assert!(suggestions[0].starts_with("[GOOD]"));
    }
}
