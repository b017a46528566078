//! Property tests for the matching pipeline

use proptest::prelude::*;
use resume_screener::processing::matcher::Matcher;
use resume_screener::processing::similarity::SimilarityScorer;
use resume_screener::processing::text_processor::clean_text;
use resume_screener::{generate_suggestions, MatchResult};
use std::collections::BTreeSet;

const WORDS: &[&str] = &[
    "python", "java", "javascript", "rust", "docker", "kubernetes", "k8s", "aws", "azure", "react",
    "node.js", "postgresql", "mongodb", "machine", "learning", "developer", "engineer", "senior",
    "experience", "with", "and", "the", "team", "building", "services", "api", "ci/cd", "git",
    "agile", "data", "analysis", "pipelines", "cloud", "testing",
];

fn arb_document() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(WORDS), 0..40).prop_map(|words| words.join(" "))
}

fn is_sorted(items: &[String]) -> bool {
    items.windows(2).all(|pair| pair[0] < pair[1])
}

fn check_result(result: &MatchResult) -> Result<(), TestCaseError> {
    prop_assert!((0.0..=100.0).contains(&result.skill_match_percentage));
    prop_assert!((0.0..=100.0).contains(&result.similarity_percentage));
    prop_assert!(result.total_matched <= result.total_required);

    prop_assert!(is_sorted(&result.matched_skills));
    prop_assert!(is_sorted(&result.missing_skills));
    prop_assert!(is_sorted(&result.resume_skills));
    prop_assert!(is_sorted(&result.jd_skills));

    let matched: BTreeSet<&String> = result.matched_skills.iter().collect();
    let missing: BTreeSet<&String> = result.missing_skills.iter().collect();
    let jd: BTreeSet<&String> = result.jd_skills.iter().collect();
    prop_assert!(matched.is_disjoint(&missing));
    prop_assert_eq!(matched.union(&missing).copied().collect::<BTreeSet<_>>(), jd);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_match_result_invariants(resume in arb_document(), job in arb_document()) {
        let result = Matcher::default().analyze(&resume, &job);
        check_result(&result)?;
    }

    #[test]
    fn prop_analysis_is_deterministic(resume in arb_document(), job in arb_document()) {
        let matcher = Matcher::default();
        prop_assert_eq!(matcher.analyze(&resume, &job), matcher.analyze(&resume, &job));
    }

    #[test]
    fn prop_similarity_is_symmetric(a in arb_document(), b in arb_document()) {
        let scorer = SimilarityScorer::default();
        prop_assert_eq!(scorer.percentage(&a, &b), scorer.percentage(&b, &a));
    }

    #[test]
    fn prop_skills_are_lowercase_vocabulary_terms(text in arb_document()) {
        let upper = text.to_uppercase();
        let matcher = Matcher::default();
        let skills = matcher.extract_skills(&upper);
        prop_assert_eq!(&skills, &matcher.extract_skills(&text));
        prop_assert!(skills.iter().all(|skill| skill.to_lowercase() == *skill));
    }

    #[test]
    fn prop_suggestion_count(resume in arb_document(), job in arb_document()) {
        let result = Matcher::default().analyze(&resume, &job);
        let suggestions = generate_suggestions(&result);
        prop_assert!((5..=7).contains(&suggestions.len()));
    }

    #[test]
    fn prop_analyze_is_total(resume in ".*", job in ".*") {
        let matcher = Matcher::default();
        for (resume, job) in [(resume.clone(), job.clone()), (clean_text(&resume), clean_text(&job))] {
            let result = matcher.analyze(&resume, &job);
            check_result(&result)?;
            prop_assert!((5..=7).contains(&generate_suggestions(&result).len()));
            prop_assert!(matcher.top_keywords(&resume, 20).len() <= 20);
        }
    }
}
