//! Skill vocabulary and canonical skill extraction

use crate::config::SkillsConfig;
use crate::error::{Result, ScreenerError};
use log::debug;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock};

/// Canonical skill name paired with the surface forms that imply it
const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    ("machine learning", &["ml", "machine learning", "machinelearning"]),
    ("artificial intelligence", &["ai", "artificial intelligence"]),
    ("javascript", &["js", "javascript", "java script"]),
    ("typescript", &["ts", "typescript"]),
    ("python", &["python", "py"]),
    ("rest api", &["rest", "restful", "rest api", "api"]),
    ("database", &["db", "database", "databases"]),
    ("sql", &["sql", "mysql", "postgresql", "postgres"]),
    ("nosql", &["nosql", "mongodb", "cassandra", "dynamodb"]),
    ("react", &["react", "reactjs", "react.js"]),
    ("angular", &["angular", "angularjs"]),
    ("vue", &["vue", "vuejs", "vue.js"]),
    ("node", &["node", "nodejs", "node.js"]),
    ("docker", &["docker", "containerization"]),
    ("kubernetes", &["k8s", "kubernetes"]),
    ("aws", &["aws", "amazon web services"]),
    ("azure", &["azure", "microsoft azure"]),
    ("gcp", &["gcp", "google cloud"]),
    ("ci/cd", &["ci/cd", "cicd", "continuous integration"]),
    ("git", &["git", "github", "gitlab", "version control"]),
];

const COMMON_SKILLS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "php",
    "swift", "kotlin", "go", "rust", "scala", "r",
    // Web
    "html", "css", "react", "angular", "vue", "node", "express", "django",
    "flask", "spring", "asp.net", "jquery",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
    "oracle", "dynamodb", "cassandra",
    // Cloud & DevOps
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "terraform",
    "ansible", "ci/cd", "git",
    // Data science & AI
    "machine learning", "deep learning", "nlp", "computer vision", "tensorflow",
    "pytorch", "scikit-learn", "pandas", "numpy", "data analysis",
    // Other
    "agile", "scrum", "rest api", "graphql", "microservices", "testing",
    "unit testing", "api", "linux", "bash",
];

static DEFAULT_VOCABULARY: LazyLock<Arc<SkillVocabulary>> = LazyLock::new(|| {
    let synonyms = SKILL_SYNONYMS
        .iter()
        .map(|(canonical, forms)| (*canonical, forms.to_vec()));
    let vocabulary = SkillVocabulary::build(COMMON_SKILLS.iter().copied(), synonyms)
        .expect("built-in skill vocabulary must compile");
    Arc::new(vocabulary)
});

/// A skill term anchored on word boundaries
#[derive(Debug, Clone)]
struct SkillPattern {
    term: String,
    regex: Regex,
}

impl SkillPattern {
    fn new(term: &str) -> Result<Self> {
        let term = term.trim().to_lowercase();
        let regex = Regex::new(&format!(r"\b{}\b", regex::escape(&term))).map_err(|e| {
            ScreenerError::Configuration(format!("Invalid skill term '{}': {}", term, e))
        })?;
        Ok(Self { term, regex })
    }

    fn is_match(&self, lowered: &str) -> bool {
        self.regex.is_match(lowered)
    }
}

#[derive(Debug, Clone)]
struct SynonymGroup {
    canonical: String,
    forms: Vec<SkillPattern>,
}

/// Read-only dictionary of direct skills and synonym groups.
///
/// Entries keep their declaration order; extensions from configuration are
/// appended after the built-in tables.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<SkillPattern>,
    synonyms: Vec<SynonymGroup>,
}

impl SkillVocabulary {
    /// The built-in vocabulary, compiled once per process
    pub fn shared() -> Arc<SkillVocabulary> {
        Arc::clone(&DEFAULT_VOCABULARY)
    }

    /// Build a vocabulary from direct skills and `(canonical, forms)` groups
    pub fn build<'a, S, G, F>(skills: S, synonyms: G) -> Result<Self>
    where
        S: IntoIterator<Item = &'a str>,
        G: IntoIterator<Item = (&'a str, F)>,
        F: IntoIterator<Item = &'a str>,
    {
        let skills = skills
            .into_iter()
            .map(SkillPattern::new)
            .collect::<Result<Vec<_>>>()?;

        let synonyms = synonyms
            .into_iter()
            .map(|(canonical, forms)| {
                Ok(SynonymGroup {
                    canonical: canonical.trim().to_lowercase(),
                    forms: forms
                        .into_iter()
                        .map(SkillPattern::new)
                        .collect::<Result<Vec<_>>>()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { skills, synonyms })
    }

    /// The built-in vocabulary extended with configured skills and synonyms.
    ///
    /// Returns the shared instance untouched when nothing is configured.
    pub fn from_config(config: &SkillsConfig) -> Result<Arc<SkillVocabulary>> {
        if config.extra_skills.is_empty() && config.extra_synonyms.is_empty() {
            return Ok(Self::shared());
        }

        let mut vocabulary = Self::shared().as_ref().clone();
        let extension = Self::build(
            config.extra_skills.iter().map(String::as_str),
            config
                .extra_synonyms
                .iter()
                .map(|(canonical, forms)| (canonical.as_str(), forms.iter().map(String::as_str))),
        )?;
        debug!(
            "Extending skill vocabulary with {} skills and {} synonym groups",
            extension.skills.len(),
            extension.synonyms.len()
        );
        vocabulary.skills.extend(extension.skills);
        vocabulary.synonyms.extend(extension.synonyms);
        Ok(Arc::new(vocabulary))
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn synonym_group_count(&self) -> usize {
        self.synonyms.len()
    }

    /// Extract the set of canonical skills mentioned in `text`
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        let mut found = BTreeSet::new();

        for skill in &self.skills {
            if skill.is_match(&lowered) {
                found.insert(skill.term.clone());
            }
        }

        for group in &self.synonyms {
            if group.forms.iter().any(|form| form.is_match(&lowered)) {
                found.insert(group.canonical.clone());
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn extract(text: &str) -> BTreeSet<String> {
        SkillVocabulary::shared().extract(text)
    }

    #[test]
    fn test_whole_word_matching() {
        let skills = extract("javascript developer");
        assert!(!skills.contains("java"));
        assert!(skills.contains("javascript"));

        let skills = extract("Java developer");
        assert!(skills.contains("java"));
    }

    #[test]
    fn test_synonym_canonicalization() {
        let skills = extract("Deployed services on k8s");
        assert!(skills.contains("kubernetes"));
        assert!(!skills.contains("k8s"));

        let skills = extract("k8s and Kubernetes operators");
        assert_eq!(skills.iter().filter(|s| *s == "kubernetes").count(), 1);
    }

    #[test]
    fn test_multi_word_skills() {
        let skills = extract("Applied Machine Learning and computer vision; AWS (Amazon Web Services)");
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("computer vision"));
        assert!(skills.contains("aws"));
    }

    #[test]
    fn test_direct_skill_and_synonym_overlap() {
        let skills = extract("Postgres and MySQL administration");
        // "mysql" is a direct skill and also implies "sql"
        assert!(skills.contains("mysql"));
        assert!(skills.contains("sql"));
    }

    #[test]
    fn test_punctuated_terms() {
        let skills = extract("Frontend with react.js, backend in node.js, CI/CD with Jenkins");
        assert!(skills.contains("react"));
        assert!(skills.contains("node"));
        assert!(skills.contains("ci/cd"));
        assert!(skills.contains("jenkins"));
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
        assert!(extract("   ").is_empty());
    }

    #[test]
    fn test_skills_are_lowercase() {
        for skill in extract("PYTHON, Docker, TERRAFORM, GraphQL") {
            assert_eq!(skill, skill.to_lowercase());
        }
    }

    #[test]
    fn test_from_config_extends_vocabulary() {
        let mut extra_synonyms = BTreeMap::new();
        extra_synonyms.insert("Elixir".to_string(), vec!["phoenix framework".to_string()]);
        let config = SkillsConfig {
            extra_skills: vec!["Erlang".to_string()],
            extra_synonyms,
        };

        let vocabulary = SkillVocabulary::from_config(&config).unwrap();
        let builtin = SkillVocabulary::shared();
        assert_eq!(vocabulary.skill_count(), builtin.skill_count() + 1);
        assert_eq!(vocabulary.synonym_group_count(), builtin.synonym_group_count() + 1);

        let skills = vocabulary.extract("Erlang services built with the Phoenix Framework");
        assert!(skills.contains("erlang"));
        assert!(skills.contains("elixir"));
    }

    #[test]
    fn test_from_config_without_extensions_reuses_shared() {
        let vocabulary = SkillVocabulary::from_config(&SkillsConfig::default()).unwrap();
        assert!(Arc::ptr_eq(&vocabulary, &SkillVocabulary::shared()));
    }
}
