//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use crate::processing::stopwords::StopWordList;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub skills: SkillsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Parameters of the tokenizer, keyword extractor and similarity scorer.
///
/// The keyword path and the similarity path each carry their own stopword
/// list and n-gram range; the two are never unified implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Keyword cap used while building feature sets for matching
    pub match_keyword_top_n: usize,
    /// Keyword cap for standalone keyword extraction
    pub standalone_keyword_top_n: usize,
    pub keyword_ngram_range: (usize, usize),
    pub similarity_max_features: usize,
    pub similarity_ngram_range: (usize, usize),
    pub tokenizer_stop_words: StopWordList,
    pub similarity_stop_words: StopWordList,
    /// Tokens with fewer characters than this are dropped by the tokenizer
    pub min_token_chars: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub extra_skills: Vec<String>,
    pub extra_synonyms: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            match_keyword_top_n: 15,
            standalone_keyword_top_n: 20,
            keyword_ngram_range: (1, 2),
            similarity_max_features: 100,
            similarity_ngram_range: (1, 2),
            tokenizer_stop_words: StopWordList::Nltk,
            similarity_stop_words: StopWordList::Sklearn,
            min_token_chars: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl MatchingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.match_keyword_top_n == 0 || self.standalone_keyword_top_n == 0 {
            return Err(ScreenerError::Configuration(
                "keyword top_n values must be at least 1".to_string(),
            ));
        }
        if self.similarity_max_features == 0 {
            return Err(ScreenerError::Configuration(
                "similarity_max_features must be at least 1".to_string(),
            ));
        }
        for (name, (min_n, max_n)) in [
            ("keyword_ngram_range", self.keyword_ngram_range),
            ("similarity_ngram_range", self.similarity_ngram_range),
        ] {
            if min_n == 0 || min_n > max_n {
                return Err(ScreenerError::Configuration(format!(
                    "{} must satisfy 1 <= min <= max, got ({}, {})",
                    name, min_n, max_n
                )));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Load from an explicit path, or from the default location.
    ///
    /// A missing default file is created with default values; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ScreenerError::Configuration(format!(
                        "Config file does not exist: {}",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::load_from(&config_path)
                } else {
                    let config = Self::default();
                    config.save_to(&config_path)?;
                    Ok(config)
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.matching.validate()?;
        Ok(config)
    }

    /// Overwrite the file with defaults without reading what is there, so a
    /// file that no longer parses or validates can still be repaired.
    pub fn reset(path: Option<&Path>) -> Result<PathBuf> {
        let path = Self::resolve_path(path);
        Self::default().save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn resolve_path(path: Option<&Path>) -> PathBuf {
        path.map(Path::to_path_buf).unwrap_or_else(Self::config_path)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))
    }
}
