//! CLI interface for the resume screener

use crate::config::OutputFormat;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Job description offered when none is supplied
pub const SAMPLE_JOB_DESCRIPTION: &str = "\
Senior Python Developer

Requirements:
- 5+ years of experience in Python development
- Strong knowledge of Django and Flask frameworks
- Experience with REST API development
- Proficiency in SQL and NoSQL databases (PostgreSQL, MongoDB)
- Familiarity with cloud platforms (AWS, Azure)
- Experience with Docker and Kubernetes
- Knowledge of CI/CD pipelines
- Strong understanding of machine learning concepts
- Experience with Git version control
- Excellent problem-solving skills
- Bachelor's degree in Computer Science or related field

Nice to have:
- Experience with React or Angular
- Knowledge of microservices architecture
- Familiarity with Agile/Scrum methodologies
";

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Resume and job description skill-gap analyzer")]
#[command(long_about = "Compare a resume with a job description using skill extraction, TF-IDF keywords and cosine similarity")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a resume against a job description
    #[command(group(ArgGroup::new("job_source").required(true).args(["job", "job_text", "sample_job"])))]
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description passed inline
        #[arg(long)]
        job_text: Option<String>,

        /// Use the built-in sample job description
        #[arg(long)]
        sample_job: bool,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include score explanation and detected skills
        #[arg(short, long)]
        detailed: bool,
    },

    /// Extract the top TF-IDF keywords of a document
    Keywords {
        /// Path to document (PDF, DOCX, TXT, MD)
        input: PathBuf,

        /// Number of keywords (defaults to the configured standalone count)
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },

    /// List the canonical skills found in a document
    Skills {
        /// Path to document (PDF, DOCX, TXT, MD)
        input: PathBuf,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
