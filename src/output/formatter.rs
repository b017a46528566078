//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use crate::processing::suggestions::{format_percentage, MatchTier};
use colored::{Color, Colorize};
use std::path::Path;

const SCORE_BAR_WIDTH: usize = 40;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with colors and a score bar
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn tier_color(tier: MatchTier) -> Color {
        match tier {
            MatchTier::Excellent => Color::Green,
            MatchTier::Good => Color::Yellow,
            MatchTier::Moderate | MatchTier::Low => Color::Red,
        }
    }

    fn format_score_bar(&self, percentage: f64, tier: MatchTier) -> String {
        let filled = ((percentage / 100.0) * SCORE_BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(SCORE_BAR_WIDTH);
        let bar = format!(
            "{}{}",
            "#".repeat(filled),
            "-".repeat(SCORE_BAR_WIDTH - filled)
        );
        format!(
            "[{}] {}%",
            self.colorize(&bar, Self::tier_color(tier)),
            format_percentage(percentage)
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME MATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Scores", 2));
        output.push_str(&format!(
            "Skill Match:      {}%\n",
            format_percentage(result.skill_match_percentage)
        ));
        output.push_str(&format!(
            "Similarity Score: {}%\n",
            format_percentage(result.similarity_percentage)
        ));
        output.push_str(&format!("Matched Features: {} of {}\n", result.total_matched, result.total_required));
        output.push_str(&format!("Missing Skills:   {}\n", result.missing_skills.len()));
        output.push_str(&self.format_score_bar(result.similarity_percentage, report.tier));
        output.push('\n');

        if self.detailed {
            output.push_str(&self.format_header("Understanding the Scores", 3));
            output.push_str("Skill Match: share of the job's skills and top keywords found in the resume.\n");
            output.push_str("Similarity Score: TF-IDF cosine similarity of the two documents,\n");
            output.push_str("weighing distinctive terms over common ones.\n");
            output.push_str("A good match typically has both scores above 60%.\n");
        }

        output.push_str(&self.format_header("Matched Skills", 2));
        if result.matched_skills.is_empty() {
            output.push_str("No matched skills found\n");
        } else {
            for skill in &result.matched_skills {
                output.push_str(&format!("  {} {}\n", self.colorize("+", Color::Green), skill));
            }
        }

        output.push_str(&self.format_header("Missing Skills", 2));
        if result.missing_skills.is_empty() {
            output.push_str("No missing skills!\n");
        } else {
            for skill in &result.missing_skills {
                output.push_str(&format!("  {} {}\n", self.colorize("-", Color::Red), skill));
            }
        }

        output.push_str(&self.format_header("Improvement Suggestions", 2));
        for suggestion in &report.suggestions {
            output.push_str(&format!("  • {}\n", suggestion));
        }

        if self.detailed {
            output.push_str(&self.format_header("Detailed Analysis", 3));
            output.push_str(&format!(
                "Your Resume Skills: {}\n",
                join_or(&result.resume_skills, "None detected")
            ));
            output.push_str(&format!(
                "Job Description Requirements: {}\n",
                join_or(&result.jd_skills, "None detected")
            ));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_list(items: &[String], empty: &str) -> String {
        if items.is_empty() {
            format!("_{}_\n\n", empty)
        } else {
            let mut list: String = items.iter().map(|item| format!("- {}\n", item)).collect();
            list.push('\n');
            list
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# Resume Match Analysis\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.resume_source, report.metadata.job_source
            ));
        }

        output.push_str("## Scores\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Skill Match | {}% |\n",
            format_percentage(result.skill_match_percentage)
        ));
        output.push_str(&format!(
            "| Similarity Score | {}% |\n",
            format_percentage(result.similarity_percentage)
        ));
        output.push_str(&format!(
            "| Matched Features | {} of {} |\n",
            result.total_matched, result.total_required
        ));
        output.push_str(&format!("| Missing Skills | {} |\n\n", result.missing_skills.len()));

        output.push_str("## Matched Skills\n\n");
        output.push_str(&Self::markdown_list(&result.matched_skills, "No matched skills found"));

        output.push_str("## Missing Skills\n\n");
        output.push_str(&Self::markdown_list(&result.missing_skills, "No missing skills!"));

        output.push_str("## Improvement Suggestions\n\n");
        output.push_str(&Self::markdown_list(&report.suggestions, "No suggestions"));

        output.push_str("## Detected Skills\n\n");
        output.push_str(&format!(
            "**Your Resume Skills:** {}\n\n",
            join_or(&result.resume_skills, "None detected")
        ));
        output.push_str(&format!(
            "**Job Description Requirements:** {}\n",
            join_or(&result.jd_skills, "None detected")
        ));

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
