//! Resume screener: resume and job description skill-gap analyzer

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_screener::cli::{self, Cli, Commands, ConfigAction, SAMPLE_JOB_DESCRIPTION};
use resume_screener::config::{Config, OutputFormat};
use resume_screener::input::file_detector::FileType;
use resume_screener::input::InputManager;
use resume_screener::output::{save_report_to_file, AnalysisReport, ReportGenerator, ReportMetadata};
use resume_screener::processing::initialize_language_assets;
use resume_screener::processing::matcher::Matcher;
use resume_screener::processing::text_processor::clean_text;
use resume_screener::{Result, ScreenerError};
use std::path::Path;
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run_command(cli.command, cli.config.as_deref()).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

// Each command loads the configuration itself; `config reset` and `config path`
// never read it, so an invalid file does not lock them out.
async fn run_command(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            sample_job: _,
            output,
            save,
            detailed,
        } => {
            let config = Config::load(config_path)?;
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ScreenerError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            cli::validate_file_extension(&resume, FileType::supported_extensions())
                .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;

            initialize_language_assets();
            let input_manager = InputManager::new();

            info!("Extracting resume text from {}", resume.display());
            let resume_text = clean_text(&input_manager.extract_text(&resume).await?);

            let (job_source, raw_job_text) = match (job, job_text) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, FileType::supported_extensions())
                        .map_err(|e| ScreenerError::InvalidInput(format!("Job description file: {}", e)))?;
                    let text = input_manager.extract_text(&path).await?;
                    (path.display().to_string(), text)
                }
                (None, Some(text)) => ("inline text".to_string(), text),
                (None, None) => ("sample job description".to_string(), SAMPLE_JOB_DESCRIPTION.to_string()),
            };
            let job_text = clean_text(&raw_job_text);

            let matcher = Matcher::new(&config)?;

            let spinner = (output_format == OutputFormat::Console).then(|| {
                let spinner = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
                    spinner.set_style(style);
                }
                spinner.set_message("Analyzing your resume...");
                spinner.enable_steady_tick(Duration::from_millis(100));
                spinner
            });

            let started = Instant::now();
            let result = matcher.screen(&resume_text, &job_text);
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
            let result = result?;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            info!(
                "Analysis complete: skill match {}%, similarity {}%",
                result.skill_match_percentage, result.similarity_percentage
            );

            let metadata = ReportMetadata::new(resume.display().to_string(), job_source, elapsed_ms);
            let report = AnalysisReport::new(result, metadata);

            // Saved files never carry ANSI color codes
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Keywords { input, top_n } => {
            let config = Config::load(config_path)?;
            initialize_language_assets();
            let text = clean_text(&InputManager::new().extract_text(&input).await?);
            if text.is_empty() {
                return Err(ScreenerError::InvalidInput(format!("{} contains no text", input.display())));
            }

            let top_n = top_n.unwrap_or(config.matching.standalone_keyword_top_n);
            if top_n == 0 {
                return Err(ScreenerError::InvalidInput("top-n must be at least 1".to_string()));
            }

            let matcher = Matcher::new(&config)?;
            let keywords = matcher.top_keywords(&text, top_n);
            if keywords.is_empty() {
                println!("No keywords found");
            }
            for keyword in keywords {
                println!("{}", keyword);
            }
        }

        Commands::Skills { input } => {
            let config = Config::load(config_path)?;
            initialize_language_assets();
            let text = clean_text(&InputManager::new().extract_text(&input).await?);

            let matcher = Matcher::new(&config)?;
            let skills = matcher.extract_skills(&text);
            if skills.is_empty() {
                println!("None detected");
            }
            for skill in skills {
                println!("{}", skill);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let config = Config::load(config_path)?;
                println!("# {}", Config::resolve_path(config_path).display());
                print!("{}", config.to_toml()?);
            }

            Some(ConfigAction::Reset) => {
                let path = Config::reset(config_path)?;
                println!("Configuration reset to defaults: {}", path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::resolve_path(config_path).display());
            }
        },
    }

    Ok(())
}
