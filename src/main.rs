//! Talent-fit: deterministic job-candidate fit scoring tool

mod cli;
mod config;
mod error;
mod extraction;
mod input;
mod output;
mod scoring;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, DocumentKind};
use config::Config;
use error::{Result, TalentFitError};
use extraction::{AttributeExtractor, HeuristicExtractor, StructuredExtractor};
use input::InputManager;
use log::{error, info};
use output::{formatter_for, ScoreReport};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            job,
            candidate,
            structured,
            output,
            detailed,
            save,
        } => {
            info!("Starting fit scoring");

            let allowed = if structured {
                &["json"][..]
            } else {
                &["txt", "md", "json"][..]
            };
            cli::validate_file_extension(&job, allowed)
                .map_err(|e| TalentFitError::InvalidInput(format!("Job file: {}", e)))?;
            cli::validate_file_extension(&candidate, allowed)
                .map_err(|e| TalentFitError::InvalidInput(format!("Candidate file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(TalentFitError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;
            let candidate_text = input_manager.extract_text(&candidate).await?;

            let (job_attrs, candidate_attrs) = if structured {
                let extractor = StructuredExtractor::new();
                (
                    extractor.extract(&job_text)?,
                    extractor.extract(&candidate_text)?,
                )
            } else {
                let extractor = HeuristicExtractor::with_custom_skills(
                    config.extraction.additional_skills.clone(),
                )?;
                (
                    extractor.extract(&job_text)?,
                    extractor.extract(&candidate_text)?,
                )
            };

            info!(
                "Extracted {} job skills, {} candidate skills",
                job_attrs.skills.len(),
                candidate_attrs.skills.len()
            );

            let result = scoring::score(&job_attrs, &candidate_attrs);
            let report = ScoreReport::new(
                job.to_string_lossy().to_string(),
                candidate.to_string_lossy().to_string(),
                job_attrs,
                candidate_attrs,
                result,
            );

            let use_colors = config.output.color_output && save.is_none();
            let formatter = formatter_for(
                &output_format,
                use_colors,
                detailed || config.output.detailed,
            );
            let rendered = formatter.format_report(&report)?;

            match save {
                Some(path) => {
                    tokio::fs::write(&path, &rendered).await?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Extract { input, kind } => {
            cli::validate_file_extension(&input, &["txt", "md"])
                .map_err(|e| TalentFitError::InvalidInput(format!("Input file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let text = input_manager.extract_text(&input).await?;

            let extractor =
                HeuristicExtractor::with_custom_skills(config.extraction.additional_skills)?;

            let rendered = match kind {
                DocumentKind::Resume => {
                    let profile = extractor.extract_candidate_profile(&text)?;
                    serde_json::to_string_pretty(&profile)?
                }
                DocumentKind::Job => {
                    let posting = extractor.extract_job_posting(&text)?;
                    serde_json::to_string_pretty(&posting)?
                }
            };

            println!("{}", rendered);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
                println!(
                    "Additional skills: {}",
                    if config.extraction.additional_skills.is_empty() {
                        "(none)".to_string()
                    } else {
                        config.extraction.additional_skills.join(", ")
                    }
                );
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
