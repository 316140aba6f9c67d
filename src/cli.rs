//! CLI interface for talent-fit

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "talent-fit")]
#[command(about = "Deterministic job-candidate fit scoring")]
#[command(
    long_about = "Score candidate resumes against job requirements using skill matching, \
experience comparison, and a weighted fit formula with confidence and reasoning"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a candidate against a job description
    Score {
        /// Path to job description file (TXT, MD, or JSON with --structured)
        #[arg(short, long)]
        job: PathBuf,

        /// Path to candidate resume file (TXT, MD, or JSON with --structured)
        #[arg(short, long)]
        candidate: PathBuf,

        /// Treat inputs as structured JSON attributes instead of free text
        #[arg(long)]
        structured: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Show matched/missing skill lists and metadata
        #[arg(short, long)]
        detailed: bool,

        /// Save the rendered report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Extract structured attributes from a single file
    Extract {
        /// Path to input file (TXT or MD)
        #[arg(short, long)]
        input: PathBuf,

        /// What kind of document the input is
        #[arg(short, long, value_enum, default_value = "resume")]
        kind: DocumentKind,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentKind {
    Resume,
    Job,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
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
