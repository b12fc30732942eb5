//! CLI interface for the ATS scorer

use crate::config::OutputFormat;
use crate::processing::classifier::JobType;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ats-scorer")]
#[command(about = "Estimate how well a structured resume will pass ATS filters")]
#[command(long_about = "Score a resume document against a fixed ATS rubric, classify its job type, and list improvement tips and missing keywords")]
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
    /// Score a resume document
    Score {
        /// Path to resume document (JSON, TOML)
        resume: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show job type, tip categories and report metadata
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show the detected job type and its candidate keywords
    Classify {
        /// Path to resume document (JSON, TOML)
        resume: PathBuf,
    },

    /// List the curated keyword lists
    Keywords {
        /// Only show the list for this job type
        #[arg(short, long, value_parser = parse_job_type)]
        job_type: Option<JobType>,
    },

    /// Re-score a resume document whenever it changes on disk
    Watch {
        /// Path to resume document (JSON, TOML)
        resume: PathBuf,

        /// Poll interval in milliseconds (defaults to the configured value)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: Option<u64>,
    },

    /// Write an empty resume document skeleton
    Init {
        /// Destination path
        #[arg(default_value = "resume.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration
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
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

pub fn parse_job_type(value: &str) -> Result<JobType, String> {
    value.parse()
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
