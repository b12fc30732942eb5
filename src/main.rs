//! ATS scorer: heuristic ATS readiness scoring for structured resumes

use anyhow::{bail, Context};
use ats_scorer::cli::{self, Cli, Commands, ConfigAction};
use ats_scorer::config::Config;
use ats_scorer::input::DocumentLoader;
use ats_scorer::output::formatter::{save_report_to_file, suggest_filename};
use ats_scorer::output::{ReportEnvelope, ReportGenerator};
use ats_scorer::processing::analyzer::AtsEngine;
use ats_scorer::processing::classifier::JobType;
use ats_scorer::processing::document::ResumeDocument;
use ats_scorer::processing::keywords::{candidate_keywords, domain_keywords, GENERAL_KEYWORDS};
use clap::Parser;
use log::{error, info, warn};
use std::path::Path;
use std::process;
use std::time::{Duration, SystemTime};

const RESUME_EXTENSIONS: &[&str] = &["json", "toml"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    let engine = AtsEngine::with_limits(config.report_limits());

    match command {
        Commands::Score {
            resume,
            output,
            save,
            detailed,
        } => {
            let document = load_document(&resume).await?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };

            let envelope = ReportEnvelope::new(
                engine.analyze(&document),
                Some(resume.to_string_lossy().to_string()),
            );

            // Never write ANSI escapes into a saved file.
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                detailed || config.output.detailed,
                config.output.pretty_json,
                true,
            );
            let content = generator.generate_report(&envelope, &output_format)?;

            match save {
                Some(path) => {
                    let target = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &resume.to_string_lossy()))
                    } else {
                        path
                    };
                    save_report_to_file(&content, &target)
                        .with_context(|| format!("Failed to save report to {}", target.display()))?;
                    println!("Report saved to {}", target.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Classify { resume } => {
            let document = load_document(&resume).await?;
            let analysis = engine.analyze(&document);

            println!("Job type: {}", analysis.job_type);
            println!("Candidate keywords: {}", candidate_keywords(analysis.job_type).join(", "));
            if analysis.report.missing_keywords.is_empty() {
                println!("Missing keywords: none");
            } else {
                println!("Missing keywords: {}", analysis.report.missing_keywords.join(", "));
            }
        }

        Commands::Keywords { job_type } => {
            let job_types: Vec<JobType> = match job_type {
                Some(job_type) => vec![job_type],
                None => JobType::ALL.to_vec(),
            };

            for job_type in job_types {
                println!("{}: {}", job_type, domain_keywords(job_type).join(", "));
            }
            println!("\nAppended to every list: {}", GENERAL_KEYWORDS.join(", "));
        }

        Commands::Watch { resume, interval_ms } => {
            cli::validate_file_extension(&resume, RESUME_EXTENSIONS).map_err(anyhow::Error::msg)?;
            let interval = config.watch.poll_interval(interval_ms);
            watch_document(&engine, &resume, interval).await?;
        }

        Commands::Init { path, force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            ResumeDocument::write_skeleton(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote empty resume document to {}", path.display());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration: {}\n", config_path.display());
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Colored output: {}", config.output.color_output);
                println!("Pretty JSON: {}", config.output.pretty_json);
                println!("Max tips: {}", config.report.max_tips);
                println!("Max missing keywords: {}", config.report.max_keywords);
                println!("Watch interval: {}ms", config.watch.interval_ms);
            }

            Some(ConfigAction::Reset) => {
                Config::reset(config_path)?;
                println!("Configuration reset to defaults at {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

async fn load_document(path: &Path) -> anyhow::Result<ResumeDocument> {
    cli::validate_file_extension(path, RESUME_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("Resume file: {}", e))?;

    let mut loader = DocumentLoader::new();
    loader
        .load(path)
        .await
        .with_context(|| format!("Failed to load resume from {}", path.display()))
}

/// Poll the file's modification time and re-score on every change until Ctrl-C.
async fn watch_document(engine: &AtsEngine, path: &Path, interval: Duration) -> anyhow::Result<()> {
    let mut loader = DocumentLoader::new();
    let mut last_modified: Option<SystemTime> = None;

    info!("Watching {} every {}ms (Ctrl-C to stop)", path.display(), interval.as_millis());

    loop {
        match tokio::fs::metadata(path).await.and_then(|meta| meta.modified()) {
            Ok(modified) if last_modified != Some(modified) => {
                last_modified = Some(modified);
                match loader.reload(path).await {
                    Ok(document) => {
                        let report = engine.report(&document);
                        let next_tip = report
                            .tips
                            .first()
                            .map(|tip| tip.tip.as_str())
                            .unwrap_or("No tips, looking good");
                        println!("ATS score {}% | next: {}", report.score, next_tip);
                    }
                    Err(e) => warn!("Skipping unreadable snapshot: {}", e),
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Cannot stat {}: {}", path.display(), e),
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Stopped watching {}", path.display());
                break;
            }
        }
    }

    Ok(())
}
