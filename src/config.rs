//! Configuration management for the ATS scorer

use crate::error::{AtsError, Result};
use crate::processing::analyzer::ReportLimits;
use crate::processing::keywords::DEFAULT_MAX_KEYWORDS;
use crate::processing::rubric::DEFAULT_MAX_TIPS;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const MIN_WATCH_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputConfig,
    pub report: ReportConfig,
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub max_tips: usize,
    pub max_keywords: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Poll interval between modification checks, in milliseconds.
    pub interval_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                pretty_json: true,
            },
            report: ReportConfig {
                max_tips: DEFAULT_MAX_TIPS,
                max_keywords: DEFAULT_MAX_KEYWORDS,
            },
            watch: WatchConfig { interval_ms: 1000 },
        }
    }
}

impl WatchConfig {
    /// Poll interval for watch mode, preferring `override_ms` and never below 100ms.
    pub fn poll_interval(&self, override_ms: Option<u64>) -> Duration {
        let ms = override_ms.unwrap_or(self.interval_ms).max(MIN_WATCH_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| AtsError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            info!("No configuration at {}, writing defaults", config_path.display());
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Overwrite the file at `config_path` with the defaults.
    pub fn reset(config_path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(config_path)?;
        info!("Configuration reset at {}", config_path.display());
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-scorer")
            .join("config.toml")
    }

    pub fn report_limits(&self) -> ReportLimits {
        ReportLimits {
            max_tips: self.report.max_tips,
            max_keywords: self.report.max_keywords,
        }
    }
}
