//! Error handling for the ATS scorer
//!
//! The scoring engine itself never fails; these errors cover the outer
//! surfaces (loading documents, configuration, writing reports).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsError>;

impl From<toml::de::Error> for AtsError {
    fn from(err: toml::de::Error) -> Self {
        AtsError::TomlParse(err.to_string())
    }
}

impl From<askama::Error> for AtsError {
    fn from(err: askama::Error) -> Self {
        AtsError::OutputFormatting(err.to_string())
    }
}
