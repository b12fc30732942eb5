//! Resume document readers for the supported snapshot formats

use crate::error::{AtsError, Result};
use crate::processing::document::ResumeDocument;
use std::path::Path;
use tokio::fs;

pub trait DocumentReader {
    fn read(&self, path: &Path) -> impl std::future::Future<Output = Result<ResumeDocument>> + Send;
}

pub struct JsonReader;

impl JsonReader {
    pub fn parse(&self, content: &str) -> Result<ResumeDocument> {
        Ok(serde_json::from_str(content)?)
    }
}

impl DocumentReader for JsonReader {
    async fn read(&self, path: &Path) -> Result<ResumeDocument> {
        let content = fs::read_to_string(path).await.map_err(AtsError::Io)?;
        self.parse(&content).map_err(|e| {
            AtsError::InvalidInput(format!("Failed to parse resume JSON '{}': {}", path.display(), e))
        })
    }
}

pub struct TomlReader;

impl TomlReader {
    pub fn parse(&self, content: &str) -> Result<ResumeDocument> {
        Ok(toml::from_str(content)?)
    }
}

impl DocumentReader for TomlReader {
    async fn read(&self, path: &Path) -> Result<ResumeDocument> {
        let content = fs::read_to_string(path).await.map_err(AtsError::Io)?;
        self.parse(&content).map_err(|e| {
            AtsError::InvalidInput(format!("Failed to parse resume TOML '{}': {}", path.display(), e))
        })
    }
}
