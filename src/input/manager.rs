//! Document loader with a per-path snapshot cache

use crate::error::{AtsError, Result};
use crate::input::document_reader::{DocumentReader, JsonReader, TomlReader};
use crate::input::file_detector::FileType;
use crate::processing::document::ResumeDocument;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct DocumentLoader {
    cache: HashMap<String, ResumeDocument>,
    enable_cache: bool,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load(&mut self, path: &Path) -> Result<ResumeDocument> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached document for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        self.read_and_cache(path, path_str).await
    }

    /// Re-read a document from disk, replacing any cached snapshot.
    pub async fn reload(&mut self, path: &Path) -> Result<ResumeDocument> {
        let path_str = path.to_string_lossy().to_string();
        self.cache.remove(&path_str);
        self.read_and_cache(path, path_str).await
    }

    async fn read_and_cache(&mut self, path: &Path, path_str: String) -> Result<ResumeDocument> {
        if !path.exists() {
            return Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let document = match self.detect_file_type(path)? {
            FileType::Json => {
                info!("Loading resume JSON: {}", path.display());
                JsonReader.read(path).await?
            }
            FileType::Toml => {
                info!("Loading resume TOML: {}", path.display());
                TomlReader.read(path).await?
            }
            FileType::Unknown => {
                return Err(AtsError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, document.clone());
        }

        Ok(document)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| AtsError::InvalidInput(format!("File has no extension: {}", path.display())))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}
