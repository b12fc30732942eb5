//! Report envelope handed to the output formatters

use crate::processing::analyzer::AtsAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An analysis plus where and when it was produced.
///
/// The wrapped analysis is a pure function of the document; only the
/// metadata varies between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEnvelope {
    pub analysis: AtsAnalysis,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the scorer used
    pub scorer_version: String,

    /// Resume file analyzed, if the document came from disk
    pub source: Option<String>,
}

impl ReportEnvelope {
    pub fn new(analysis: AtsAnalysis, source: Option<String>) -> Self {
        Self {
            analysis,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scorer_version: env!("CARGO_PKG_VERSION").to_string(),
                source,
            },
        }
    }

    pub fn generated_at_display(&self) -> String {
        self.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }

    pub fn source_display(&self) -> &str {
        self.metadata.source.as_deref().unwrap_or("<in-memory document>")
    }
}
