//! ATS scorer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{AtsError, Result};
pub use processing::analyzer::{compute_ats_report, AtsAnalysis, AtsEngine, ReportLimits, ScoreRating, ScoreReport};
pub use processing::classifier::JobType;
pub use processing::document::ResumeDocument;
