//! Report rendering: console, JSON, Markdown and HTML

pub mod formatter;
pub mod report;

pub use formatter::{ReportGenerator, OutputFormatter};
pub use report::ReportEnvelope;
