//! ATS scoring engine
//!
//! Data flows one way: document → aggregated text → {classifier, rubric}
//! → keyword gaps → report. Nothing here mutates the input document.

pub mod document;
pub mod aggregator;
pub mod classifier;
pub mod rubric;
pub mod keywords;
pub mod analyzer;
