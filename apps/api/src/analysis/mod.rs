// Scoring engine: skill matching, content/formatting/experience analysis,
// aggregation and suggestions. Everything below `handlers` is a pure function
// of (text, role) with no I/O and no shared mutable state.

pub mod aggregator;
pub mod bullets;
pub mod content;
pub mod encouragement;
pub mod experience;
pub mod formatting;
pub mod handlers;
pub mod pipeline;
pub mod review;
pub mod skill_matcher;
pub mod suggestions;

use thiserror::Error;

pub use pipeline::{analyze, AnalysisReport};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The document produced no text, usually because extraction failed upstream.
    #[error("Resume contains no readable text")]
    NoContent,
}
