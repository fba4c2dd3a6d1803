use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; the scoring engine itself is stateless.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document-to-text collaborator. Default: `DocumentExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
}
