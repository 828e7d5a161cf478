use std::sync::Arc;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the analysis cache for the life of the process.
    pub analyzer: Arc<ResumeAnalyzer>,
    pub config: Config,
}
