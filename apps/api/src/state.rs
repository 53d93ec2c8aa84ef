use crate::config::Config;
use crate::extraction::pipeline::PipelineLimits;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request or per-document data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Bounds applied to every document the pipeline processes.
    pub limits: PipelineLimits,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let limits = PipelineLimits {
            max_text_chars: config.max_text_chars,
            max_inflated_bytes: config.max_inflated_bytes,
        };
        AppState { config, limits }
    }
}
