use crate::config::RunshotConfig;

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: RunshotConfig,
}

impl AppState {
    pub fn new(config: RunshotConfig) -> Self {
        Self { config }
    }
}
