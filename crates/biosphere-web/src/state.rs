//! Shared application state for the web server.

use std::sync::Arc;
use biosphere_config::BiosphereConfig;
use biosphere_ingestion::MeasurementSource;

/// Shared state injected into every Axum handler.
pub struct AppState {
    /// Validated at startup, read-only afterwards
    pub config: BiosphereConfig,
    pub sources: Vec<Arc<dyn MeasurementSource>>,
}

impl AppState {
    pub fn new(config: BiosphereConfig, sources: Vec<Arc<dyn MeasurementSource>>) -> Self {
        Self { config, sources }
    }
}

pub type SharedState = Arc<AppState>;
