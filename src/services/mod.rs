pub mod aggregator;
pub mod stats;
pub mod telemetry;

use crate::config::{Config, DEFAULT_THRESHOLD_MS};
use telemetry::TelemetryStore;

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub telemetry: TelemetryStore,
    pub default_threshold_ms: f64,
}

impl AppState {
    pub fn new(telemetry: TelemetryStore) -> Self {
        Self {
            telemetry,
            default_threshold_ms: DEFAULT_THRESHOLD_MS,
        }
    }

    pub async fn from_config(config: &Config) -> Self {
        let telemetry = TelemetryStore::load_or_unavailable(&config.telemetry_path).await;
        Self {
            telemetry,
            default_threshold_ms: config.default_threshold_ms,
        }
    }
}
