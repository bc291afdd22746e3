use std::path::Path;

use crate::error::StatsError;
use crate::models::TelemetryRecord;

/// Telemetry loaded once at startup.
///
/// A failed load is kept rather than aborting the process, so that requests
/// can report it as `DataUnavailable`.
#[derive(Debug, Clone)]
pub struct TelemetryStore {
    records: Vec<TelemetryRecord>,
    load_error: Option<String>,
}

impl TelemetryStore {
    pub fn from_records(records: Vec<TelemetryRecord>) -> Self {
        Self {
            records,
            load_error: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            load_error: Some(reason.into()),
        }
    }

    pub fn from_json(raw: &[u8]) -> anyhow::Result<Self> {
        let records: Vec<TelemetryRecord> = serde_json::from_slice(raw)
            .map_err(|e| anyhow::anyhow!("Telemetry file is not a JSON array of records: {}", e))?;
        Ok(Self::from_records(records))
    }

    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json(&raw)
    }

    /// Like [`TelemetryStore::load`], but a failure becomes an unavailable store.
    pub async fn load_or_unavailable(path: &Path) -> Self {
        match Self::load(path).await {
            Ok(store) => {
                tracing::info!(
                    path = %path.display(),
                    records = store.records.len(),
                    "Telemetry loaded"
                );
                store
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Telemetry unavailable");
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn records(&self) -> Result<&[TelemetryRecord], StatsError> {
        if let Some(reason) = &self.load_error {
            return Err(StatsError::DataUnavailable(reason.clone()));
        }
        if self.records.is_empty() {
            return Err(StatsError::DataUnavailable(
                "telemetry collection is empty".to_string(),
            ));
        }
        Ok(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
