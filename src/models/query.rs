use serde::{Deserialize, Deserializer};

use crate::error::StatsError;

/// Decoded body of a `POST /` request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatsQuery {
    #[serde(default)]
    pub regions: Vec<String>,
    /// `None` only when the field is absent; an explicit `null` is rejected.
    #[serde(default, deserialize_with = "present_number")]
    pub threshold_ms: Option<f64>,
}

fn present_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Some)
}

impl StatsQuery {
    pub fn from_slice(body: &[u8]) -> Result<Self, StatsError> {
        serde_json::from_slice(body).map_err(|e| StatsError::MalformedRequest(e.to_string()))
    }

    pub fn threshold_or(&self, default: f64) -> f64 {
        self.threshold_ms.unwrap_or(default)
    }
}
