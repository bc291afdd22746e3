use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One telemetry sample as found in the dataset file.
///
/// Every field is optional. A value of the wrong JSON type decodes as absent
/// rather than failing the whole load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TelemetryRecord {
    pub region: Option<String>,
    pub latency_ms: Option<f64>,
    pub uptime_pct: Option<f64>,
}

impl TelemetryRecord {
    pub fn new(region: &str, latency_ms: f64, uptime_pct: f64) -> Self {
        Self {
            region: Some(region.to_string()),
            latency_ms: Some(latency_ms),
            uptime_pct: Some(uptime_pct),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        // Older bundles name the uptime column `uptime`.
        let uptime_pct = obj
            .get("uptime_pct")
            .and_then(Value::as_f64)
            .or_else(|| obj.get("uptime").and_then(Value::as_f64));

        Self {
            region: obj.get("region").and_then(Value::as_str).map(str::to_string),
            latency_ms: obj.get("latency_ms").and_then(Value::as_f64),
            uptime_pct,
        }
    }

    pub fn is_in(&self, region: &str) -> bool {
        self.region.as_deref() == Some(region)
    }
}

impl<'de> Deserialize<'de> for TelemetryRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let record: TelemetryRecord = serde_json::from_value(json!({
            "region": "apac",
            "service": "checkout",
            "latency_ms": 152.31,
            "uptime_pct": 98.7,
            "timestamp": 20250301
        }))
        .unwrap();

        assert_eq!(record, TelemetryRecord::new("apac", 152.31, 98.7));
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let record: TelemetryRecord = serde_json::from_value(json!({ "region": "emea" })).unwrap();
        assert_eq!(record.region.as_deref(), Some("emea"));
        assert!(record.latency_ms.is_none());
        assert!(record.uptime_pct.is_none());
    }

    #[test]
    fn test_malformed_values_are_absent() {
        let record: TelemetryRecord = serde_json::from_value(json!({
            "region": 42,
            "latency_ms": "slow",
            "uptime_pct": null
        }))
        .unwrap();

        assert_eq!(record, TelemetryRecord::default());
    }

    #[test]
    fn test_uptime_alias() {
        let record: TelemetryRecord = serde_json::from_value(json!({
            "region": "amer",
            "latency_ms": 120,
            "uptime": 99.1
        }))
        .unwrap();
        assert_eq!(record.uptime_pct, Some(99.1));
        assert_eq!(record.latency_ms, Some(120.0));
    }

    #[test]
    fn test_uptime_pct_wins_over_alias() {
        let record = TelemetryRecord::from_value(&json!({ "uptime_pct": 97.0, "uptime": 12.0 }));
        assert_eq!(record.uptime_pct, Some(97.0));
    }

    #[test]
    fn test_non_object_element() {
        let records: Vec<TelemetryRecord> =
            serde_json::from_value(json!([1, "x", null, { "region": "apac" }])).unwrap();
        assert_eq!(records.len(), 4);
        assert!(records[..3].iter().all(|r| *r == TelemetryRecord::default()));
        assert!(records[3].is_in("apac"));
    }
}
