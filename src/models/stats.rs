use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RegionStats {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

impl RegionStats {
    /// JSON has no encoding for infinities or NaN.
    pub fn is_finite(&self) -> bool {
        self.avg_latency.is_finite() && self.p95_latency.is_finite() && self.avg_uptime.is_finite()
    }
}

/// Region statistics keyed by region, in the order the regions were requested.
///
/// Serializes as a JSON object. Inserting a region that is already present is
/// a no-op, so a duplicated request keeps its first position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionReport {
    entries: Vec<(String, RegionStats)>,
}

impl RegionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, region: &str, stats: RegionStats) -> bool {
        if self.contains(region) {
            return false;
        }
        self.entries.push((region.to_string(), stats));
        true
    }

    pub fn get(&self, region: &str) -> Option<&RegionStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, stats)| stats)
    }

    pub fn contains(&self, region: &str) -> bool {
        self.get(region).is_some()
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RegionReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (region, stats) in &self.entries {
            map.serialize_entry(region, stats)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MetricsResponse {
    pub regions: RegionReport,
}
