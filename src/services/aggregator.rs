use crate::error::StatsError;
use crate::models::{RegionReport, RegionStats, TelemetryRecord};
use crate::services::stats::{count_above, mean, percentile, round2};

pub const LATENCY_PERCENTILE: f64 = 95.0;

/// Computes statistics for each requested region over the preloaded records.
///
/// An empty collection is a hard failure. A region with no usable latency or
/// no usable uptime is omitted from the report.
pub fn aggregate<S: AsRef<str>>(
    records: &[TelemetryRecord],
    regions: &[S],
    threshold_ms: f64,
) -> Result<RegionReport, StatsError> {
    if records.is_empty() {
        return Err(StatsError::DataUnavailable(
            "telemetry collection is empty".to_string(),
        ));
    }

    let mut report = RegionReport::new();
    for region in regions {
        let region = region.as_ref();
        if report.contains(region) {
            continue;
        }
        if let Some(stats) = region_stats(records, region, threshold_ms) {
            if !stats.is_finite() {
                return Err(StatsError::OutOfRange(format!(
                    "region {} produced a non-finite statistic",
                    region
                )));
            }
            report.insert(region, stats);
        }
    }
    Ok(report)
}

pub fn region_stats(
    records: &[TelemetryRecord],
    region: &str,
    threshold_ms: f64,
) -> Option<RegionStats> {
    let mut latencies = Vec::new();
    let mut uptimes = Vec::new();

    for record in records.iter().filter(|r| r.is_in(region)) {
        if let Some(latency) = record.latency_ms {
            latencies.push(latency);
        }
        if let Some(uptime) = record.uptime_pct {
            uptimes.push(uptime);
        }
    }

    let avg_latency = mean(&latencies)?;
    let p95_latency = percentile(&latencies, LATENCY_PERCENTILE)?;
    let avg_uptime = mean(&uptimes)?;

    Some(RegionStats {
        avg_latency: round2(avg_latency),
        p95_latency: round2(p95_latency),
        avg_uptime: round2(avg_uptime),
        breaches: count_above(&latencies, threshold_ms),
    })
}
