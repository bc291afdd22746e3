pub mod query;
pub mod stats;
pub mod telemetry;

pub use query::StatsQuery;
pub use stats::{MetricsResponse, RegionReport, RegionStats};
pub use telemetry::TelemetryRecord;
