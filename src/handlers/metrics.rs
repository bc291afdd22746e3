use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use super::AppError;
use crate::models::{MetricsResponse, StatsQuery};
use crate::services::{aggregator, AppState};

/// `POST /`: statistics for the requested regions.
///
/// The body is decoded here rather than with the `Json` extractor so that a
/// malformed body is reported like any other fault.
pub async fn region_metrics(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MetricsResponse>, AppError> {
    let query = StatsQuery::from_slice(&body)?;
    let threshold_ms = query.threshold_or(state.default_threshold_ms);

    let records = state.telemetry.records()?;
    let regions = aggregator::aggregate(records, query.regions.as_slice(), threshold_ms)?;

    tracing::debug!(
        requested = query.regions.len(),
        reported = regions.len(),
        threshold_ms,
        "Computed region metrics"
    );

    Ok(Json(MetricsResponse { regions }))
}
