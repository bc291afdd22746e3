pub mod health;
pub mod metrics;

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::error::StatsError;

/// Every request fault is reported as a 500 carrying the error message.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self
            .stats_error()
            .map(StatsError::kind)
            .unwrap_or("internal");
        tracing::warn!(kind, error = %self.0, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": self.0.to_string()
            })),
        ).into_response()
    }
}

impl AppError {
    pub fn stats_error(&self) -> Option<&StatsError> {
        self.0.downcast_ref()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
