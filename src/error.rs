use thiserror::Error;

/// Failure kinds surfaced by the statistics pipeline.
///
/// A region without usable records is not an error; it is left out of the
/// report instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Telemetry data unavailable: {0}")]
    DataUnavailable(String),
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("Statistics out of range: {0}")]
    OutOfRange(String),
}

impl StatsError {
    pub fn kind(&self) -> &'static str {
        match self {
            StatsError::DataUnavailable(_) => "data_unavailable",
            StatsError::MalformedRequest(_) => "malformed_request",
            StatsError::OutOfRange(_) => "out_of_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            StatsError::DataUnavailable(String::new()).kind(),
            StatsError::MalformedRequest(String::new()).kind(),
            StatsError::OutOfRange(String::new()).kind(),
        ];
        assert_ne!(kinds[0], kinds[1]);
        assert_ne!(kinds[1], kinds[2]);
        assert_ne!(kinds[0], kinds[2]);
    }
}
