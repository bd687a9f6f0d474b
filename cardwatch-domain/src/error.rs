use thiserror::Error;

/// Data-quality failures that abort a dashboard render.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid transaction date '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid {field} '{value}': {source}")]
    InvalidCoordinate {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
