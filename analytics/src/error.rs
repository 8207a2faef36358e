use thiserror::Error;

/// Result type for ingestion and parsing
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Failures at the data-ingestion boundary. Aggregations themselves never fail.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The payload was not valid JSON or did not have the expected shape
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The input could not be turned into a channel id
    #[error("not a recognised channel reference: {0}")]
    InvalidChannel(String),
}
