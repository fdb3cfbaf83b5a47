use thiserror::Error;

/// Rejected exporter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key is empty")]
    EmptyApiKey,

    #[error("API key contains characters outside [A-Za-z0-9]")]
    MalformedApiKey,
}

/// Failures turning a `MetricEvent` into a submission document.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("event carries no fields, nothing to sample")]
    MissingField,

    #[error("field {field:?} value {value:?} is not a finite number")]
    InvalidNumber { field: String, value: String },
}

/// Failures carrying a document to the ingestion endpoint.
#[derive(Debug, Error)]
pub enum TransmitError {
    #[error("failed to encode submission body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("network failure during submission: {0}")]
    Network(#[from] ureq::Transport),
}

/// Any failure crossing the `MetricSink` boundary.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Transmit(#[from] TransmitError),
}
