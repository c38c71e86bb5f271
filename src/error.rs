use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("summary metric '{metric}' has no sample at percentile {percentile}")]
    MissingPercentileBoundary { metric: String, percentile: f64 },

    #[error("invalid attribute '{0}', expected key=value")]
    InvalidAttribute(String),

    #[error("couldn't parse timestamp '{0}'")]
    InvalidTimestamp(String, #[source] chrono::ParseError),

    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    #[error("I/O failed")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn missing_percentile<N: Into<String>>(metric: N, percentile: f64) -> Self {
        Error::MissingPercentileBoundary {
            metric: metric.into(),
            percentile,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
