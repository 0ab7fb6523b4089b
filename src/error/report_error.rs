use thiserror::Error;

/// Represents all errors that can occur while delivering a result record.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The request could not be built, sent or decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The background delivery thread could not be started.
    #[error("could not start the report worker: {0}")]
    Worker(#[from] std::io::Error),
    /// The collector answered with a non-success status.
    #[error("collector responded with status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },
}
