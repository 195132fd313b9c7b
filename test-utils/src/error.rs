use thiserror::Error;

/// Errors produced by the in-memory test source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TestError {
    /// The source was configured to fail, mimicking an API error response.
    #[error("source failure ({status}): {message}")]
    SourceFailure { status: u64, message: String },

    /// The requested order column does not exist on `TestRow`.
    #[error("unknown order column: {0}")]
    UnknownColumn(String),
}
