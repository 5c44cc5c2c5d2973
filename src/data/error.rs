use thiserror::Error;

/// Reasons a source file cannot become a [`NormalizedTable`](super::model::NormalizedTable).
///
/// All of these are fatal at start-up.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The bytes could not be read or decoded as CSV.
    #[error("unreadable source: {0}")]
    UnreadableSource(#[from] csv::Error),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    /// Parsed as CSV, but the columns do not describe a set of time series.
    #[error("malformed source: {0}")]
    MalformedSource(String),
}

impl SourceError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        SourceError::MalformedSource(msg.into())
    }
}
