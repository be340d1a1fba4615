use aws_smithy_types::error::operation::BuildError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("page {page} is truncated but carries no continuation cursor")]
    MissingCursor { page: usize },
    #[error("listing exceeded the limit of {0} pages")]
    PageLimitExceeded(usize),
    #[error("invalid value {value:?} for setting {key}")]
    Config { key: &'static str, value: String },
    #[error("failed to build request: {0}")]
    Build(#[from] BuildError),
    #[error("aws-sdk error: {0}")]
    SdkError(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Return true if the service broke its own truncation/cursor contract.
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, Self::MissingCursor { .. })
    }
}
