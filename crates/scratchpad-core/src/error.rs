use thiserror::Error;

/// Errors raised by local draft operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Rejected input, such as an empty title
    #[error("Validation error: {0}")]
    Validation(String),

    /// A cached document address that does not name a document
    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    /// No draft with the given id
    #[error("Draft not found: {0}")]
    NotFound(String),
}
