use scratchpad_core::{DraftError, SyncStatus};
use thiserror::Error;

/// Errors from a document store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-2xx status
    #[error("Document store error ({status}): {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body for debugging
        body: String,
    },

    /// A create succeeded but named no document
    #[error("Document store did not return a Location header")]
    MissingLocation,

    /// A create returned an address that does not name a document
    #[error("Document store returned an unusable location: {0}")]
    Location(#[from] DraftError),
}

impl StoreError {
    /// True when the store reported that the document does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Status { status: 404, .. })
    }
}

/// Errors surfaced by the draft manager
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Document store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Draft not found: {0}")]
    NotFound(String),

    #[error("Another operation is in progress (status: {status})")]
    Busy { status: SyncStatus },

    #[error("No remote document is loaded")]
    NoDocument,

    #[error("No draft is selected")]
    NoActiveDraft,

    #[error("Invalid document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<DraftError> for SyncError {
    fn from(err: DraftError) -> Self {
        match err {
            DraftError::Validation(msg) => SyncError::Validation(msg),
            DraftError::InvalidLocator(msg) => SyncError::InvalidLocator(msg),
            DraftError::NotFound(id) => SyncError::NotFound(id),
        }
    }
}
