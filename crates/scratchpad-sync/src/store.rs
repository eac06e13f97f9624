//! Client side of the remote JSON document service.
//!
//! A document is created with `POST <base>` (the new address comes back in
//! the `Location` header), read with `GET <base>/<id>` and overwritten in
//! full with `PUT <base>/<id>`.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, LOCATION};
use scratchpad_core::Locator;

use crate::error::StoreError;

/// Public JSON blob service used when no other base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://jsonblob.com/api/jsonBlob";

/// Create, fetch and replace whole JSON documents
///
/// Every call is a single request; there is no retry and no partial update.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Store a new document and return its address
    async fn create(&self, document: &serde_json::Value) -> Result<Locator, StoreError>;

    /// Read a document
    async fn fetch(&self, blob_id: &str) -> Result<serde_json::Value, StoreError>;

    /// Overwrite a document, returning the store's acknowledgement
    async fn replace(
        &self,
        blob_id: &str,
        document: &serde_json::Value,
    ) -> Result<serde_json::Value, StoreError>;
}

/// HTTP client for a JSON blob service
pub struct JsonBlobClient {
    client: reqwest::Client,
    base_url: String,
}

impl JsonBlobClient {
    /// Create a client for the service at `base_url`, e.g.
    /// `https://jsonblob.com/api/jsonBlob`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn blob_url(&self, blob_id: &str) -> String {
        format!("{}/{}", self.base_url, blob_id)
    }

    /// Ensure the response has a success status code, keeping the body of
    /// a failed response for diagnostics.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Resolve the `Location` header of a create response into a locator.
    /// Relative locations are resolved against the request URL.
    fn locator_from(response: &reqwest::Response) -> Result<Locator, StoreError> {
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(StoreError::MissingLocation)?;

        let url = response
            .url()
            .join(location)
            .map(String::from)
            .unwrap_or_else(|_| location.to_string());

        Ok(Locator::parse(&url)?)
    }
}

#[async_trait]
impl DraftStore for JsonBlobClient {
    async fn create(&self, document: &serde_json::Value) -> Result<Locator, StoreError> {
        tracing::debug!(base_url = %self.base_url, "Creating document");

        let response = self
            .client
            .post(&self.base_url)
            .header(ACCEPT, "application/json")
            .json(document)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Self::locator_from(&response)
    }

    async fn fetch(&self, blob_id: &str) -> Result<serde_json::Value, StoreError> {
        tracing::debug!(blob_id, "Fetching document");

        let response = self
            .client
            .get(self.blob_url(blob_id))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn replace(
        &self,
        blob_id: &str,
        document: &serde_json::Value,
    ) -> Result<serde_json::Value, StoreError> {
        tracing::debug!(blob_id, "Replacing document");

        let response = self
            .client
            .put(self.blob_url(blob_id))
            .header(ACCEPT, "application/json")
            .json(document)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }
}
