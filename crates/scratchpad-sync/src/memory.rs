use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use scratchpad_core::Locator;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::DraftStore;

/// In-process document store
///
/// Behaves like the remote service: unknown ids are a 404 and every write
/// replaces the whole document. It can be switched offline to make every
/// call fail with a 503.
pub struct MemoryStore {
    base_url: String,
    documents: RwLock<HashMap<String, serde_json::Value>>,
    available: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store whose locators live under `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            documents: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Take the store on- or offline
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Store a document under a caller-chosen id
    pub async fn insert(&self, blob_id: impl Into<String>, document: serde_json::Value) {
        self.documents.write().await.insert(blob_id.into(), document);
    }

    /// Read a document without going through availability checks
    pub async fn get(&self, blob_id: &str) -> Option<serde_json::Value> {
        self.documents.read().await.get(blob_id).cloned()
    }

    /// Get document count
    pub async fn count(&self) -> usize {
        self.documents.read().await.len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Status {
                status: 503,
                body: "store offline".to_string(),
            })
        }
    }

    fn not_found(blob_id: &str) -> StoreError {
        StoreError::Status {
            status: 404,
            body: format!("Document {} not found", blob_id),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory://local/api/jsonBlob")
    }
}

#[async_trait]
impl DraftStore for MemoryStore {
    async fn create(&self, document: &serde_json::Value) -> Result<Locator, StoreError> {
        self.check_available()?;

        let mut documents = self.documents.write().await;
        let mut blob_id = Uuid::new_v4().to_string();
        while documents.contains_key(&blob_id) {
            blob_id = Uuid::new_v4().to_string();
        }

        let locator = Locator::for_blob(&self.base_url, &blob_id)?;
        documents.insert(blob_id, document.clone());
        Ok(locator)
    }

    async fn fetch(&self, blob_id: &str) -> Result<serde_json::Value, StoreError> {
        self.check_available()?;
        self.get(blob_id)
            .await
            .ok_or_else(|| Self::not_found(blob_id))
    }

    async fn replace(
        &self,
        blob_id: &str,
        document: &serde_json::Value,
    ) -> Result<serde_json::Value, StoreError> {
        self.check_available()?;

        let mut documents = self.documents.write().await;
        match documents.get_mut(blob_id) {
            Some(existing) => {
                *existing = document.clone();
                Ok(document.clone())
            }
            None => Err(Self::not_found(blob_id)),
        }
    }
}
