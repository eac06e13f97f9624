//! Draft manager: the in-memory draft collection of one tool, kept in sync
//! with a remote document by whole-document writes.
//!
//! Status moves `loading -> idle` on initialize, `idle|error -> saving ->
//! idle|error` on save. Initialize and save are single flight: a second
//! call while one has a remote request outstanding fails with
//! [`SyncError::Busy`]. Every other operation is local.

use std::sync::Arc;

use chrono::Utc;
use scratchpad_core::{
    export_draft, share, Document, Draft, DraftBody, DraftCollection, ExportFile, Locator,
    SyncStatus, ToolVariant,
};
use tokio::sync::{broadcast, RwLock};

use crate::cache::LocatorCache;
use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::notice::Notice;
use crate::store::{DraftStore, JsonBlobClient};

const NOTICE_CAPACITY: usize = 64;

struct ManagerState<B> {
    status: SyncStatus,
    // Set while initialize or save has a remote call outstanding
    in_flight: bool,
    locator: Option<Locator>,
    drafts: DraftCollection<B>,
}

/// A resolved remote document and its drafts
struct Loaded<B> {
    locator: Locator,
    drafts: DraftCollection<B>,
}

/// Handle to the drafts of one tool
///
/// Clones share the same state, store and notice channel.
pub struct DraftManager<B: DraftBody> {
    config: Arc<SyncConfig>,
    store: Arc<dyn DraftStore>,
    cache: Arc<dyn LocatorCache>,
    state: Arc<RwLock<ManagerState<B>>>,
    notices: broadcast::Sender<Notice>,
}

impl<B: DraftBody> Clone for DraftManager<B> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            store: Arc::clone(&self.store),
            cache: Arc::clone(&self.cache),
            state: Arc::clone(&self.state),
            notices: self.notices.clone(),
        }
    }
}

impl<B: DraftBody> DraftManager<B> {
    pub fn new(
        config: SyncConfig,
        store: Arc<dyn DraftStore>,
        cache: Arc<dyn LocatorCache>,
    ) -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);
        Self {
            config: Arc::new(config),
            store,
            cache,
            state: Arc::new(RwLock::new(ManagerState {
                status: SyncStatus::Loading,
                in_flight: false,
                locator: None,
                drafts: DraftCollection::new(),
            })),
            notices,
        }
    }

    /// Manager talking HTTP to the service at `config.base_url`
    pub fn connect(config: SyncConfig, cache: Arc<dyn LocatorCache>) -> Self {
        let store = Arc::new(JsonBlobClient::new(config.base_url.clone()));
        Self::new(config, store, cache)
    }

    pub fn variant(&self) -> ToolVariant {
        B::VARIANT
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Subscribe to user-facing notices
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    pub async fn status(&self) -> SyncStatus {
        self.state.read().await.status
    }

    /// Address of the loaded document, if any
    pub async fn locator(&self) -> Option<Locator> {
        self.state.read().await.locator.clone()
    }

    /// Drafts for display, newest first
    pub async fn drafts(&self) -> Vec<Draft<B>> {
        let state = self.state.read().await;
        state.drafts.by_recency().into_iter().cloned().collect()
    }

    /// The selected draft, if any
    pub async fn active(&self) -> Option<Draft<B>> {
        self.state.read().await.drafts.active().cloned()
    }

    /// Copy of the whole in-memory collection
    pub async fn snapshot(&self) -> DraftCollection<B> {
        self.state.read().await.drafts.clone()
    }

    /// Resolve the remote document, creating it when needed
    ///
    /// A cached locator that cannot be parsed, fetched or decoded is cleared
    /// and replaced by a new document holding one seed draft. Only a failure
    /// to create that document is reported as an error.
    pub async fn initialize(&self) -> Result<(), SyncError> {
        {
            let mut state = self.state.write().await;
            if state.in_flight {
                return Err(SyncError::Busy {
                    status: state.status,
                });
            }
            state.in_flight = true;
            state.status = SyncStatus::Loading;
        }

        let result = self.load().await;

        let mut state = self.state.write().await;
        state.in_flight = false;
        match result {
            Ok(Loaded { locator, drafts }) => {
                tracing::info!(
                    variant = %B::VARIANT,
                    blob_id = locator.blob_id(),
                    drafts = drafts.len(),
                    "Drafts loaded"
                );
                state.locator = Some(locator);
                state.drafts = drafts;
                state.status = SyncStatus::Idle;
                Ok(())
            }
            Err(err) => {
                tracing::error!(variant = %B::VARIANT, "Failed to load drafts: {}", err);
                state.status = SyncStatus::Error;
                self.notify(Notice::error(
                    format!("Could not load {}", B::VARIANT.display_name()),
                    "The draft store could not be reached. Try again later.",
                ));
                Err(err)
            }
        }
    }

    /// Append a new empty draft and select it
    pub async fn create_draft(&self) -> Draft<B> {
        let mut state = self.state.write().await;
        state.drafts.create(Utc::now()).clone()
    }

    /// Replace a draft's content fields
    pub async fn edit_draft(&self, id: &str, body: B) -> Result<Draft<B>, SyncError> {
        let mut state = self.state.write().await;
        Ok(state.drafts.edit(id, body, Utc::now())?.clone())
    }

    /// Rename a draft; blank titles are rejected
    pub async fn rename_draft(&self, id: &str, title: &str) -> Result<Draft<B>, SyncError> {
        let mut state = self.state.write().await;
        Ok(state.drafts.rename(id, title, Utc::now())?.clone())
    }

    /// Make a draft the active one
    pub async fn select_draft(&self, id: &str) -> Result<(), SyncError> {
        let mut state = self.state.write().await;
        Ok(state.drafts.select(id)?)
    }

    /// Remove a draft; the next most recent one becomes active
    pub async fn delete_draft(&self, id: &str) -> Result<Draft<B>, SyncError> {
        let mut state = self.state.write().await;
        Ok(state.drafts.delete(id)?)
    }

    /// Push the whole collection to the remote document
    ///
    /// On failure the in-memory drafts are untouched and the save may be
    /// retried.
    pub async fn save(&self) -> Result<(), SyncError> {
        let (locator, document) = {
            let mut state = self.state.write().await;
            if state.in_flight || !state.status.can_save() {
                return Err(SyncError::Busy {
                    status: state.status,
                });
            }
            let locator = state.locator.clone().ok_or(SyncError::NoDocument)?;
            let document = state.drafts.to_document().to_value()?;
            state.in_flight = true;
            state.status = SyncStatus::Saving;
            (locator, document)
        };

        match self.store.replace(locator.blob_id(), &document).await {
            Ok(_) => {
                tokio::time::sleep(self.config.notice_delay).await;
                self.finish(SyncStatus::Idle).await;
                tracing::info!(variant = %B::VARIANT, blob_id = locator.blob_id(), "Drafts saved");
                self.notify(Notice::success(
                    "Saved",
                    format!("Your {} drafts are stored.", B::VARIANT.display_name()),
                ));
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    variant = %B::VARIANT,
                    blob_id = locator.blob_id(),
                    "Failed to save drafts: {}",
                    err
                );
                self.finish(SyncStatus::Error).await;
                self.notify(Notice::error(
                    "Save failed",
                    "Your changes are still here. Try saving again.",
                ));
                Err(err.into())
            }
        }
    }

    /// The active draft as a downloadable file
    pub async fn export(&self) -> Result<ExportFile, SyncError> {
        let state = self.state.read().await;
        let draft = state.drafts.active().ok_or(SyncError::NoActiveDraft)?;
        Ok(export_draft(draft))
    }

    /// Read-only viewer link for the active draft
    pub async fn share_link(&self, origin: &str) -> Result<String, SyncError> {
        if !B::VARIANT.supports_share() {
            return Err(SyncError::Validation(format!(
                "{} drafts cannot be shared individually",
                B::VARIANT.display_name()
            )));
        }

        let state = self.state.read().await;
        let locator = state.locator.as_ref().ok_or(SyncError::NoDocument)?;
        let draft = state.drafts.active().ok_or(SyncError::NoActiveDraft)?;
        Ok(share::draft_link(origin, B::VARIANT, locator.blob_id(), draft.id()))
    }

    /// Read-only viewer link for the whole document
    pub async fn view_link(&self, origin: &str) -> Result<String, SyncError> {
        let state = self.state.read().await;
        let locator = state.locator.as_ref().ok_or(SyncError::NoDocument)?;
        Ok(share::view_link(origin, B::VARIANT, locator.blob_id()))
    }

    async fn load(&self) -> Result<Loaded<B>, SyncError> {
        let key = B::VARIANT.locator_key();
        let cached = self.cache.get(key);
        let stale = cached.is_some();

        if let Some(url) = cached {
            match self.open(&url).await {
                Ok(loaded) => return Ok(loaded),
                Err(err) => {
                    tracing::warn!(locator = %url, "Cached document is unusable: {}", err);
                    // Other locators stay cached until a replacement exists
                    if matches!(err, SyncError::InvalidLocator(_)) {
                        if let Err(err) = self.cache.clear(key) {
                            tracing::warn!("Failed to clear invalid locator: {}", err);
                        }
                    }
                }
            }
        }

        let loaded = self.create_document().await?;
        if stale {
            self.notify(Notice::info(
                format!("{} recreated", B::VARIANT.display_name()),
                "The previous document could not be found, so a new one was created.",
            ));
        }
        Ok(loaded)
    }

    async fn open(&self, url: &str) -> Result<Loaded<B>, SyncError> {
        let locator = Locator::parse(url)?;
        let value = self.store.fetch(locator.blob_id()).await?;
        let mut drafts = DraftCollection::from_document(Document::<B>::from_value(value)?);

        if drafts.is_empty() {
            drafts.seed(Utc::now());
            let document = drafts.to_document().to_value()?;
            if let Err(err) = self.store.replace(locator.blob_id(), &document).await {
                tracing::warn!(blob_id = locator.blob_id(), "Failed to persist seed draft: {}", err);
                self.notify(Notice::warning(
                    "Starter draft not saved",
                    "A starter draft was created locally. Save to keep it.",
                ));
            }
        }

        Ok(Loaded { locator, drafts })
    }

    async fn create_document(&self) -> Result<Loaded<B>, SyncError> {
        let mut drafts = DraftCollection::new();
        drafts.seed(Utc::now());

        let document = drafts.to_document().to_value()?;
        let locator = self.store.create(&document).await?;
        tracing::info!(variant = %B::VARIANT, blob_id = locator.blob_id(), "Created document");

        if let Err(err) = self.cache.set(B::VARIANT.locator_key(), locator.url()) {
            tracing::warn!("Failed to cache locator: {}", err);
        }

        Ok(Loaded { locator, drafts })
    }

    async fn finish(&self, status: SyncStatus) {
        let mut state = self.state.write().await;
        state.in_flight = false;
        state.status = status;
    }

    fn notify(&self, notice: Notice) {
        // Ignore errors if no receivers
        let _ = self.notices.send(notice);
    }
}
