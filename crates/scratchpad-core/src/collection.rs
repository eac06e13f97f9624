use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::document::Document;
use crate::draft::{Draft, DraftBody};
use crate::error::DraftError;

/// Ordered in-memory set of drafts with an optional active selection
///
/// Storage order is insertion order. Wherever "most recently updated" is
/// asked for, ties on `updated_at` go to the draft inserted first.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftCollection<B> {
    drafts: Vec<Draft<B>>,
    active_id: Option<String>,
}

impl<B: DraftBody> Default for DraftCollection<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: DraftBody> DraftCollection<B> {
    /// Create an empty collection with nothing selected
    pub fn new() -> Self {
        Self {
            drafts: Vec::new(),
            active_id: None,
        }
    }

    /// Load drafts from a document and select the most recently updated
    ///
    /// Ids must be unique, so a repeated id keeps only its first draft.
    pub fn from_document(document: Document<B>) -> Self {
        let mut seen = HashSet::new();
        let mut drafts = Vec::with_capacity(document.drafts.len());
        for draft in document.drafts {
            if seen.insert(draft.id().to_string()) {
                drafts.push(draft);
            } else {
                tracing::warn!(id = draft.id(), "Dropping draft with duplicate id");
            }
        }

        let mut collection = Self {
            drafts,
            active_id: None,
        };
        collection.active_id = collection.most_recent().map(|d| d.id().to_string());
        collection
    }

    /// Snapshot the whole collection as a document
    pub fn to_document(&self) -> Document<B> {
        Document::new(self.drafts.clone())
    }

    /// Drafts in insertion order
    pub fn drafts(&self) -> &[Draft<B>] {
        &self.drafts
    }

    /// Drafts ordered for display, newest first
    pub fn by_recency(&self) -> Vec<&Draft<B>> {
        let mut sorted: Vec<&Draft<B>> = self.drafts.iter().collect();
        // Stable sort keeps insertion order among equal timestamps
        sorted.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
        sorted
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Get a draft by id
    pub fn get(&self, id: &str) -> Option<&Draft<B>> {
        self.drafts.iter().find(|d| d.id() == id)
    }

    /// The currently selected draft, if any
    pub fn active(&self) -> Option<&Draft<B>> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The draft with the latest `updated_at`
    pub fn most_recent(&self) -> Option<&Draft<B>> {
        self.drafts.iter().fold(None, |best: Option<&Draft<B>>, d| match best {
            Some(b) if b.updated_at() >= d.updated_at() => Some(b),
            _ => Some(d),
        })
    }

    /// Append a new empty draft and select it
    pub fn create(&mut self, now: DateTime<Utc>) -> &Draft<B> {
        let mut draft = Draft::new(B::VARIANT.new_draft_title(), B::default(), now);
        while self.get(draft.id()).is_some() {
            draft = Draft::new(B::VARIANT.new_draft_title(), B::default(), now);
        }
        self.push_active(draft)
    }

    /// Append the seed draft and select it
    pub fn seed(&mut self, now: DateTime<Utc>) -> &Draft<B> {
        let mut draft = Draft::seed(now);
        while self.get(draft.id()).is_some() {
            draft = Draft::seed(now);
        }
        self.push_active(draft)
    }

    /// Append an existing draft without changing the selection
    pub fn insert(&mut self, draft: Draft<B>) -> Result<(), DraftError> {
        if self.get(draft.id()).is_some() {
            return Err(DraftError::Validation(format!(
                "Draft id {} already exists",
                draft.id()
            )));
        }
        self.drafts.push(draft);
        Ok(())
    }

    /// Replace the content fields of a draft
    pub fn edit(&mut self, id: &str, body: B, now: DateTime<Utc>) -> Result<&Draft<B>, DraftError> {
        let draft = self.get_mut(id)?;
        draft.set_body(body, now);
        Ok(&*draft)
    }

    /// Rename a draft; blank titles are rejected without any change
    pub fn rename(
        &mut self,
        id: &str,
        title: &str,
        now: DateTime<Utc>,
    ) -> Result<&Draft<B>, DraftError> {
        let draft = self.get_mut(id)?;
        draft.set_title(title, now)?;
        Ok(&*draft)
    }

    /// Select an existing draft
    pub fn select(&mut self, id: &str) -> Result<(), DraftError> {
        if self.get(id).is_none() {
            return Err(DraftError::NotFound(id.to_string()));
        }
        self.active_id = Some(id.to_string());
        Ok(())
    }

    /// Remove a draft by id
    ///
    /// Removing the active draft selects the most recently updated
    /// remaining draft, or nothing when the collection becomes empty.
    pub fn delete(&mut self, id: &str) -> Result<Draft<B>, DraftError> {
        let index = self
            .drafts
            .iter()
            .position(|d| d.id() == id)
            .ok_or_else(|| DraftError::NotFound(id.to_string()))?;

        let removed = self.drafts.remove(index);

        if self.active_id.as_deref() == Some(id) {
            self.active_id = self.most_recent().map(|d| d.id().to_string());
        }

        Ok(removed)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Draft<B>, DraftError> {
        self.drafts
            .iter_mut()
            .find(|d| d.id() == id)
            .ok_or_else(|| DraftError::NotFound(id.to_string()))
    }

    fn push_active(&mut self, draft: Draft<B>) -> &Draft<B> {
        self.active_id = Some(draft.id().to_string());
        self.drafts.push(draft);
        &self.drafts[self.drafts.len() - 1]
    }
}
