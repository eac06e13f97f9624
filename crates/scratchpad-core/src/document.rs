use serde::{Deserialize, Serialize};

use crate::draft::{Draft, DraftBody};

/// The remote JSON document holding every draft of one tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<B> {
    #[serde(default)]
    pub drafts: Vec<Draft<B>>,
}

impl<B> Default for Document<B> {
    fn default() -> Self {
        Self { drafts: Vec::new() }
    }
}

impl<B: DraftBody> Document<B> {
    pub fn new(drafts: Vec<Draft<B>>) -> Self {
        Self { drafts }
    }

    /// Find a draft by id
    pub fn find(&self, id: &str) -> Option<&Draft<B>> {
        self.drafts.iter().find(|d| d.id() == id)
    }

    /// Serialize the document to a JSON value
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Deserialize a document from a JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
