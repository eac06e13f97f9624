use serde::{Deserialize, Serialize};
use std::fmt;

/// Synchronization status of a draft manager
///
/// `Loading` and `Saving` mark a remote call in flight; while either holds,
/// no other initialize or save may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// Resolving or creating the remote document
    #[default]
    Loading,
    /// Ready; edits are local until the next save
    Idle,
    /// Pushing the whole collection to the remote document
    Saving,
    /// The last remote call failed; the user may retry
    Error,
}

impl SyncStatus {
    /// A save may start from this state
    pub fn can_save(&self) -> bool {
        matches!(self, SyncStatus::Idle | SyncStatus::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Loading => "loading",
            SyncStatus::Idle => "idle",
            SyncStatus::Saving => "saving",
            SyncStatus::Error => "error",
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
