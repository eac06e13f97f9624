pub mod cache;
pub mod config;
pub mod error;
pub mod manager;
pub mod memory;
pub mod notice;
pub mod store;

pub use cache::{FileLocatorCache, LocatorCache, MemoryLocatorCache};
pub use config::SyncConfig;
pub use error::{StoreError, SyncError};
pub use manager::DraftManager;
pub use memory::MemoryStore;
pub use notice::{Notice, NoticeLevel};
pub use store::{DraftStore, JsonBlobClient, DEFAULT_BASE_URL};
