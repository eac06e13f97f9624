pub mod collection;
pub mod document;
pub mod draft;
pub mod error;
pub mod export;
pub mod locator;
pub mod share;
pub mod status;
pub mod variant;

pub use collection::DraftCollection;
pub use document::Document;
pub use draft::{Draft, DraftBody, NoteBody, PenBody};
pub use error::DraftError;
pub use export::{export_draft, ExportFile};
pub use locator::Locator;
pub use share::{draft_link, view_link};
pub use status::SyncStatus;
pub use variant::ToolVariant;
