pub mod base64;
pub mod error;
pub mod html;
pub mod preview;
pub mod url;

pub use error::ToolError;
pub use preview::compose_page;
