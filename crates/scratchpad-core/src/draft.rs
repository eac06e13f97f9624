use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DraftError;
use crate::variant::ToolVariant;

/// The content fields of a draft, which differ between tools
pub trait DraftBody:
    Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The tool this body belongs to
    const VARIANT: ToolVariant;

    /// File extension used when exporting a draft
    const EXPORT_EXTENSION: &'static str;

    /// MIME type of the exported file
    const EXPORT_MIME: &'static str;

    /// Body of the draft synthesized for an empty document
    fn seed() -> Self;

    /// True when every content field is empty
    fn is_blank(&self) -> bool;

    /// Contents of the exported file
    fn export_contents(&self) -> String;
}

/// Notebook draft body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBody {
    #[serde(default)]
    pub content: String,
}

impl NoteBody {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl DraftBody for NoteBody {
    const VARIANT: ToolVariant = ToolVariant::Notebook;
    const EXPORT_EXTENSION: &'static str = "md";
    const EXPORT_MIME: &'static str = "text/markdown";

    fn seed() -> Self {
        Self::new(
            "# Welcome to your notebook\n\nWrite anything here and press save to keep it.",
        )
    }

    fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    fn export_contents(&self) -> String {
        self.content.clone()
    }
}

/// Code editor draft body (a "pen")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenBody {
    #[serde(default)]
    pub html_code: String,
    #[serde(default)]
    pub css_code: String,
    #[serde(default)]
    pub js_code: String,
}

impl PenBody {
    pub fn new(
        html_code: impl Into<String>,
        css_code: impl Into<String>,
        js_code: impl Into<String>,
    ) -> Self {
        Self {
            html_code: html_code.into(),
            css_code: css_code.into(),
            js_code: js_code.into(),
        }
    }

    /// The full page rendered by the preview and the viewer
    pub fn page(&self) -> String {
        scratchpad_tools::compose_page(&self.html_code, &self.css_code, &self.js_code)
    }
}

impl DraftBody for PenBody {
    const VARIANT: ToolVariant = ToolVariant::CodeEditor;
    const EXPORT_EXTENSION: &'static str = "html";
    const EXPORT_MIME: &'static str = "text/html";

    fn seed() -> Self {
        Self::new(
            "<h1>Hello, World!</h1>\n<p>This is a live preview.</p>",
            "body {\n  background-color: #1a1a1a;\n  color: #f0f0f0;\n  font-family: sans-serif;\n  display: flex;\n  justify-content: center;\n  align-items: center;\n  height: 100vh;\n  text-align: center;\n}\nh1 {\n color: #8a2be2;\n}",
            "const h1 = document.querySelector('h1');\nh1.addEventListener('click', () => {\n  alert('You clicked the heading!');\n});",
        )
    }

    fn is_blank(&self) -> bool {
        self.html_code.is_empty() && self.css_code.is_empty() && self.js_code.is_empty()
    }

    fn export_contents(&self) -> String {
        self.page()
    }
}

/// A named unit of user content within a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft<B> {
    id: String,
    title: String,
    #[serde(flatten)]
    body: B,
    updated_at: DateTime<Utc>,
}

impl<B: DraftBody> Draft<B> {
    /// Create a draft with a fresh random id
    pub fn new(title: impl Into<String>, body: B, now: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, body, now)
    }

    /// Rebuild a draft whose id is already known
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        body: B,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body,
            updated_at,
        }
    }

    /// The seed draft for an empty document
    pub fn seed(now: DateTime<Utc>) -> Self {
        Self::new(B::VARIANT.seed_title(), B::seed(), now)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the content fields
    pub fn set_body(&mut self, body: B, now: DateTime<Utc>) {
        self.body = body;
        self.touch(now);
    }

    /// Rename the draft
    ///
    /// The title is trimmed; an empty or all-whitespace title is rejected
    /// and leaves the draft untouched.
    pub fn set_title(&mut self, title: &str, now: DateTime<Utc>) -> Result<(), DraftError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DraftError::Validation("Title cannot be empty".to_string()));
        }
        self.title = title.to_string();
        self.touch(now);
        Ok(())
    }

    /// Advance `updated_at`, never moving it backwards
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }
}
