use serde::{Deserialize, Serialize};
use std::fmt;

/// The two tools that keep drafts in a remote document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolVariant {
    /// Single text field per draft
    Notebook,
    /// HTML, CSS and JavaScript fields per draft
    CodeEditor,
}

impl ToolVariant {
    /// Path segment used for the tool's pages and viewer links
    pub fn path_segment(&self) -> &'static str {
        match self {
            ToolVariant::Notebook => "notebook",
            ToolVariant::CodeEditor => "code-editor",
        }
    }

    /// Human-readable tool name
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolVariant::Notebook => "Notebook",
            ToolVariant::CodeEditor => "Code Editor",
        }
    }

    /// Key of the local slot holding this tool's document locator
    pub fn locator_key(&self) -> &'static str {
        match self {
            ToolVariant::Notebook => "notebookJsonBlobUrl",
            ToolVariant::CodeEditor => "codeEditorJsonBlobUrl",
        }
    }

    /// Title of the draft synthesized for an empty document
    pub fn seed_title(&self) -> &'static str {
        match self {
            ToolVariant::Notebook => "My First Note",
            ToolVariant::CodeEditor => "My First Pen",
        }
    }

    /// Title given to drafts created by the user
    pub fn new_draft_title(&self) -> &'static str {
        match self {
            ToolVariant::Notebook => "Untitled Note",
            ToolVariant::CodeEditor => "Untitled Pen",
        }
    }

    /// Whether a single draft can be shared through a viewer link
    pub fn supports_share(&self) -> bool {
        matches!(self, ToolVariant::CodeEditor)
    }
}

impl fmt::Display for ToolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
