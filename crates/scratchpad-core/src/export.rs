use crate::draft::{Draft, DraftBody};

/// A file synthesized from a draft for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// Build the downloadable file for a draft
///
/// Multi-field drafts are combined into one document; the file name is a
/// slug of the title.
pub fn export_draft<B: DraftBody>(draft: &Draft<B>) -> ExportFile {
    ExportFile {
        file_name: format!("{}.{}", slugify(draft.title()), B::EXPORT_EXTENSION),
        mime_type: B::EXPORT_MIME,
        contents: draft.body().export_contents(),
    }
}

/// Lowercase ASCII slug; runs of other characters collapse to one `-`
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "draft".to_string()
    } else {
        slug.to_string()
    }
}
