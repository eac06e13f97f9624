use scratchpad_tools::url::encode_component;

use crate::variant::ToolVariant;

/// Link to the read-only view of a whole document
pub fn view_link(origin: &str, variant: ToolVariant, blob_id: &str) -> String {
    format!(
        "{}/{}/view/{}",
        origin.trim_end_matches('/'),
        variant.path_segment(),
        encode_component(blob_id)
    )
}

/// Link to the read-only view of a single draft
pub fn draft_link(origin: &str, variant: ToolVariant, blob_id: &str, draft_id: &str) -> String {
    format!(
        "{}?draft={}",
        view_link(origin, variant, blob_id),
        encode_component(draft_id)
    )
}
