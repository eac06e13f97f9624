use thiserror::Error;

/// Errors raised by the text tools
///
/// None of these touch draft state; callers surface them as a notice and
/// keep the input untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Invalid Base64 string: {0}")]
    InvalidBase64(String),

    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("Invalid percent-encoding at byte {0}")]
    InvalidPercentEncoding(usize),

    #[error("Markup is not well-formed (line {line}): {message}")]
    InvalidMarkup { line: u32, message: String },
}
