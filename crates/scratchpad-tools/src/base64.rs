use base64ct::{Base64, Encoding};

use crate::error::ToolError;

/// Encode UTF-8 text as standard padded Base64
pub fn encode(text: &str) -> String {
    Base64::encode_string(text.as_bytes())
}

/// Decode standard padded Base64 back into UTF-8 text
///
/// Surrounding whitespace is ignored. Anything that is not canonical
/// Base64, or that decodes to bytes which are not UTF-8, is rejected.
pub fn decode(text: &str) -> Result<String, ToolError> {
    let bytes = Base64::decode_vec(text.trim())
        .map_err(|e| ToolError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| ToolError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii() {
        assert_eq!(encode("hello"), "aGVsbG8=");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_encode_multibyte() {
        // "héllo" in UTF-8
        assert_eq!(encode("h\u{e9}llo"), "aMOpbGxv");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("aGVsbG8=").unwrap(), "hello");
        assert_eq!(decode("  aMOpbGxv\n").unwrap(), "h\u{e9}llo");
    }

    #[test]
    fn test_decode_invalid_alphabet() {
        assert!(matches!(decode("not base64!"), Err(ToolError::InvalidBase64(_))));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        // 0xff 0xfe
        assert_eq!(decode("//4="), Err(ToolError::InvalidUtf8));
    }
}
