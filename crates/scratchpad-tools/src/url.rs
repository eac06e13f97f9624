use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ToolError;

/// Characters left untouched by a URI component encoder
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode text for use as a single URL component
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Decode a percent-encoded URL component
///
/// Every `%` must be followed by two hex digits and the decoded bytes must
/// form valid UTF-8.
pub fn decode_component(text: &str) -> Result<String, ToolError> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(ToolError::InvalidPercentEncoding(i));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(text)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| ToolError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(encode_component("a b&c=d/e?f"), "a%20b%26c%3Dd%2Fe%3Ff");
    }

    #[test]
    fn test_encode_keeps_unreserved() {
        assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
    }

    #[test]
    fn test_encode_multibyte() {
        assert_eq!(encode_component("\u{e9}"), "%C3%A9");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_component("a%20b%26c").unwrap(), "a b&c");
        assert_eq!(decode_component("%C3%A9").unwrap(), "\u{e9}");
        assert_eq!(decode_component("plain+text").unwrap(), "plain+text");
    }

    #[test]
    fn test_decode_malformed_escape() {
        assert_eq!(
            decode_component("100%"),
            Err(ToolError::InvalidPercentEncoding(3))
        );
        assert_eq!(
            decode_component("%zz"),
            Err(ToolError::InvalidPercentEncoding(0))
        );
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert_eq!(decode_component("%FF"), Err(ToolError::InvalidUtf8));
    }
}
