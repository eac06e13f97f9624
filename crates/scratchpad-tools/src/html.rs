use std::sync::LazyLock;

use regex::Regex;

use crate::error::ToolError;

/// Whitespace (possibly none) between a closing `>` and the next `<`
static BETWEEN_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*<").expect("valid regex"));

const INDENT: &str = "  ";

/// Re-indent markup one tag per line
///
/// This is a line-based indenter, not a parser: it breaks between adjacent
/// tags, trims every line, drops blank ones, dedents on closing tags and
/// indents after opening tags. Doctypes, comments and self-closing tags do
/// not open a level.
pub fn indent(input: &str) -> String {
    let split = BETWEEN_TAGS.replace_all(input, ">\n<");
    let mut depth: usize = 0;
    let mut lines = Vec::new();

    for line in split.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with("</") {
            depth = depth.saturating_sub(1);
        }

        lines.push(format!("{}{}", INDENT.repeat(depth), line));

        if opens_level(line) {
            depth += 1;
        }
    }

    lines.join("\n")
}

fn opens_level(line: &str) -> bool {
    line.starts_with('<')
        && !line.starts_with("</")
        && !line.starts_with("<!")
        && !line.ends_with("/>")
}

/// Check that markup is well-formed XML
///
/// Reports the first parse error. A leading doctype is accepted; void
/// elements must be written self-closing (`<br/>`).
pub fn validate(input: &str) -> Result<(), ToolError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };

    match roxmltree::Document::parse_with_options(input, options) {
        Ok(_) => Ok(()),
        Err(err) => Err(ToolError::InvalidMarkup {
            line: err.pos().row,
            message: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_nested() {
        let input = "<html><head><title>Test</title></head><body><p>\nHello\n</p></body></html>";
        let expected = "<html>\n  <head>\n    <title>Test</title>\n    </head>\n    <body>\n      <p>\n        Hello\n      </p>\n    </body>\n  </html>";
        assert_eq!(indent(input), expected);
    }

    #[test]
    fn test_indent_doctype_does_not_open_level() {
        assert_eq!(indent("<!DOCTYPE html><main></main>"), "<!DOCTYPE html>\n<main>\n</main>");
    }

    #[test]
    fn test_indent_self_closing() {
        assert_eq!(
            indent("<div><br/><img src=\"a.png\" /></div>"),
            "<div>\n  <br/>\n  <img src=\"a.png\" />\n</div>"
        );
    }

    #[test]
    fn test_indent_never_goes_negative() {
        assert_eq!(indent("</p></div><span>"), "</p>\n</div>\n<span>");
    }

    #[test]
    fn test_validate_well_formed() {
        assert!(validate("<div><p>Hello</p><br/></div>").is_ok());
        assert!(validate("<!DOCTYPE html>\n<html><body></body></html>").is_ok());
    }

    #[test]
    fn test_validate_mismatched_tag() {
        let err = validate("<div>\n  <p>Hello</div>").unwrap_err();
        match err {
            ToolError::InvalidMarkup { line, message } => {
                assert_eq!(line, 2);
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_unclosed_and_empty() {
        assert!(matches!(
            validate("<ul><li>one</ul>"),
            Err(ToolError::InvalidMarkup { .. })
        ));
        assert!(matches!(validate("<br>"), Err(ToolError::InvalidMarkup { .. })));
        assert!(matches!(validate(""), Err(ToolError::InvalidMarkup { .. })));
    }

    #[test]
    fn test_indent_drops_blank_lines() {
        assert_eq!(
            indent("<ul>\n\n   <li>\n one \n</li>\n</ul>"),
            "<ul>\n  <li>\n    one\n  </li>\n</ul>"
        );
    }
}
