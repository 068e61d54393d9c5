//! Header extractor - geometry-only detection at the top of a document

use crate::template::{HEADER_COLUMNS, HEADER_LINES};

/// Return the header block at the start of `text`, if there is one
///
/// A header is any run of [`HEADER_LINES`] lines of exactly
/// [`HEADER_COLUMNS`] characters, each terminated by `\n`, starting at
/// offset 0. Decoration, delimiters and field contents are not checked.
pub fn extract_header(text: &str) -> Option<&str> {
    let mut end = 0;

    for _ in 0..HEADER_LINES {
        let rest = &text[end..];
        let newline = rest.find('\n')?;
        let line = &rest[..newline];

        if line.contains('\r') || line.chars().count() != HEADER_COLUMNS {
            return None;
        }
        end += newline + 1;
    }

    Some(&text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TEMPLATE;

    fn block(lines: usize, width: usize) -> String {
        let mut text = String::new();
        for _ in 0..lines {
            text.push_str(&"x".repeat(width));
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_extracts_template() {
        assert_eq!(extract_header(TEMPLATE), Some(TEMPLATE));
    }

    #[test]
    fn test_returns_exact_prefix() {
        let header = block(10, 80);
        let text = format!("{}\nint main(void) {{ return 0; }}\n", header);
        assert_eq!(extract_header(&text), Some(header.as_str()));
    }

    #[test]
    fn test_five_line_document() {
        assert_eq!(extract_header(&block(5, 80)), None);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_header(""), None);
    }

    #[test]
    fn test_missing_final_newline() {
        let mut text = block(10, 80);
        text.pop();
        assert_eq!(extract_header(&text), None);
    }

    #[test]
    fn test_short_line() {
        let mut text = block(4, 80);
        text.push_str(&block(1, 79));
        text.push_str(&block(5, 80));
        assert_eq!(extract_header(&text), None);
    }

    #[test]
    fn test_long_line() {
        let mut text = block(9, 80);
        text.push_str(&block(1, 81));
        assert_eq!(extract_header(&text), None);
    }

    #[test]
    fn test_crlf_is_not_a_header() {
        let text = block(10, 79).replace('\n', "\r\n");
        assert_eq!(extract_header(&text), None);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut text = "é".repeat(80);
        text.push('\n');
        text.push_str(&block(9, 80));
        assert_eq!(extract_header(&text).map(|h| h.len()), Some(text.len()));
    }
}
