//! Field accessor - read and write one field of a header string
//!
//! Both operations use the spans from [`crate::template::locate`], so a value
//! is always read from exactly where it was written. Positions are counted in
//! characters.

use crate::template::{locate, Field};
use tracing::debug;

/// Fit `value` to `width` characters: right-pad with spaces, truncate if longer
///
/// Line breaks become spaces so the header keeps its line structure.
pub fn pad(value: &str, width: usize) -> String {
    let mut padded: String = value
        .chars()
        .take(width)
        .map(|c| if is_line_break(c) { ' ' } else { c })
        .collect();
    let len = padded.chars().count();
    padded.extend(std::iter::repeat(' ').take(width - len));
    padded
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Raw contents of `field`, padding included
pub fn get_field(header: &str, field: Field) -> String {
    let span = locate(field);
    header.chars().skip(span.offset).take(span.width).collect()
}

/// Copy of `header` with `field` overwritten by `value`
///
/// Values longer than the field are truncated. Line breaks are written as
/// spaces.
pub fn set_field(header: &str, field: Field, value: &str) -> String {
    let span = locate(field);

    if value.chars().count() > span.width {
        debug!(field = %field, width = span.width, "truncating header field value");
    }
    if value.contains(is_line_break) {
        debug!(field = %field, "replacing line breaks in header field value");
    }

    let mut out = String::with_capacity(header.len());
    out.extend(header.chars().take(span.offset));
    out.push_str(&pad(value, span.width));
    out.extend(header.chars().skip(span.end()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TEMPLATE;

    #[test]
    fn test_pad_short() {
        assert_eq!(pad("abc", 6), "abc   ");
    }

    #[test]
    fn test_pad_exact_and_long() {
        assert_eq!(pad("abcdef", 6), "abcdef");
        assert_eq!(pad("abcdefgh", 6), "abcdef");
        assert_eq!(pad("", 3), "   ");
    }

    #[test]
    fn test_get_placeholder() {
        assert_eq!(get_field(TEMPLATE, Field::CreatedBy), "$CREATEDBY_");
        assert_eq!(get_field(TEMPLATE, Field::UpdatedAt), "$UPDATEDAT_________");
    }

    #[test]
    fn test_set_then_get() {
        let header = set_field(TEMPLATE, Field::CreatedBy, "bob");
        assert_eq!(get_field(&header, Field::CreatedBy), "bob        ");
        assert_eq!(header.len(), TEMPLATE.len());
    }

    #[test]
    fn test_set_leaves_other_fields() {
        let header = set_field(TEMPLATE, Field::Filename, "main.rs");
        for field in Field::ALL.into_iter().filter(|f| *f != Field::Filename) {
            assert_eq!(get_field(&header, field), get_field(TEMPLATE, field));
        }
    }

    #[test]
    fn test_set_truncates() {
        let header = set_field(TEMPLATE, Field::UpdatedBy, "a-very-long-login-name");
        assert_eq!(get_field(&header, Field::UpdatedBy), "a-very-long");
        assert_eq!(header.lines().nth(8).unwrap().chars().count(), 80);
    }

    #[test]
    fn test_pad_replaces_line_breaks() {
        assert_eq!(pad("a\nb\r\nc", 8), "a b  c  ");
    }

    #[test]
    fn test_set_value_with_newline_keeps_lines() {
        let header = set_field(TEMPLATE, Field::Filename, "a\nb.c");
        assert_eq!(get_field(&header, Field::Filename).trim_end(), "a b.c");
        assert_eq!(header.lines().count(), 10);
        assert!(header.lines().all(|l| l.chars().count() == 80));
    }

    #[test]
    fn test_set_multibyte_value() {
        let header = set_field(TEMPLATE, Field::Filename, "crème.c");
        assert_eq!(get_field(&header, Field::Filename).trim_end(), "crème.c");
        assert_eq!(header.chars().count(), TEMPLATE.chars().count());
        assert_eq!(get_field(&header, Field::Author), get_field(TEMPLATE, Field::Author));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::template::TEMPLATE;
    use proptest::prelude::*;

    proptest! {
        /// Property: a written value reads back padded or truncated to the span
        #[test]
        fn test_padding_determinism(value in "\\PC{0,60}", idx in 0usize..6) {
            let field = Field::ALL[idx];
            let width = locate(field).width;
            let header = set_field(TEMPLATE, field, &value);

            prop_assert_eq!(get_field(&header, field), pad(&value, width));
            prop_assert_eq!(header.chars().count(), TEMPLATE.chars().count());
        }
    }
}
