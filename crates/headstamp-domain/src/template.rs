//! Canonical header template and the field locator
//!
//! The template is the single source of truth for the header layout. Every
//! field is written into it as a `$NAME` sentinel followed by `_` filler that
//! reserves the field's width. Field offsets are found by scanning for those
//! sentinels, once, and the same spans serve both reading and writing.

use crate::delimiters::{Delimiters, DELIMITER_WIDTH};
use once_cell::sync::Lazy;
use std::fmt;

/// Number of lines in a header
pub const HEADER_LINES: usize = 10;

/// Number of characters per header line, delimiters included
pub const HEADER_COLUMNS: usize = 80;

/// Generic template, wrapped in single `*` delimiters
pub const TEMPLATE: &str = concat!(
    r"********************************************************************************", "\n",
    r"*                                                                              *", "\n",
    r"*                                                  _   _  ____                 *", "\n",
    r"*   $FILENAME__________________________________    | | | |/ ___|               *", "\n",
    r"*                                                  | |_| |\___ \               *", "\n",
    r"*   By: $AUTHOR________________________________    |  _  | ___) |              *", "\n",
    r"*                                                  |_| |_||____/               *", "\n",
    r"*   Created: $CREATEDAT_________ by $CREATEDBY_                                *", "\n",
    r"*   Updated: $UPDATEDAT_________ by $UPDATEDBY_                                *", "\n",
    r"********************************************************************************", "\n",
);

/// A named fixed-width slot in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Base name of the annotated file
    Filename,
    /// `name <contact>` of the last author
    Author,
    /// Creation timestamp
    CreatedAt,
    /// Short identity of the creator
    CreatedBy,
    /// Last update timestamp
    UpdatedAt,
    /// Short identity of the last editor
    UpdatedBy,
}

impl Field {
    /// Every field, in the order they are written
    pub const ALL: [Field; 6] = [
        Field::Filename,
        Field::Author,
        Field::CreatedAt,
        Field::CreatedBy,
        Field::UpdatedAt,
        Field::UpdatedBy,
    ];

    /// Placeholder name used in the template
    pub fn name(&self) -> &'static str {
        match self {
            Field::Filename => "FILENAME",
            Field::Author => "AUTHOR",
            Field::CreatedAt => "CREATEDAT",
            Field::CreatedBy => "CREATEDBY",
            Field::UpdatedAt => "UPDATEDAT",
            Field::UpdatedBy => "UPDATEDBY",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Character window reserved for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    /// Offset from the start of the header, in characters
    pub offset: usize,
    /// Reserved width, in characters
    pub width: usize,
}

impl FieldSpan {
    /// First character past the span
    pub fn end(&self) -> usize {
        self.offset + self.width
    }
}

static SPANS: Lazy<[FieldSpan; 6]> = Lazy::new(|| {
    Field::ALL.map(|field| {
        scan(TEMPLATE, field)
            .unwrap_or_else(|| panic!("field {} missing from header template", field))
    })
});

/// Locate a field in the template
pub fn locate(field: Field) -> FieldSpan {
    SPANS[field.index()]
}

/// Find `$NAME___` in `template`, spanning the sentinel and its filler
fn scan(template: &str, field: Field) -> Option<FieldSpan> {
    let sentinel = format!("${}", field.name());

    template.match_indices(&sentinel).find_map(|(start, _)| {
        let rest = &template[start + sentinel.len()..];
        // Skip longer names sharing this prefix
        if rest.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return None;
        }

        let filler = rest.chars().take_while(|&c| c == '_').count();
        Some(FieldSpan {
            offset: template[..start].chars().count(),
            width: sentinel.chars().count() + filler,
        })
    })
}

/// Replace the first and last [`DELIMITER_WIDTH`] characters of every line
pub fn rewrap(text: &str, delimiters: Delimiters) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };

        let len = body.chars().count();
        if len < 2 * DELIMITER_WIDTH {
            out.push_str(line);
            continue;
        }

        out.push_str(delimiters.left);
        out.extend(body.chars().skip(DELIMITER_WIDTH).take(len - 2 * DELIMITER_WIDTH));
        out.push_str(delimiters.right);
        out.push_str(newline);
    }

    out
}

/// Template wrapped for a language's delimiters, with the same field offsets
pub fn template_for(delimiters: Delimiters) -> String {
    rewrap(TEMPLATE, delimiters)
}
