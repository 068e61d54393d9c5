//! Whole-document operations: insert a header, or refresh the one in place
//!
//! These are the flows a host runs for its "insert header" command and its
//! save hook. They take and return plain text; reading and writing the file
//! is the host's job.

use crate::delimiters::supports_language;
use crate::error::HeaderError;
use crate::extract::extract_header;
use crate::identity::Identity;
use crate::info::HeaderInfo;
use crate::render::render_header;
use chrono::NaiveDateTime;
use tracing::debug;

/// Result of [`stamp_document`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stamp {
    /// The document had no header; one was prepended
    Inserted(String),
    /// The existing header was refreshed
    Updated(String),
}

impl Stamp {
    /// The new document text
    pub fn text(&self) -> &str {
        match self {
            Stamp::Inserted(text) | Stamp::Updated(text) => text,
        }
    }

    /// Consume into the new document text
    pub fn into_text(self) -> String {
        match self {
            Stamp::Inserted(text) | Stamp::Updated(text) => text,
        }
    }
}

/// Put `header` in place of the document's current header
///
/// Without a current header, `header` is prepended followed by a blank line.
pub fn replace_header(text: &str, header: &str) -> String {
    match extract_header(text) {
        Some(current) => format!("{}{}", header, &text[current.len()..]),
        None => format!("{}\n{}", header, text),
    }
}

/// Insert a header, or refresh the existing one
///
/// A fresh header records `filename` and `identity` as both creator and
/// editor.
pub fn stamp_document(
    text: &str,
    language_id: &str,
    filename: &str,
    identity: &Identity,
    now: NaiveDateTime,
) -> Result<Stamp, HeaderError> {
    if !supports_language(language_id) {
        return Err(HeaderError::UnsupportedLanguage(language_id.to_string()));
    }

    match extract_header(text) {
        Some(current) => {
            let info = HeaderInfo::from_header(current)?.advance(identity, now);
            let header = render_header(language_id, &info)?;
            debug!(filename = %info.filename, "refreshing existing header");
            Ok(Stamp::Updated(replace_header(text, &header)))
        }
        None => {
            let info = HeaderInfo::new(filename, identity, now);
            let header = render_header(language_id, &info)?;
            debug!(filename, "inserting new header");
            Ok(Stamp::Inserted(replace_header(text, &header)))
        }
    }
}

/// Refresh the header of a saved document
///
/// Returns `None` when there is nothing to do: the language has no header
/// support or the document carries no header.
pub fn refresh_document(
    text: &str,
    language_id: &str,
    identity: &Identity,
    now: NaiveDateTime,
) -> Result<Option<String>, HeaderError> {
    if !supports_language(language_id) {
        debug!(language_id, "skipping refresh for unsupported language");
        return Ok(None);
    }

    let Some(current) = extract_header(text) else {
        return Ok(None);
    };

    let info = HeaderInfo::from_header(current)?.advance(identity, now);
    let header = render_header(language_id, &info)?;
    Ok(Some(replace_header(text, &header)))
}
