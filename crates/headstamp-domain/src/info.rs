//! Header info model, info extractor and update policy

use crate::error::HeaderError;
use crate::field::get_field;
use crate::identity::Identity;
use crate::template::Field;
use crate::timestamp::{parse_timestamp, truncate};
use chrono::NaiveDateTime;

/// The six values carried by a header
///
/// Values are never changed in place: [`HeaderInfo::advance`] returns a new
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Base name of the annotated file
    pub filename: String,

    /// `name <contact>` of the last author
    pub author: String,

    /// Short identity of the creator
    pub created_by: String,

    /// When the header was first inserted
    pub created_at: NaiveDateTime,

    /// Short identity of the last editor
    pub updated_by: String,

    /// When the header was last refreshed
    pub updated_at: NaiveDateTime,
}

impl HeaderInfo {
    /// Fresh record for a first insertion, created and updated at `now`
    pub fn new(filename: impl Into<String>, identity: &Identity, now: NaiveDateTime) -> Self {
        let now = truncate(now);
        Self {
            filename: filename.into(),
            author: identity.author(),
            created_by: identity.user.clone(),
            created_at: now,
            updated_by: identity.user.clone(),
            updated_at: now,
        }
    }

    /// Read every field of an extracted header
    ///
    /// Text values have their padding trimmed. Fails if either timestamp
    /// field does not parse.
    pub fn from_header(header: &str) -> Result<Self, HeaderError> {
        let text = |field| get_field(header, field).trim_end().to_string();

        Ok(Self {
            filename: text(Field::Filename),
            author: text(Field::Author),
            created_by: text(Field::CreatedBy),
            created_at: timestamp_field(header, Field::CreatedAt)?,
            updated_by: text(Field::UpdatedBy),
            updated_at: timestamp_field(header, Field::UpdatedAt)?,
        })
    }

    /// Record for a "file touched" event by `identity` at `now`
    ///
    /// Filename and creation fields are carried over unchanged.
    pub fn advance(&self, identity: &Identity, now: NaiveDateTime) -> Self {
        Self {
            filename: self.filename.clone(),
            author: identity.author(),
            created_by: self.created_by.clone(),
            created_at: self.created_at,
            updated_by: identity.user.clone(),
            updated_at: truncate(now),
        }
    }
}

fn timestamp_field(header: &str, field: Field) -> Result<NaiveDateTime, HeaderError> {
    let value = get_field(header, field);
    parse_timestamp(&value).map_err(|_| HeaderError::MalformedTimestamp { field, value })
}
