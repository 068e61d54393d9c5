//! Render engine - header text from a language and a [`HeaderInfo`]

use crate::delimiters::delimiters_for;
use crate::error::HeaderError;
use crate::field::set_field;
use crate::info::HeaderInfo;
use crate::template::{template_for, Field};
use crate::timestamp::format_timestamp;

/// Render the header for `language_id`
///
/// The output always has the fixed header geometry, so it is recognised by
/// [`crate::extract_header`].
pub fn render_header(language_id: &str, info: &HeaderInfo) -> Result<String, HeaderError> {
    let delimiters = delimiters_for(language_id)
        .ok_or_else(|| HeaderError::UnsupportedLanguage(language_id.to_string()))?;

    let header = Field::ALL
        .into_iter()
        .fold(template_for(delimiters), |header, field| {
            set_field(&header, field, &field_value(info, field))
        });

    Ok(header)
}

fn field_value(info: &HeaderInfo, field: Field) -> String {
    match field {
        Field::Filename => info.filename.clone(),
        Field::Author => info.author.clone(),
        Field::CreatedAt => format_timestamp(&info.created_at),
        Field::CreatedBy => info.created_by.clone(),
        Field::UpdatedAt => format_timestamp(&info.updated_at),
        Field::UpdatedBy => info.updated_by.clone(),
    }
}
