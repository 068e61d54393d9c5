//! Error types for the header engine

use crate::template::Field;
use thiserror::Error;

/// Errors produced by the header engine
///
/// A missing header is not an error: [`crate::extract_header`] signals it
/// with `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// No delimiter pair is registered for the language
    #[error("No header support for language {0}")]
    UnsupportedLanguage(String),

    /// A timestamp field of an extracted header did not parse
    #[error("Malformed {field} timestamp: {value:?}")]
    MalformedTimestamp {
        /// Field that failed to parse
        field: Field,
        /// Raw field contents
        value: String,
    },
}
