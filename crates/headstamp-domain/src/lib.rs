//! Headstamp Domain Layer
//!
//! The header template and field engine. A header is a fixed 10 x 80 comment
//! block at the very top of a source file recording the file name, its author
//! and when it was created and last updated.
//!
//! ## Key Concepts
//!
//! - **Template**: the generic layout; the only place field positions are defined
//! - **Delimiters**: per-language comment strings wrapping every header line
//! - **Field**: a named fixed-width slot, padded on write and truncated if too long
//! - **HeaderInfo**: the six field values as a record
//! - **Identity**: the acting user, always supplied by the caller
//!
//! ## Flow
//!
//! `text -> extract_header -> get_header_info -> update_header_info -> render_header`
//!
//! Everything here is pure: no I/O and no shared mutable state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod delimiters;
pub mod document;
pub mod error;
pub mod extract;
pub mod field;
pub mod identity;
pub mod info;
pub mod render;
pub mod template;
pub mod timestamp;

// Re-exports for convenience
pub use delimiters::{supports_language, Delimiters};
pub use document::{refresh_document, replace_header, stamp_document, Stamp};
pub use error::HeaderError;
pub use extract::extract_header;
pub use identity::Identity;
pub use info::HeaderInfo;
pub use render::render_header;
pub use template::Field;

/// Extract header info from an extracted header string
pub fn get_header_info(header: &str) -> Result<HeaderInfo, HeaderError> {
    HeaderInfo::from_header(header)
}

/// Refresh header info for an edit by `identity`, now
pub fn update_header_info(info: &HeaderInfo, identity: &Identity) -> HeaderInfo {
    info.advance(identity, timestamp::now())
}
