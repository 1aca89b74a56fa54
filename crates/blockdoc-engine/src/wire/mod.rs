//! # Wire Format
//!
//! Conversion between the block tree and the external structured-block JSON
//! format, where each block is an object keyed by its type:
//!
//! ```json
//! {
//!   "object": "block",
//!   "id": "block-…",
//!   "type": "to_do",
//!   "to_do": { "rich_text": [ … ], "checked": false },
//!   "children": [],
//!   "created_time": "2024-05-01T10:00:00Z",
//!   "last_edited_time": "2024-05-01T10:00:00Z"
//! }
//! ```
//!
//! [`from_wire`] is forgiving: missing `rich_text`, `children`, `checked` or
//! type payload read as empty/false, and missing timestamps read as the
//! import time. Malformed JSON and unknown `type` tags are reported as
//! [`WireError`] by the JSON helpers.

pub mod block;
pub mod envelope;

pub use block::{WireBlock, WirePayload, from_wire, from_wire_json, to_wire, to_wire_json};
pub use envelope::{
    DEFAULT_EMOJI, DEFAULT_TITLE, ExportedPage, FORMAT_VERSION, ImportedPage, export_page,
    import_page,
};

use serde::{Deserialize, Deserializer};

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("Invalid block JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
