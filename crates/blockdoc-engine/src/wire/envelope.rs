use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{WireBlock, WireError, from_wire, null_as_default, to_wire};
use crate::model::Block;

pub const FORMAT_VERSION: &str = "1.0";
pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_EMOJI: &str = "📝";

/// A page as written by "export as JSON".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedPage {
    pub title: String,
    pub emoji: String,
    pub blocks: Vec<WireBlock>,
    pub exported_at: DateTime<Utc>,
    pub format_version: String,
}

impl ExportedPage {
    pub fn to_json(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn export_page(title: &str, emoji: &str, blocks: &[Block]) -> ExportedPage {
    ExportedPage {
        title: title.to_string(),
        emoji: emoji.to_string(),
        blocks: to_wire(blocks),
        exported_at: Utc::now(),
        format_version: FORMAT_VERSION.to_string(),
    }
}

/// A page read back from an export envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedPage {
    pub title: String,
    pub emoji: String,
    pub blocks: Vec<Block>,
    pub format_version: String,
    pub exported_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    emoji: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    blocks: Vec<WireBlock>,
    #[serde(default)]
    exported_at: Option<DateTime<Utc>>,
    #[serde(default)]
    format_version: Option<String>,
}

/// Parses an export envelope. A missing or empty title or emoji falls back
/// to [`DEFAULT_TITLE`] / [`DEFAULT_EMOJI`]; the format version is kept
/// as found.
pub fn import_page(json: &str) -> Result<ImportedPage, WireError> {
    let raw: RawEnvelope = serde_json::from_str(json)?;
    if let Some(version) = raw.format_version.as_deref()
        && version != FORMAT_VERSION
    {
        log::warn!("Importing page with format version {version}, expected {FORMAT_VERSION}");
    }

    Ok(ImportedPage {
        title: non_empty_or(raw.title, DEFAULT_TITLE),
        emoji: non_empty_or(raw.emoji, DEFAULT_EMOJI),
        blocks: from_wire(&raw.blocks),
        format_version: raw
            .format_version
            .unwrap_or_else(|| FORMAT_VERSION.to_string()),
        exported_at: raw.exported_at,
    })
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
