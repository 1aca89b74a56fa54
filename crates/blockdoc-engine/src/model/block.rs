use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BlockKind, BlockType, RichText};
use crate::parsing::inline::{parse_inline, plain_text, render_inline};

/// Opaque block identifier. Generated ids are UUID v4 based; ids read from
/// the wire are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh, process-unique id.
    pub fn generate() -> Self {
        Self(format!("block-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One node of a block forest.
///
/// Blocks are treated as immutable snapshots: every edit goes through
/// [`Block::apply_patch`] (or the forest-level functions in [`crate::tree`])
/// and yields a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub content: Vec<RichText>,
    pub children: Vec<Block>,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
}

impl Block {
    /// Creates a block with a fresh id, inline markup parsed from `text`,
    /// no children and both timestamps set to now.
    pub fn new(block_type: BlockType, text: &str) -> Self {
        let now = Utc::now();
        Self {
            id: BlockId::generate(),
            kind: block_type.into(),
            content: parse_inline(text),
            children: Vec::new(),
            created_time: now,
            last_edited_time: now,
        }
    }

    /// A block with empty text.
    pub fn empty(block_type: BlockType) -> Self {
        Self::new(block_type, "")
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    /// Sets the checked flag when this is a to-do; other kinds are returned
    /// unchanged.
    pub fn with_checked(mut self, checked: bool) -> Self {
        if let BlockKind::ToDo { checked: flag } = &mut self.kind {
            *flag = checked;
        }
        self
    }

    pub fn block_type(&self) -> BlockType {
        self.kind.block_type()
    }

    pub fn is_checked(&self) -> bool {
        self.kind.is_checked()
    }

    /// Run contents concatenated, without markup.
    pub fn plain_text(&self) -> String {
        plain_text(&self.content)
    }

    /// Run contents with inline markdown markers re-applied.
    pub fn rendered_text(&self) -> String {
        render_inline(&self.content)
    }

    /// Returns a copy of this block with `patch` merged in and
    /// `last_edited_time` set to now. `id` and `created_time` never change.
    pub fn apply_patch(&self, patch: &BlockPatch) -> Block {
        let mut kind = patch.kind.unwrap_or(self.kind);
        if let (BlockKind::ToDo { checked }, Some(value)) = (&mut kind, patch.checked) {
            *checked = value;
        }

        Block {
            id: self.id.clone(),
            kind,
            content: patch
                .content
                .clone()
                .unwrap_or_else(|| self.content.clone()),
            children: patch
                .children
                .clone()
                .unwrap_or_else(|| self.children.clone()),
            created_time: self.created_time,
            last_edited_time: Utc::now(),
        }
    }
}

/// Creates a block; see [`Block::new`].
pub fn create_block(block_type: BlockType, text: &str) -> Block {
    Block::new(block_type, text)
}

/// A shallow set of field replacements for [`Block::apply_patch`].
///
/// `checked` only takes effect when the resulting kind is a to-do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockPatch {
    pub kind: Option<BlockKind>,
    pub content: Option<Vec<RichText>>,
    pub children: Option<Vec<Block>>,
    pub checked: Option<bool>,
}

impl BlockPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: BlockKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Changes the type; a to-do reached this way starts unchecked.
    pub fn block_type(self, block_type: BlockType) -> Self {
        self.kind(block_type.into())
    }

    /// Replaces the content with `text` run through the inline parser.
    pub fn text(self, text: &str) -> Self {
        self.content(parse_inline(text))
    }

    pub fn content(mut self, content: Vec<RichText>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn children(mut self, children: Vec<Block>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
