use crate::editing::{Cmd, Patch, commands::apply_tracked};
use crate::model::{Block, BlockType};
use crate::templates::{TemplateKind, template};
use crate::tree::TreeError;
use crate::wire::{DEFAULT_EMOJI, DEFAULT_TITLE, ExportedPage, ImportedPage, export_page};

/// A titled page owning its block forest.
///
/// All edits go through [`Page::apply`], which swaps in the forest returned
/// by the command and bumps `version`. A page always keeps at least one
/// root block.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub emoji: String,
    blocks: Vec<Block>,
    version: u64,
}

impl Page {
    /// An untitled page holding one empty paragraph.
    pub fn new() -> Self {
        Self::with_blocks(DEFAULT_TITLE, DEFAULT_EMOJI, Vec::new())
    }

    /// Wraps existing blocks. An empty forest gets one empty paragraph.
    pub fn with_blocks(title: &str, emoji: &str, mut blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            blocks.push(Block::empty(BlockType::Paragraph));
        }
        Self {
            title: title.to_string(),
            emoji: emoji.to_string(),
            blocks,
            version: 0,
        }
    }

    pub fn from_template(kind: TemplateKind) -> Self {
        Self::with_blocks(kind.title(), kind.emoji(), template(kind))
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies `cmd`. On error the page is left as it was.
    pub fn apply(&mut self, cmd: &Cmd) -> Result<Patch, TreeError> {
        let (blocks, changed) = apply_tracked(&self.blocks, cmd)?;
        self.blocks = blocks;
        self.version += 1;
        Ok(Patch {
            changed,
            version: self.version,
        })
    }

    pub fn export(&self) -> ExportedPage {
        export_page(&self.title, &self.emoji, &self.blocks)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ImportedPage> for Page {
    fn from(imported: ImportedPage) -> Self {
        Self::with_blocks(&imported.title, &imported.emoji, imported.blocks)
    }
}
