//! # Markdown Conversion
//!
//! Line-oriented conversion between markdown text and a flat block list.
//!
//! ## Parsing
//!
//! Each non-blank line is classified on its own by a [`LineClassifier`]
//! and becomes exactly one block; the classified content goes through the
//! inline parser. There is no paragraph merging and no nested-list
//! detection, so imported blocks never have children.
//!
//! ## Rendering
//!
//! [`to_markdown`] writes one line per root block. The round trip is lossy
//! by design: blank lines collapse and numbered items all become `1.`.

pub mod classify;
pub mod render;

pub use classify::{LineClass, LineClassifier, MarkdownLineClassifier, PasteLineClassifier};
pub use render::{BLOCK_SEPARATOR, block_to_markdown, to_markdown};

use crate::model::Block;
use crate::parsing::inline::parse_inline;

/// Parses markdown text into a flat list of blocks. Never fails: anything
/// unrecognised becomes a paragraph.
pub fn from_markdown(text: &str) -> Vec<Block> {
    parse_lines(text, &MarkdownLineClassifier)
}

/// Parses text pasted into the editor, using [`PasteLineClassifier`].
pub fn from_pasted_text(text: &str) -> Vec<Block> {
    parse_lines(text, &PasteLineClassifier)
}

/// Runs `classifier` over every line of `text` (`\n` or `\r\n` endings).
pub fn parse_lines(text: &str, classifier: &impl LineClassifier) -> Vec<Block> {
    let blocks: Vec<Block> = text
        .lines()
        .filter_map(|line| classifier.classify(line))
        .map(|class| {
            let block = Block::new(class.kind.block_type(), "");
            Block {
                kind: class.kind,
                content: parse_inline(class.content),
                ..block
            }
        })
        .collect();
    log::debug!("parsed {} blocks from {} bytes", blocks.len(), text.len());
    blocks
}
