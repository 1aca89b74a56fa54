use crate::model::{Block, BlockKind};

use super::markdown::BLOCK_SEPARATOR;

/// Renders a forest as readable plain text.
///
/// Headings are upper-cased and to-dos get a `[DONE] ` or `[TODO] ` prefix.
/// Children follow their parent after a single newline. Inline markers are
/// kept, so `**x**` stays `**x**`.
pub fn to_plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_to_plain_text)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn block_to_plain_text(block: &Block) -> String {
    let content = block.rendered_text();
    let mut text = match block.kind {
        BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3 => content.to_uppercase(),
        BlockKind::ToDo { checked: true } => format!("[DONE] {content}"),
        BlockKind::ToDo { checked: false } => format!("[TODO] {content}"),
        _ => content,
    };

    if !block.children.is_empty() {
        text.push('\n');
        text.push_str(&to_plain_text(&block.children));
    }
    text
}
