use crate::model::{Block, BlockKind};
use crate::parsing::inline::render_inline;

/// Separator between rendered blocks: every block is its own paragraph.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Renders root blocks as markdown, one line per block, separated by a
/// blank line.
///
/// Children are not rendered, and numbered items are always written as
/// `1. ` (markdown renumbers them on display).
pub fn to_markdown(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_to_markdown)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Renders a single block's line.
pub fn block_to_markdown(block: &Block) -> String {
    let content = render_inline(&block.content);
    match block.kind {
        BlockKind::Heading1 => format!("# {content}"),
        BlockKind::Heading2 => format!("## {content}"),
        BlockKind::Heading3 => format!("### {content}"),
        BlockKind::BulletedListItem => format!("- {content}"),
        BlockKind::NumberedListItem => format!("1. {content}"),
        BlockKind::ToDo { checked } => {
            let mark = if checked { 'x' } else { ' ' };
            format!("- [{mark}] {content}")
        }
        BlockKind::Paragraph | BlockKind::Toggle | BlockKind::Code => content,
    }
}
