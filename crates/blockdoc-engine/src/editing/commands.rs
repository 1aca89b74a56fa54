use crate::model::{Block, BlockId, BlockKind, BlockPatch, BlockType};
use crate::parsing::from_pasted_text;
use crate::tree::{self, TreeError};

/// An edit to a block forest.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Replaces a block's text; inline markup is parsed.
    SetText { id: BlockId, text: String },
    /// Changes a block's type. A to-do reached this way starts unchecked.
    ChangeType { id: BlockId, to: BlockType },
    /// Flips `checked` on a to-do; other blocks are left alone.
    ToggleTodo { id: BlockId },
    /// Inserts an empty block at a root position.
    Insert { index: usize, block_type: BlockType },
    /// Removes a block and its subtree. The only remaining root block is
    /// never removed; its children can be.
    Delete { id: BlockId },
    /// Reorders root blocks.
    Move { from: usize, to: usize },
    /// Multi-line paste into the root block `id`: the first pasted line
    /// converts that block, the remaining lines become new blocks after it.
    /// Text with fewer than two non-blank lines is left to plain editing.
    Paste { id: BlockId, text: String },
}

/// Applies `cmd` to `forest`, returning the edited copy.
pub fn apply(forest: &[Block], cmd: &Cmd) -> Result<Vec<Block>, TreeError> {
    apply_tracked(forest, cmd).map(|(blocks, _)| blocks)
}

/// Like [`apply`], also returning the ids of blocks the command touched.
pub(crate) fn apply_tracked(
    forest: &[Block],
    cmd: &Cmd,
) -> Result<(Vec<Block>, Vec<BlockId>), TreeError> {
    log::debug!("Applying {cmd:?}");
    match cmd {
        Cmd::SetText { id, text } => Ok(patched(forest, id, &BlockPatch::new().text(text))),
        Cmd::ChangeType { id, to } => Ok(patched(forest, id, &BlockPatch::new().block_type(*to))),
        Cmd::ToggleTodo { id } => match tree::find_by_id(forest, id).map(|b| b.kind) {
            Some(BlockKind::ToDo { checked }) => {
                Ok(patched(forest, id, &BlockPatch::new().checked(!checked)))
            }
            _ => Ok(unchanged(forest)),
        },
        Cmd::Insert { index, block_type } => {
            let block = Block::empty(*block_type);
            let id = block.id.clone();
            let blocks = tree::insert_block(forest, *index, block)?;
            Ok((blocks, vec![id]))
        }
        Cmd::Delete { id } => {
            let last_root = forest.len() <= 1 && forest.iter().any(|b| b.id == *id);
            if last_root || tree::find_by_id(forest, id).is_none() {
                log::debug!("Delete of {id} skipped");
                return Ok(unchanged(forest));
            }
            Ok((tree::remove_by_id(forest, id), vec![id.clone()]))
        }
        Cmd::Move { from, to } => {
            let blocks = tree::move_block(forest, *from, *to)?;
            let id = blocks[*to].id.clone();
            Ok((blocks, vec![id]))
        }
        Cmd::Paste { id, text } => Ok(paste(forest, id, text)),
    }
}

fn patched(forest: &[Block], id: &BlockId, patch: &BlockPatch) -> (Vec<Block>, Vec<BlockId>) {
    let changed = match tree::find_by_id(forest, id) {
        Some(_) => vec![id.clone()],
        None => Vec::new(),
    };
    (tree::update_by_id(forest, id, patch), changed)
}

fn unchanged(forest: &[Block]) -> (Vec<Block>, Vec<BlockId>) {
    (forest.to_vec(), Vec::new())
}

fn paste(forest: &[Block], id: &BlockId, text: &str) -> (Vec<Block>, Vec<BlockId>) {
    let Some(index) = forest.iter().position(|b| b.id == *id) else {
        log::debug!("Paste target {id} is not a root block");
        return unchanged(forest);
    };
    let pasted = from_pasted_text(text);
    if pasted.len() < 2 {
        return unchanged(forest);
    }
    let mut pasted = pasted.into_iter();
    let Some(first) = pasted.next() else {
        return unchanged(forest);
    };

    let patch = BlockPatch::new().kind(first.kind).content(first.content);
    let mut blocks = forest.to_vec();
    blocks[index] = blocks[index].apply_patch(&patch);

    let rest: Vec<Block> = pasted.collect();
    let mut changed = vec![id.clone()];
    changed.extend(rest.iter().map(|b| b.id.clone()));
    blocks.splice(index + 1..index + 1, rest);
    (blocks, changed)
}
