use std::ops::ControlFlow;

use crate::model::{Block, BlockId, BlockPatch};

use super::TreeError;
use super::walk::{iter, walk_mut};

/// First block with `id` in pre-order, at any depth.
pub fn find_by_id<'a>(forest: &'a [Block], id: &BlockId) -> Option<&'a Block> {
    iter(forest).find(|block| block.id == *id)
}

/// Returns a copy of `forest` where the first block with `id` has `patch`
/// merged in (see [`Block::apply_patch`]). An unknown id yields an equal
/// forest.
pub fn update_by_id(forest: &[Block], id: &BlockId, patch: &BlockPatch) -> Vec<Block> {
    let mut updated = forest.to_vec();
    let outcome = walk_mut(&mut updated, &mut |block| {
        if block.id == *id {
            *block = block.apply_patch(patch);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    if outcome.is_continue() {
        log::debug!("update_by_id: no block with id {id}");
    }
    updated
}

/// Moves the root block at `from` to position `to`.
///
/// Both indices refer to the forest before the move and must be in range.
/// Timestamps are left alone.
pub fn move_block(forest: &[Block], from: usize, to: usize) -> Result<Vec<Block>, TreeError> {
    let len = forest.len();
    for index in [from, to] {
        if index >= len {
            return Err(TreeError::OutOfRange { index, len });
        }
    }

    let mut moved = forest.to_vec();
    let block = moved.remove(from);
    moved.insert(to, block);
    Ok(moved)
}

/// Inserts `block` at root position `index` (`index == len` appends).
pub fn insert_block(forest: &[Block], index: usize, block: Block) -> Result<Vec<Block>, TreeError> {
    let len = forest.len();
    if index > len {
        return Err(TreeError::OutOfRange { index, len });
    }

    let mut inserted = Vec::with_capacity(len + 1);
    inserted.extend_from_slice(&forest[..index]);
    inserted.push(block);
    inserted.extend_from_slice(&forest[index..]);
    Ok(inserted)
}

/// Returns a copy of `forest` without the first block with `id` (and its
/// subtree). An unknown id yields an equal forest.
pub fn remove_by_id(forest: &[Block], id: &BlockId) -> Vec<Block> {
    let mut remaining = forest.to_vec();
    if !remove_first(&mut remaining, id) {
        log::debug!("remove_by_id: no block with id {id}");
    }
    remaining
}

fn remove_first(forest: &mut Vec<Block>, id: &BlockId) -> bool {
    for i in 0..forest.len() {
        if forest[i].id == *id {
            forest.remove(i);
            return true;
        }
        if remove_first(&mut forest[i].children, id) {
            return true;
        }
    }
    false
}

/// Blocks whose plain text contains `query`, ignoring case, in pre-order.
///
/// Parents and children are matched independently, so a parent and its
/// child may both appear. An empty query matches every block.
pub fn search<'a>(forest: &'a [Block], query: &str) -> Vec<&'a Block> {
    let needle = query.to_lowercase();
    iter(forest)
        .filter(|block| block.plain_text().to_lowercase().contains(&needle))
        .collect()
}
