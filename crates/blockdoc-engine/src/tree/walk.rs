use std::ops::ControlFlow;
use std::slice;

use crate::model::Block;

/// Depth-first pre-order iterator over a block forest.
///
/// Every read-only tree operation is built on this one walk, so lookups,
/// searches and statistics all agree on visit order.
pub struct PreOrder<'a> {
    stack: Vec<slice::Iter<'a, Block>>,
}

impl<'a> PreOrder<'a> {
    pub fn new(forest: &'a [Block]) -> Self {
        Self {
            stack: vec![forest.iter()],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(block) => {
                    if !block.children.is_empty() {
                        self.stack.push(block.children.iter());
                    }
                    return Some(block);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Iterates every block of `forest` in pre-order.
pub fn iter(forest: &[Block]) -> PreOrder<'_> {
    PreOrder::new(forest)
}

/// Mutable pre-order walk over an owned forest.
///
/// `visit` returns `ControlFlow::Break` to stop the walk early; the break
/// value is handed back to the caller.
pub fn walk_mut<B>(
    forest: &mut [Block],
    visit: &mut impl FnMut(&mut Block) -> ControlFlow<B>,
) -> ControlFlow<B> {
    for block in forest.iter_mut() {
        visit(block)?;
        walk_mut(&mut block.children, visit)?;
    }
    ControlFlow::Continue(())
}
