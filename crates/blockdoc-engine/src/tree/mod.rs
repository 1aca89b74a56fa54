//! Read and copy-on-write operations over block forests.
//!
//! A forest is a `&[Block]` of root blocks. Nothing here mutates its input:
//! edits return a new `Vec<Block>`. All read-only functions use the
//! [`walk::PreOrder`] traversal.

pub mod ops;
pub mod stats;
pub mod walk;

pub use ops::{find_by_id, insert_block, move_block, remove_by_id, search, update_by_id};
pub use stats::{
    DocumentStats, TodoCount, count_characters, count_todos, count_words, document_stats,
    group_by_type,
};
pub use walk::{PreOrder, iter, walk_mut};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("Index {index} out of range for {len} root blocks")]
    OutOfRange { index: usize, len: usize },
}
