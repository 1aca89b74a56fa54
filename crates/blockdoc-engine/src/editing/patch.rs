use crate::model::BlockId;

/// Result of applying a command to a [`Page`](super::Page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Blocks the command created, edited, moved or removed.
    pub changed: Vec<BlockId>,
    pub version: u64,
}
