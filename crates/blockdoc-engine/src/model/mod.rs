//! # Block Model
//!
//! The data model of a page: a forest of [`Block`]s, each holding ordered
//! [`RichText`] runs and owning its children.
//!
//! ## Modules
//!
//! - **`kind`**: `BlockType` (the nine wire tags) and `BlockKind` (tag plus
//!   per-type payload, e.g. the to-do `checked` flag)
//! - **`rich_text`**: `RichText` runs, `Annotations`, `Color`, `Style`
//! - **`block`**: `Block`, `BlockId`, `BlockPatch`
//!
//! ## Key Invariants
//!
//! - Concatenating the run contents of a block reproduces its plain text
//! - Only to-do blocks carry a checked state
//! - `created_time` is fixed at construction; patches refresh
//!   `last_edited_time`

pub mod block;
pub mod kind;
pub mod rich_text;

pub use block::{Block, BlockId, BlockPatch, create_block};
pub use kind::{BlockKind, BlockType, UnknownBlockType};
pub use rich_text::{Annotations, Color, RichText, RichTextKind, Style, TextContent};
