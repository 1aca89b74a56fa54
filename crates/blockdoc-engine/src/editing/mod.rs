//! # Editing
//!
//! Edits are expressed as [`Cmd`] values. [`apply`] runs one against a
//! forest and returns the edited copy; [`Page`] owns a forest and applies
//! commands in place, tracking a version number.
//!
//! ```rust
//! use blockdoc_engine::editing::{Cmd, Page};
//! use blockdoc_engine::model::BlockType;
//!
//! let mut page = Page::new();
//! let id = page.blocks()[0].id.clone();
//! page.apply(&Cmd::SetText { id: id.clone(), text: "Buy **milk**".into() }).unwrap();
//! page.apply(&Cmd::ChangeType { id, to: BlockType::ToDo }).unwrap();
//!
//! assert_eq!(page.blocks()[0].plain_text(), "Buy milk");
//! assert_eq!(page.version(), 2);
//! ```

pub mod commands;
pub mod page;
pub mod patch;

pub use commands::{Cmd, apply};
pub use page::Page;
pub use patch::Patch;
