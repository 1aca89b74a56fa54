//! Block-document model for a Notion-style editor.
//!
//! Pages are forests of typed [`Block`]s carrying styled rich-text runs.
//! The crate converts them to and from markdown and the structured-block
//! JSON wire format, and offers copy-on-write tree operations, editing
//! commands, page templates and page file I/O.

pub mod editing;
pub mod io;
pub mod model;
pub mod parsing;
pub mod templates;
pub mod tree;
pub mod wire;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{Cmd, Page, Patch, apply};
pub use io::*;
pub use model::*;
pub use parsing::{
    from_markdown, from_pasted_text, parse_inline, plain_text, render_inline, to_markdown,
    to_plain_text,
};
pub use templates::{TemplateKind, template};
pub use tree::*;
pub use wire::{
    ExportedPage, ImportedPage, WireBlock, WireError, export_page, from_wire, from_wire_json,
    import_page, to_wire, to_wire_json,
};
