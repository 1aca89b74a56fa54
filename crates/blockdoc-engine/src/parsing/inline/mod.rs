//! # Inline Parsing
//!
//! Converts a string with inline emphasis markers into styled
//! [`RichText`](crate::model::RichText) runs, and back.
//!
//! ## Markers
//!
//! In detection order: `**bold**`, `*italic*`, `~~strikethrough~~`,
//! `` `code` ``. Each kind is matched globally over the original string;
//! the matches are then merged by start offset (see [`parse_inline`] for
//! how overlaps behave).
//!
//! ## Modules
//!
//! - **`kinds`**: marker types owning their delimiters
//! - **`cursor`**: byte cursor used by the scanners
//! - **`parser`**: `parse_inline()` and the per-marker `try_parse_*` scanners
//! - **`render`**: `render_inline()` and `plain_text()`
//!
//! `render_inline(&parse_inline(s)) == s` holds for any input with at most
//! one non-nested marker pair.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod render;

pub use parser::{MarkerMatch, find_markers, parse_inline};
pub use render::{plain_text, render_inline, render_run};
