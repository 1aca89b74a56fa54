//! Inline marker kinds, each owning its delimiter.
//!
//! The scanner and the renderer both read delimiters from here; neither
//! hardcodes `**` or `` ` ``.

use crate::model::Style;

/// `**bold**`
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";
}

/// `*italic*`, never adjacent to another `*`.
pub struct Italic;

impl Italic {
    pub const DELIM: &'static str = "*";
    pub const STAR: u8 = b'*';
}

/// `~~strikethrough~~`
pub struct Strikethrough;

impl Strikethrough {
    pub const DELIM: &'static str = "~~";
}

/// `` `code` ``
pub struct InlineCode;

impl InlineCode {
    pub const DELIM: &'static str = "`";
}

/// The delimiter written around a run carrying `style`.
pub fn delimiter(style: Style) -> &'static str {
    match style {
        Style::Bold => Bold::DELIM,
        Style::Italic => Italic::DELIM,
        Style::Strikethrough => Strikethrough::DELIM,
        Style::Code => InlineCode::DELIM,
    }
}
