pub mod inline;
pub mod markdown;
pub mod span;
pub mod text_export;

pub use inline::{parse_inline, plain_text, render_inline};
pub use markdown::{block_to_markdown, from_markdown, from_pasted_text, to_markdown};
pub use span::Span;
pub use text_export::to_plain_text;
