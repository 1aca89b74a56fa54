use crate::model::{RichText, Style};
use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Bold, InlineCode, Italic, Strikethrough},
};

/// One marker pair found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    pub style: Style,
    /// Full span including delimiters.
    pub full: Span,
    /// Span between the delimiters.
    pub inner: Span,
}

/// Parses inline markdown emphasis into styled runs.
///
/// Each marker kind is scanned independently over the whole input, the
/// matches are merged by start offset, and the text between them becomes
/// plain runs. The result is never empty: input without any marker (the
/// empty string included) yields a single plain run.
///
/// # Overlapping markers
/// Matches are not checked against each other. For nested input such as
/// `**bold *and italic* text**` both the bold and the italic match are
/// emitted, and the trailing run starts after the last match walked (here
/// the italic one), so some text appears twice. The output is deterministic.
pub fn parse_inline(text: &str) -> Vec<RichText> {
    let matches = find_markers(text);
    if matches.is_empty() {
        return vec![RichText::plain(text)];
    }

    let mut out = Vec::with_capacity(matches.len() * 2 + 1);
    let mut last = 0;

    for m in &matches {
        if m.full.start > last {
            out.push(RichText::plain(&text[last..m.full.start]));
        }
        out.push(RichText::styled(m.inner.slice(text), m.style));
        last = m.full.end;
    }

    if last < text.len() {
        out.push(RichText::plain(&text[last..]));
    }
    out
}

/// Finds every marker pair of every style, sorted by start offset.
///
/// The sort is stable, so matches starting at the same offset keep the
/// detection order bold, italic, strikethrough, code.
pub fn find_markers(s: &str) -> Vec<MarkerMatch> {
    let mut all: Vec<MarkerMatch> = Style::PRECEDENCE
        .into_iter()
        .flat_map(|style| scan(s, style))
        .collect();
    all.sort_by_key(|m| m.full.start);
    all
}

/// Scans the whole input for one style. After a match the scan resumes at
/// the match end; otherwise it advances one byte.
fn scan(s: &str, style: Style) -> Vec<MarkerMatch> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        let found = match style {
            Style::Bold => try_parse_paired(&mut cur, Bold::DELIM.as_bytes(), style),
            Style::Italic => try_parse_italic(&mut cur),
            Style::Strikethrough => {
                try_parse_paired(&mut cur, Strikethrough::DELIM.as_bytes(), style)
            }
            Style::Code => try_parse_paired(&mut cur, InlineCode::DELIM.as_bytes(), style),
        };
        match found {
            Some(m) => out.push(m),
            None => {
                cur.bump();
            }
        }
    }
    out
}

/// Attempts a `delim ... delim` pair at the cursor. The inner text is the
/// shortest possible (it may be empty) and may not cross a line break.
/// On failure the cursor is restored.
fn try_parse_paired(cur: &mut Cursor<'_>, delim: &[u8], style: Style) -> Option<MarkerMatch> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(delim) && !cur.at_line_break() {
        cur.bump();
    }

    if !cur.starts_with(delim) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(delim.len());

    Some(MarkerMatch {
        style,
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Attempts `*text*` at the cursor: the opening star must not follow a
/// star, the closing star must not precede one, and the inner text is one
/// or more non-star bytes. On failure the cursor is restored.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<MarkerMatch> {
    if cur.peek() != Some(Italic::STAR) || cur.prev() == Some(Italic::STAR) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // *
    let inner_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == Italic::STAR {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    let closed = cur.peek() == Some(Italic::STAR)
        && inner_end > inner_start
        && cur.peek_at(1) != Some(Italic::STAR);
    if !closed {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing *

    Some(MarkerMatch {
        style: Style::Italic,
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}
