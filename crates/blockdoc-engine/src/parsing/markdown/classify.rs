use std::sync::OnceLock;

use regex::Regex;

use crate::model::BlockKind;

/// The block kind of one source line and the slice that becomes its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub kind: BlockKind,
    /// Text after the line's marker, still carrying inline markup.
    pub content: &'a str,
}

/// Decides which block a single line of text becomes.
///
/// Classification is local: a line never looks at its neighbours, so every
/// non-blank line yields exactly one block.
pub trait LineClassifier {
    /// Returns `None` for blank lines.
    fn classify<'a>(&self, line: &'a str) -> Option<LineClass<'a>>;
}

/// The markdown import classifier.
///
/// Prefixes are tested on the trimmed line in this order: `# `, `## `,
/// `### `, `- [ ] `/`* [ ] `, `- [x] `/`* [x] `, `- `/`* `, `1. `
/// (any digits), and everything else is a paragraph. Checkboxes are tested
/// before plain bullets so they are never read as bullets.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    const HEADINGS: [(&'static str, BlockKind); 3] = [
        ("# ", BlockKind::Heading1),
        ("## ", BlockKind::Heading2),
        ("### ", BlockKind::Heading3),
    ];
    const UNCHECKED: [&'static str; 2] = ["- [ ] ", "* [ ] "];
    const CHECKED: [&'static str; 2] = ["- [x] ", "* [x] "];
    const BULLETS: [&'static str; 2] = ["- ", "* "];
}

impl LineClassifier for MarkdownLineClassifier {
    fn classify<'a>(&self, line: &'a str) -> Option<LineClass<'a>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        for (prefix, kind) in Self::HEADINGS {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                return Some(LineClass {
                    kind,
                    content: rest,
                });
            }
        }

        let class = if let Some(rest) = strip_any(trimmed, &Self::UNCHECKED) {
            LineClass {
                kind: BlockKind::ToDo { checked: false },
                content: rest,
            }
        } else if let Some(rest) = strip_any(trimmed, &Self::CHECKED) {
            LineClass {
                kind: BlockKind::ToDo { checked: true },
                content: rest,
            }
        } else if let Some(rest) = strip_any(trimmed, &Self::BULLETS) {
            LineClass {
                kind: BlockKind::BulletedListItem,
                content: rest,
            }
        } else if let Some(m) = numbered_marker().find(trimmed) {
            LineClass {
                kind: BlockKind::NumberedListItem,
                content: &trimmed[m.end()..],
            }
        } else {
            LineClass {
                kind: BlockKind::Paragraph,
                content: trimmed,
            }
        };
        Some(class)
    }
}

/// The looser classifier used for multi-line pastes into the editor.
///
/// Accepts `+` bullets, any run of whitespace after list markers, an
/// upper-case `X` in checkboxes, code fences (```` ```lang rest ```` becomes
/// a code block holding `rest`) and `> ` quotes (read as paragraphs).
pub struct PasteLineClassifier;

impl LineClassifier for PasteLineClassifier {
    fn classify<'a>(&self, line: &'a str) -> Option<LineClass<'a>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        for (prefix, kind) in MarkdownLineClassifier::HEADINGS {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                return Some(LineClass {
                    kind,
                    content: rest,
                });
            }
        }

        let patterns = paste_patterns();
        let rules: [(&Regex, BlockKind); 6] = [
            (&patterns.unchecked, BlockKind::ToDo { checked: false }),
            (&patterns.checked, BlockKind::ToDo { checked: true }),
            (&patterns.bullet, BlockKind::BulletedListItem),
            (&patterns.numbered, BlockKind::NumberedListItem),
            (&patterns.fence, BlockKind::Code),
            (&patterns.quote, BlockKind::Paragraph),
        ];

        for (re, kind) in rules {
            if let Some(m) = re.find(trimmed) {
                return Some(LineClass {
                    kind,
                    content: &trimmed[m.end()..],
                });
            }
        }

        Some(LineClass {
            kind: BlockKind::Paragraph,
            content: trimmed,
        })
    }
}

fn strip_any<'a>(s: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|p| s.strip_prefix(*p))
}

fn numbered_marker() -> &'static Regex {
    static NUMBERED: OnceLock<Regex> = OnceLock::new();
    NUMBERED.get_or_init(|| Regex::new(r"^[0-9]+\.\s").expect("Invalid numbered list regex"))
}

struct PastePatterns {
    unchecked: Regex,
    checked: Regex,
    bullet: Regex,
    numbered: Regex,
    fence: Regex,
    quote: Regex,
}

fn paste_patterns() -> &'static PastePatterns {
    static PATTERNS: OnceLock<PastePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| PastePatterns {
        unchecked: Regex::new(r"^[-*+]\s+\[\s\]\s+").expect("Invalid checkbox regex"),
        checked: Regex::new(r"^[-*+]\s+\[[xX]\]\s+").expect("Invalid checkbox regex"),
        bullet: Regex::new(r"^[-*+]\s+").expect("Invalid bullet regex"),
        numbered: Regex::new(r"^[0-9]+\.\s+").expect("Invalid numbered list regex"),
        fence: Regex::new(r"^```\w*\s*").expect("Invalid code fence regex"),
        quote: Regex::new(r"^> ").expect("Invalid quote regex"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(line: &str) -> Option<LineClass<'_>> {
        MarkdownLineClassifier.classify(line)
    }

    #[rstest]
    #[case("# Title", BlockKind::Heading1, "Title")]
    #[case("## Section", BlockKind::Heading2, "Section")]
    #[case("### Sub", BlockKind::Heading3, "Sub")]
    #[case("- [ ] open", BlockKind::ToDo { checked: false }, "open")]
    #[case("* [ ] open", BlockKind::ToDo { checked: false }, "open")]
    #[case("- [x] done", BlockKind::ToDo { checked: true }, "done")]
    #[case("* [x] done", BlockKind::ToDo { checked: true }, "done")]
    #[case("- item", BlockKind::BulletedListItem, "item")]
    #[case("* item", BlockKind::BulletedListItem, "item")]
    #[case("1. first", BlockKind::NumberedListItem, "first")]
    #[case("42.\tanswer", BlockKind::NumberedListItem, "answer")]
    #[case("just text", BlockKind::Paragraph, "just text")]
    #[case("   padded   ", BlockKind::Paragraph, "padded")]
    fn markdown_line_classes(#[case] line: &str, #[case] kind: BlockKind, #[case] content: &str) {
        assert_eq!(classify(line), Some(LineClass { kind, content }));
    }

    #[rstest]
    #[case("+ plus")]
    #[case("#NoSpace")]
    #[case("1.no space")]
    #[case("> quote")]
    #[case("```rust")]
    fn markdown_falls_back_to_paragraph(#[case] line: &str) {
        assert_eq!(classify(line).map(|c| c.kind), Some(BlockKind::Paragraph));
    }

    #[test]
    fn upper_case_x_checkbox_reads_as_bullet() {
        // `- [X] a` is not a checkbox, so it falls through to the bullet rule
        let class = classify("- [X] a").unwrap();
        assert_eq!(class.kind, BlockKind::BulletedListItem);
        assert_eq!(class.content, "[X] a");
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   \t "), None);
    }

    #[test]
    fn numbered_marker_keeps_extra_whitespace() {
        assert_eq!(classify("3.  two").unwrap().content, " two");
    }

    #[rstest]
    #[case("+ plus", BlockKind::BulletedListItem, "plus")]
    #[case("-   wide", BlockKind::BulletedListItem, "wide")]
    #[case("+ [ ] task", BlockKind::ToDo { checked: false }, "task")]
    #[case("- [X] Task", BlockKind::ToDo { checked: true }, "Task")]
    #[case("2.   spaced", BlockKind::NumberedListItem, "spaced")]
    #[case("```rust let x = 1;", BlockKind::Code, "let x = 1;")]
    #[case("```", BlockKind::Code, "")]
    #[case("> quoted", BlockKind::Paragraph, "quoted")]
    #[case("## Heading", BlockKind::Heading2, "Heading")]
    #[case("plain", BlockKind::Paragraph, "plain")]
    fn paste_line_classes(#[case] line: &str, #[case] kind: BlockKind, #[case] content: &str) {
        assert_eq!(
            PasteLineClassifier.classify(line),
            Some(LineClass { kind, content })
        );
    }
}
