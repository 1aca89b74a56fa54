use serde::{Deserialize, Serialize};

/// Run tag. Only `text` runs exist today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RichTextKind {
    #[default]
    Text,
}

/// Text colour palette offered by the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
}

/// One inline style flag that the markup parser can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Italic,
    Strikethrough,
    Code,
}

impl Style {
    /// Detection order of the inline parser, which is also the wrap order
    /// of the renderer (innermost first).
    pub const PRECEDENCE: [Style; 4] = [
        Style::Bold,
        Style::Italic,
        Style::Strikethrough,
        Style::Code,
    ];
}

/// Style flags of a run. A missing `annotations` object on the wire, or any
/// missing field inside it, reads as the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

impl Annotations {
    /// Annotations with exactly one style flag set.
    pub fn only(style: Style) -> Self {
        let mut annotations = Self::default();
        annotations.set(style, true);
        annotations
    }

    pub fn set(&mut self, style: Style, on: bool) {
        match style {
            Style::Bold => self.bold = on,
            Style::Italic => self.italic = on,
            Style::Strikethrough => self.strikethrough = on,
            Style::Code => self.code = on,
        }
    }

    pub fn has(&self, style: Style) -> bool {
        match style {
            Style::Bold => self.bold,
            Style::Italic => self.italic,
            Style::Strikethrough => self.strikethrough,
            Style::Code => self.code,
        }
    }

    /// No flags and the default colour.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// A contiguous span of text sharing one style combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type", default)]
    pub kind: RichTextKind,
    pub text: TextContent,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub annotations: Annotations,
}

impl RichText {
    /// An unstyled run.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: RichTextKind::Text,
            text: TextContent {
                content: content.into(),
                link: None,
            },
            annotations: Annotations::default(),
        }
    }

    /// A run carrying a single style.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            annotations: Annotations::only(style),
            ..Self::plain(content)
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.text.link = Some(link.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.annotations.color = color;
        self
    }

    pub fn content(&self) -> &str {
        &self.text.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_annotations_read_as_default() {
        let run: RichText =
            serde_json::from_value(json!({"type": "text", "text": {"content": "hi"}})).unwrap();
        assert_eq!(run, RichText::plain("hi"));
        assert!(run.annotations.is_plain());
    }

    #[test]
    fn null_annotations_read_as_default() {
        let run: RichText = serde_json::from_value(json!({
            "type": "text",
            "text": {"content": "hi"},
            "annotations": null
        }))
        .unwrap();
        assert_eq!(run, RichText::plain("hi"));
    }

    #[test]
    fn partial_annotations_fill_in_defaults() {
        let run: RichText = serde_json::from_value(json!({
            "type": "text",
            "text": {"content": "hi", "link": null},
            "annotations": {"bold": true}
        }))
        .unwrap();
        assert_eq!(run, RichText::styled("hi", Style::Bold));
        assert_eq!(run.annotations.color, Color::Default);
    }

    #[test]
    fn serializes_link_as_null_and_full_annotations() {
        let value = serde_json::to_value(RichText::plain("x")).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "text",
                "text": {"content": "x", "link": null},
                "annotations": {
                    "bold": false,
                    "italic": false,
                    "strikethrough": false,
                    "underline": false,
                    "code": false,
                    "color": "default"
                }
            })
        );
    }

    #[test]
    fn only_sets_one_flag() {
        let a = Annotations::only(Style::Strikethrough);
        assert!(a.strikethrough);
        assert!(!a.bold && !a.italic && !a.code && !a.underline);
        assert!(a.has(Style::Strikethrough));
        assert!(!a.is_plain());
    }

    #[test]
    fn builder_helpers() {
        let run = RichText::plain("docs")
            .with_link("https://example.com")
            .with_color(Color::Blue);
        assert_eq!(run.content(), "docs");
        assert_eq!(run.text.link.as_deref(), Some("https://example.com"));
        assert_eq!(run.annotations.color, Color::Blue);
    }
}
