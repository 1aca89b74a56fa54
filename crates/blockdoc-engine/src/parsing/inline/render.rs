use crate::model::{RichText, Style};

use super::kinds::delimiter;

/// Serializes runs back to inline markdown.
///
/// Active styles wrap the content innermost first in the order bold,
/// italic, strikethrough, code, so a bold+code run renders as `` `**x**` ``.
pub fn render_inline(runs: &[RichText]) -> String {
    runs.iter().map(render_run).collect()
}

pub fn render_run(run: &RichText) -> String {
    Style::PRECEDENCE
        .into_iter()
        .filter(|style| run.annotations.has(*style))
        .fold(run.text.content.clone(), |text, style| {
            let d = delimiter(style);
            format!("{d}{text}{d}")
        })
}

/// Run contents concatenated without any markers.
pub fn plain_text(runs: &[RichText]) -> String {
    runs.iter().map(RichText::content).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Annotations, Color};

    #[test]
    fn nested_wrap_order() {
        let mut run = RichText::plain("x");
        run.annotations = Annotations {
            bold: true,
            italic: true,
            strikethrough: true,
            code: true,
            ..Annotations::default()
        };
        assert_eq!(render_run(&run), "`~~***x***~~`");
    }

    #[test]
    fn underline_and_color_have_no_markdown_form() {
        let mut run = RichText::plain("u").with_color(Color::Red);
        run.annotations.underline = true;
        assert_eq!(render_run(&run), "u");
    }

    #[test]
    fn plain_text_drops_markers() {
        let runs = vec![
            RichText::styled("a", Style::Bold),
            RichText::plain(" b "),
            RichText::styled("c", Style::Code),
        ];
        assert_eq!(plain_text(&runs), "a b c");
        assert_eq!(render_inline(&runs), "**a** b `c`");
    }

    #[test]
    fn empty_runs_render_empty() {
        assert_eq!(render_inline(&[]), "");
        assert_eq!(plain_text(&[]), "");
    }
}
