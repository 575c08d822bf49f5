//! Console renderer: the styled tree inside a titled panel

use crossterm::style::{style, Attribute, Color, Stylize};

use crate::domain::CommandNode;

use super::layout::{Span, Tone, TreeHeader, VisualTree};

/// Renders the tree as a panel for terminal display.
///
/// With `color` off, the same panel is produced without escape codes.
pub fn render_console(node: &CommandNode, header: &TreeHeader, color: bool) -> String {
    let tree = VisualTree::new(node, header);
    let title = format!(" {} ", header.title());
    let inner = tree.width().max(title.chars().count() + 2);

    let mut out = String::new();
    out.push_str(&top_border(&title, inner, color));
    out.push('\n');

    for line in &tree.lines {
        let pad = inner - line.width();
        out.push_str(&paint("│ ", Tone::Guide, color));
        out.push_str(&paint(&line.guide, Tone::Guide, color));
        for span in &line.spans {
            out.push_str(&paint_span(span, color));
        }
        out.push_str(&" ".repeat(pad));
        out.push_str(&paint(" │", Tone::Guide, color));
        out.push('\n');
    }

    let bottom = format!("╰{}╯", "─".repeat(inner + 2));
    out.push_str(&paint(&bottom, Tone::Guide, color));
    out.push('\n');
    out
}

fn top_border(title: &str, inner: usize, color: bool) -> String {
    let total = inner + 2;
    let title_width = title.chars().count();
    let left = (total - title_width) / 2;
    let right = total - title_width - left;

    let mut border = paint(&format!("╭{}", "─".repeat(left)), Tone::Guide, color);
    border.push_str(&if color {
        style(title).attribute(Attribute::Bold).to_string()
    } else {
        title.to_string()
    });
    border.push_str(&paint(&format!("{}╮", "─".repeat(right)), Tone::Guide, color));
    border
}

fn paint_span(span: &Span, color: bool) -> String {
    paint(&span.text, span.tone, color)
}

/// Applies the terminal style for a tone
fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color || text.is_empty() {
        return text.to_string();
    }

    let styled = style(text);
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Root => styled.with(Color::Blue).bold().to_string(),
        Tone::Group => styled.with(Color::Cyan).bold().to_string(),
        Tone::Command => styled.with(Color::White).bold().to_string(),
        Tone::Dim => styled.dim().to_string(),
        Tone::Heading => styled.with(Color::Yellow).to_string(),
        Tone::Flag => styled.with(Color::Green).to_string(),
        Tone::Argument => styled.with(Color::Magenta).to_string(),
        Tone::Guide => styled.with(Color::Cyan).to_string(),
    }
}
