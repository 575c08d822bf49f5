//! Vector-image renderer
//!
//! Drawing happens on a [`RecordingSurface`], which only exists after a
//! [`Surface`] has been switched into recording mode. The SVG document is
//! produced by an explicit [`RecordingSurface::save_svg`] call.

use crate::domain::CommandNode;

use super::layout::{Line, Tone, TreeHeader, VisualTree};

/// Default surface width in columns
pub const DEFAULT_SVG_WIDTH: usize = 100;

const FONT_SIZE: f64 = 14.0;
const CHAR_WIDTH: f64 = FONT_SIZE * 0.61;
const LINE_HEIGHT: f64 = FONT_SIZE * 1.22;
const MARGIN: f64 = 10.0;
const TITLE_BAR: f64 = 40.0;
const BACKGROUND: &str = "#292929";

/// A drawing surface that is not recording
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    width: usize,
}

impl Surface {
    /// A surface at least `width` columns wide
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Switches the surface into recording mode
    pub fn record(self) -> RecordingSurface {
        RecordingSurface {
            width: self.width,
            lines: Vec::new(),
        }
    }
}

/// A surface that keeps everything drawn on it
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: usize,
    lines: Vec<Line>,
}

impl RecordingSurface {
    /// Draws a laid-out tree
    pub fn draw(&mut self, tree: &VisualTree) {
        self.lines.extend(tree.lines.iter().cloned());
    }

    /// Lays out and draws a command tree
    pub fn draw_tree(&mut self, node: &CommandNode, header: &TreeHeader) {
        self.draw(&VisualTree::new(node, header));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Materializes everything recorded so far as a self-contained SVG
    pub fn save_svg(&self, title: &str) -> String {
        let columns = self
            .lines
            .iter()
            .map(Line::width)
            .max()
            .unwrap_or(0)
            .max(self.width)
            .max(title.chars().count() + 4);

        let content_width = columns as f64 * CHAR_WIDTH;
        let content_height = self.lines.len() as f64 * LINE_HEIGHT;
        let width = content_width + MARGIN * 2.0 + 2.0;
        let height = content_height + TITLE_BAR + MARGIN * 2.0;

        let mut svg = format!(
            concat!(
                "<svg class=\"helptree\" viewBox=\"0 0 {w:.1} {h:.1}\" ",
                "xmlns=\"http://www.w3.org/2000/svg\">\n",
                "<style>\n",
                ".ht {{ font-family: \"Fira Code\", Menlo, monospace; font-size: {fs}px; white-space: pre; fill: #c5c8c6; }}\n",
                ".ht-title {{ font-family: arial; font-size: 18px; fill: #c5c8c6; }}\n",
                ".ht-root {{ fill: #6d8fd4; font-weight: bold; }}\n",
                ".ht-group {{ fill: #4ec9c7; font-weight: bold; }}\n",
                ".ht-command {{ fill: #ffffff; font-weight: bold; }}\n",
                ".ht-dim {{ fill: #868887; }}\n",
                ".ht-heading {{ fill: #d0b344; }}\n",
                ".ht-flag {{ fill: #98a84b; }}\n",
                ".ht-argument {{ fill: #c26dbd; }}\n",
                ".ht-guide {{ fill: #4ec9c7; }}\n",
                "</style>\n",
                "<rect fill=\"{bg}\" stroke=\"rgba(255,255,255,0.35)\" stroke-width=\"1\" ",
                "x=\"1\" y=\"1\" width=\"{rw:.1}\" height=\"{rh:.1}\" rx=\"8\"/>\n",
                "<text class=\"ht-title\" x=\"{tx:.1}\" y=\"27\" text-anchor=\"middle\">{title}</text>\n",
                "<g transform=\"translate(26,22)\">\n",
                "<circle cx=\"0\" cy=\"0\" r=\"7\" fill=\"#ff5f57\"/>\n",
                "<circle cx=\"22\" cy=\"0\" r=\"7\" fill=\"#febc2e\"/>\n",
                "<circle cx=\"44\" cy=\"0\" r=\"7\" fill=\"#28c840\"/>\n",
                "</g>\n",
                "<g transform=\"translate({mx:.1}, {ty:.1})\">\n",
            ),
            w = width,
            h = height,
            fs = FONT_SIZE,
            bg = BACKGROUND,
            rw = width - 2.0,
            rh = height - 2.0,
            tx = width / 2.0,
            title = html_escape::encode_text(title),
            mx = MARGIN + 1.0,
            ty = TITLE_BAR,
        );

        for (row, line) in self.lines.iter().enumerate() {
            let y = (row as f64 + 1.0) * LINE_HEIGHT;
            svg.push_str(&format!("<text class=\"ht\" x=\"0\" y=\"{:.1}\" xml:space=\"preserve\">", y));
            push_tspan(&mut svg, &line.guide, Tone::Guide);
            for span in &line.spans {
                push_tspan(&mut svg, &span.text, span.tone);
            }
            svg.push_str("</text>\n");
        }

        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

fn push_tspan(svg: &mut String, text: &str, tone: Tone) {
    if text.is_empty() {
        return;
    }
    let escaped = html_escape::encode_text(text);
    match tone_class(tone) {
        Some(class) => svg.push_str(&format!("<tspan class=\"{}\">{}</tspan>", class, escaped)),
        None => svg.push_str(&escaped),
    }
}

fn tone_class(tone: Tone) -> Option<&'static str> {
    match tone {
        Tone::Plain => None,
        Tone::Root => Some("ht-root"),
        Tone::Group => Some("ht-group"),
        Tone::Command => Some("ht-command"),
        Tone::Dim => Some("ht-dim"),
        Tone::Heading => Some("ht-heading"),
        Tone::Flag => Some("ht-flag"),
        Tone::Argument => Some("ht-argument"),
        Tone::Guide => Some("ht-guide"),
    }
}

/// Records the tree on a fresh surface and saves it, titled after the app
pub fn render_svg(node: &CommandNode, header: &TreeHeader, width: usize) -> String {
    let mut surface = Surface::new(width).record();
    surface.draw_tree(node, header);
    surface.save_svg(&header.title())
}
