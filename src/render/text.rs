//! Plain-text renderer
//!
//! Same tree as the console view, with no style codes, wrapped at a fixed
//! width so captures are identical across terminals.

use crate::domain::CommandNode;

use super::layout::{Line, TreeHeader, VisualTree};

/// Default capture width in characters
pub const DEFAULT_TEXT_WIDTH: usize = 200;

/// Renders the tree as plain, newline-terminated text
pub fn render_text(node: &CommandNode, header: &TreeHeader, width: usize) -> String {
    let tree = VisualTree::new(node, header);
    let mut out = String::new();
    for line in &tree.lines {
        for row in wrap_line(line, width) {
            out.push_str(row.trim_end());
            out.push('\n');
        }
    }
    out
}

/// Splits a line into rows of at most `width` characters. Continuation rows
/// repeat the guide of the line's subtree.
fn wrap_line(line: &Line, width: usize) -> Vec<String> {
    let guide_width = line.guide.chars().count();
    let label: Vec<char> = line.label().chars().collect();

    // Too narrow to make progress: emit unwrapped
    if width <= guide_width || label.len() + guide_width <= width {
        return vec![line.plain()];
    }

    let mut rows = Vec::new();
    let mut rest: &[char] = &label;
    let mut guide = line.guide.as_str();

    while !rest.is_empty() {
        let room = width.saturating_sub(guide.chars().count()).max(1);
        let take = break_point(rest, room);
        let chunk: String = rest[..take].iter().collect();
        rows.push(format!("{}{}", guide, chunk));

        rest = &rest[take..];
        while rest.first() == Some(&' ') {
            rest = &rest[1..];
        }
        guide = line.continuation.as_str();
    }

    rows
}

/// Prefers breaking at the last space that fits
fn break_point(text: &[char], room: usize) -> usize {
    if text.len() <= room {
        return text.len();
    }
    if text[room] == ' ' {
        return room;
    }
    match text[..room].iter().rposition(|c| *c == ' ') {
        Some(pos) if pos > 0 => pos,
        _ => room,
    }
}
