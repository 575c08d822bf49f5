//! # Renderers
//!
//! Pure projections of a [`CommandNode`] tree. None of them mutate the tree
//! or touch the filesystem, so one tree can feed several renderers.
//!
//! | Renderer | Output |
//! |----------|--------|
//! | [`render_console`] | styled panel for the terminal |
//! | [`render_text`] | fixed-width plain text |
//! | [`render_document`] | pretty JSON document |
//! | [`render_svg`] | self-contained SVG image |
//!
//! [`CommandNode`]: crate::domain::CommandNode

mod console;
mod document;
mod layout;
mod svg;
mod text;

pub use console::render_console;
pub use document::{document_value, render_document, DocumentNode, DocumentParameter, RenderError};
pub use layout::{Line, Span, Tone, TreeHeader, VisualTree};
pub use svg::{render_svg, RecordingSurface, Surface, DEFAULT_SVG_WIDTH};
pub use text::{render_text, DEFAULT_TEXT_WIDTH};
