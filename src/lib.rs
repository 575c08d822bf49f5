//! clap-helptree - browse and export the command tree of a clap application
//!
//! The tree is introspected from the live command registry, normalized into
//! [`CommandNode`]s and projected by one of four renderers (console panel,
//! plain text, JSON document, SVG). Persisted formats go through an
//! [`ExportSink`].

pub mod cli;
pub mod domain;
pub mod introspect;
pub mod render;
pub mod storage;

pub use cli::{add_helptree, HelptreeArgs};
pub use domain::{CommandNode, DefaultValue, ParamKind, ParameterDescriptor, Scalar};
pub use introspect::{ClapCommand, CommandSource, TreeBuilder};
pub use storage::ExportSink;
