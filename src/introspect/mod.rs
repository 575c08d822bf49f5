//! # Introspection
//!
//! Turns a live host command registry into the canonical [`CommandNode`]
//! tree.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`CommandSource`] | what the engine needs from a host framework |
//! | [`classify`] | one raw parameter to a descriptor |
//! | [`TreeBuilder`] | recursive walk, ordering and self-exclusion |
//! | [`ClapCommand`] | adapter for `clap::Command` |
//! | [`RegistryCommand`] | in-memory registry |
//!
//! The tree is rebuilt on every call; nothing here caches.
//!
//! [`CommandNode`]: crate::domain::CommandNode

mod builder;
mod clap_adapter;
mod classify;
pub mod registry;
mod source;

pub use builder::{IntrospectError, TreeBuilder, DEFAULT_RESERVED_NAME};
pub use clap_adapter::ClapCommand;
pub use classify::{classify, is_help_alias, normalize_default, HELP_ALIASES};
pub use registry::RegistryCommand;
pub use source::{CommandSource, RawDefault, RawParameter};
