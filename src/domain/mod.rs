//! Domain models for the help tree
//!
//! The canonical, host-independent command tree. Contains no I/O.

mod node;
mod parameter;

pub use node::{CommandNode, NO_DESCRIPTION};
pub use parameter::{DefaultValue, ParamKind, ParameterDescriptor, Scalar};
