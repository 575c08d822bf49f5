//! Tree building
//!
//! Walks a [`CommandSource`] into the canonical [`CommandNode`] tree.
//!
//! Ordering within a group is leaves first, then sub-groups, each bucket
//! sorted by name (byte order, so case-sensitive). The reserved
//! introspection command is never included as a child, which is the only
//! way a registry could describe itself.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::domain::{CommandNode, ParameterDescriptor};

use super::classify::{classify, is_help_alias};
use super::source::CommandSource;

/// Default name of the introspection command
pub const DEFAULT_RESERVED_NAME: &str = "helptree";

#[derive(Debug, Error, PartialEq)]
pub enum IntrospectError {
    #[error("No root command to introspect")]
    MissingRoot,
}

/// Builds canonical trees from a host registry
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    reserved_name: String,
    internal_params: BTreeSet<String>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED_NAME)
    }
}

impl TreeBuilder {
    /// Creates a builder that excludes the given introspection command name
    pub fn new(reserved_name: impl Into<String>) -> Self {
        Self {
            reserved_name: reserved_name.into(),
            internal_params: BTreeSet::new(),
        }
    }

    /// Parameters of the introspection command that only drive its own
    /// exports and must not appear in its description
    pub fn with_internal_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.internal_params.extend(names.into_iter().map(Into::into));
        self
    }

    /// Builds the tree for an optional root, failing loudly when absent
    pub fn build_root<C: CommandSource>(&self, root: Option<&C>) -> Result<CommandNode, IntrospectError> {
        root.map(|r| self.build(r)).ok_or(IntrospectError::MissingRoot)
    }

    /// Builds the tree rooted at `command`
    pub fn build<C: CommandSource>(&self, command: &C) -> CommandNode {
        let help = command.help();
        let is_group = command.is_group();

        let children = if is_group {
            self.build_children(command)
        } else {
            vec![]
        };

        CommandNode {
            name: command.name().to_string(),
            short_help: CommandNode::short_help_from(help.as_deref()),
            full_help: help,
            is_group,
            parameters: self.visible_parameters(command),
            children,
        }
    }

    fn visible_parameters<C: CommandSource>(&self, command: &C) -> Vec<ParameterDescriptor> {
        let is_introspection = command.name() == self.reserved_name;

        command
            .parameters()
            .iter()
            .filter(|p| !p.hidden && !is_help_alias(p))
            .filter(|p| !(is_introspection && self.internal_params.contains(&p.name)))
            .map(classify)
            .collect()
    }

    fn build_children<C: CommandSource>(&self, command: &C) -> Vec<CommandNode> {
        let mut leaves = Vec::new();
        let mut groups = Vec::new();

        for name in command.child_names() {
            if name == self.reserved_name {
                continue;
            }
            // Registries may list deferred or guarded entries
            let Some(child) = command.child(&name) else {
                continue;
            };
            if child.name() == self.reserved_name {
                continue;
            }

            if child.is_group() {
                groups.push((name, child));
            } else {
                leaves.push((name, child));
            }
        }

        leaves.sort_by(|a, b| a.0.cmp(&b.0));
        groups.sort_by(|a, b| a.0.cmp(&b.0));

        leaves
            .iter()
            .chain(groups.iter())
            .map(|(_, child)| self.build(child))
            .collect()
    }
}
