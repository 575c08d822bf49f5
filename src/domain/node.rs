//! Canonical command tree

use super::parameter::ParameterDescriptor;

/// Fallback short help for commands without documentation
pub const NO_DESCRIPTION: &str = "No description available.";

/// One command or sub-application in the canonical tree
#[derive(Debug, Clone, PartialEq)]
pub struct CommandNode {
    /// Unique among its siblings, not globally
    pub name: String,

    /// First line of the documentation, or [`NO_DESCRIPTION`]
    pub short_help: String,

    /// Complete documentation text, when the host has any
    pub full_help: Option<String>,

    /// True for dispatchers to sub-commands
    pub is_group: bool,

    /// Visible parameters in declaration order
    pub parameters: Vec<ParameterDescriptor>,

    /// Leaves first, then groups, each bucket sorted by name
    pub children: Vec<CommandNode>,
}

impl CommandNode {
    /// Derives the short help line from full documentation text
    pub fn short_help_from(help: Option<&str>) -> String {
        help.and_then(|text| text.lines().map(str::trim).find(|line| !line.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string())
    }

    /// Returns the child with the given name
    pub fn child(&self, name: &str) -> Option<&CommandNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follows a path of child names from this node
    pub fn find<'a, I>(&self, path: I) -> Option<&CommandNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = self;
        for name in path {
            current = current.child(name)?;
        }
        Some(current)
    }

    /// Names of the direct children, in order
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    /// Iterates over this node and all descendants, depth-first pre-order
    pub fn iter(&self) -> impl Iterator<Item = &CommandNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }
}
