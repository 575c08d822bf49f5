//! In-memory command registry
//!
//! A small builder-style registry for hosts that do not use clap, and for
//! describing command trees by hand. Entries can be listed without a
//! resolvable command, the way lazily loaded registries behave.

use super::source::{CommandSource, RawParameter};

/// A command or group in an in-memory registry
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryCommand {
    name: String,
    help: Option<String>,
    is_group: bool,
    params: Vec<RawParameter>,
    entries: Vec<(String, Option<RegistryCommand>)>,
}

impl RegistryCommand {
    fn new(name: impl Into<String>, is_group: bool) -> Self {
        Self {
            name: name.into(),
            help: None,
            is_group,
            params: vec![],
            entries: vec![],
        }
    }

    /// An executable command
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// A dispatcher to named children
    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn param(mut self, param: RawParameter) -> Self {
        self.params.push(param);
        self
    }

    /// Registers a child under its own name
    pub fn command(mut self, command: RegistryCommand) -> Self {
        self.is_group = true;
        self.entries.push((command.name.clone(), Some(command)));
        self
    }

    /// Lists a name that resolves to nothing
    pub fn dangling(mut self, name: impl Into<String>) -> Self {
        self.is_group = true;
        self.entries.push((name.into(), None));
        self
    }
}

impl<'a> CommandSource for &'a RegistryCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> Option<String> {
        self.help.clone()
    }

    fn is_group(&self) -> bool {
        self.is_group
    }

    fn parameters(&self) -> Vec<RawParameter> {
        self.params.clone()
    }

    fn child_names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    fn child(&self, name: &str) -> Option<Self> {
        let this: &'a RegistryCommand = *self;
        this.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, command)| command.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_dangling_names_but_does_not_resolve_them() {
        let root = RegistryCommand::group("app")
            .command(RegistryCommand::leaf("run"))
            .dangling("later");
        let source = &root;
        assert_eq!(source.child_names(), vec!["run", "later"]);
        assert!(source.child("run").is_some());
        assert!(source.child("later").is_none());
        assert!(source.child("missing").is_none());
    }

    #[test]
    fn adding_children_makes_a_group() {
        let root = RegistryCommand::leaf("app").command(RegistryCommand::leaf("x"));
        assert!((&root).is_group());
    }
}
