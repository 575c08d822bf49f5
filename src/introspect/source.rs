//! Host capability interface
//!
//! The engine needs very little from a host command framework: a name, help
//! text, whether the command dispatches to children, the declared parameters
//! and a way to enumerate and resolve children by name. Adapters implement
//! [`CommandSource`] for a concrete framework.

/// A command (or group) as exposed by the host registry
pub trait CommandSource: Sized {
    /// Command name as registered with its parent
    fn name(&self) -> &str;

    /// Full documentation text, if any
    fn help(&self) -> Option<String>;

    /// True when the command has a registry of named children
    fn is_group(&self) -> bool;

    /// Parameters declared directly on this command, in declaration order
    fn parameters(&self) -> Vec<RawParameter>;

    /// Names listed by the child registry, which may include entries that
    /// do not resolve
    fn child_names(&self) -> Vec<String>;

    /// Resolves a listed child name
    fn child(&self, name: &str) -> Option<Self>;
}

/// A default value as declared by the host, before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum RawDefault {
    /// The host's "no default given" marker
    Unset,
    /// An explicit null/none default
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// An enumerated value: symbolic name plus underlying value
    Choice { name: String, value: Box<RawDefault> },
    List(Vec<RawDefault>),
    /// A value of a type the engine does not understand
    Opaque { type_name: String, repr: Option<String> },
}

/// One parameter declaration, as read from the host
#[derive(Debug, Clone, PartialEq)]
pub struct RawParameter {
    pub name: String,

    /// Declared spellings, e.g. `-v`, `--verbose`. Empty for positionals.
    pub declared_names: Vec<String>,

    /// Extra visible spellings
    pub secondary_names: Vec<String>,

    pub value_name: Option<String>,

    pub takes_value: bool,

    /// Host-provided type label
    pub value_type: Option<String>,

    pub help: Option<String>,

    pub default: RawDefault,

    pub required: bool,

    pub hidden: bool,

    pub env_var: Option<String>,
}

impl RawParameter {
    fn new(name: impl Into<String>, declared_names: &[&str], takes_value: bool) -> Self {
        Self {
            name: name.into(),
            declared_names: declared_names.iter().map(|n| n.to_string()).collect(),
            secondary_names: vec![],
            value_name: None,
            takes_value,
            value_type: None,
            help: None,
            default: RawDefault::Unset,
            required: false,
            hidden: false,
            env_var: None,
        }
    }

    /// A boolean switch
    pub fn flag(name: impl Into<String>, declared_names: &[&str]) -> Self {
        Self::new(name, declared_names, false)
    }

    /// A named parameter that takes a value
    pub fn option(name: impl Into<String>, declared_names: &[&str]) -> Self {
        Self::new(name, declared_names, true)
    }

    /// A positional argument
    pub fn positional(name: impl Into<String>) -> Self {
        Self::new(name, &[], true)
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn default(mut self, default: RawDefault) -> Self {
        self.default = default;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn env(mut self, var: impl Into<String>) -> Self {
        self.env_var = Some(var.into());
        self
    }

    pub fn value_name(mut self, value_name: impl Into<String>) -> Self {
        self.value_name = Some(value_name.into());
        self
    }

    pub fn value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    pub fn secondary(mut self, names: &[&str]) -> Self {
        self.secondary_names = names.iter().map(|n| n.to_string()).collect();
        self
    }
}
