//! Parameter descriptors
//!
//! A [`ParameterDescriptor`] is the host-independent description of one
//! declared parameter. Defaults are modelled explicitly so that "no default"
//! never gets confused with a falsy explicit default such as `0` or `false`.

use std::fmt;

use serde::{Serialize, Serializer};

/// How a parameter is supplied on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Supplied by position, no flag spelling
    Positional,
    /// Boolean switch that takes no value
    Flag,
    /// Named parameter that takes a value
    Option,
}

/// A normalized default value
///
/// Serializes as the bare JSON scalar (or array for lists).
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Scalar>),
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::Float(f) => serializer.serialize_f64(*f),
            Scalar::Text(s) => serializer.serialize_str(s),
            Scalar::List(items) => serializer.collect_seq(items),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            // An empty string default must stay visible
            Scalar::Text(s) if s.is_empty() => write!(f, "\"\""),
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Default value of a parameter
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DefaultValue {
    /// The host declared no default
    #[default]
    NotProvided,
    /// The host declared this default explicitly
    Explicit(Scalar),
}

impl DefaultValue {
    /// Returns the explicit default, if any
    pub fn explicit(&self) -> Option<&Scalar> {
        match self {
            DefaultValue::NotProvided => None,
            DefaultValue::Explicit(value) => Some(value),
        }
    }

    pub fn is_provided(&self) -> bool {
        matches!(self, DefaultValue::Explicit(_))
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DefaultValue::NotProvided => serializer.serialize_none(),
            DefaultValue::Explicit(value) => value.serialize(serializer),
        }
    }
}

/// One declared parameter of a command
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    /// Internal identifier
    pub name: String,

    pub kind: ParamKind,

    /// User-facing spellings, short forms first. Empty for positionals.
    pub aliases: Vec<String>,

    /// Additional visible alternate spellings
    pub secondary_aliases: Vec<String>,

    /// Display name for the value (positional label)
    pub value_name: String,

    /// Short type label, e.g. `boolean`, `choice`, `text`
    pub value_type: String,

    pub help_text: String,

    pub default_value: DefaultValue,

    pub required: bool,

    pub hidden: bool,

    /// Environment variable that can supply the value
    pub env_var: Option<String>,
}

impl ParameterDescriptor {
    pub fn is_flag(&self) -> bool {
        self.kind == ParamKind::Flag
    }

    pub fn is_positional(&self) -> bool {
        self.kind == ParamKind::Positional
    }

    /// Label shown in tree renderings: the joined aliases, or the
    /// uppercased value name for positionals
    pub fn label(&self) -> String {
        if self.is_positional() || self.aliases.is_empty() {
            format!("ARG: {}", self.value_name.to_uppercase())
        } else {
            self.aliases.join(" / ")
        }
    }
}
