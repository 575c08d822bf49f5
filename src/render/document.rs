//! Structured document renderer (JSON)
//!
//! Field order is fixed by the record structs below and arrays follow tree
//! order, so unchanged registries produce byte-identical output.

use serde::Serialize;
use thiserror::Error;

use crate::domain::{CommandNode, DefaultValue, ParameterDescriptor};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize help document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Help document is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// One command record
#[derive(Debug, Serialize)]
pub struct DocumentNode<'a> {
    pub name: &'a str,
    pub help: &'a str,
    pub is_group: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'a str>,
    pub parameters: Vec<DocumentParameter<'a>>,
    pub subcommands: Vec<DocumentNode<'a>>,
}

/// One parameter record
#[derive(Debug, Serialize)]
pub struct DocumentParameter<'a> {
    pub name: &'a str,
    pub opts: &'a [String],
    pub secondary_opts: &'a [String],
    #[serde(rename = "type")]
    pub value_type: &'a str,
    pub required: bool,
    pub default: &'a DefaultValue,
    pub help: &'a str,
    pub hidden: bool,
    pub is_flag: bool,
    pub envvar: Option<&'a str>,
}

impl<'a> DocumentNode<'a> {
    /// Projects a tree; only the root carries the version
    pub fn from_tree(node: &'a CommandNode, version: Option<&'a str>) -> Self {
        let mut doc = Self::project(node);
        doc.version = version;
        doc
    }

    fn project(node: &'a CommandNode) -> Self {
        Self {
            name: &node.name,
            help: &node.short_help,
            is_group: node.is_group,
            version: None,
            parameters: node.parameters.iter().map(DocumentParameter::project).collect(),
            subcommands: node.children.iter().map(Self::project).collect(),
        }
    }
}

impl<'a> DocumentParameter<'a> {
    fn project(param: &'a ParameterDescriptor) -> Self {
        Self {
            name: &param.name,
            opts: &param.aliases,
            secondary_opts: &param.secondary_aliases,
            value_type: &param.value_type,
            required: param.required,
            default: &param.default_value,
            help: &param.help_text,
            hidden: param.hidden,
            is_flag: param.is_flag(),
            envvar: param.env_var.as_deref(),
        }
    }
}

/// Renders the tree as pretty JSON with four-space indentation
pub fn render_document(node: &CommandNode, version: Option<&str>) -> Result<String, RenderError> {
    let doc = DocumentNode::from_tree(node, version);

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)?;
    buf.push(b'\n');

    Ok(String::from_utf8(buf)?)
}

/// Renders the tree as a `serde_json::Value`
pub fn document_value(node: &CommandNode, version: Option<&str>) -> Result<serde_json::Value, RenderError> {
    Ok(serde_json::to_value(DocumentNode::from_tree(node, version))?)
}
