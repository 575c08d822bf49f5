//! Parameter classification
//!
//! Turns a [`RawParameter`] into a [`ParameterDescriptor`]. Pure; never fails.

use crate::domain::{DefaultValue, ParamKind, ParameterDescriptor, Scalar};

use super::source::{RawDefault, RawParameter};

/// Prefix that marks a flag spelling
const FLAG_PREFIX: char = '-';

/// The universal help spellings, filtered from every listing
pub const HELP_ALIASES: [&str; 2] = ["-h", "--help"];

/// Returns true if the parameter is one of the built-in help switches
pub fn is_help_alias(param: &RawParameter) -> bool {
    param
        .declared_names
        .iter()
        .any(|n| HELP_ALIASES.contains(&n.as_str()))
}

/// Classifies a raw parameter declaration
pub fn classify(param: &RawParameter) -> ParameterDescriptor {
    let kind = kind_of(param);

    let aliases = match kind {
        ParamKind::Positional => vec![],
        _ => param.declared_names.clone(),
    };

    let value_name = param
        .value_name
        .clone()
        .unwrap_or_else(|| param.name.clone());

    let value_type = param.value_type.clone().unwrap_or_else(|| {
        match kind {
            ParamKind::Flag => "boolean",
            _ => "text",
        }
        .to_string()
    });

    ParameterDescriptor {
        name: param.name.clone(),
        kind,
        aliases,
        secondary_aliases: param.secondary_names.clone(),
        value_name,
        value_type,
        help_text: param.help.clone().unwrap_or_default(),
        default_value: normalize_default(&param.default),
        required: param.required,
        hidden: param.hidden,
        env_var: param.env_var.clone(),
    }
}

fn kind_of(param: &RawParameter) -> ParamKind {
    let has_flag_spelling = param
        .declared_names
        .iter()
        .any(|n| n.starts_with(FLAG_PREFIX));

    if !has_flag_spelling {
        ParamKind::Positional
    } else if param.takes_value {
        ParamKind::Option
    } else {
        ParamKind::Flag
    }
}

/// Reduces a declared default to its displayable scalar form
pub fn normalize_default(raw: &RawDefault) -> DefaultValue {
    match raw {
        RawDefault::Unset | RawDefault::None => DefaultValue::NotProvided,
        other => DefaultValue::Explicit(to_scalar(other)),
    }
}

fn to_scalar(raw: &RawDefault) -> Scalar {
    match raw {
        // Only reachable inside lists and choices
        RawDefault::Unset | RawDefault::None => Scalar::Text("None".to_string()),
        RawDefault::Bool(b) => Scalar::Bool(*b),
        RawDefault::Int(i) => Scalar::Int(*i),
        // JSON has no NaN or infinity
        RawDefault::Float(f) if !f.is_finite() => Scalar::Text(f.to_string()),
        RawDefault::Float(f) => Scalar::Float(*f),
        RawDefault::Text(s) => Scalar::Text(s.clone()),
        RawDefault::Choice { value, .. } => to_scalar(value),
        RawDefault::List(items) => Scalar::List(items.iter().map(to_scalar).collect()),
        RawDefault::Opaque { type_name, repr } => Scalar::Text(
            repr.clone()
                .unwrap_or_else(|| format!("<{}>", type_name)),
        ),
    }
}
