//! clap adapter
//!
//! Exposes a `clap::Command` tree through [`CommandSource`]. Works on the
//! command as declared (before clap's build step), so the auto-generated
//! `help` subcommand and `--help`/`--version` switches are not part of it.

use std::any::TypeId;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, ValueHint};

use super::source::{CommandSource, RawDefault, RawParameter};

/// A borrowed clap command
#[derive(Debug, Clone, Copy)]
pub struct ClapCommand<'a>(&'a Command);

impl<'a> ClapCommand<'a> {
    pub fn new(command: &'a Command) -> Self {
        Self(command)
    }

    /// The version declared on the command, if any
    pub fn version(&self) -> Option<String> {
        self.0.get_version().map(str::to_string)
    }

    /// Resolves a path of subcommand names
    pub fn find<'p, I>(&self, path: I) -> Option<ClapCommand<'a>>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut current = *self;
        for name in path {
            current = current.child(name)?;
        }
        Some(current)
    }
}

impl<'a> CommandSource for ClapCommand<'a> {
    fn name(&self) -> &str {
        self.0.get_name()
    }

    fn help(&self) -> Option<String> {
        self.0
            .get_long_about()
            .or_else(|| self.0.get_about())
            .map(|text| text.to_string())
    }

    fn is_group(&self) -> bool {
        self.0.has_subcommands()
    }

    fn parameters(&self) -> Vec<RawParameter> {
        self.0.get_arguments().map(raw_parameter).collect()
    }

    fn child_names(&self) -> Vec<String> {
        self.0
            .get_subcommands()
            .map(|c| c.get_name().to_string())
            .collect()
    }

    fn child(&self, name: &str) -> Option<Self> {
        self.0.find_subcommand(name).map(ClapCommand)
    }
}

fn raw_parameter(arg: &Arg) -> RawParameter {
    let mut declared_names = Vec::new();
    if let Some(short) = arg.get_short() {
        declared_names.push(format!("-{}", short));
    }
    if let Some(long) = arg.get_long() {
        declared_names.push(format!("--{}", long));
    }

    let mut secondary_names = Vec::new();
    if let Some(shorts) = arg.get_visible_short_aliases() {
        secondary_names.extend(shorts.into_iter().map(|s| format!("-{}", s)));
    }
    if let Some(longs) = arg.get_visible_aliases() {
        secondary_names.extend(longs.into_iter().map(|l| format!("--{}", l)));
    }

    let value_name = arg
        .get_value_names()
        .and_then(|names| names.first())
        .map(|name| name.to_string());

    RawParameter {
        name: arg.get_id().as_str().to_string(),
        declared_names,
        secondary_names,
        value_name,
        takes_value: arg.get_action().takes_values(),
        value_type: Some(value_type(arg).to_string()),
        help: arg
            .get_help()
            .or_else(|| arg.get_long_help())
            .map(|h| h.to_string()),
        default: raw_default(arg),
        required: arg.is_required_set(),
        hidden: arg.is_hide_set(),
        env_var: arg.get_env().map(|e| e.to_string_lossy().into_owned()),
    }
}

fn value_type(arg: &Arg) -> &'static str {
    match arg.get_action() {
        ArgAction::SetTrue | ArgAction::SetFalse => return "boolean",
        ArgAction::Count => return "count",
        _ => {}
    }

    if !arg.get_possible_values().is_empty() {
        return "choice";
    }

    match parsed_kind(arg) {
        ParsedKind::Integer => return "integer",
        ParsedKind::Number => return "number",
        ParsedKind::Path => return "path",
        ParsedKind::Other => {}
    }

    match arg.get_value_hint() {
        ValueHint::AnyPath | ValueHint::FilePath | ValueHint::DirPath | ValueHint::ExecutablePath => "path",
        _ => "text",
    }
}

/// clap stores defaults as strings; switches get their implicit typed default
fn raw_default(arg: &Arg) -> RawDefault {
    let values: Vec<String> = arg
        .get_default_values()
        .iter()
        .map(|v| v.to_string_lossy().into_owned())
        .collect();

    if values.is_empty() {
        return match arg.get_action() {
            ArgAction::SetTrue => RawDefault::Bool(false),
            ArgAction::SetFalse => RawDefault::Bool(true),
            ArgAction::Count => RawDefault::Int(0),
            _ => RawDefault::Unset,
        };
    }

    let mut defaults: Vec<RawDefault> = values.iter().map(|v| typed_default(arg, v)).collect();
    if defaults.len() == 1 {
        defaults.remove(0)
    } else {
        RawDefault::List(defaults)
    }
}

fn typed_default(arg: &Arg, value: &str) -> RawDefault {
    match arg.get_action() {
        ArgAction::SetTrue | ArgAction::SetFalse => value
            .parse::<bool>()
            .map(RawDefault::Bool)
            .unwrap_or_else(|_| RawDefault::Text(value.to_string())),
        ArgAction::Count => value
            .parse::<i64>()
            .map(RawDefault::Int)
            .unwrap_or_else(|_| RawDefault::Text(value.to_string())),
        _ => {
            let choice = arg
                .get_possible_values()
                .into_iter()
                .find(|pv| pv.matches(value, false));
            match choice {
                Some(pv) => RawDefault::Choice {
                    name: pv.get_name().to_string(),
                    value: Box::new(RawDefault::Text(value.to_string())),
                },
                None => parsed_default(arg, value),
            }
        }
    }
}

/// What the arg's value parser produces
enum ParsedKind {
    Integer,
    Number,
    Path,
    Other,
}

fn parsed_kind(arg: &Arg) -> ParsedKind {
    let id = arg.get_value_parser().type_id();
    let is = |types: &[TypeId]| types.iter().any(|t| id == *t);

    if is(&[
        TypeId::of::<i8>(),
        TypeId::of::<i16>(),
        TypeId::of::<i32>(),
        TypeId::of::<i64>(),
        TypeId::of::<isize>(),
        TypeId::of::<u8>(),
        TypeId::of::<u16>(),
        TypeId::of::<u32>(),
        TypeId::of::<u64>(),
        TypeId::of::<usize>(),
    ]) {
        ParsedKind::Integer
    } else if is(&[TypeId::of::<f32>(), TypeId::of::<f64>()]) {
        ParsedKind::Number
    } else if is(&[TypeId::of::<PathBuf>()]) {
        ParsedKind::Path
    } else {
        ParsedKind::Other
    }
}

/// clap keeps the declared string; numeric parsers get their scalar back
fn parsed_default(arg: &Arg, value: &str) -> RawDefault {
    let text = || RawDefault::Text(value.to_string());
    match parsed_kind(arg) {
        ParsedKind::Integer => value.parse::<i64>().map(RawDefault::Int).unwrap_or_else(|_| text()),
        ParsedKind::Number => value.parse::<f64>().map(RawDefault::Float).unwrap_or_else(|_| text()),
        ParsedKind::Path | ParsedKind::Other => text(),
    }
}
