//! Visual tree layout shared by the console, text and SVG renderers
//!
//! The layout is a list of lines. Each line has a guide prefix (the tree
//! drawing characters) and a sequence of spans tagged with a [`Tone`]; each
//! renderer decides how a tone looks, or ignores tones entirely.

use crate::domain::{CommandNode, ParameterDescriptor};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUE: &str = "│   ";
const BLANK: &str = "    ";

/// Semantic style of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Root,
    Group,
    Command,
    Dim,
    Heading,
    Flag,
    Argument,
    Guide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One rendered row of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Tree guide drawn before the label
    pub guide: String,
    /// Guide to use when the label wraps onto another row
    pub continuation: String,
    pub spans: Vec<Span>,
}

impl Line {
    /// Label text without the guide
    pub fn label(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Guide and label as unstyled text
    pub fn plain(&self) -> String {
        format!("{}{}", self.guide, self.label())
    }

    /// Width in characters
    pub fn width(&self) -> usize {
        self.plain().chars().count()
    }
}

/// Root label information supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeHeader {
    pub app_name: String,
    pub version: Option<String>,
}

impl TreeHeader {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: Option<impl Into<String>>) -> Self {
        self.version = version.map(Into::into);
        self
    }

    /// Title used for the console panel and the SVG window
    pub fn title(&self) -> String {
        format!("{} CLI Help Tree", self.app_name)
    }

    fn root_spans(&self) -> Vec<Span> {
        let mut spans = vec![Span::new(self.app_name.clone(), Tone::Root)];
        if let Some(version) = &self.version {
            spans.push(Span::new(format!(" (v{})", version), Tone::Plain));
        }
        spans
    }
}

/// A laid-out tree, ready for any renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualTree {
    pub lines: Vec<Line>,
}

impl VisualTree {
    /// Lays out `node` with the header as its root label
    pub fn new(node: &CommandNode, header: &TreeHeader) -> Self {
        let root = Item::new(header.root_spans(), node_items(node));

        let mut lines = vec![Line {
            guide: String::new(),
            continuation: String::new(),
            spans: root.spans,
        }];
        push_children(&root.children, "", &mut lines);

        Self { lines }
    }

    /// Widest line in characters
    pub fn width(&self) -> usize {
        self.lines.iter().map(Line::width).max().unwrap_or(0)
    }
}

struct Item {
    spans: Vec<Span>,
    /// Extra rows of a multi-line label, drawn under the continuation guide
    more: Vec<Vec<Span>>,
    children: Vec<Item>,
}

impl Item {
    fn new(spans: Vec<Span>, children: Vec<Item>) -> Self {
        Self {
            spans,
            more: vec![],
            children,
        }
    }
}

/// Parameters branch first, then one item per child command
fn node_items(node: &CommandNode) -> Vec<Item> {
    let mut items = Vec::with_capacity(node.children.len() + 1);
    items.push(parameters_item(&node.parameters));

    for child in &node.children {
        let name_tone = if child.is_group { Tone::Group } else { Tone::Command };
        items.push(Item::new(
            vec![
                Span::new(child.name.clone(), name_tone),
                Span::new(" - ", Tone::Plain),
                Span::new(child.short_help.clone(), Tone::Dim),
            ],
            node_items(child),
        ));
    }

    items
}

fn parameters_item(params: &[ParameterDescriptor]) -> Item {
    let children = if params.is_empty() {
        vec![Item::new(vec![Span::new("None", Tone::Dim)], vec![])]
    } else {
        params.iter().map(parameter_item).collect()
    };

    Item::new(vec![Span::new("Parameters", Tone::Heading)], children)
}

/// One parameter; each further help line becomes its own row
fn parameter_item(param: &ParameterDescriptor) -> Item {
    let label_tone = if param.is_positional() {
        Tone::Argument
    } else {
        Tone::Flag
    };

    let mut help = param.help_text.lines().map(str::trim_end);
    let mut spans = vec![
        Span::new(param.label(), label_tone),
        Span::new(": ", Tone::Plain),
        Span::new(help.next().unwrap_or_default(), Tone::Dim),
    ];
    let mut more: Vec<Vec<Span>> = help.map(|line| vec![Span::new(line, Tone::Dim)]).collect();

    if let Some(default) = param.default_value.explicit() {
        let last = more.last_mut().unwrap_or(&mut spans);
        last.push(Span::new(format!(" (default: {})", default), Tone::Dim));
    }

    Item {
        spans,
        more,
        children: vec![],
    }
}

fn push_children(children: &[Item], prefix: &str, lines: &mut Vec<Line>) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, extend) = if last {
            (LAST_BRANCH, BLANK)
        } else {
            (BRANCH, CONTINUE)
        };
        let child_prefix = format!("{}{}", prefix, extend);

        lines.push(Line {
            guide: format!("{}{}", prefix, branch),
            continuation: child_prefix.clone(),
            spans: child.spans.clone(),
        });
        for spans in &child.more {
            lines.push(Line {
                guide: child_prefix.clone(),
                continuation: child_prefix.clone(),
                spans: spans.clone(),
            });
        }
        push_children(&child.children, &child_prefix, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DefaultValue, ParamKind, Scalar, NO_DESCRIPTION};

    fn param(name: &str, kind: ParamKind, default: DefaultValue) -> ParameterDescriptor {
        ParameterDescriptor {
            name: name.to_string(),
            kind,
            aliases: match kind {
                ParamKind::Positional => vec![],
                _ => vec![format!("--{}", name)],
            },
            secondary_aliases: vec![],
            value_name: name.to_string(),
            value_type: "text".to_string(),
            help_text: format!("{} help", name),
            default_value: default,
            required: false,
            hidden: false,
            env_var: None,
        }
    }

    fn leaf(name: &str, parameters: Vec<ParameterDescriptor>) -> CommandNode {
        CommandNode {
            name: name.to_string(),
            short_help: format!("{} command", name),
            full_help: None,
            is_group: false,
            parameters,
            children: vec![],
        }
    }

    fn sample() -> CommandNode {
        CommandNode {
            name: "app".to_string(),
            short_help: NO_DESCRIPTION.to_string(),
            full_help: None,
            is_group: true,
            parameters: vec![],
            children: vec![
                leaf(
                    "tree",
                    vec![
                        param("verbose", ParamKind::Flag, DefaultValue::Explicit(Scalar::Bool(false))),
                        param("path", ParamKind::Positional, DefaultValue::NotProvided),
                    ],
                ),
                CommandNode {
                    is_group: true,
                    children: vec![leaf("ping", vec![])],
                    ..leaf("tools", vec![])
                },
            ],
        }
    }

    #[test]
    fn lays_out_guides_and_labels() {
        let tree = VisualTree::new(&sample(), &TreeHeader::new("app").with_version(Some("1.0")));
        let plain: Vec<String> = tree.lines.iter().map(Line::plain).collect();

        assert_eq!(
            plain,
            vec![
                "app (v1.0)",
                "├── Parameters",
                "│   └── None",
                "├── tree - tree command",
                "│   └── Parameters",
                "│       ├── --verbose: verbose help (default: false)",
                "│       └── ARG: PATH: path help",
                "└── tools - tools command",
                "    ├── Parameters",
                "    │   └── None",
                "    └── ping - ping command",
                "        └── Parameters",
                "            └── None",
            ]
        );
    }

    #[test]
    fn group_names_use_a_distinct_tone() {
        let tree = VisualTree::new(&sample(), &TreeHeader::new("app"));
        let tools = tree
            .lines
            .iter()
            .find(|l| l.label().starts_with("tools"))
            .unwrap();
        assert_eq!(tools.spans[0].tone, Tone::Group);

        let leaf = tree
            .lines
            .iter()
            .find(|l| l.label().starts_with("tree"))
            .unwrap();
        assert_eq!(leaf.spans[0].tone, Tone::Command);
    }

    #[test]
    fn root_without_version() {
        let tree = VisualTree::new(&sample(), &TreeHeader::new("app"));
        assert_eq!(tree.lines[0].plain(), "app");
        assert_eq!(TreeHeader::new("app").title(), "app CLI Help Tree");
    }

    #[test]
    fn continuation_tracks_depth() {
        let tree = VisualTree::new(&sample(), &TreeHeader::new("app"));
        let verbose = tree
            .lines
            .iter()
            .find(|l| l.label().starts_with("--verbose"))
            .unwrap();
        assert_eq!(verbose.continuation, "│       │   ");
    }

    #[test]
    fn multi_line_help_continues_under_the_guide() {
        let mut mode = param("mode", ParamKind::Option, DefaultValue::Explicit(Scalar::Text("fast".into())));
        mode.help_text = "first line\nsecond line".to_string();
        let node = CommandNode {
            is_group: true,
            children: vec![leaf("run", vec![mode]), leaf("zzz", vec![])],
            ..leaf("app", vec![])
        };

        let tree = VisualTree::new(&node, &TreeHeader::new("app"));
        let plain: Vec<String> = tree.lines.iter().map(Line::plain).collect();
        assert!(plain.iter().all(|l| !l.contains('\n')));

        let at = plain.iter().position(|l| l.ends_with("--mode: first line")).unwrap();
        assert_eq!(plain[at], "│       └── --mode: first line");
        assert_eq!(plain[at + 1], "│           second line (default: fast)");
        assert_eq!(plain[at + 2], "└── zzz - zzz command");
    }
}
