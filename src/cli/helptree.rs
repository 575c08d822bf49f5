//! The `helptree` command
//!
//! Hosts mount this as a (hidden) subcommand. It introspects the command it
//! was mounted on and either prints the tree or exports it.
//!
//! ```bash
//! myapp helptree                      # styled panel on stdout
//! myapp --format json helptree        # JSON document on stdout
//! myapp helptree --export-json --export-txt --output-dir ./trees
//! myapp helptree --export-svg --cwd   # ./assets/myapp_v1.0.0_helptree.svg
//! ```

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Command};

use super::output::Output;
use crate::introspect::{ClapCommand, TreeBuilder, DEFAULT_RESERVED_NAME};
use crate::render::{render_console, render_document, render_svg, render_text, TreeHeader};
use crate::storage::{Config, ErrorLog, ExportError, ExportFormat, ExportSink, Exported};

/// Version used in the SVG file name when the host declares none
const UNKNOWN_VERSION: &str = "unknown";

/// Arguments of the `helptree` command
#[derive(Debug, Clone, Default, Args)]
pub struct HelptreeArgs {
    /// Export the tree as a JSON document
    #[arg(long)]
    pub export_json: bool,

    /// Export the tree as plain text
    #[arg(long)]
    pub export_txt: bool,

    /// Export the tree as an SVG image
    #[arg(long)]
    pub export_svg: bool,

    /// Write the SVG into ./assets instead of the export directory
    #[arg(long)]
    pub cwd: bool,

    /// Directory for exports (defaults to the configured export directory)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Line width for text exports
    #[arg(long, value_name = "N")]
    pub width: Option<NonZeroUsize>,
}

impl HelptreeArgs {
    /// Ids of this command's own arguments, left out of its tree entry
    pub fn internal_param_names() -> Vec<String> {
        <Self as Args>::augment_args(Command::new(DEFAULT_RESERVED_NAME))
            .get_arguments()
            .map(|arg| arg.get_id().as_str().to_string())
            .collect()
    }

    fn exports_anything(&self) -> bool {
        self.export_json || self.export_txt || self.export_svg
    }
}

/// The `helptree` command for builder-API hosts
pub fn command(hidden: bool) -> Command {
    HelptreeArgs::augment_args(
        Command::new(DEFAULT_RESERVED_NAME)
            .about("Visualize CLI structure.")
            .hide(hidden),
    )
}

/// Mounts the `helptree` command on `cmd`, optionally hidden from `--help`
pub fn add_helptree(cmd: Command, hidden: bool) -> Command {
    cmd.subcommand(command(hidden))
}

/// Runs `helptree` against the command at `parent_path` under `root`
///
/// `root` should be the host's command as declared (e.g.
/// `Cli::command()`), before clap has built it for parsing.
pub fn run(root: &Command, parent_path: &[&str], args: &HelptreeArgs, config: &Config, output: &Output) -> Result<()> {
    let host = ClapCommand::new(root);
    let target = host.find(parent_path.iter().copied());
    output.verbose_ctx("helptree", &format!("Introspecting '{}'", parent_path.join(" ")));

    let tree = TreeBuilder::default()
        .with_internal_params(HelptreeArgs::internal_param_names())
        .build_root(target.as_ref())
        .context("Failed to introspect command tree")?;
    output.verbose_ctx("helptree", &format!("Built tree with {} commands", tree.node_count()));

    let version = host.version();
    let header = TreeHeader::new(root.get_name()).with_version(version.clone());

    if !args.exports_anything() {
        if output.is_json() {
            let document = render_document(&tree, version.as_deref()).context("Failed to render document")?;
            output.raw(&document);
        } else {
            output.raw(&render_console(&tree, &header, config.color.enabled()));
        }
        return Ok(());
    }

    let export_dir = args.output_dir.clone().unwrap_or_else(|| config.export_dir());
    output.verbose_ctx("helptree", &format!("Export directory: {}", export_dir.display()));

    let mut sink = ExportSink::new(export_dir, ErrorLog::at_default_location());
    if args.cwd {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        sink = sink.with_svg_dir(cwd.join("assets"));
    }

    let app_name = root.get_name();
    let mut failures = 0;

    if args.export_json {
        let result = match render_document(&tree, version.as_deref()) {
            Ok(document) => sink.export_json(&document, app_name),
            Err(source) => Err(sink.log_failure(ExportError::Render {
                format: ExportFormat::Json,
                source,
            })),
        };
        failures += report(output, result);
    }

    if args.export_txt {
        let width = args.width.map_or(config.text_width, NonZeroUsize::get);
        let text = render_text(&tree, &header, width);
        failures += report(output, sink.export_text(&text, app_name));
    }

    if args.export_svg {
        let svg = render_svg(&tree, &header, config.svg_width);
        if version.is_none() {
            // Not fatal; the file name just loses its version key
            sink.log_mut()
                .warning(&format!("{} declares no version; SVG named with '{}'", app_name, UNKNOWN_VERSION))
                .ok();
        }
        let version = version.as_deref().unwrap_or(UNKNOWN_VERSION);
        failures += report(output, sink.export_svg(&svg, app_name, version));
    }

    let log_path = sink.log().path().to_path_buf();
    sink.close().context("Failed to close error log")?;

    if failures > 0 {
        bail!(
            "{} export(s) failed; details in {}",
            failures,
            log_path.display()
        );
    }
    Ok(())
}

fn report(output: &Output, result: Result<Exported, ExportError>) -> usize {
    match result {
        Ok(exported) => {
            output.success(&format!("{} structure exported: {}", exported.format, exported.shown));
            0
        }
        Err(e) => {
            output.error(&e.to_string());
            1
        }
    }
}
