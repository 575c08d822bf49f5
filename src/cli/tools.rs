//! The `tools` command group

use std::process;

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use super::output::Output;
use crate::storage::{friendly_path, Config};

#[derive(Subcommand)]
pub enum ToolsCommands {
    /// Show where help tree exports are written
    BrowseExports {
        /// Open the directory in the system file browser
        #[arg(long)]
        open: bool,
    },

    /// A nested command, for demonstration
    NestedTool,
}

pub fn run(cmd: ToolsCommands, config: &Config, output: &Output) -> Result<()> {
    match cmd {
        ToolsCommands::BrowseExports { open } => browse_exports(open, config, output),
        ToolsCommands::NestedTool => {
            output.success("Nested tool ran");
            Ok(())
        }
    }
}

fn browse_exports(open: bool, config: &Config, output: &Output) -> Result<()> {
    let dir = config.export_dir();

    if output.is_json() {
        output.data(&serde_json::json!({
            "export_dir": dir,
            "exists": dir.is_dir(),
        }));
    } else {
        output.success(&format!("Exports: {}", friendly_path(&dir)));
    }

    if open {
        if !dir.is_dir() {
            bail!("Export directory does not exist yet: {}", dir.display());
        }
        output.verbose_ctx("tools", &format!("Opening {} with {}", dir.display(), OPENER));
        let status = process::Command::new(OPENER)
            .arg(&dir)
            .status()
            .with_context(|| format!("Failed to launch {}", OPENER))?;
        if !status.success() {
            bail!("{} exited with {}", OPENER, status);
        }
    }

    Ok(())
}

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";
