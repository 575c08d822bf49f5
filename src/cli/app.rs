//! Main CLI application structure

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use super::helptree::{self, HelptreeArgs};
use super::output::{Output, OutputFormat};
use super::{docs, tools};
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "clap-helptree")]
#[command(author, version, about = "Browse and export the command tree of a clap application")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Print the full command line before running it
    #[arg(long, global = true)]
    pub show_command: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the bundled documentation
    Docs {
        /// Show the license
        #[arg(long)]
        license: bool,

        /// Show the README
        #[arg(long)]
        readme: bool,
    },

    /// Utilities for working with exports
    #[command(subcommand)]
    Tools(tools::ToolsCommands),

    /// Visualize CLI structure.
    #[command(hide = true)]
    Helptree(HelptreeArgs),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    if cli.show_command {
        let line: Vec<String> = std::env::args().collect();
        eprintln!("$ {}", line.join(" "));
    }

    let config = Config::load()?;
    output.verbose_ctx("config", &format!("Export directory: {}", config.export_dir().display()));

    match cli.command {
        Commands::Docs { license, readme } => docs::run(license, readme, &output)?,
        Commands::Tools(cmd) => tools::run(cmd, &config, &output)?,
        Commands::Helptree(args) => helptree::run(&Cli::command(), &[], &args, &config, &output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
