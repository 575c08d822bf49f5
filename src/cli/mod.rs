//! # Command-Line Interface
//!
//! The `helptree` command, plus a small demo application that mounts it.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `helptree` (hidden) | Print or export the command tree |
//! | `docs` | Show the bundled README / LICENSE |
//! | `tools browse-exports` | Show (or open) the export directory |
//! | `tools nested-tool` | Demo nested command |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON; `helptree` prints the tree document
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! clap-helptree --verbose helptree --export-json
//! ```
//!
//! ## Embedding
//!
//! Derive hosts add a `Helptree(HelptreeArgs)` variant and call
//! [`helptree::run`] with `Cli::command()`. Builder hosts use
//! [`add_helptree`].

mod app;
mod docs;
pub mod helptree;
mod output;
mod tools;

pub use app::{run, Cli, Commands};
pub use helptree::{add_helptree, HelptreeArgs};
pub use output::{Output, OutputFormat};
