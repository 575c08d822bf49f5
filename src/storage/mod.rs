//! # Storage Layer
//!
//! Everything that touches the filesystem.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tree document | JSON | `<export dir>/<app>_tree_<timestamp>.json` |
//! | Tree capture | plain text | `<export dir>/<app>_tree_<timestamp>.txt` |
//! | Tree image | SVG | `<export dir>/<app>_v<version>_helptree.svg` |
//! | Error log | one line per failure | `<data dir>/helptree_errors.log` |
//! | Config | TOML | `<config dir>/config.toml` |
//!
//! ## Key Types
//!
//! - [`ExportSink`] - Writes exports, logs failures
//! - [`ErrorLog`] - Append-only background log
//! - [`Config`] - User configuration

mod config;
mod error_log;
mod export;
pub mod paths;

pub use config::{ColorMode, Config, ConfigError};
pub use error_log::{ErrorLog, Severity};
pub use export::{svg_file_name, timestamped_file_name, ExportError, ExportFormat, ExportSink, Exported};
pub use paths::friendly_path;
