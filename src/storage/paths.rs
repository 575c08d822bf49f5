//! Per-user directories and display paths

use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use directories::{BaseDirs, ProjectDirs};

/// Name of the background error log inside the data directory
pub const ERROR_LOG_FILE: &str = "helptree_errors.log";

/// Project directories for clap-helptree
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "helptree", "clap-helptree")
}

/// The per-user data directory, or a temp directory when there is no home
pub fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("clap-helptree"))
}

/// Location of the background error log
pub fn error_log_path() -> PathBuf {
    data_dir().join(ERROR_LOG_FILE)
}

/// Returns the user's home directory
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Display form of a path: `~`-relative on Unix-like systems, absolute on
/// Windows
pub fn friendly_path(path: &Path) -> String {
    friendly_path_in(path, home_dir().as_deref())
}

/// [`friendly_path`] with an explicit home directory
pub fn friendly_path_in(path: &Path, home: Option<&Path>) -> String {
    if cfg!(windows) {
        return fs::canonicalize(path)
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string();
    }

    match home.and_then(|h| path.strip_prefix(h).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~{}{}", MAIN_SEPARATOR, rest.display()),
        None => path.display().to_string(),
    }
}
