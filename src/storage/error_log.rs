//! Background error log
//!
//! Append-only, one line per entry. The file is opened lazily on the first
//! write and kept open until the log is closed or dropped.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::paths;

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Append-only log file for failures that should not interrupt the user
#[derive(Debug)]
pub struct ErrorLog {
    path: PathBuf,
    file: Option<File>,
}

impl ErrorLog {
    /// Creates a log at the given path. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    /// The log in the per-user data directory
    pub fn at_default_location() -> Self {
        Self::new(paths::error_log_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true once the file has been opened
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.record(Severity::Error, message)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        self.record(Severity::Warning, message)
    }

    /// Appends one entry: timestamp, severity, message
    pub fn record(&mut self, severity: Severity, message: &str) -> io::Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let message = single_line(message);
        let file = self.open()?;
        writeln!(file, "[{}] {}: {}", timestamp, severity, message)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }

    /// Flushes and closes the file
    pub fn close(mut self) -> io::Result<()> {
        self.flush()?;
        self.file = None;
        Ok(())
    }

    fn open(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            self.file = Some(file);
        }

        self.file
            .as_mut()
            .ok_or_else(|| io::Error::other("error log is not open"))
    }
}

impl Drop for ErrorLog {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}
