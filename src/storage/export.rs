//! Export sink
//!
//! Writes rendered output under an export directory:
//!
//! | Format | File name |
//! |--------|-----------|
//! | JSON | `<app>_tree_<YYYYMMDD_HHMMSS>.json` |
//! | Text | `<app>_tree_<YYYYMMDD_HHMMSS>.txt` |
//! | SVG | `<app>_v<version>_helptree.svg` |
//!
//! Timestamped names get a `_1`, `_2`, ... suffix when taken. The SVG name is
//! keyed on the version so a checked-in asset is rewritten in place.
//! Failures are written to the [`ErrorLog`] and returned to the caller.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use super::error_log::ErrorLog;
use super::paths::friendly_path;
use crate::render::RenderError;

/// A persisted output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Text,
    Svg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
            ExportFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Text => write!(f, "TXT"),
            ExportFormat::Svg => write!(f, "SVG"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{format} export failed: cannot create directory {shown}: {source}", shown = .path.display())]
    CreateDir {
        format: ExportFormat,
        path: PathBuf,
        source: io::Error,
    },

    #[error("{format} export failed: cannot write {shown}: {source}", shown = .path.display())]
    Write {
        format: ExportFormat,
        path: PathBuf,
        source: io::Error,
    },

    #[error("{format} export failed: {source}")]
    Render {
        format: ExportFormat,
        source: RenderError,
    },
}

impl ExportError {
    pub fn format(&self) -> ExportFormat {
        match self {
            ExportError::CreateDir { format, .. }
            | ExportError::Write { format, .. }
            | ExportError::Render { format, .. } => *format,
        }
    }
}

/// A successfully written export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub format: ExportFormat,
    pub path: PathBuf,
    /// Path in display form (`~/...` where possible)
    pub shown: String,
}

/// Writes exports into one directory, logging failures
#[derive(Debug)]
pub struct ExportSink {
    dir: PathBuf,
    svg_dir: Option<PathBuf>,
    log: ErrorLog,
}

impl ExportSink {
    pub fn new(dir: impl Into<PathBuf>, log: ErrorLog) -> Self {
        Self {
            dir: dir.into(),
            svg_dir: None,
            log,
        }
    }

    /// Sends SVG exports to a separate directory (e.g. a repo's `assets/`)
    pub fn with_svg_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.svg_dir = Some(dir.into());
        self
    }

    pub fn svg_dir(&self) -> &Path {
        self.svg_dir.as_deref().unwrap_or(&self.dir)
    }

    pub fn log(&self) -> &ErrorLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ErrorLog {
        &mut self.log
    }

    /// Writes a JSON document under a timestamped name
    pub fn export_json(&mut self, content: &str, app_name: &str) -> Result<Exported, ExportError> {
        self.export_timestamped(ExportFormat::Json, content, app_name, Local::now())
    }

    /// Writes a plain-text capture under a timestamped name
    pub fn export_text(&mut self, content: &str, app_name: &str) -> Result<Exported, ExportError> {
        self.export_timestamped(ExportFormat::Text, content, app_name, Local::now())
    }

    /// Writes an SVG image under a version-keyed name
    pub fn export_svg(&mut self, content: &str, app_name: &str, version: &str) -> Result<Exported, ExportError> {
        let path = self.svg_dir().join(svg_file_name(app_name, version));
        self.write(ExportFormat::Svg, path, content)
    }

    /// Writes `content` under a timestamped name taken at `at`
    pub fn export_timestamped(
        &mut self,
        format: ExportFormat,
        content: &str,
        app_name: &str,
        at: DateTime<Local>,
    ) -> Result<Exported, ExportError> {
        let path = unique_path(&self.dir, &timestamped_file_name(app_name, format, &at));
        self.write(format, path, content)
    }

    /// Writes a failure to the error log and hands it back
    pub fn log_failure(&mut self, error: ExportError) -> ExportError {
        // Nowhere left to report a failing log write
        self.log.error(&error.to_string()).ok();
        error
    }

    /// Flushes and closes the error log
    pub fn close(self) -> io::Result<()> {
        self.log.close()
    }

    fn write(&mut self, format: ExportFormat, path: PathBuf, content: &str) -> Result<Exported, ExportError> {
        match write_file(format, &path, content) {
            Ok(()) => Ok(Exported {
                format,
                shown: friendly_path(&path),
                path,
            }),
            Err(e) => Err(self.log_failure(e)),
        }
    }
}

fn write_file(format: ExportFormat, path: &Path, content: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            format,
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| ExportError::Write {
        format,
        path: path.to_path_buf(),
        source,
    })
}

/// `<app>_tree_<YYYYMMDD_HHMMSS>.<ext>`
pub fn timestamped_file_name(app_name: &str, format: ExportFormat, at: &DateTime<Local>) -> String {
    format!(
        "{}_tree_{}.{}",
        file_safe(app_name),
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// `<app>_v<version>_helptree.svg`
pub fn svg_file_name(app_name: &str, version: &str) -> String {
    format!("{}_v{}_helptree.svg", file_safe(app_name), file_safe(version))
}

/// Appends `_1`, `_2`, ... to the stem until the name is free
fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = file_name.rsplit_once('.').unwrap_or((file_name, ""));
    (1..)
        .map(|n| {
            if ext.is_empty() {
                dir.join(format!("{}_{}", stem, n))
            } else {
                dir.join(format!("{}_{}.{}", stem, n, ext))
            }
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    fn sink(dir: &Path) -> ExportSink {
        ExportSink::new(dir, ErrorLog::new(dir.join("errors.log")))
    }

    #[test]
    fn file_names() {
        assert_eq!(
            timestamped_file_name("app", ExportFormat::Json, &fixed_time()),
            "app_tree_20260314_092653.json"
        );
        assert_eq!(
            timestamped_file_name("my app", ExportFormat::Text, &fixed_time()),
            "my_app_tree_20260314_092653.txt"
        );
        assert_eq!(svg_file_name("app", "1.2.0"), "app_v1.2.0_helptree.svg");
    }

    #[test]
    fn creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a").join("b");
        let mut sink = ExportSink::new(&target, ErrorLog::new(dir.path().join("errors.log")));

        let exported = sink.export_json("{}\n", "app").unwrap();
        assert!(exported.path.starts_with(&target));
        assert_eq!(fs::read_to_string(&exported.path).unwrap(), "{}\n");
        assert_eq!(exported.format, ExportFormat::Json);
    }

    #[test]
    fn timestamp_collisions_get_suffixes() {
        let dir = TempDir::new().unwrap();
        let mut sink = sink(dir.path());

        let first = sink
            .export_timestamped(ExportFormat::Text, "one", "app", fixed_time())
            .unwrap();
        let second = sink
            .export_timestamped(ExportFormat::Text, "two", "app", fixed_time())
            .unwrap();
        let third = sink
            .export_timestamped(ExportFormat::Text, "three", "app", fixed_time())
            .unwrap();

        assert!(first.path.ends_with("app_tree_20260314_092653.txt"));
        assert!(second.path.ends_with("app_tree_20260314_092653_1.txt"));
        assert!(third.path.ends_with("app_tree_20260314_092653_2.txt"));
        assert_eq!(fs::read_to_string(&first.path).unwrap(), "one");
    }

    #[test]
    fn svg_is_overwritten_in_place() {
        let dir = TempDir::new().unwrap();
        let mut sink = sink(dir.path());

        let first = sink.export_svg("<svg>1</svg>", "app", "1.0").unwrap();
        let second = sink.export_svg("<svg>2</svg>", "app", "1.0").unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(fs::read_to_string(&second.path).unwrap(), "<svg>2</svg>");
    }

    #[test]
    fn svg_dir_override() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        let mut sink = sink(&dir.path().join("exports")).with_svg_dir(&assets);

        let svg = sink.export_svg("<svg/>", "app", "0.3.0").unwrap();
        assert_eq!(svg.path, assets.join("app_v0.3.0_helptree.svg"));

        let json = sink.export_json("{}", "app").unwrap();
        assert!(json.path.starts_with(dir.path().join("exports")));
    }

    #[test]
    fn render_failures_are_logged() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("errors.log");
        let mut sink = ExportSink::new(dir.path().join("out"), ErrorLog::new(&log_path));

        let source = RenderError::Serialize(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        let err = sink.log_failure(ExportError::Render {
            format: ExportFormat::Json,
            source,
        });
        assert_eq!(err.format(), ExportFormat::Json);

        sink.close().unwrap();
        let log = fs::read_to_string(&log_path).unwrap();
        assert_eq!(log.lines().count(), 1);
        assert!(log.contains("ERROR: JSON export failed: Failed to serialize help document"));
    }

    #[test]
    fn unwritable_destination_is_logged_and_returned() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();
        let log_path = dir.path().join("errors.log");

        let mut sink = ExportSink::new(blocker.join("exports"), ErrorLog::new(&log_path));
        let err = sink.export_json("{}", "app").unwrap_err();
        assert_eq!(err.format(), ExportFormat::Json);
        assert!(err.to_string().starts_with("JSON export failed"));

        // A sibling export into a good directory still works afterwards
        let mut good = ExportSink::new(dir.path().join("ok"), ErrorLog::new(&log_path));
        assert!(good.export_text("tree", "app").is_ok());

        sink.close().unwrap();
        let log = fs::read_to_string(&log_path).unwrap();
        assert_eq!(log.lines().count(), 1);
        assert!(log.contains("ERROR: JSON export failed"));
    }
}
