use crate::domain::model::LogEntry;
use crate::domain::ports::{Clock, ConfigProvider, SystemClock};
use crate::utils::error::{FileIoError, Result};
use chrono::Timelike;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_PATH: &str = "data/app_log.txt";

/// Appends `"{YYYY-MM-DD HH:MM:SS} - {message}\n"` lines to a text file.
///
/// Every call opens the file in append mode, writes the whole line with a
/// single `write_all` and closes it again. Nothing serializes writers across
/// processes: concurrent appenders may interleave at whatever granularity the
/// filesystem gives `O_APPEND` writes. Messages containing newlines are
/// written verbatim and will span several physical lines.
#[derive(Debug, Clone)]
pub struct LogAppender<C: Clock = SystemClock> {
    path: PathBuf,
    create_parent_dirs: bool,
    clock: C,
}

impl LogAppender<SystemClock> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }

    pub fn from_config<P: ConfigProvider + ?Sized>(config: &P) -> Self {
        Self::new(config.log_path()).create_parent_dirs(config.create_parent_dirs())
    }
}

impl Default for LogAppender<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl<C: Clock> LogAppender<C> {
    pub fn with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            create_parent_dirs: false,
            clock,
        }
    }

    /// Create missing parent directories before the first append. Off by default.
    pub fn create_parent_dirs(mut self, enabled: bool) -> Self {
        self.create_parent_dirs = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, message: &str) -> Result<LogEntry> {
        let now = self.clock.now();
        let entry = LogEntry::new(now.with_nanosecond(0).unwrap_or(now), message);

        if self.create_parent_dirs {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| FileIoError::from_io(parent, e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| FileIoError::from_io(&self.path, e))?;
        file.write_all(entry.to_line().as_bytes())
            .map_err(|e| FileIoError::from_io(&self.path, e))?;

        tracing::info!("Log written: {}", entry);
        Ok(entry)
    }

    /// Read every entry back in file order.
    pub fn read_entries(&self) -> Result<Vec<LogEntry>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| FileIoError::from_io(&self.path, e))?;
        content
            .lines()
            .map(|line| {
                LogEntry::parse_line(line).ok_or_else(|| FileIoError::InvalidLogLine {
                    line: line.to_string(),
                })
            })
            .collect()
    }
}
