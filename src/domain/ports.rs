use crate::domain::model::TIMESTAMP_FORMAT;
use chrono::{Local, NaiveDateTime};
use std::path::Path;

/// Source of wall-clock time for log timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local time zone of the host, truncated to whole seconds on output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant. Useful for reproducible logs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn parse(stamp: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .ok()
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Row policy applied when a CSV row has more cells than the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RowPolicy {
    #[default]
    Strict,
    Truncate,
}

pub trait ConfigProvider {
    fn row_policy(&self) -> RowPolicy;
    /// `None` means compact output.
    fn json_indent(&self) -> Option<usize>;
    fn log_path(&self) -> &Path;
    fn create_parent_dirs(&self) -> bool;
}
