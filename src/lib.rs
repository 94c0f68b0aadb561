pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::ToolConfig;
pub use self::core::{converter::RecordConverter, log_appender::LogAppender};
pub use domain::model::{DelimitedRecord, FieldValue, LogEntry, RecordSet};
pub use domain::ports::{Clock, FixedClock, RowPolicy, SystemClock};
pub use utils::error::{FileIoError, Result};
