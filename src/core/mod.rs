pub mod converter;
pub mod csv_io;
pub mod json_io;
pub mod log_appender;

pub use crate::domain::model::{DelimitedRecord, FieldValue, LogEntry, RecordSet};
pub use crate::domain::ports::{Clock, ConfigProvider, RowPolicy};
pub use crate::utils::error::Result;
