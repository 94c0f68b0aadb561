use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileIoError {
    #[error("Resource not found: {path}")]
    ResourceNotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: u64,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate header field: {field}")]
    DuplicateHeader { field: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid log line: {line}")]
    InvalidLogLine { line: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, FileIoError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    FileSystem,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FileIoError {
    /// 依 `io::ErrorKind` 分類，並保留失敗的路徑
    pub fn from_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => FileIoError::ResourceNotFound { path },
            io::ErrorKind::PermissionDenied => FileIoError::PermissionDenied { path },
            _ => FileIoError::Io { path, source },
        }
    }

    /// The path involved in the failure, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            FileIoError::ResourceNotFound { path }
            | FileIoError::PermissionDenied { path }
            | FileIoError::Io { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FileIoError::ResourceNotFound { .. }
            | FileIoError::PermissionDenied { .. }
            | FileIoError::Io { .. } => ErrorCategory::FileSystem,
            FileIoError::MalformedRow { .. }
            | FileIoError::DuplicateHeader { .. }
            | FileIoError::Serialization(_)
            | FileIoError::Csv(_)
            | FileIoError::InvalidLogLine { .. } => ErrorCategory::Data,
            FileIoError::ConfigError { .. }
            | FileIoError::InvalidConfigValueError { .. }
            | FileIoError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FileIoError::ResourceNotFound { .. } => ErrorSeverity::Medium,
            FileIoError::InvalidLogLine { .. }
            | FileIoError::MalformedRow { .. }
            | FileIoError::DuplicateHeader { .. }
            | FileIoError::Csv(_)
            | FileIoError::ConfigError { .. }
            | FileIoError::InvalidConfigValueError { .. }
            | FileIoError::MissingConfigError { .. } => ErrorSeverity::High,
            FileIoError::PermissionDenied { .. }
            | FileIoError::Io { .. }
            | FileIoError::Serialization(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FileIoError::ResourceNotFound { path } => {
                format!("Check that '{}' exists and the path is spelled correctly", path)
            }
            FileIoError::PermissionDenied { path } => {
                format!("Check read/write permissions on '{}' and its parent directory", path)
            }
            FileIoError::MalformedRow { .. } => {
                "Fix the row length in the source, or use the 'truncate' row policy".to_string()
            }
            FileIoError::DuplicateHeader { .. } => {
                "Rename the repeated column so every header field is unique".to_string()
            }
            FileIoError::Csv(_) => "Check that the source is valid UTF-8 CSV".to_string(),
            FileIoError::InvalidLogLine { .. } => {
                "The log contains lines not written by this tool, or a message with a newline"
                    .to_string()
            }
            FileIoError::ConfigError { .. }
            | FileIoError::InvalidConfigValueError { .. }
            | FileIoError::MissingConfigError { .. } => {
                "Review the configuration file and command-line flags".to_string()
            }
            FileIoError::Serialization(_) | FileIoError::Io { .. } => {
                "Retry the operation; if it keeps failing check disk space".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FileIoError::ResourceNotFound { path } => format!("Cannot find file: {}", path),
            FileIoError::PermissionDenied { path } => format!("Access denied: {}", path),
            FileIoError::MalformedRow {
                row,
                expected,
                found,
            } => format!(
                "Row {} has {} fields but the header has {}",
                row, found, expected
            ),
            other => other.to_string(),
        }
    }
}
