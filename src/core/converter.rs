use crate::core::csv_io;
use crate::core::json_io::{self, JsonStyle};
use crate::domain::model::DelimitedRecord;
use crate::domain::ports::{ConfigProvider, RowPolicy};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub records: usize,
    pub fields: Vec<String>,
    pub destination: PathBuf,
}

/// Converts a CSV resource into a JSON array of text-valued objects.
///
/// The whole source is parsed before the destination is opened, so a missing
/// or malformed source never creates or touches the destination. A failure
/// while writing may still leave the destination truncated.
#[derive(Debug, Clone, Default)]
pub struct RecordConverter {
    policy: RowPolicy,
    style: JsonStyle,
}

impl RecordConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            policy: config.row_policy(),
            style: JsonStyle::from_indent(config.json_indent()),
        }
    }

    pub fn with_policy(mut self, policy: RowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn convert(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<ConversionSummary> {
        let source = source.as_ref();
        let destination = destination.as_ref();

        tracing::debug!("Reading CSV from {}", source.display());
        let set = csv_io::read_record_set(source, self.policy)?;
        tracing::debug!(
            "Parsed {} records with {} fields",
            set.len(),
            set.headers.len()
        );

        json_io::write_json(destination, &set, self.style)?;
        tracing::info!(
            "Converted {} records from {} to {}",
            set.len(),
            source.display(),
            destination.display()
        );

        Ok(ConversionSummary {
            records: set.len(),
            fields: set.headers,
            destination: destination.to_path_buf(),
        })
    }

    /// Parse a converted document back into records, keeping key order.
    pub fn read_back(&self, path: impl AsRef<Path>) -> Result<Vec<DelimitedRecord>> {
        json_io::read_json(path)
    }
}
