//! Delimited-text (CSV) reading and writing.

use crate::domain::model::{DelimitedRecord, FieldValue, RecordSet};
use crate::domain::ports::RowPolicy;
use crate::utils::error::{FileIoError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parse a CSV resource into a [`RecordSet`].
///
/// Rules:
///
/// - The first row is the header; field names must be unique.
/// - Short rows keep every header key; absent trailing cells become [`FieldValue::Missing`].
/// - Long rows are rejected or truncated according to `policy`.
/// - Blank lines are skipped. Quoted cells may contain commas, quotes and newlines.
pub fn read_record_set(path: impl AsRef<Path>, policy: RowPolicy) -> Result<RecordSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileIoError::from_io(path, e))?;
    let mut rdr = reader_builder().from_reader(file);
    read_record_set_from_reader(&mut rdr, policy).map_err(|e| match e {
        FileIoError::Csv(err) => from_csv_error(path, err),
        other => other,
    })
}

/// Same as [`read_record_set`], from an existing CSV reader.
///
/// The reader should be built with `flexible(true)`, otherwise the csv crate
/// rejects uneven rows before the row policy is consulted.
pub fn read_record_set_from_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
    policy: RowPolicy,
) -> Result<RecordSet> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
    if headers.is_empty() {
        tracing::debug!("CSV source has no header row");
        return Ok(RecordSet::default());
    }

    let mut seen = HashSet::with_capacity(headers.len());
    for field in &headers {
        if !seen.insert(field.as_str()) {
            return Err(FileIoError::DuplicateHeader {
                field: field.clone(),
            });
        }
    }

    let mut set = RecordSet::new(headers);
    for (idx, result) in rdr.records().enumerate() {
        let row = result?;
        // 1-based, header 為第 1 列
        let row_number = row
            .position()
            .map(|p| p.record() + 1)
            .unwrap_or(idx as u64 + 2);

        if row.len() > set.headers.len() {
            match policy {
                RowPolicy::Strict => {
                    return Err(FileIoError::MalformedRow {
                        row: row_number,
                        expected: set.headers.len(),
                        found: row.len(),
                    });
                }
                RowPolicy::Truncate => {
                    tracing::debug!(
                        "Row {} has {} extra field(s), truncating",
                        row_number,
                        row.len() - set.headers.len()
                    );
                }
            }
        }

        let mut record = DelimitedRecord::with_capacity(set.headers.len());
        for (i, name) in set.headers.iter().enumerate() {
            let value = row
                .get(i)
                .map(|cell| FieldValue::Text(cell.to_owned()))
                .unwrap_or(FieldValue::Missing);
            record.push(name.as_str(), value);
        }
        set.records.push(record);
    }

    Ok(set)
}

/// Write rows as CSV, creating or truncating `path`. The first row is
/// conventionally the header; cells are quoted only when needed.
pub fn write_rows<I, R, F>(path: impl AsRef<Path>, rows: I) -> Result<usize>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FileIoError::from_io(path, e))?;
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);

    let mut written = 0;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| from_csv_error(path, e))?;
        written += 1;
    }
    writer.flush().map_err(|e| FileIoError::from_io(path, e))?;

    tracing::debug!("Wrote {} CSV rows to {}", written, path.display());
    Ok(written)
}

/// The product table used to seed a demo conversion.
pub fn sample_products() -> Vec<Vec<String>> {
    [
        ["ProductID", "ProductName", "Price", "Stock"],
        ["101", "Laptop", "800", "50"],
        ["102", "Smartphone", "600", "120"],
        ["103", "Tablet", "400", "80"],
    ]
    .iter()
    .map(|row| row.iter().map(|cell| cell.to_string()).collect())
    .collect()
}

/// I/O failures inside the csv reader/writer are reported against `path`.
fn from_csv_error(path: &Path, err: csv::Error) -> FileIoError {
    if !err.is_io_error() {
        return FileIoError::Csv(err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => FileIoError::from_io(path, source),
        kind => FileIoError::from_io(path, std::io::Error::other(format!("{:?}", kind))),
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}
