use crate::utils::error::{FileIoError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub const DEFAULT_INDENT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    Pretty { indent: usize },
    Compact,
}

impl Default for JsonStyle {
    fn default() -> Self {
        JsonStyle::Pretty {
            indent: DEFAULT_INDENT,
        }
    }
}

impl JsonStyle {
    pub fn from_indent(indent: Option<usize>) -> Self {
        match indent {
            Some(indent) => JsonStyle::Pretty { indent },
            None => JsonStyle::Compact,
        }
    }
}

/// Write `value` as a JSON document to `path`, creating or truncating it.
pub fn write_json<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
    style: JsonStyle,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FileIoError::from_io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_json_to(&mut writer, value, style).map_err(|e| from_json_error(path, e))?;
    writer.flush().map_err(|e| FileIoError::from_io(path, e))?;
    Ok(())
}

/// Read a JSON document from `path` into any deserializable type.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileIoError::from_io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| from_json_error(path, e))
}

/// 寫入或讀取失敗屬於 I/O，需帶上路徑；其餘才是序列化錯誤
fn from_json_error(path: &Path, e: serde_json::Error) -> FileIoError {
    if e.is_io() {
        FileIoError::from_io(path, e.into())
    } else {
        FileIoError::Serialization(e)
    }
}

fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
    style: JsonStyle,
) -> serde_json::Result<()> {
    match style {
        JsonStyle::Pretty { indent } => {
            let indent = " ".repeat(indent);
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut ser = Serializer::with_formatter(&mut *writer, formatter);
            value.serialize(&mut ser)?;
        }
        JsonStyle::Compact => serde_json::to_writer(&mut *writer, value)?,
    }
    writer
        .write_all(b"\n")
        .map_err(serde_json::Error::io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct User {
        name: String,
        age: u32,
        email: String,
    }

    #[test]
    fn test_write_and_read_typed_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        let users = vec![
            User {
                name: "Alice".into(),
                age: 25,
                email: "alice@example.com".into(),
            },
            User {
                name: "Bob".into(),
                age: 30,
                email: "bob@example.com".into(),
            },
        ];

        write_json(&path, &users, JsonStyle::Compact).unwrap();
        let back: Vec<User> = read_json(&path).unwrap();
        assert_eq!(back, users);
    }

    #[test]
    fn test_pretty_indent_width() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");

        write_json(&path, &serde_json::json!({"a": "1"}), JsonStyle::Pretty { indent: 2 }).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n  \"a\": \"1\"\n}\n");

        write_json(&path, &serde_json::json!(["x"]), JsonStyle::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\n    \"x\"\n]\n");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_keeps_path_regardless_of_size() {
        let large: Vec<String> = (0..2000).map(|i| format!("value-{i}")).collect();
        let small = vec!["x".to_string()];

        for doc in [&large, &small] {
            let err = write_json("/dev/full", doc, JsonStyle::Compact).unwrap_err();
            assert!(matches!(err, FileIoError::Io { .. }), "unexpected error: {err:?}");
            assert_eq!(err.path(), Some("/dev/full"));
        }
    }

    #[test]
    fn test_invalid_document_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1,").unwrap();

        let err = read_json::<Vec<u32>>(&path).unwrap_err();
        assert!(matches!(err, FileIoError::Serialization(_)));
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_json::<serde_json::Value>(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, FileIoError::ResourceNotFound { .. }));
    }
}
