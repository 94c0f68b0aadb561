use fileio_kit::core::csv_io;
use fileio_kit::core::json_io::JsonStyle;
use fileio_kit::{FieldValue, FixedClock, LogAppender, RecordConverter};
use proptest::prelude::*;
use tempfile::TempDir;

fn cell_strategy() -> impl Strategy<Value = String> {
    // 含逗號、引號與換行的文字
    prop::string::string_regex("[a-zA-Z0-9 ,\"\n.-]{1,12}").unwrap()
}

fn table_strategy() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    prop::collection::btree_set("[a-z]{1,6}", 1..6)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_flat_map(|headers| {
            let width = headers.len();
            let rows = prop::collection::vec(prop::collection::vec(cell_strategy(), width), 0..8);
            (Just(headers), rows)
        })
}

proptest! {
    #[test]
    fn converted_document_matches_source_cells((headers, rows) in table_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let csv_path = temp_dir.path().join("in.csv");
        let json_path = temp_dir.path().join("out.json");

        let mut table = vec![headers.clone()];
        table.extend(rows.iter().cloned());
        csv_io::write_rows(&csv_path, &table).unwrap();

        let converter = RecordConverter::new().with_style(JsonStyle::Compact);
        converter.convert(&csv_path, &json_path).unwrap();
        let records = converter.read_back(&json_path).unwrap();

        prop_assert_eq!(records.len(), rows.len());
        for (record, row) in records.iter().zip(&rows) {
            prop_assert_eq!(record.field_names().collect::<Vec<_>>(), headers.iter().map(String::as_str).collect::<Vec<_>>());
            for (header, cell) in headers.iter().zip(row) {
                prop_assert_eq!(record.get(header), Some(&FieldValue::Text(cell.clone())));
            }
        }
    }

    #[test]
    fn appends_only_grow_the_log(messages in prop::collection::vec("[a-zA-Z0-9 -]{0,20}", 1..20)) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("app_log.txt");
        let logger = LogAppender::with_clock(&log_path, FixedClock::parse("2024-01-01 00:00:00").unwrap());

        let mut previous = String::new();
        for (k, message) in messages.iter().enumerate() {
            logger.append(message).unwrap();
            let content = std::fs::read_to_string(&log_path).unwrap();
            prop_assert!(content.starts_with(&previous));
            prop_assert_eq!(content.lines().count(), k + 1);
            previous = content;
        }

        let entries = logger.read_entries().unwrap();
        let written: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
        let expected: Vec<&str> = messages.iter().map(String::as_str).collect();
        prop_assert_eq!(written, expected);
    }
}
