//! Row encoding and decoding.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;

pub fn decode_rows<T: DeserializeOwned>(table: &str, rows: Vec<Value>) -> Result<Vec<T>, StoreError> {
    rows.into_iter().map(|row| decode_row(table, row)).collect()
}

pub fn decode_row<T: DeserializeOwned>(table: &str, row: Value) -> Result<T, StoreError> {
    serde_json::from_value(row).map_err(|source| StoreError::Decode {
        table: table.to_string(),
        source,
    })
}

pub fn encode_rows<T: Serialize>(rows: &[T]) -> Result<Vec<Value>, StoreError> {
    rows.iter()
        .map(|row| serde_json::to_value(row).map_err(StoreError::Encode))
        .collect()
}

/// Collect distinct non-empty ids, keeping first-seen order.
pub fn distinct_ids<'a>(ids: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for id in ids.into_iter().flatten() {
        if !id.is_empty() && !out.iter().any(|seen| seen == id) {
            out.push(id.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::entities::Topic;
    use serde_json::json;

    #[test]
    fn decode_reports_table_on_failure() {
        let err = decode_rows::<Topic>("topics", vec![json!({"id": 1})]).unwrap_err();
        assert!(err.to_string().starts_with("Failed to decode topics row"));
    }

    #[test]
    fn distinct_ids_skips_missing_and_duplicates() {
        let ids = distinct_ids([Some("a"), None, Some("b"), Some("a"), Some("")]);
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }
}
