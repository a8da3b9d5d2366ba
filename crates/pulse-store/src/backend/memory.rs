//! In-process backend used by `pulse serve --memory` and the tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use serde_json::Value;

use crate::error::StoreError;
use crate::query::Query;

/// Tables of JSON rows behind a mutex.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    next_id: AtomicU64,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backend from a JSON object of `table -> [rows]`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidState`] if the seed is not an object of
    /// arrays of objects.
    pub fn from_seed(seed: Value) -> Result<Self, StoreError> {
        let Value::Object(tables) = seed else {
            return Err(StoreError::InvalidState(
                "seed must be a JSON object of table arrays".into(),
            ));
        };
        let backend = Self::new();
        for (table, rows) in tables {
            let Value::Array(rows) = rows else {
                return Err(StoreError::InvalidState(format!(
                    "seed table {table} is not an array"
                )));
            };
            if rows.iter().any(|row| !row.is_object()) {
                return Err(StoreError::InvalidState(format!(
                    "seed table {table} contains a non-object row"
                )));
            }
            backend.insert_raw(&table, rows);
        }
        Ok(backend)
    }

    /// Append rows as-is, without assigning ids.
    pub fn insert_raw(&self, table: &str, rows: Vec<Value>) {
        self.lock().entry(table.to_string()).or_default().extend(rows);
    }

    /// Every row currently in `table`.
    #[must_use]
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.lock().get(table).cloned().unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Value>>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn stamp(&self, table: &str, row: &mut Value) {
        let Value::Object(fields) = row else { return };
        if fields.get("id").is_none_or(Value::is_null) {
            let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
            fields.insert("id".into(), Value::String(format!("{table}-{n:08x}")));
        }
        if !fields.contains_key("created_at") {
            fields.insert("created_at".into(), Value::String(Utc::now().to_rfc3339()));
        }
    }

    pub fn select(&self, table: &str, query: &Query) -> Vec<Value> {
        let mut rows: Vec<Value> = self
            .lock()
            .get(table)
            .map(|rows| rows.iter().filter(|row| query.matches(row)).cloned().collect())
            .unwrap_or_default();
        query.sort(&mut rows);
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        rows
    }

    pub fn insert(&self, table: &str, rows: Vec<Value>) -> Vec<Value> {
        let stamped: Vec<Value> = rows
            .into_iter()
            .map(|mut row| {
                self.stamp(table, &mut row);
                row
            })
            .collect();
        self.insert_raw(table, stamped.clone());
        stamped
    }

    pub fn delete(&self, table: &str, query: &Query) -> Result<(), StoreError> {
        if query.filters.is_empty() {
            return Err(StoreError::InvalidState(format!(
                "refusing unfiltered delete on {table}"
            )));
        }
        if let Some(rows) = self.lock().get_mut(table) {
            rows.retain(|row| !query.matches(row));
        }
        Ok(())
    }

    /// Merge `row` into the row sharing its `on_conflict` columns, or insert it.
    pub fn upsert(&self, table: &str, mut row: Value, on_conflict: &[&str]) -> Value {
        let same_key = |existing: &Value| {
            on_conflict
                .iter()
                .all(|column| existing.get(*column) == row.get(*column))
        };
        let mut tables = self.lock();
        let rows = tables.entry(table.to_string()).or_default();
        if let Some(existing) = rows.iter_mut().find(|existing| same_key(existing)) {
            if let (Value::Object(target), Value::Object(fields)) = (&mut *existing, &row) {
                for (key, value) in fields {
                    target.insert(key.clone(), value.clone());
                }
            }
            return existing.clone();
        }
        drop(tables);
        self.stamp(table, &mut row);
        self.insert_raw(table, vec![row.clone()]);
        row
    }
}
