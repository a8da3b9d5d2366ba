//! Storage backends behind [`Backend`].

mod memory;
mod rest;

pub use memory::MemoryBackend;
pub use rest::RestBackend;

use std::sync::Arc;

use serde_json::Value;

use crate::error::StoreError;
use crate::query::Query;

/// The datastore a [`crate::PulseStore`] talks to.
#[derive(Debug, Clone)]
pub enum Backend {
    Rest(RestBackend),
    Memory(Arc<MemoryBackend>),
}

impl Backend {
    pub async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>, StoreError> {
        match self {
            Self::Rest(rest) => rest.select(table, query).await,
            Self::Memory(memory) => Ok(memory.select(table, query)),
        }
    }

    pub async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<Vec<Value>, StoreError> {
        match self {
            Self::Rest(rest) => rest.insert(table, rows).await,
            Self::Memory(memory) => Ok(memory.insert(table, rows)),
        }
    }

    pub async fn delete(&self, table: &str, query: &Query) -> Result<(), StoreError> {
        match self {
            Self::Rest(rest) => rest.delete(table, query).await,
            Self::Memory(memory) => memory.delete(table, query),
        }
    }

    pub async fn upsert(
        &self,
        table: &str,
        row: Value,
        on_conflict: &[&str],
    ) -> Result<Value, StoreError> {
        match self {
            Self::Rest(rest) => rest.upsert(table, row, on_conflict).await,
            Self::Memory(memory) => Ok(memory.upsert(table, row, on_conflict)),
        }
    }
}
