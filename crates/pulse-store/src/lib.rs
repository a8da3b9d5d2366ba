//! # pulse-store
//!
//! Typed access to the ConceptPulse tables.
//!
//! [`PulseStore`] wraps a [`Backend`]: the PostgREST API of the managed
//! datastore in production, or [`MemoryBackend`] for local runs and tests.
//! Repository methods live in [`repos`] as `impl PulseStore` blocks; the
//! `replace_*` methods delete the rows for a key and insert the new ones,
//! so after a replace exactly the newly generated rows exist for that key.

pub mod backend;
pub mod error;
pub mod query;
pub mod repos;
pub mod tables;

mod helpers;
mod test_support;

pub use backend::{Backend, MemoryBackend, RestBackend};
pub use error::StoreError;
pub use query::Query;

use std::sync::Arc;

use pulse_config::StoreConfig;

/// Repository facade over a datastore backend.
#[derive(Debug, Clone)]
pub struct PulseStore {
    backend: Backend,
}

impl PulseStore {
    /// Connect to the REST datastore described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotConfigured`] if the URL or key is missing.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self {
            backend: Backend::Rest(RestBackend::from_config(config)?),
        })
    }

    /// A store over an in-process backend. The caller keeps the `Arc` to
    /// inspect rows.
    #[must_use]
    pub const fn in_memory(memory: Arc<MemoryBackend>) -> Self {
        Self {
            backend: Backend::Memory(memory),
        }
    }

    #[must_use]
    pub const fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Delete every row of `table` where `column = key`, then insert `rows`.
    pub(crate) async fn replace_rows(
        &self,
        table: &str,
        column: &str,
        key: &str,
        rows: Vec<serde_json::Value>,
    ) -> Result<Vec<serde_json::Value>, StoreError> {
        self.backend
            .delete(table, &Query::new().eq(column, key))
            .await?;
        let count = rows.len();
        let inserted = self.backend.insert(table, rows).await?;
        tracing::info!(table, column, key, count, "replaced rows");
        Ok(inserted)
    }
}
