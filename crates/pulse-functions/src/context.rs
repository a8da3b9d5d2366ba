//! Per-process function context.

use pulse_ai::{AiError, GatewayClient};
use pulse_config::{ModelConfig, PulseConfig};
use pulse_store::{PulseStore, StoreError};

/// What every handler needs: the datastore, the gateway, and model names.
///
/// Missing configuration is not fatal here. A handler that needs the
/// datastore or the gateway fails when it asks for it, so the server can
/// start with a partial configuration.
#[derive(Debug, Clone)]
pub struct FunctionContext {
    store: Option<PulseStore>,
    gateway: Option<GatewayClient>,
    models: ModelConfig,
}

impl FunctionContext {
    /// Build the REST datastore and the gateway from `config`, where configured.
    #[must_use]
    pub fn from_config(config: &PulseConfig) -> Self {
        let store = match PulseStore::from_config(&config.store) {
            Ok(store) => Some(store),
            Err(err) => {
                tracing::debug!(error = %err, "datastore unavailable");
                None
            }
        };
        Self::with_store(config, store)
    }

    /// Use `store` in place of the configured datastore.
    #[must_use]
    pub fn with_store(config: &PulseConfig, store: Option<PulseStore>) -> Self {
        let gateway = match GatewayClient::from_config(&config.ai) {
            Ok(gateway) => Some(gateway),
            Err(err) => {
                tracing::debug!(error = %err, "AI gateway unavailable");
                None
            }
        };
        Self {
            store,
            gateway,
            models: config.ai.models.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns [`StoreError::NotConfigured`] when no datastore is available.
    pub fn store(&self) -> Result<&PulseStore, StoreError> {
        self.store.as_ref().ok_or(StoreError::NotConfigured)
    }

    /// # Errors
    ///
    /// Returns [`AiError::NotConfigured`] when no gateway is available.
    pub fn gateway(&self) -> Result<&GatewayClient, AiError> {
        self.gateway.as_ref().ok_or(AiError::NotConfigured)
    }

    #[must_use]
    pub const fn models(&self) -> &ModelConfig {
        &self.models
    }
}
