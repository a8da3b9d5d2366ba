//! # pulse-config
//!
//! Layered configuration loading for ConceptPulse using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PULSE_*` prefix, `__` as separator)
//! 2. Well-known bare variables shared with the hosted functions:
//!    `AI_API_KEY`, `AI_GATEWAY_URL`, `SUPABASE_URL`, `SUPABASE_SERVICE_ROLE_KEY`
//! 3. An explicit config file, or project-level `pulse.toml`
//! 4. User-level `~/.config/conceptpulse/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PULSE_AI__API_KEY` -> `ai.api_key`, `PULSE_SERVER__PORT` -> `server.port`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use pulse_config::PulseConfig;
//!
//! let config = PulseConfig::load().expect("config");
//!
//! if config.ai.is_configured() {
//!     println!("AI gateway: {}", config.ai.gateway_url);
//! }
//! ```

mod ai;
mod error;
mod server;
mod store;

pub use ai::{AiConfig, ModelConfig};
pub use error::ConfigError;
pub use server::ServerConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Bare variable names and the config keys they fill.
const WELL_KNOWN_ENV: [(&str, &str); 4] = [
    ("AI_API_KEY", "ai.api_key"),
    ("AI_GATEWAY_URL", "ai.gateway_url"),
    ("SUPABASE_URL", "store.url"),
    ("SUPABASE_SERVICE_ROLE_KEY", "store.service_role_key"),
];

/// Project-local config file name.
const LOCAL_CONFIG_FILE: &str = "pulse.toml";

const REDACTED: &str = "<redacted>";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PulseConfig {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl PulseConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; the CLI loads it with `dotenvy` before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `config_file` instead of `pulse.toml` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be read, a value has the
    /// wrong type, or a value fails validation.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(config_file).extract()?;
        config.ai.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: explicit file, else project-local config
        let local_path = config_file.map_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: bare variables shared with the hosted functions
        figment = figment.merge(Self::well_known_env());

        // Layer 4: prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("PULSE_").split("__"))
    }

    /// A copy with secrets masked, safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.ai.api_key.is_empty() {
            copy.ai.api_key = REDACTED.into();
        }
        if !copy.store.service_role_key.is_empty() {
            copy.store.service_role_key = REDACTED.into();
        }
        copy
    }

    fn well_known_env() -> Env {
        let names = WELL_KNOWN_ENV.map(|(var, _)| var);
        Env::raw().only(&names).map(|key| {
            WELL_KNOWN_ENV
                .iter()
                .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                .map_or_else(|| key.into(), |(_, path)| (*path).into())
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("conceptpulse").join("config.toml"))
    }
}
