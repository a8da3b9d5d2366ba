use anyhow::Context;
use pulse_config::PulseConfig;

use crate::cli::GlobalFlags;

/// Load `.env` (if any) and then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PulseConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
        Err(error) if error.not_found() => {}
        Err(error) => return Err(error).context("failed to load .env"),
    }
    PulseConfig::load_from(flags.config.as_deref()).map_err(anyhow::Error::from)
}
