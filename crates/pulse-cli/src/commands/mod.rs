use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use pulse_config::PulseConfig;
use pulse_functions::FunctionContext;
use pulse_store::{MemoryBackend, PulseStore};

use crate::cli::Commands;
use crate::cli::root_commands::StoreArgs;

pub mod config;
pub mod invoke;
pub mod serve;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, config: PulseConfig) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => serve::handle(&args, config).await,
        Commands::Invoke(args) => invoke::handle(&args, &config).await,
        Commands::Config => config::handle(&config),
    }
}

/// Build the function context, swapping in an in-process datastore when asked.
pub fn build_context(config: &PulseConfig, store: &StoreArgs) -> anyhow::Result<FunctionContext> {
    if !store.in_memory() {
        return Ok(FunctionContext::from_config(config));
    }
    let memory = match &store.seed {
        Some(path) => load_seed(path)?,
        None => MemoryBackend::new(),
    };
    let store = PulseStore::in_memory(Arc::new(memory));
    Ok(FunctionContext::with_store(config, Some(store)))
}

fn load_seed(path: &Path) -> anyhow::Result<MemoryBackend> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let seed = serde_json::from_str(&raw)
        .with_context(|| format!("seed file {} is not valid JSON", path.display()))?;
    let memory = MemoryBackend::from_seed(seed)
        .with_context(|| format!("invalid seed file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded seed data");
    Ok(memory)
}
