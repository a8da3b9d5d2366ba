use std::sync::Arc;

use anyhow::Context;
use pulse_config::PulseConfig;

use crate::cli::root_commands::ServeArgs;
use crate::commands::build_context;

/// Handle `pulse serve`.
pub async fn handle(args: &ServeArgs, mut config: PulseConfig) -> anyhow::Result<()> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let ctx = build_context(&config, &args.store)?;
    if !config.ai.is_configured() {
        tracing::warn!("AI gateway is not configured; AI-backed functions will fail");
    }
    if !args.store.in_memory() && !config.store.is_configured() {
        tracing::warn!("datastore is not configured; datastore-backed functions will fail");
    }

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let app = pulse_functions::http::router(Arc::new(ctx));

    tracing::info!(%addr, memory = args.store.in_memory(), "serving functions");
    eprintln!("pulse listening on http://{addr}/functions/v1/{{name}}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
