use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the functions over HTTP at /functions/v1/{name}
    Serve(ServeArgs),
    /// Run one function with a JSON body and print its response
    Invoke(InvokeArgs),
    /// Print the resolved configuration (secrets redacted)
    Config,
}

/// Datastore selection shared by `serve` and `invoke`.
#[derive(Debug, Clone, Default, Args)]
pub struct StoreArgs {
    /// Use an in-process datastore instead of the configured REST API
    #[arg(long)]
    pub memory: bool,

    /// JSON file of `table -> [rows]` to load into the in-process datastore (implies --memory)
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,
}

impl StoreArgs {
    #[must_use]
    pub const fn in_memory(&self) -> bool {
        self.memory || self.seed.is_some()
    }
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Debug, Args)]
pub struct InvokeArgs {
    /// Function name, e.g. analyze-weakspots
    pub function: String,

    /// Request body as inline JSON
    #[arg(long, short, conflicts_with = "file")]
    pub data: Option<String>,

    /// Read the request body from a JSON file
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub store: StoreArgs,
}
