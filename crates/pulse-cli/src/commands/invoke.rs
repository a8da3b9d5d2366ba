use std::path::Path;

use anyhow::Context;
use pulse_config::PulseConfig;
use serde_json::Value;

use crate::cli::root_commands::InvokeArgs;
use crate::commands::build_context;

/// Handle `pulse invoke`.
pub async fn handle(args: &InvokeArgs, config: &PulseConfig) -> anyhow::Result<()> {
    let body = request_body(args.data.as_deref(), args.file.as_deref())?;
    let ctx = build_context(config, &args.store)?;
    let response = pulse_functions::invoke(&ctx, &args.function, body)
        .await
        .with_context(|| format!("{} failed", args.function))?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn request_body(data: Option<&str>, file: Option<&Path>) -> anyhow::Result<Value> {
    if let Some(data) = data {
        return serde_json::from_str(data).context("--data is not valid JSON");
    }
    if let Some(path) = file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("{} is not valid JSON", path.display()));
    }
    Ok(Value::Object(serde_json::Map::new()))
}
