use pulse_config::PulseConfig;

/// Handle `pulse config`.
pub fn handle(config: &PulseConfig) -> anyhow::Result<()> {
    print!("{}", render(config)?);
    Ok(())
}

fn render(config: &PulseConfig) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(&config.redacted())?)
}
