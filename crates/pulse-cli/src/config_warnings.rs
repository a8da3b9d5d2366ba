use pulse_config::PulseConfig;

/// Log configuration mistakes that would otherwise only surface per request.
pub fn warn_unconfigured(config: &PulseConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PulseConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.ai.is_configured() && has_env_prefix(&env_keys, "PULSE_AI") {
        warnings.push(
            "AI config appears default while PULSE_AI* env vars exist. Use double underscores (example: PULSE_AI__API_KEY)."
                .to_string(),
        );
    }

    if !config.store.is_configured() && has_env_prefix(&env_keys, "PULSE_STORE") {
        warnings.push(
            "Store config appears default while PULSE_STORE* env vars exist. Use double underscores (example: PULSE_STORE__SERVICE_ROLE_KEY)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
