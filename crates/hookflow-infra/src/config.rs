//! Configuration loader for hookflow.
//!
//! Reads `hookflow.toml` and deserializes it into [`FlowConfig`], then lets
//! individual `HOOKFLOW_*` environment variables override fields. Unlike a
//! settings file with sensible defaults, the endpoint URLs have none, so a
//! missing or malformed file is an error.

use std::path::{Path, PathBuf};

use anyhow::Context;

use hookflow_types::config::FlowConfig;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "hookflow.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "HOOKFLOW_CONFIG";

const GENERATE_URL_ENV: &str = "HOOKFLOW_GENERATE_URL";
const FALLBACK_SUBMIT_URL_ENV: &str = "HOOKFLOW_FALLBACK_SUBMIT_URL";
const AUTH_PREFIX_ENV: &str = "HOOKFLOW_AUTH_PREFIX";

/// Resolve which config file to read.
///
/// Priority:
/// 1. Explicit path (`--config` flag, which clap also fills from `HOOKFLOW_CONFIG`)
/// 2. `./hookflow.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Load and validate the flow configuration from `path`.
///
/// Environment overrides are applied from the process environment.
pub async fn load_flow_config(path: &Path) -> anyhow::Result<FlowConfig> {
    load_flow_config_with(path, |key| std::env::var(key).ok()).await
}

/// Same as [`load_flow_config`] with an injectable environment lookup.
pub async fn load_flow_config_with<F>(path: &Path, env: F) -> anyhow::Result<FlowConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let mut config: FlowConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    apply_env_overrides(&mut config, env);

    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        generate_url = %config.generate_url,
        "Loaded flow configuration"
    );

    Ok(config)
}

/// Override individual fields from `HOOKFLOW_*` variables.
fn apply_env_overrides<F>(config: &mut FlowConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = env(GENERATE_URL_ENV) {
        config.generate_url = url;
    }
    if let Some(url) = env(FALLBACK_SUBMIT_URL_ENV) {
        config.fallback_submit_url = url;
    }
    if let Some(prefix) = env(AUTH_PREFIX_ENV) {
        config.auth_prefix = prefix;
    }
}
