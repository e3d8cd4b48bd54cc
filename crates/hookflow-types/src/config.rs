//! Flow configuration types.
//!
//! `FlowConfig` represents `hookflow.toml`: the two endpoint URLs, the
//! authorization prefix, and where the selected payload is written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for a single flow execution.
///
/// Passed explicitly into the runner; nothing inside the flow reads
/// environment variables or global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Generation Endpoint that issues the webhook URL and access token.
    pub generate_url: String,

    /// Submission URL used when the Generation Endpoint omits `webhook`.
    pub fallback_submit_url: String,

    /// Prepended verbatim to the access token in the `Authorization` header.
    #[serde(default)]
    pub auth_prefix: String,

    /// Local file overwritten with the selected payload on every run.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Directory holding `sql/q1.sql` and `sql/q2.sql` overrides.
    /// The payloads bundled into the binary are used when unset.
    #[serde(default)]
    pub payload_dir: Option<PathBuf>,

    /// User agent sent on every outbound request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.sql")
}

fn default_user_agent() -> String {
    concat!("hookflow/", env!("CARGO_PKG_VERSION")).to_string()
}

impl FlowConfig {
    /// Build a config with the two required URLs and defaults for the rest.
    pub fn new(generate_url: impl Into<String>, fallback_submit_url: impl Into<String>) -> Self {
        Self {
            generate_url: generate_url.into(),
            fallback_submit_url: fallback_submit_url.into(),
            auth_prefix: String::new(),
            output_path: default_output_path(),
            payload_dir: None,
            user_agent: default_user_agent(),
        }
    }

    pub fn with_auth_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.auth_prefix = prefix.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Whether the configured prefix is empty or whitespace only.
    ///
    /// The Bearer retry on 401 is only attempted when this holds.
    pub fn has_blank_prefix(&self) -> bool {
        self.auth_prefix.trim().is_empty()
    }

    /// Reject configurations that cannot possibly run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generate_url.trim().is_empty() {
            return Err(ConfigError::MissingField("generate_url"));
        }
        if self.fallback_submit_url.trim().is_empty() {
            return Err(ConfigError::MissingField("fallback_submit_url"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("output_path"));
        }
        Ok(())
    }
}
