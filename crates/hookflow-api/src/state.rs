//! Application state wiring the flow runner together.
//!
//! `FlowRunner` is generic over its ports; AppState pins it to the concrete
//! infra implementations.

use std::path::{Path, PathBuf};

use hookflow_core::runner::FlowRunner;
use hookflow_infra::config::{load_flow_config, resolve_config_path};
use hookflow_infra::filesystem::LocalFileSystem;
use hookflow_infra::gateway::HttpWebhookGateway;
use hookflow_infra::payload::ConfiguredPayloadSource;

/// Concrete runner type pinned to infra implementations.
pub type ConcreteFlowRunner =
    FlowRunner<HttpWebhookGateway, ConfiguredPayloadSource, LocalFileSystem>;

pub struct AppState {
    pub runner: ConcreteFlowRunner,
    pub config_path: PathBuf,
    /// Human-readable payload origin ("embedded" or a directory).
    pub payload_origin: String,
}

impl AppState {
    /// Load configuration and wire the runner.
    pub async fn init(config_flag: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = resolve_config_path(config_flag);
        let config = load_flow_config(&config_path).await?;

        let gateway = HttpWebhookGateway::new(&config.user_agent);
        let payloads = ConfiguredPayloadSource::from_config(config.payload_dir.as_ref());
        let payload_origin = payloads.describe();

        let runner = FlowRunner::new(gateway, payloads, LocalFileSystem::new(), config);

        Ok(Self {
            runner,
            config_path,
            payload_origin,
        })
    }
}
