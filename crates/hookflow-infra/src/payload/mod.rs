//! Payload source adapters.
//!
//! Implements [`PayloadSource`] for the payloads bundled into the binary and
//! for a directory of overrides on disk. [`ConfiguredPayloadSource`] picks
//! one of the two from `FlowConfig::payload_dir`.

mod directory;
mod embedded;

use std::path::PathBuf;

pub use directory::DirectoryPayloadSource;
pub use embedded::EmbeddedPayloadSource;

use hookflow_core::payload::PayloadSource;

/// Payload source chosen at startup from configuration.
pub enum ConfiguredPayloadSource {
    Embedded(EmbeddedPayloadSource),
    Directory(DirectoryPayloadSource),
}

impl ConfiguredPayloadSource {
    /// Directory overrides when `payload_dir` is set, bundled payloads otherwise.
    pub fn from_config(payload_dir: Option<&PathBuf>) -> Self {
        match payload_dir {
            Some(dir) => Self::Directory(DirectoryPayloadSource::new(dir.clone())),
            None => Self::Embedded(EmbeddedPayloadSource::new()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Embedded(_) => "embedded".to_string(),
            Self::Directory(source) => source.root().display().to_string(),
        }
    }
}

impl PayloadSource for ConfiguredPayloadSource {
    async fn load(&self, resource: &str) -> Result<Option<String>, std::io::Error> {
        match self {
            Self::Embedded(source) => source.load(resource).await,
            Self::Directory(source) => source.load(resource).await,
        }
    }
}
