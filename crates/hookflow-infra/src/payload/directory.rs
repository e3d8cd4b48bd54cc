use std::path::{Path, PathBuf};

use hookflow_core::payload::PayloadSource;

/// Reads payloads from `<root>/<resource>` on disk.
///
/// A missing file is `Ok(None)`; any other I/O failure is returned as is.
#[derive(Debug, Clone)]
pub struct DirectoryPayloadSource {
    root: PathBuf,
}

impl DirectoryPayloadSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PayloadSource for DirectoryPayloadSource {
    async fn load(&self, resource: &str) -> Result<Option<String>, std::io::Error> {
        let path = self.root.join(resource);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Payload resource not found");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookflow_core::payload::load_payload;
    use hookflow_types::error::FlowError;
    use hookflow_types::flow::PayloadChoice;
    use tempfile::TempDir;

    fn write_payload(dir: &TempDir, resource: &str, content: &str) {
        let path = dir.path().join(resource);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_reads_existing_resource() {
        let dir = TempDir::new().unwrap();
        write_payload(&dir, "sql/q1.sql", "SELECT 1;\n");

        let source = DirectoryPayloadSource::new(dir.path().to_path_buf());
        let content = source.load("sql/q1.sql").await.unwrap();
        assert_eq!(content.as_deref(), Some("SELECT 1;\n"));
    }

    #[tokio::test]
    async fn test_missing_resource_is_none() {
        let dir = TempDir::new().unwrap();
        let source = DirectoryPayloadSource::new(dir.path().to_path_buf());
        assert!(source.load("sql/q1.sql").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blank_file_fails_payload_load() {
        let dir = TempDir::new().unwrap();
        write_payload(&dir, "sql/q2.sql", "   \n\n");

        let source = DirectoryPayloadSource::new(dir.path().to_path_buf());
        let err = load_payload(&source, PayloadChoice::B).await.unwrap_err();
        assert!(matches!(err, FlowError::PayloadUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_directory_in_place_of_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("sql/q1.sql")).unwrap();

        let source = DirectoryPayloadSource::new(dir.path().to_path_buf());
        assert!(source.load("sql/q1.sql").await.is_err());
    }
}
