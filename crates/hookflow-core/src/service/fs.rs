//! FileSystem trait for abstracting file I/O.
//!
//! Defined in hookflow-core so the runner can persist the selected payload
//! without depending on any specific filesystem implementation. The
//! `LocalFileSystem` adapter lives in hookflow-infra.

use std::path::Path;

/// Abstraction over the filesystem operations the flow needs.
pub trait FileSystem: Send + Sync {
    /// Write string content to a file, replacing any previous content.
    fn write_file(
        &self,
        path: &Path,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Read a file's content as a string.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String, std::io::Error>> + Send;
}
