//! The calls drivelib needs from a Drive service.

use async_trait::async_trait;

use crate::error::Result;
use crate::fs::{DriveFile, FileList, FileMetadata};

/// Flags for a create-and-upload call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertOptions {
    /// Must be set when the parent lives in a team drive.
    pub supports_team_drives: bool,
}

/// Remote operations used by the path helpers.
///
/// `ApiClient` talks to the real service; tests plug in an in-memory
/// implementation.
#[async_trait]
pub trait DriveBackend: Send + Sync {
    /// Run a `files.list` search and return the first page of results.
    async fn list_files(&self, query: &str) -> Result<FileList>;

    /// Fetch metadata for one file.
    async fn get_file(&self, file_id: &str) -> Result<DriveFile>;

    /// Create a file with `metadata` and `content` in a single call.
    async fn insert_file(
        &self,
        metadata: &FileMetadata,
        content: Vec<u8>,
        options: InsertOptions,
    ) -> Result<DriveFile>;

    /// Fetch the content of a file.
    async fn get_content(&self, file_id: &str) -> Result<Vec<u8>>;
}
