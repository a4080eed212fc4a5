//! Upload operations.

use std::path::Path;

use tracing::info;

use super::utils::local_file_title;
use crate::api::{DriveBackend, InsertOptions};
use crate::error::Result;
use crate::fs::{DriveFile, FileMetadata, ParentReference, RemoteRef};
use crate::session::Session;

impl<B: DriveBackend> Session<B> {
    /// Upload a local file into a folder.
    ///
    /// The remote file is titled after the local file name. A folder given
    /// by path is resolved from the root folder first.
    ///
    /// # Arguments
    /// * `local_path` - Path to the local file to upload
    /// * `destination` - Folder to upload into
    ///
    /// # Example
    /// ```no_run
    /// # use drivelib::{RemoteRef, Session};
    /// # async fn example() -> drivelib::Result<()> {
    /// let session = Session::new("ya29.a0Af...");
    /// let file = session
    ///     .upload("checkpoints/model.pt", RemoteRef::path("/experiments/run-7"))
    ///     .await?;
    /// println!("{} -> {}", file.title, file.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload<P: AsRef<Path>>(
        &self,
        local_path: P,
        destination: RemoteRef,
    ) -> Result<DriveFile> {
        let parent_id = self.resolve_ref(&destination).await?;
        self.insert_local(
            local_path.as_ref(),
            ParentReference::folder(parent_id),
            InsertOptions::default(),
        )
        .await
    }

    /// Upload a local file into a team drive.
    ///
    /// # Arguments
    /// * `local_path` - Path to the local file to upload
    /// * `team_id` - Team drive identifier
    /// * `team_path_id` - Folder inside the team drive, or `None` for its top level
    pub async fn upload_team<P: AsRef<Path>>(
        &self,
        local_path: P,
        team_id: &str,
        team_path_id: Option<&str>,
    ) -> Result<DriveFile> {
        let target_id = team_path_id.unwrap_or(team_id);
        self.insert_local(
            local_path.as_ref(),
            ParentReference::team_link(team_id, target_id),
            InsertOptions {
                supports_team_drives: true,
            },
        )
        .await
    }

    async fn insert_local(
        &self,
        local_path: &Path,
        parent: ParentReference,
        options: InsertOptions,
    ) -> Result<DriveFile> {
        let title = local_file_title(local_path)?;
        let content = tokio::fs::read(local_path).await?;

        let metadata = FileMetadata {
            title,
            parents: vec![parent],
        };
        let file = self
            .backend()
            .insert_file(&metadata, content, options)
            .await?;

        info!(
            local = %local_path.display(),
            id = %file.id,
            title = %file.title,
            "uploaded file"
        );
        Ok(file)
    }
}
