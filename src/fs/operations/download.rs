//! Download operations.

use std::path::Path;

use tracing::info;

use super::utils::{local_file_name, move_file};
use crate::api::DriveBackend;
use crate::error::Result;
use crate::fs::{DriveFile, RemoteRef};
use crate::session::Session;

impl<B: DriveBackend> Session<B> {
    /// Download a remote file into the working directory.
    ///
    /// The local file is named after the remote title. When `local_save_dir`
    /// is given the file is then moved into that directory, so it ends up
    /// there and not in the working directory.
    ///
    /// # Arguments
    /// * `source` - File to download
    /// * `local_save_dir` - Optional directory to move the download into
    ///
    /// # Returns
    /// The remote file record
    pub async fn download(
        &self,
        source: RemoteRef,
        local_save_dir: Option<&Path>,
    ) -> Result<DriveFile> {
        let file_id = self.resolve_ref(&source).await?;
        let file = self.backend().get_file(&file_id).await?;
        let name = local_file_name(&file.title)?;

        let content = self.backend().get_content(&file_id).await?;
        let downloaded = self.working_dir().join(name);
        tokio::fs::write(&downloaded, &content).await?;

        let local = match local_save_dir {
            Some(dir) => {
                let target = dir.join(name);
                move_file(&downloaded, &target).await?;
                target
            }
            None => downloaded,
        };

        info!(
            id = %file.id,
            local = %local.display(),
            bytes = content.len(),
            "downloaded file"
        );
        Ok(file)
    }
}
