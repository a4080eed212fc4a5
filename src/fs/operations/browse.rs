//! Directory listing and path resolution.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::utils::{children_query, split_remote_path};
use crate::api::DriveBackend;
use crate::error::{DriveError, Result};
use crate::fs::{RemoteRef, ROOT_ID};
use crate::session::Session;

/// Children of a folder, keyed by title.
pub type DirectoryListing = HashMap<String, String>;

impl<B: DriveBackend> Session<B> {
    /// List the immediate, non-trashed children of a folder.
    ///
    /// Only the first page the service returns is read. When two children
    /// share a title the one listed last wins.
    ///
    /// # Arguments
    /// * `directory_id` - Folder to list, or `None` for the root folder
    ///
    /// # Returns
    /// Map from child title to identifier
    pub async fn list_directory(&self, directory_id: Option<&str>) -> Result<DirectoryListing> {
        let directory_id = directory_id.unwrap_or(ROOT_ID);
        let page = self
            .backend()
            .list_files(&children_query(directory_id))
            .await?;

        if page.next_page_token.is_some() {
            warn!(
                directory = directory_id,
                items = page.items.len(),
                "listing truncated to the first page"
            );
        }

        let mut listing = DirectoryListing::with_capacity(page.items.len());
        for file in page.items {
            if file.is_trashed() {
                continue;
            }
            if let Some(previous) = listing.insert(file.title.clone(), file.id) {
                warn!(
                    directory = directory_id,
                    title = %file.title,
                    dropped = %previous,
                    "duplicate title in listing"
                );
            }
        }

        debug!(directory = directory_id, entries = listing.len(), "listed directory");
        Ok(listing)
    }

    /// Find the identifier of the file or folder at `path`.
    ///
    /// Absolute paths (leading separator) are walked from the root folder and
    /// ignore `starting_directory_id`. Relative paths are walked from
    /// `starting_directory_id`, or from the root folder if it is `None`.
    /// One listing is made per path segment.
    ///
    /// # Example
    /// ```no_run
    /// # use drivelib::Session;
    /// # async fn example() -> drivelib::Result<()> {
    /// let session = Session::new("ya29.a0Af...");
    /// let id = session.resolve_path("/datasets/2024/train.csv", None).await?;
    /// println!("{}", id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve_path(
        &self,
        path: &str,
        starting_directory_id: Option<&str>,
    ) -> Result<String> {
        let remote = split_remote_path(path)?;

        let mut current = if remote.absolute {
            ROOT_ID
        } else {
            starting_directory_id.unwrap_or(ROOT_ID)
        }
        .to_string();

        let Some((last, intermediate)) = remote.segments.split_last() else {
            return Ok(current);
        };

        for segment in intermediate {
            current = self.lookup(&current, segment).await?;
        }

        self.lookup(&current, last).await
    }

    /// Identifier for a `RemoteRef`, resolving paths from the root folder.
    pub(crate) async fn resolve_ref(&self, remote: &RemoteRef) -> Result<String> {
        match remote {
            RemoteRef::Id(id) => Ok(id.clone()),
            RemoteRef::Path(path) => self.resolve_path(path, None).await,
        }
    }

    async fn lookup(&self, directory_id: &str, name: &str) -> Result<String> {
        let mut listing = self.list_directory(Some(directory_id)).await?;
        listing.remove(name).ok_or_else(|| DriveError::NotFound {
            name: name.to_string(),
            parent_id: directory_id.to_string(),
        })
    }
}
