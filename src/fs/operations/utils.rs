//! Shared helpers for path-based operations.

use std::path::{Component, Path};

use crate::error::{DriveError, Result};

/// A remote path split into the segments to walk.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RemotePath {
    /// Path started with a separator and resolves from the root folder.
    pub absolute: bool,
    pub segments: Vec<String>,
}

/// Split a remote path using the platform's path syntax.
///
/// Repeated and trailing separators are ignored, as are `.` components.
/// Parent references and drive prefixes have no meaning in Drive and are
/// rejected.
pub(crate) fn split_remote_path(path: &str) -> Result<RemotePath> {
    if path.is_empty() {
        return Err(DriveError::InvalidPath("empty path".to_string()));
    }

    let mut absolute = false;
    let mut segments = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::RootDir => absolute = true,
            Component::CurDir => {}
            Component::Normal(name) => segments.push(name.to_string_lossy().into_owned()),
            Component::ParentDir => {
                return Err(DriveError::InvalidPath(format!(
                    "parent references are not supported: {}",
                    path
                )));
            }
            Component::Prefix(_) => {
                return Err(DriveError::InvalidPath(format!(
                    "drive prefixes are not supported: {}",
                    path
                )));
            }
        }
    }

    Ok(RemotePath { absolute, segments })
}

/// Search query selecting the non-trashed children of a folder.
pub(crate) fn children_query(directory_id: &str) -> String {
    let escaped = directory_id.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}' in parents and trashed=false", escaped)
}

/// Remote title for a local file: its name with directories stripped.
pub(crate) fn local_file_title(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| DriveError::InvalidPath(format!("no file name in {}", path.display())))
}

/// Check that a remote title can be used as a single local file name.
pub(crate) fn local_file_name(title: &str) -> Result<&str> {
    let mut components = Path::new(title).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == title => Ok(title),
        _ => Err(DriveError::InvalidPath(format!(
            "remote title is not a usable file name: {:?}",
            title
        ))),
    }
}

/// Move a file, falling back to copy and delete when a rename is not possible
/// (for example across filesystems).
pub(crate) async fn move_file(from: &Path, to: &Path) -> Result<()> {
    match tokio::fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            if tokio::fs::copy(from, to).await.is_err() {
                return Err(rename_err.into());
            }
            tokio::fs::remove_file(from).await?;
            Ok(())
        }
    }
}
