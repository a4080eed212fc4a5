//! Remote file records as returned by the Drive v2 API.

use serde::{Deserialize, Serialize};

/// Identifier the service accepts as an alias for the user's root folder.
pub const ROOT_ID: &str = "root";

/// MIME type Drive assigns to folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// `kind` of a parent reference that links into a team drive.
pub const FILE_LINK_KIND: &str = "drive#fileLink";

/// Reference from a file to one of its parent folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentReference {
    /// Resource kind, set for team-drive links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Identifier of the parent folder
    pub id: String,
    /// Team drive the parent lives in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_drive_id: Option<String>,
}

impl ParentReference {
    /// Plain parent in the user's own hierarchy.
    pub fn folder(id: impl Into<String>) -> Self {
        Self {
            kind: None,
            id: id.into(),
            team_drive_id: None,
        }
    }

    /// Parent inside a team drive.
    ///
    /// `target_id` is the folder inside the team drive; pass the team drive
    /// identifier itself to target its top level.
    pub fn team_link(team_drive_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            kind: Some(FILE_LINK_KIND.to_string()),
            id: target_id.into(),
            team_drive_id: Some(team_drive_id.into()),
        }
    }
}

/// Labels attached to a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default)]
    pub trashed: bool,
}

/// A file or folder in Drive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// Opaque identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub title: String,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Parent folders
    #[serde(default)]
    pub parents: Vec<ParentReference>,
    /// Size in bytes, reported as a decimal string by the API
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub labels: Labels,
}

impl DriveFile {
    /// Check if this record is a folder.
    pub fn is_folder(&self) -> bool {
        self.mime_type.as_deref() == Some(FOLDER_MIME_TYPE)
    }

    /// Check if this record is in the trash.
    pub fn is_trashed(&self) -> bool {
        self.labels.trashed
    }

    /// Size in bytes, if the service reported one.
    pub fn size(&self) -> Option<u64> {
        self.file_size.as_deref().and_then(|s| s.parse().ok())
    }
}

/// One page of a `files.list` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    #[serde(default)]
    pub items: Vec<DriveFile>,
    /// Present when more results exist beyond this page
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Metadata sent when creating a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub title: String,
    pub parents: Vec<ParentReference>,
}
