//! Remote file model and path-based operations.

pub mod node;
mod operations;
mod remote_ref;

pub use node::{
    DriveFile, FileList, FileMetadata, Labels, ParentReference, FILE_LINK_KIND,
    FOLDER_MIME_TYPE, ROOT_ID,
};
pub use operations::DirectoryListing;
pub use remote_ref::RemoteRef;
