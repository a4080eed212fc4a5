//! # drivelib
//!
//! Path-based file transfer helpers for Google Drive.
//!
//! Drive addresses every file and folder by an opaque identifier and can only
//! list the children of a folder by identifier. This crate walks those
//! listings to turn paths like `/datasets/2024/train.csv` into identifiers,
//! and builds uploads and downloads on top of that.
//!
//! ## Features
//!
//! - **Listing**: `list_directory` maps child titles to identifiers.
//! - **Path resolution**: `resolve_path` walks absolute or relative paths
//!   one folder at a time.
//! - **Uploads**: into a folder given by path or identifier, or into a team
//!   drive.
//! - **Downloads**: by path or identifier into a working directory, with an
//!   optional move to a save directory.
//!
//! Authentication is not handled here. Obtain an OAuth access token elsewhere
//! and build a [`Session`] from it.
//!
//! Listings read a single page of results and keep the last identifier seen
//! for a repeated title. Nothing is cached: every resolution lists the
//! folders it walks through again.
//!
//! ## Example
//!
//! ```no_run
//! use drivelib::{RemoteRef, Session};
//! use std::path::Path;
//!
//! # async fn example() -> drivelib::Result<()> {
//! let session = Session::new("ya29.a0Af...");
//!
//! // List the root folder
//! for (title, id) in session.list_directory(None).await? {
//!     println!("{} {}", id, title);
//! }
//!
//! // Upload next to the other results
//! let file = session
//!     .upload("metrics.json", RemoteRef::path("/experiments/run-7"))
//!     .await?;
//!
//! // Fetch it back into ./restored
//! session
//!     .download(RemoteRef::id(file.id), Some(Path::new("restored")))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod fs;
pub mod http;
pub mod session;

// Re-export commonly used types
pub use api::{ApiClient, DriveBackend, InsertOptions};
pub use error::{DriveError, Result};
pub use fs::{DirectoryListing, DriveFile, ParentReference, RemoteRef, ROOT_ID};
pub use session::Session;
