//! Drive API client and types.

pub mod backend;
pub mod client;
pub mod error;

pub use backend::{DriveBackend, InsertOptions};
pub use client::ApiClient;
pub use error::ApiErrorCode;
