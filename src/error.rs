//! Error types for the drivelib library.

use thiserror::Error;

/// Main error type for drivelib operations.
#[derive(Error, Debug)]
pub enum DriveError {
    /// Mutually exclusive arguments were both given, or neither was.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Path could not be split into remote segments.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A path segment is not a child of the directory it was looked up in.
    #[error("'{name}' not found in directory {parent_id}")]
    NotFound { name: String, parent_id: String },

    /// HTTP request failed with status code and no readable error body.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Local filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unexpected response from server.
    #[error("Invalid response from server")]
    InvalidResponse,

    /// Drive API returned an error envelope.
    #[error("API error: {code} ({reason}) - {message}")]
    ApiError {
        code: u16,
        reason: String,
        message: String,
    },

    /// Custom error message.
    #[error("{0}")]
    Custom(String),
}

impl DriveError {
    /// Check whether this is a lookup failure from path resolution.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DriveError::NotFound { .. })
    }
}

/// Result type alias for drivelib operations.
pub type Result<T> = std::result::Result<T, DriveError>;
