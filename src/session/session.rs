//! Session construction and configuration.
//!
//! Authentication happens outside this crate: callers obtain an OAuth access
//! token however they like and hand it to [`Session::new`].

use std::path::{Path, PathBuf};

use crate::api::{ApiClient, DriveBackend};
use crate::error::Result;

/// Authenticated handle to Drive.
///
/// Every path helper is a method on `Session`. The session owns the backend
/// used for remote calls and the local working directory that downloads are
/// written to before any relocation.
#[derive(Debug)]
pub struct Session<B = ApiClient> {
    backend: B,
    working_dir: PathBuf,
}

impl Session<ApiClient> {
    /// Create a session from an OAuth access token.
    ///
    /// # Example
    /// ```no_run
    /// use drivelib::Session;
    ///
    /// let session = Session::new("ya29.a0Af...");
    /// ```
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::from_backend(ApiClient::new(access_token))
    }

    /// Create a session that routes requests through a proxy.
    ///
    /// # Arguments
    /// * `access_token` - OAuth access token
    /// * `proxy` - Proxy URL (e.g., "http://proxy:8080" or "socks5://proxy:1080")
    pub fn with_proxy(access_token: impl Into<String>, proxy: &str) -> Result<Self> {
        Ok(Self::from_backend(ApiClient::with_proxy(access_token, proxy)?))
    }
}

impl<B: DriveBackend> Session<B> {
    /// Create a session around any backend.
    pub fn from_backend(backend: B) -> Self {
        Self {
            backend,
            working_dir: PathBuf::from("."),
        }
    }

    /// Set the directory downloads land in. Defaults to the process's
    /// current directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Directory downloads land in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Backend used for remote calls.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_working_dir() {
        let session = Session::new("token");
        assert_eq!(session.working_dir(), Path::new("."));
    }

    #[test]
    fn test_custom_working_dir() {
        let session = Session::new("token").with_working_dir("/tmp/notebook");
        assert_eq!(session.working_dir(), Path::new("/tmp/notebook"));
    }

    #[test]
    fn test_proxy_session() {
        assert!(Session::with_proxy("token", "http://127.0.0.1:8080").is_ok());
        assert!(Session::with_proxy("token", ":::::::").is_err());
    }
}
