//! Drive v2 REST client.

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::api::backend::{DriveBackend, InsertOptions};
use crate::error::{DriveError, Result};
use crate::fs::{DriveFile, FileList, FileMetadata};
use crate::http::HttpClient;

/// Base URL for metadata and content requests
const API_URL: &str = "https://www.googleapis.com/drive/v2";

/// Base URL for media uploads
const UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v2";

/// Drive API client.
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    api_url: String,
    upload_url: String,
}

impl ApiClient {
    /// Create a new API client authenticated with an OAuth access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(access_token),
            api_url: API_URL.to_string(),
            upload_url: UPLOAD_URL.to_string(),
        }
    }

    /// Create a new API client with a proxy.
    ///
    /// # Arguments
    /// * `access_token` - OAuth access token
    /// * `proxy` - Proxy URL (e.g., "http://proxy:8080" or "socks5://proxy:1080")
    pub fn with_proxy(access_token: impl Into<String>, proxy: &str) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_proxy(access_token, proxy)?,
            api_url: API_URL.to_string(),
            upload_url: UPLOAD_URL.to_string(),
        })
    }

    /// Point the client at different API and upload endpoints.
    pub fn with_base_urls(mut self, api_url: &str, upload_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self.upload_url = upload_url.trim_end_matches('/').to_string();
        self
    }

    fn list_url(&self, query: &str) -> Result<Url> {
        Url::parse_with_params(&format!("{}/files", self.api_url), &[("q", query)])
            .map_err(|e| DriveError::Custom(format!("Invalid API URL: {}", e)))
    }

    fn file_url(&self, file_id: &str) -> String {
        format!("{}/files/{}?supportsTeamDrives=true", self.api_url, file_id)
    }

    fn content_url(&self, file_id: &str) -> String {
        format!(
            "{}/files/{}?alt=media&supportsTeamDrives=true",
            self.api_url, file_id
        )
    }

    fn insert_url(&self, options: InsertOptions) -> String {
        let mut url = format!("{}/files?uploadType=multipart", self.upload_url);
        if options.supports_team_drives {
            url.push_str("&supportsTeamDrives=true");
        }
        url
    }
}

#[async_trait]
impl DriveBackend for ApiClient {
    async fn list_files(&self, query: &str) -> Result<FileList> {
        let url = self.list_url(query)?;
        debug!(q = query, "api request files.list");
        let text = self.http.get_text(url.as_str()).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_file(&self, file_id: &str) -> Result<DriveFile> {
        debug!(id = file_id, "api request files.get");
        let text = self.http.get_text(&self.file_url(file_id)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn insert_file(
        &self,
        metadata: &FileMetadata,
        content: Vec<u8>,
        options: InsertOptions,
    ) -> Result<DriveFile> {
        let boundary = multipart_boundary();
        let body = multipart_related_body(&boundary, metadata, &content)?;
        let content_type = format!("multipart/related; boundary={}", boundary);

        debug!(
            title = %metadata.title,
            bytes = content.len(),
            team = options.supports_team_drives,
            "api request files.insert"
        );
        let text = self
            .http
            .post(&self.insert_url(options), &content_type, body)
            .await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_content(&self, file_id: &str) -> Result<Vec<u8>> {
        debug!(id = file_id, "api request files.get alt=media");
        self.http.get_bytes(&self.content_url(file_id)).await
    }
}

fn multipart_boundary() -> String {
    format!("drivelib_{:016x}", rand::random::<u64>())
}

/// Build a `multipart/related` body: JSON metadata part, then the content.
fn multipart_related_body(
    boundary: &str,
    metadata: &FileMetadata,
    content: &[u8],
) -> Result<Vec<u8>> {
    let metadata_json = serde_json::to_vec(metadata)?;

    let mut body = Vec::with_capacity(metadata_json.len() + content.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(b"Content-Type: application/json; charset=UTF-8\r\n\r\n");
    body.extend_from_slice(&metadata_json);
    body.extend_from_slice(format!("\r\n--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Ok(body)
}
