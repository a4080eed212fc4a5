//! HTTP client wrapper for Drive API requests.

use crate::api::error::decode_error;
use crate::error::{DriveError, Result};
use reqwest::{Client, RequestBuilder, Response};

/// HTTP client for making authenticated requests to Google servers.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    access_token: String,
}

impl HttpClient {
    /// Create a new HTTP client that sends `access_token` as a bearer token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            access_token: access_token.into(),
        }
    }

    /// Create a new HTTP client with a proxy.
    pub fn with_proxy(access_token: impl Into<String>, proxy: &str) -> Result<Self> {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| DriveError::Custom(format!("Invalid proxy: {}", e)))?;

        let client = Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| DriveError::Custom(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            access_token: access_token.into(),
        })
    }

    /// Make a GET request and return the body as text.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.send(self.client.get(url)).await?;
        Ok(response.text().await?)
    }

    /// Make a GET request and return the raw body.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.send(self.client.get(url)).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Make a POST request with a raw body.
    ///
    /// # Arguments
    /// * `url` - URL to post to
    /// * `content_type` - Value of the `Content-Type` header
    /// * `body` - Request body
    ///
    /// # Returns
    /// Response body as string
    pub async fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<String> {
        let request = self
            .client
            .post(url)
            .header("Content-Type", content_type)
            .body(body);
        let response = self.send(request).await?;
        Ok(response.text().await?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.bearer_auth(&self.access_token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(decode_error(status.as_u16(), &body));
        }

        Ok(response)
    }
}
