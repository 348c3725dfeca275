//! Image bed API client

use super::file::UploadFile;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::{text_value, ApiResponse};
use async_trait::async_trait;
use tracing::debug;

/// Endpoint returning an upload token
pub const UPLOAD_TOKEN_PATH: &str = "/qiniu/upload-token";
/// Endpoint accepting multipart uploads
pub const UPLOAD_PATH: &str = "/qiniu/upload";
/// Endpoint returning the serving domain
pub const DOMAIN_PATH: &str = "/qiniu/domain";
/// Prefix under which files are deleted by key
pub const DELETE_PREFIX: &str = "/qiniu/";

/// Operations offered by a remote file host
#[async_trait]
pub trait FileHost: Send + Sync {
    /// Obtain an upload token
    async fn request_upload_token(&self) -> Result<String>;

    /// Upload a file
    async fn upload_file(&self, file: UploadFile) -> Result<ApiResponse>;

    /// Delete a stored file by key
    async fn delete_file(&self, key: &str) -> Result<ApiResponse>;

    /// Obtain the domain stored files are served from
    async fn fetch_domain(&self) -> Result<String>;
}

/// Client for the Qiniu image bed endpoints
///
/// Cloning is cheap and clones share the connection pool and cookie jar.
#[derive(Debug, Clone)]
pub struct QiniuClient {
    http: HttpClient,
}

impl QiniuClient {
    /// Create a client from a configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let response = self.http.get(path).await?;
        let (_, text) = self.http.read_text(response).await?;
        Ok(text_value(&text))
    }
}

#[async_trait]
impl FileHost for QiniuClient {
    async fn request_upload_token(&self) -> Result<String> {
        self.get_text(UPLOAD_TOKEN_PATH).await
    }

    async fn upload_file(&self, file: UploadFile) -> Result<ApiResponse> {
        debug!("Uploading {} ({} bytes)", file.name(), file.len());
        let form = file.into_form()?;
        let response = self.http.post_multipart(UPLOAD_PATH, form).await?;
        let (status, text) = self.http.read_text(response).await?;
        Ok(ApiResponse::from_text(status, &text))
    }

    async fn delete_file(&self, key: &str) -> Result<ApiResponse> {
        if key.is_empty() {
            return Err(Error::invalid_key("key must not be empty"));
        }
        let path = format!("{DELETE_PREFIX}{key}");
        let response = self.http.delete(&path).await?;
        let (status, text) = self.http.read_text(response).await?;
        Ok(ApiResponse::from_text(status, &text))
    }

    async fn fetch_domain(&self) -> Result<String> {
        self.get_text(DOMAIN_PATH).await
    }
}
