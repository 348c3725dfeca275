//! HTTP client for the image bed API
//!
//! Wraps a single `reqwest::Client` built from a [`ClientConfig`]:
//! - Fixed base URL and request timeout
//! - Optional cookie jar for credential forwarding, seeded from the config
//! - Non-2xx responses and timeouts classified into [`Error`] variants
//!
//! Every call is one attempt; nothing is retried.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use reqwest::cookie::Jar;
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// HTTP client bound to one base URL
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Build a client from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent);

        if config.with_credentials {
            let base = Url::parse(&config.base_url)?;
            let jar = Jar::default();
            for cookie in &config.cookies {
                jar.add_cookie_str(cookie, &base);
            }
            builder = builder.cookie_provider(Arc::new(jar));
        }

        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request(Method::GET, path, None).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.request(Method::DELETE, path, None).await
    }

    /// Make a POST request with a multipart form body
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Response> {
        self.request(Method::POST, path, Some(form)).await
    }

    /// Send one request and fail on anything but a 2xx status
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        form: Option<Form>,
    ) -> Result<Response> {
        let full_url = self.build_url(path);
        debug!("{} {}", method, full_url);

        let mut req = self.client.request(method.clone(), &full_url);
        if let Some(form) = form {
            // reqwest sets `multipart/form-data; boundary=...` itself
            req = req.multipart(form);
        }

        let response = req.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} {} failed with {}", method, full_url, status.as_u16());
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Request succeeded: {} {} ({})", method, full_url, status);
        Ok(response)
    }

    /// Read a response's status code and whole body as text
    pub async fn read_text(&self, response: Response) -> Result<(u16, String)> {
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| self.classify(e))?;
        Ok((status, text))
    }

    /// Build full URL from path
    ///
    /// The path is appended verbatim; no percent-encoding is applied here.
    pub fn build_url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn classify(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            return Error::Timeout {
                timeout_ms: self.config.timeout_ms,
            };
        }
        Error::Http(e)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("timeout_ms", &self.config.timeout_ms)
            .field("with_credentials", &self.config.with_credentials)
            .finish_non_exhaustive()
    }
}
