//! HTTP capability used by the API facade
use crate::config::HttpConfig;
use crate::errors::{ApiError, ApiResult};
use async_trait::async_trait;
use reqwest::Client;

/// Raw upstream response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Turn a non-2xx response into an error.
    pub fn error_for_status(self, url: &str) -> ApiResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::UnexpectedStatus {
                url: url.to_string(),
                status: self.status,
            })
        }
    }
}

/// Anything that can perform a GET request.
///
/// Implementations must be safe to share across tasks; the facade holds one
/// behind an `Arc` and never serializes calls to it.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get(&self, url: &str) -> ApiResult<HttpResponse>;
}

/// HTTP client wrapper with common configuration
#[derive(Clone, Debug)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(config: &HttpConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> ApiResult<HttpResponse> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        tracing::trace!("{} -> {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
