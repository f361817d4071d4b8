//! Transport seam for fetching JSON documents.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::ChessApiConfig;
use crate::error::FetchError;

/// Something that can GET a URL and hand back its JSON body.
///
/// [`HttpSource`] is the real implementation; tests swap in scripted sources.
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Fetch `url` and parse the body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// [`JsonSource`] backed by a `reqwest` client with the configured headers
/// and timeout.
#[derive(Clone)]
pub struct HttpSource {
    http: Client,
}

impl HttpSource {
    /// Build the HTTP client from `config`.
    pub fn new(config: &ChessApiConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http })
    }
}

#[async_trait]
impl JsonSource for HttpSource {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
