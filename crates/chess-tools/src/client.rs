//! chess.com API client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ChessApiConfig;
use crate::error::FetchError;
use crate::http::{HttpSource, JsonSource};
use crate::models::{Country, PlayerProfile, PlayerStats, TitledRoster};

/// Client for the chess.com published-data API.
///
/// Every lookup is a single GET. There is no retry and no caching; any
/// failure comes back as a [`FetchError`].
#[derive(Clone)]
pub struct ChessClient {
    source: Arc<dyn JsonSource>,
    config: ChessApiConfig,
}

impl ChessClient {
    /// Create a client that talks HTTP using `config`.
    pub fn new(config: ChessApiConfig) -> Result<Self, FetchError> {
        let source = HttpSource::new(&config)?;
        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Create a client on top of an arbitrary [`JsonSource`].
    pub fn with_source(config: ChessApiConfig, source: Arc<dyn JsonSource>) -> Self {
        Self { source, config }
    }

    /// Fetch a resource relative to the configured base URL.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.fetch_url(&self.config.url_for(path)).await
    }

    /// Fetch an absolute URL, e.g. one embedded in another response.
    pub async fn fetch_url<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let value = self.source.get_json(url).await?;

        if is_empty(&value) {
            return Err(FetchError::Empty(url.to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }

    pub async fn player_profile(&self, handle: &str) -> Result<PlayerProfile, FetchError> {
        self.fetch(&format!("player/{}", handle)).await
    }

    pub async fn player_stats(&self, handle: &str) -> Result<PlayerStats, FetchError> {
        self.fetch(&format!("player/{}/stats", handle)).await
    }

    pub async fn titled_players(&self, code: &str) -> Result<TitledRoster, FetchError> {
        self.fetch(&format!("titled/{}", code)).await
    }

    /// Resolve the country URL found in a player profile.
    pub async fn country(&self, url: &str) -> Result<Country, FetchError> {
        self.fetch_url(url).await
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
