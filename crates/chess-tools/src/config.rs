//! Configuration for the chess.com API client.

use std::time::Duration;

/// Published-data root of the chess.com API.
pub const DEFAULT_BASE_URL: &str = "https://api.chess.com/pub/";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "chess-mcp-server/1.0";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for reaching the chess.com API.
#[derive(Debug, Clone)]
pub struct ChessApiConfig {
    /// Base URL that relative resource paths are appended to.
    /// Expected to end with a slash.
    pub base_url: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl ChessApiConfig {
    /// Create a configuration with the given base URL and default headers.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for a resource path such as `player/hikaru`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ChessApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChessApiConfig::default();
        assert_eq!(config.base_url, "https://api.chess.com/pub/");
        assert_eq!(config.user_agent, "chess-mcp-server/1.0");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_url_for() {
        let config = ChessApiConfig::default();
        assert_eq!(
            config.url_for("player/hikaru/stats"),
            "https://api.chess.com/pub/player/hikaru/stats"
        );
        assert_eq!(config.url_for("titled/"), "https://api.chess.com/pub/titled/");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ChessApiConfig::new("http://127.0.0.1:9000/")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.url_for("titled/GM"), "http://127.0.0.1:9000/titled/GM");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
