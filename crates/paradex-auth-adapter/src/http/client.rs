/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::http::{ParadexError, Result};

/// Base URL for the Paradex testnet API
const API_BASE_URL: &str = "https://api.testnet.paradex.trade/v1";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Main HTTP client for the Paradex REST API
#[derive(Debug, Clone)]
pub struct ParadexClient {
    http_client: Client,
    base_url: String,
}

impl ParadexClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, API_BASE_URL)
    }

    /// Create a new client against an explicit base URL (used by tests)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        // Validate here so endpoint joins can't produce surprise URLs later.
        let base_url = base_url.trim_end_matches('/');
        Url::parse(base_url)?;

        Ok(Self {
            http_client,
            base_url: base_url.to_string(),
        })
    }

    /// Build full URL for an API endpoint
    ///
    /// The base URL carries a path segment (`/v1`), so endpoints are appended
    /// rather than joined to keep it.
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, endpoint))?)
    }

    /// Build a request builder for an API endpoint
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode a JSON response body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ParadexError::from_response(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ParadexError::InvalidResponse(format!("{e} in body: {body}")))
    }

    /// Send a request where only the status matters (response body may be empty)
    pub(crate) async fn send_ok(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ParadexError::from_response(status, &body));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_sets_timeouts() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_api_url_keeps_base_path() {
        let client = ParadexClient::new().unwrap();
        let url = client.api_url("/system/config").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.testnet.paradex.trade/v1/system/config"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_normalized() {
        let client = ParadexClient::with_config_and_base_url(
            ClientConfig::default(),
            "http://127.0.0.1:9999/",
        )
        .unwrap();
        let url = client.api_url("/auth").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9999/auth");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ParadexClient::with_config_and_base_url(ClientConfig::default(), "not a url");
        assert!(matches!(result, Err(ParadexError::UrlParse(_))));
    }
}
