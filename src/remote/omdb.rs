//! OMDb provider implementation over plain HTTP GET.
//!
//! The API key travels as the `apikey` query parameter. It is held in a
//! [`SecretString`] and never appears in logs or `Debug` output; request URLs
//! are not logged for the same reason.

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::config::Config;
use crate::error::{MarqueeError, Result};

use super::{DetailRecord, MovieLookup, ResultPage, validate_id, validate_query, wire};

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// HTTP client for the OMDb API
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl OmdbClient {
    /// Create a client with explicit timeouts
    pub fn new(
        base_url: &str,
        api_key: &str,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| MarqueeError::Config(format!("invalid OMDb base URL '{base_url}': {e}")))?;

        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| MarqueeError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key: SecretString::from(api_key.to_string()),
        })
    }

    /// Create a client from configuration, requiring an API key
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key().ok_or_else(|| {
            MarqueeError::Config(
                "OMDb API key not configured. Set OMDB_API_KEY or run: marquee config set-key <key>"
                    .to_string(),
            )
        })?;

        Self::new(
            &config.base_url(),
            &api_key,
            config.request_timeout(),
            config.connect_timeout(),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue one GET with the given query parameters and return the body
    ///
    /// Non-success statuses still carry an OMDb envelope in most cases; its
    /// `Error` text is preferred over the bare status.
    async fn get(&self, params: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[("apikey", self.api_key.expose_secret())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, "OMDb request failed");
            return Err(match wire::service_error(&body) {
                Some(message) => MarqueeError::NotFound(message),
                None => MarqueeError::Transport(format!("HTTP {status}")),
            });
        }

        Ok(body)
    }
}

impl MovieLookup for OmdbClient {
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage> {
        let query = validate_query(query)?;
        if page == 0 {
            return Err(MarqueeError::Validation(
                "page numbers start at 1".to_string(),
            ));
        }

        tracing::debug!(query, page, "searching OMDb");
        let page_param = page.to_string();
        let body = self
            .get(&[("s", query), ("page", page_param.as_str())])
            .await
            .inspect_err(|e| tracing::warn!(query, page, "search failed: {e}"))?;

        let result = wire::decode_search(&body, page);
        if let Err(e) = &result {
            tracing::debug!(query, page, "search returned no page: {e}");
        }
        result
    }

    async fn fetch_by_id(&self, id: &str) -> Result<DetailRecord> {
        let id = validate_id(id)?;

        tracing::debug!(id, "fetching OMDb record");
        let body = self
            .get(&[("i", id)])
            .await
            .inspect_err(|e| tracing::warn!(id, "fetch failed: {e}"))?;

        wire::decode_detail(&body, id)
    }
}
