use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use tracing::debug;

use crate::{
    cli::types::MatchId,
    error::{FantasyError, Result},
    opendota::{source::MatchSource, types::MatchRecord},
};

#[cfg(test)]
mod tests;

/// Base path for the OpenDota public API.
pub const OPENDOTA_BASE_URL: &str = "https://api.opendota.com/api";

/// HTTP client for `GET {base}/matches/{match_id}`.
#[derive(Debug, Clone)]
pub struct OpenDotaClient {
    client: Client,
    base_url: String,
}

impl Default for OpenDotaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenDotaClient {
    pub fn new() -> Self {
        Self::with_base_url(OPENDOTA_BASE_URL)
    }

    /// Point the client at another host, e.g. a mirror or a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn match_url(&self, match_id: MatchId) -> String {
        format!("{}/matches/{}", self.base_url, match_id)
    }

    fn headers() -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        h
    }
}

#[async_trait]
impl MatchSource for OpenDotaClient {
    async fn fetch_match(&self, match_id: MatchId) -> Result<MatchRecord> {
        let url = self.match_url(match_id);
        debug!(%url, "fetching match");

        let res = self
            .client
            .get(&url)
            .headers(Self::headers())
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FantasyError::MatchUnavailable {
                match_id: match_id.as_u64(),
                status: Some(status.as_u16()),
            });
        }

        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
