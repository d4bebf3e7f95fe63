use crate::config::FetchConfig;
use crate::error::{Result, ScraperError};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP collaborator shared by all sources. Built once from an immutable
/// [`FetchConfig`]; every request carries the configured User-Agent.
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Fetches a document body. Non-2xx statuses are errors; callers above
    /// the source boundary never see them.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!("HTTP GET {}", url);
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Api {
                message: format!("request to {url} failed with status {status}"),
            });
        }
        Ok(response.text().await?)
    }
}
