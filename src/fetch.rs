//! Single-page HTTP fetch

use crate::config::AnalyzerConfig;
use crate::error::FetchError;
use std::time::{Duration, Instant};
use url::Url;

/// HTTP settings for the page request
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl From<&AnalyzerConfig> for FetchConfig {
    fn from(config: &AnalyzerConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
        }
    }
}

/// Fetches the page at `url` and returns its body as text.
///
/// Network failures and non-success status codes are reported as
/// [`FetchError`]; nothing is retried.
pub async fn fetch_html(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let parsed = Url::parse(url.trim()).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()?;

    ::log::info!("Fetching {}", parsed);
    let start = Instant::now();

    let response = client.get(parsed).send().await?.error_for_status()?;
    let status = response.status();
    let body = response.text().await?;

    ::log::info!(
        "Fetched {} bytes (status {}) in {:.2}s",
        body.len(),
        status.as_u16(),
        start.elapsed().as_secs_f64()
    );

    Ok(body)
}
