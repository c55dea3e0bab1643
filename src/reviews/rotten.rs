use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use tracing::debug;

use super::parse::parse_search_page;
use super::{ReviewError, ReviewSource};
use crate::config::ReviewsConfig;
use crate::search::ReviewMetadata;

/// Scrapes the Rotten Tomatoes search page.
pub struct RottenTomatoes {
    http: reqwest::Client,
    base_url: String,
}

impl RottenTomatoes {
    pub fn new(config: &ReviewsConfig) -> Result<Self, ReviewError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| ReviewError::InvalidUserAgent)?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("text/html,application/xhtml+xml"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self, title: &str) -> String {
        format!("{}/search?search={}", self.base_url, urlencoding::encode(title))
    }

    async fn fetch(&self, title: &str) -> Result<Option<ReviewMetadata>, ReviewError> {
        let response = self.http.get(self.search_url(title)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(parse_search_page(&body, title, &self.base_url))
    }
}

#[async_trait]
impl ReviewSource for RottenTomatoes {
    async fn lookup(&self, title: &str) -> Option<ReviewMetadata> {
        match self.fetch(title).await {
            Ok(Some(meta)) => Some(meta),
            Ok(None) => {
                debug!(title = %title, "No review match on search page");
                None
            }
            Err(e) => {
                debug!(title = %title, error = %e, "Review lookup failed");
                None
            }
        }
    }
}
