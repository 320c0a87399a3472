//! HTTP feed source implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::LAST_MODIFIED;
use reqwest::Client;
use urlencoding::encode;

use crate::domain::entities::{DatasetId, FetchedFeed};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Fetches `{base_url}/{dataset}.json?{revision}` over HTTP
pub struct HttpFeedSource {
    http: Client,
    base_url: String,
    revision: String,
}

impl HttpFeedSource {
    pub fn new(base_url: &str, revision: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            revision: revision.to_string(),
        })
    }

    fn feed_url(&self, dataset: &DatasetId) -> String {
        format!(
            "{}/{}.json?{}",
            self.base_url,
            encode(dataset.as_str()),
            encode(&self.revision)
        )
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, dataset: &DatasetId) -> Result<FetchedFeed, FeedError> {
        let url = self.feed_url(dataset);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| FeedError::FetchFailed {
                dataset: dataset.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                dataset: dataset.to_string(),
                status: status.as_u16(),
            });
        }

        let last_modified = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .text()
            .await
            .map_err(|source| FeedError::FetchFailed {
                dataset: dataset.to_string(),
                source,
            })?;

        Ok(FetchedFeed {
            dataset: dataset.clone(),
            last_modified,
            body,
        })
    }
}
