//! Feed source port
//!
//! Abstracts where store feeds come from (static HTTP host, local directory).

use async_trait::async_trait;

use crate::domain::entities::{DatasetId, FetchedFeed};
use crate::error::FeedError;

/// Source of raw store feeds
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch `<dataset>.json` along with its last-modified stamp.
    ///
    /// Implementations must not decode the body; a body that is not JSON is
    /// still a successful fetch.
    async fn fetch(&self, dataset: &DatasetId) -> Result<FetchedFeed, FeedError>;
}
