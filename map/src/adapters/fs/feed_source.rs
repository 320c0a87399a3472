//! Local directory feed source implementation

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{DatasetId, FetchedFeed};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Reads `{dir}/{dataset}.json`; the file mtime stands in for `Last-Modified`
pub struct FileFeedSource {
    dir: PathBuf,
}

impl FileFeedSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    async fn fetch(&self, dataset: &DatasetId) -> Result<FetchedFeed, FeedError> {
        let path = self.dir.join(dataset.file_name());
        tracing::debug!("Reading {}", path.display());

        let io_err = |source| FeedError::Io {
            dataset: dataset.to_string(),
            source,
        };

        let body = tokio::fs::read_to_string(&path).await.map_err(io_err)?;
        let last_modified = tokio::fs::metadata(&path)
            .await
            .and_then(|m| m.modified())
            .ok()
            .map(|t| DateTime::<Utc>::from(t).to_rfc2822());

        Ok(FetchedFeed {
            dataset: dataset.clone(),
            last_modified,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FeedMetadata;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "storemap-fs-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn reads_feed_and_mtime() {
        let dir = scratch_dir("reads");
        std::fs::write(dir.join("maimai.json"), "[]").unwrap();

        let fetched = FileFeedSource::new(&dir)
            .fetch(&DatasetId::new("maimai").unwrap())
            .await
            .unwrap();

        assert_eq!(fetched.body, "[]");
        let meta = FeedMetadata::from_header(fetched.last_modified.as_deref());
        assert!(meta.last_modified.is_some());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = scratch_dir("missing");

        let result = FileFeedSource::new(&dir)
            .fetch(&DatasetId::new("nope").unwrap())
            .await;

        assert!(matches!(result, Err(FeedError::Io { .. })));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
