//! Store feed renderer
//!
//! Loads a store feed and swaps it onto the map surface. Each call to
//! `select_dataset` takes a new generation; a load that finishes after a
//! newer one has started is dropped instead of committed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, TimeZone};
use tokio::sync::Mutex;

use crate::app::PopupPolicy;
use crate::domain::entities::{
    DatasetId, FeedMetadata, Marker, MarkerCluster, MarkerIcon, StoreRecord,
};
use crate::domain::ports::{FeedSource, MapSurface};
use crate::error::{AppError, FeedError};
use crate::popup::{escape_html, render_popup, render_status};

/// Result of a dataset selection
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The dataset is now on the map
    Rendered {
        dataset: DatasetId,
        markers: usize,
        /// Records dropped as malformed
        skipped: usize,
        metadata: FeedMetadata,
    },
    /// A newer selection started while this one was loading
    Superseded { dataset: DatasetId },
}

/// Decoded feed contents
#[derive(Debug)]
pub struct DecodedFeed {
    pub records: Vec<StoreRecord>,
    pub skipped: usize,
}

/// Decode a feed body, skipping records that cannot be placed on the map
pub fn decode_feed(dataset: &DatasetId, body: &str) -> Result<DecodedFeed, FeedError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|source| FeedError::ParseFailed {
            dataset: dataset.to_string(),
            source,
        })?;

    let serde_json::Value::Array(items) = value else {
        return Err(FeedError::NotAnArray {
            dataset: dataset.to_string(),
        });
    };

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for (index, item) in items.into_iter().enumerate() {
        match StoreRecord::from_value(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(%dataset, index, "Skipping malformed store record: {}", e);
                skipped += 1;
            }
        }
    }

    Ok(DecodedFeed { records, skipped })
}

/// Renders store feeds onto an owned map surface
pub struct StoreFeedRenderer<F, M, Tz = Local>
where
    F: FeedSource,
    M: MapSurface,
    Tz: TimeZone,
{
    feed: Arc<F>,
    surface: Mutex<M>,
    generation: AtomicU64,
    policy: PopupPolicy,
    icon: MarkerIcon,
    tz: Tz,
}

impl<F, M> StoreFeedRenderer<F, M, Local>
where
    F: FeedSource,
    M: MapSurface,
{
    /// Create a renderer labelling timestamps in the viewer's local zone
    pub fn new(feed: Arc<F>, surface: M, policy: PopupPolicy) -> Self {
        Self {
            feed,
            surface: Mutex::new(surface),
            generation: AtomicU64::new(0),
            policy,
            icon: MarkerIcon::default(),
            tz: Local,
        }
    }
}

impl<F, M, Tz> StoreFeedRenderer<F, M, Tz>
where
    F: FeedSource,
    M: MapSurface,
    Tz: TimeZone + Send + Sync,
    Tz::Offset: std::fmt::Display,
{
    /// Label timestamps in a different zone
    pub fn with_timezone<Tz2>(self, tz: Tz2) -> StoreFeedRenderer<F, M, Tz2>
    where
        Tz2: TimeZone,
    {
        StoreFeedRenderer {
            feed: self.feed,
            surface: self.surface,
            generation: self.generation,
            policy: self.policy,
            icon: self.icon,
            tz,
        }
    }

    /// Load a dataset and replace whatever the map currently shows.
    ///
    /// On fetch or parse failure the previous markers stay and the status
    /// label reports the dataset as unavailable.
    pub async fn select_dataset(&self, dataset: &str) -> Result<RenderOutcome, AppError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let dataset = match DatasetId::new(dataset) {
            Ok(id) => id,
            Err(e) => {
                let err = AppError::from(e);
                self.report_failure(generation, dataset, &err).await;
                return Err(err);
            }
        };

        tracing::info!(%dataset, generation, "Selecting dataset");

        let (cluster, metadata, skipped) = match self.load(&dataset).await {
            Ok(loaded) => loaded,
            Err(e) => {
                let err = AppError::from(e);
                tracing::error!(%dataset, generation, "Failed to load dataset: {}", err);
                self.report_failure(generation, dataset.as_str(), &err).await;
                return Err(err);
            }
        };

        let mut surface = self.surface.lock().await;
        if !self.is_current(generation) {
            tracing::debug!(%dataset, generation, "Dropping superseded dataset load");
            return Ok(RenderOutcome::Superseded { dataset });
        }

        let markers = cluster.len();
        surface.clear_markers();
        surface.set_status(&render_status(&metadata, &self.tz));
        surface.attach_cluster(cluster);

        tracing::info!(%dataset, markers, skipped, "Dataset rendered");

        Ok(RenderOutcome::Rendered {
            dataset,
            markers,
            skipped,
            metadata,
        })
    }

    /// Hand back the map surface once rendering is done
    pub fn into_surface(self) -> M {
        self.surface.into_inner()
    }

    async fn load(
        &self,
        dataset: &DatasetId,
    ) -> Result<(MarkerCluster, FeedMetadata, usize), FeedError> {
        let fetched = self.feed.fetch(dataset).await?;
        tracing::debug!(dataset = %fetched.dataset, bytes = fetched.body.len(), "Fetched feed");
        let metadata = FeedMetadata::from_header(fetched.last_modified.as_deref());
        let decoded = decode_feed(dataset, &fetched.body)?;

        let mut cluster = MarkerCluster::new(self.icon.clone());
        for record in &decoded.records {
            cluster.add(self.build_marker(record));
        }

        if cluster.is_empty() {
            tracing::warn!(%dataset, "Feed contains no placeable stores");
        }

        Ok((cluster, metadata, decoded.skipped))
    }

    fn build_marker(&self, record: &StoreRecord) -> Marker {
        Marker {
            position: record.location,
            title: record.name.clone(),
            popup_html: render_popup(record, &self.policy),
        }
    }

    async fn report_failure(&self, generation: u64, dataset: &str, err: &AppError) {
        let mut surface = self.surface.lock().await;
        if self.is_current(generation) {
            surface.set_status(&escape_html(&err.user_message(dataset)));
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
