//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::Notify;

use crate::domain::entities::{DatasetId, FetchedFeed, Marker, MarkerCluster};
use crate::domain::ports::{FeedSource, MapSurface};
use crate::error::FeedError;

// ============================================================================
// In-Memory Feed Source
// ============================================================================

#[derive(Clone)]
enum CannedResponse {
    Feed {
        body: String,
        last_modified: Option<String>,
    },
    Status(u16),
}

#[derive(Default)]
pub struct InMemoryFeedSource {
    responses: Arc<RwLock<HashMap<String, CannedResponse>>>,
    gates: Arc<RwLock<HashMap<String, Arc<Notify>>>>,
    calls: Arc<RwLock<HashMap<String, usize>>>,
}

impl InMemoryFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for a dataset
    pub fn with_feed(self, dataset: &str, body: &str, last_modified: Option<&str>) -> Self {
        self.responses.write().unwrap().insert(
            dataset.to_string(),
            CannedResponse::Feed {
                body: body.to_string(),
                last_modified: last_modified.map(str::to_string),
            },
        );
        self
    }

    /// Fail a dataset with an HTTP status
    pub fn with_status(self, dataset: &str, status: u16) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(dataset.to_string(), CannedResponse::Status(status));
        self
    }

    /// Hold fetches of a dataset until the gate is notified
    pub fn with_gate(self, dataset: &str, gate: Arc<Notify>) -> Self {
        self.gates
            .write()
            .unwrap()
            .insert(dataset.to_string(), gate);
        self
    }

    /// Number of fetches started for a dataset
    pub fn fetch_count(&self, dataset: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .get(dataset)
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait]
impl FeedSource for InMemoryFeedSource {
    async fn fetch(&self, dataset: &DatasetId) -> Result<FetchedFeed, FeedError> {
        *self
            .calls
            .write()
            .unwrap()
            .entry(dataset.to_string())
            .or_default() += 1;

        let gate = self.gates.read().unwrap().get(dataset.as_str()).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let response = self.responses.read().unwrap().get(dataset.as_str()).cloned();
        match response {
            Some(CannedResponse::Feed {
                body,
                last_modified,
            }) => Ok(FetchedFeed {
                dataset: dataset.clone(),
                last_modified,
                body,
            }),
            Some(CannedResponse::Status(status)) => Err(FeedError::Status {
                dataset: dataset.to_string(),
                status,
            }),
            None => Err(FeedError::Status {
                dataset: dataset.to_string(),
                status: 404,
            }),
        }
    }
}

// ============================================================================
// In-Memory Map Surface
// ============================================================================

#[derive(Default)]
struct SurfaceState {
    clusters: Vec<MarkerCluster>,
    status: Option<String>,
    clears: usize,
}

#[derive(Clone, Default)]
pub struct InMemoryMapSurface {
    state: Arc<RwLock<SurfaceState>>,
}

impl InMemoryMapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every marker currently attached, across clusters
    pub fn markers(&self) -> Vec<Marker> {
        self.state
            .read()
            .unwrap()
            .clusters
            .iter()
            .flat_map(|c| c.markers.iter().cloned())
            .collect()
    }

    pub fn cluster_count(&self) -> usize {
        self.state.read().unwrap().clusters.len()
    }

    pub fn clear_count(&self) -> usize {
        self.state.read().unwrap().clears
    }

    pub fn status(&self) -> Option<String> {
        self.state.read().unwrap().status.clone()
    }
}

impl MapSurface for InMemoryMapSurface {
    fn clear_markers(&mut self) {
        let mut state = self.state.write().unwrap();
        state.clusters.clear();
        state.clears += 1;
    }

    fn attach_cluster(&mut self, cluster: MarkerCluster) {
        self.state.write().unwrap().clusters.push(cluster);
    }

    fn set_status(&mut self, html: &str) {
        self.state.write().unwrap().status = Some(html.to_string());
    }
}
