//! Domain entities
//!
//! Pure domain models for store feeds and what ends up on the map.

pub mod dataset;
pub mod marker;
pub mod store;

pub use dataset::{DatasetId, FeedMetadata, FetchedFeed};
pub use marker::{Marker, MarkerCluster, MarkerIcon};
pub use store::{CountryCode, LatLng, StoreRecord};
