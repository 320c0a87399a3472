//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod fs;
pub mod http;
pub mod leaflet;

pub use fs::FileFeedSource;
pub use http::HttpFeedSource;
pub use leaflet::LeafletPage;
