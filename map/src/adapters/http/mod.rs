//! HTTP adapter
//!
//! Fetches store feeds from a static file host.

pub mod feed_source;

pub use feed_source::HttpFeedSource;
