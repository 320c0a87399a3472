//! Filesystem adapter
//!
//! Reads store feeds from a local `json/` directory.

pub mod feed_source;

pub use feed_source::FileFeedSource;
