//! Domain layer
//!
//! Contains pure store-map logic with no external dependencies.
//! - `entities`: Store records, datasets and markers
//! - `ports`: Trait definitions for the feed source and the map widget

pub mod entities;
pub mod ports;
