//! Domain ports (traits)
//!
//! Port traits define interfaces that the renderer requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed_source;
pub mod map_surface;

pub use feed_source::FeedSource;
pub use map_surface::MapSurface;
