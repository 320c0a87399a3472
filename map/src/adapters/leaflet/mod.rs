//! Leaflet adapter
//!
//! A map surface that renders to a standalone Leaflet page.

pub mod page;

pub use page::LeafletPage;
