//! Map surface port
//!
//! The slice of the map widget the renderer drives. The widget owns tiles,
//! clustering and popups; the renderer only swaps the store layer and the
//! status label.

use crate::domain::entities::MarkerCluster;

/// Display widget contract
pub trait MapSurface: Send {
    /// Remove every store marker. Safe to call when none are shown.
    fn clear_markers(&mut self);

    /// Add a cluster layer to the map.
    fn attach_cluster(&mut self, cluster: MarkerCluster);

    /// Replace the content of the `#last-modified` status element.
    fn set_status(&mut self, html: &str);
}
