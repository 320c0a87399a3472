//! Marker domain entities
//!
//! What the renderer hands to the map surface: positioned markers with
//! pre-rendered popup markup, grouped into one cluster layer.

use serde::Serialize;

use super::store::LatLng;

/// Icon shared by every store marker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub icon_url: String,
    pub shadow_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub shadow_size: [u32; 2],
}

impl Default for MarkerIcon {
    /// Green pin from leaflet-color-markers
    fn default() -> Self {
        Self {
            icon_url: "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-green.png".to_string(),
            shadow_url: "https://cdnjs.cloudflare.com/ajax/libs/leaflet/0.7.7/images/marker-shadow.png".to_string(),
            icon_size: [25, 41],
            icon_anchor: [12, 41],
            popup_anchor: [1, -34],
            shadow_size: [41, 41],
        }
    }
}

/// A single store marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,
    /// Plain-text hover title
    pub title: String,
    /// Escaped popup markup
    pub popup_html: String,
}

/// A set of markers added to the map as one clustering layer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkerCluster {
    pub icon: MarkerIcon,
    pub markers: Vec<Marker>,
}

impl MarkerCluster {
    pub fn new(icon: MarkerIcon) -> Self {
        Self {
            icon,
            markers: Vec::new(),
        }
    }

    pub fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
