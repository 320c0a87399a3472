//! Leaflet page map surface
//!
//! Collects what the renderer puts on the map and writes it out as a
//! standalone HTML document driving Leaflet and markercluster in the browser.

use serde::Serialize;

use crate::app::map_config::{
    MapProfile, MAX_ZOOM, MIN_ZOOM, OSM_ATTRIBUTION, RASTER_TILE_URL, VIEW_CENTER, VIEW_ZOOM,
};
use crate::domain::entities::{DatasetId, MarkerCluster};
use crate::domain::ports::MapSurface;
use crate::popup::escape_html;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CLUSTER_CSS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
const CLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
const CLUSTER_JS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";
const MAPLIBRE_CSS: &str = "https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.css";
const MAPLIBRE_JS: &str = "https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.js";
const MAPLIBRE_LEAFLET_JS: &str =
    "https://unpkg.com/@maplibre/maplibre-gl-leaflet@0.0.22/leaflet-maplibre-gl.js";

const BOOT_SCRIPT: &str = r#"
const data = JSON.parse(document.getElementById("store-data").textContent);
const map = L.map("map", { minZoom: data.view.minZoom, maxZoom: data.view.maxZoom })
  .setView(data.view.center, data.view.zoom);
if (data.base.kind === "vector") {
  L.maplibreGL({ style: data.base.url, attribution: data.base.attribution }).addTo(map);
} else {
  L.tileLayer(data.base.url, { attribution: data.base.attribution, maxZoom: data.view.maxZoom }).addTo(map);
}
for (const cluster of data.clusters) {
  const icon = new L.Icon(cluster.icon);
  const layer = L.markerClusterGroup();
  for (const m of cluster.markers) {
    layer.addLayer(L.marker(m.position, { icon, title: m.title }).bindPopup(m.popup_html));
  }
  map.addLayer(layer);
}
"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewOptions {
    center: [f64; 2],
    zoom: u8,
    min_zoom: u8,
    max_zoom: u8,
}

#[derive(Serialize)]
struct BaseLayer<'a> {
    kind: String,
    url: &'a str,
    attribution: &'a str,
}

#[derive(Serialize)]
struct PagePayload<'a> {
    view: ViewOptions,
    base: BaseLayer<'a>,
    clusters: &'a [MarkerCluster],
}

/// A map surface rendered to a static Leaflet page
pub struct LeafletPage {
    profile: MapProfile,
    style_url: String,
    current: DatasetId,
    datasets: Vec<DatasetId>,
    clusters: Vec<MarkerCluster>,
    status: String,
}

impl LeafletPage {
    pub fn new(profile: MapProfile, style_url: &str, current: DatasetId) -> Self {
        Self {
            profile,
            style_url: style_url.to_string(),
            datasets: vec![current.clone()],
            current,
            clusters: Vec::new(),
            status: String::new(),
        }
    }

    /// Datasets listed in the page's switcher
    pub fn with_datasets(mut self, datasets: Vec<DatasetId>) -> Self {
        if !datasets.is_empty() {
            self.datasets = datasets;
        }
        self
    }

    pub fn marker_count(&self) -> usize {
        self.clusters.iter().map(MarkerCluster::len).sum()
    }

    /// Render the full HTML document
    pub fn render_html(&self) -> Result<String, serde_json::Error> {
        let base_url = match self.profile {
            MapProfile::Vector => self.style_url.as_str(),
            MapProfile::Raster => RASTER_TILE_URL,
        };
        let payload = PagePayload {
            view: ViewOptions {
                center: VIEW_CENTER,
                zoom: VIEW_ZOOM,
                min_zoom: MIN_ZOOM,
                max_zoom: MAX_ZOOM,
            },
            base: BaseLayer {
                kind: self.profile.to_string(),
                url: base_url,
                attribution: OSM_ATTRIBUTION,
            },
            clusters: &self.clusters,
        };
        let data = script_safe_json(&payload)?;

        let mut buf = String::new();

        buf.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        buf.push_str("<meta charset=\"utf-8\">\n");
        buf.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        buf.push_str(&format!(
            "<title>Store Map - {}</title>\n",
            escape_html(self.current.as_str())
        ));
        for css in self.stylesheets() {
            buf.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">\n", css));
        }
        buf.push_str(
            "<style>html,body{height:100%;margin:0}#map{height:calc(100% - 3em)}\
             #controls{display:flex;gap:1em;align-items:center;height:3em;padding:0 1em}\
             #datasets a.active{font-weight:bold}</style>\n",
        );
        buf.push_str("</head>\n<body>\n");

        buf.push_str("<div id=\"controls\">\n<nav id=\"datasets\">\n");
        for dataset in &self.datasets {
            let class = if *dataset == self.current {
                " class=\"active\""
            } else {
                ""
            };
            buf.push_str(&format!(
                "<a href=\"{}.html\"{}>{}</a>\n",
                escape_html(&urlencoding::encode(dataset.as_str())),
                class,
                escape_html(dataset.as_str())
            ));
        }
        buf.push_str("</nav>\n");
        buf.push_str(&format!(
            "<span id=\"last-modified\">{}</span>\n</div>\n",
            self.status
        ));
        buf.push_str("<div id=\"map\"></div>\n");

        for js in self.scripts() {
            buf.push_str(&format!("<script src=\"{}\"></script>\n", js));
        }
        buf.push_str(&format!(
            "<script id=\"store-data\" type=\"application/json\">{}</script>\n",
            data
        ));
        buf.push_str(&format!("<script>{}</script>\n", BOOT_SCRIPT));
        buf.push_str("</body>\n</html>\n");

        Ok(buf)
    }

    fn stylesheets(&self) -> Vec<&'static str> {
        let mut css = vec![LEAFLET_CSS, CLUSTER_CSS, CLUSTER_DEFAULT_CSS];
        if self.profile == MapProfile::Vector {
            css.push(MAPLIBRE_CSS);
        }
        css
    }

    fn scripts(&self) -> Vec<&'static str> {
        let mut js = vec![LEAFLET_JS, CLUSTER_JS];
        if self.profile == MapProfile::Vector {
            js.push(MAPLIBRE_JS);
            js.push(MAPLIBRE_LEAFLET_JS);
        }
        js
    }
}

impl MapSurface for LeafletPage {
    fn clear_markers(&mut self) {
        self.clusters.clear();
    }

    fn attach_cluster(&mut self, cluster: MarkerCluster) {
        self.clusters.push(cluster);
    }

    fn set_status(&mut self, html: &str) {
        self.status = html.to_string();
    }
}

/// JSON that cannot terminate the surrounding `<script>` element
fn script_safe_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}
