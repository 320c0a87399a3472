//! Map configuration
//!
//! View constants, the tile profile and the popup link policy.

use crate::domain::entities::CountryCode;

/// Initial view center (central Honshu)
pub const VIEW_CENTER: [f64; 2] = [36.0, 138.0];

/// Initial zoom level
pub const VIEW_ZOOM: u8 = 6;

/// Minimum zoom level
pub const MIN_ZOOM: u8 = 3;

/// Maximum zoom level
pub const MAX_ZOOM: u8 = 19;

/// Cache-busting query value appended to feed URLs
pub const DEFAULT_REVISION: &str = "1";

/// Default vector style served next to the page
pub const DEFAULT_STYLE_URL: &str = "./static/styles.json";

/// OSM raster tile template
pub const RASTER_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution shown for both profiles
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OSM</a> contributors";

/// Which base layer the page draws under the markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapProfile {
    /// MapLibre GL vector style
    #[default]
    Vector,
    /// OSM raster tiles
    Raster,
}

impl std::fmt::Display for MapProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapProfile::Vector => write!(f, "vector"),
            MapProfile::Raster => write!(f, "raster"),
        }
    }
}

impl std::str::FromStr for MapProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vector" | "maplibre" => Ok(MapProfile::Vector),
            "raster" | "osm" => Ok(MapProfile::Raster),
            _ => Err(format!("Unknown map profile: {}", s)),
        }
    }
}

/// Decides which external links and warnings a popup carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupPolicy {
    pub home_country: CountryCode,
}

impl PopupPolicy {
    pub fn new(home_country: CountryCode) -> Self {
        Self { home_country }
    }

    /// Stores in the home country get the localized map link and no warning
    pub fn is_home(&self, country: &CountryCode) -> bool {
        *country == self.home_country
    }
}

impl Default for PopupPolicy {
    fn default() -> Self {
        Self::new(CountryCode::new("JP"))
    }
}
