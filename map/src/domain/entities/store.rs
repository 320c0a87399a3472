//! Store domain entity
//!
//! A geocoded store as it appears in a store feed.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// A WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Validate a raw `[lat, lng]` pair
    pub fn try_from_slice(values: &[f64]) -> Result<Self, RecordError> {
        let [lat, lng] = values else {
            return Err(RecordError::Coordinates(values.len()));
        };
        let (lat, lng) = (*lat, *lng);

        if !lat.is_finite() || !lng.is_finite() || lat.abs() > 90.0 || lng.abs() > 180.0 {
            return Err(RecordError::OutOfRange { lat, lng });
        }

        Ok(Self { lat, lng })
    }
}

// Leaflet takes positions as `[lat, lng]` arrays
impl Serialize for LatLng {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.lat, self.lng].serialize(serializer)
    }
}

/// Uppercase country or region code, e.g. `JP` or `EN`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = Self::new(s);
        if code.0.is_empty() || !code.0.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Invalid country code: {}", s));
        }
        Ok(code)
    }
}

/// Wire shape of a store feed element
#[derive(Debug, Deserialize)]
struct RawStoreRecord {
    name: String,
    #[serde(default)]
    address: String,
    location: Vec<f64>,
    #[serde(default)]
    country: String,
}

/// A store that can be placed on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreRecord {
    pub name: String,
    pub address: String,
    pub location: LatLng,
    pub country: CountryCode,
}

impl StoreRecord {
    /// Decode and validate one element of a feed array
    pub fn from_value(value: serde_json::Value) -> Result<Self, RecordError> {
        let raw: RawStoreRecord = serde_json::from_value(value)?;

        if raw.name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }

        Ok(Self {
            location: LatLng::try_from_slice(&raw.location)?,
            name: raw.name,
            address: raw.address,
            country: CountryCode::new(&raw.country),
        })
    }
}
