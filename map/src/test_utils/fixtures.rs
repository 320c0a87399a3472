//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{CountryCode, LatLng, StoreRecord};

/// A store in Japan with default values
pub fn test_store() -> StoreRecord {
    StoreRecord {
        name: "GiGO Akihabara".to_string(),
        address: "1-10-9 Sotokanda, Chiyoda-ku".to_string(),
        location: LatLng {
            lat: 35.6984,
            lng: 139.7712,
        },
        country: CountryCode::new("JP"),
    }
}

/// A store in a specific country
pub fn test_store_in(country: &str) -> StoreRecord {
    StoreRecord {
        name: format!("Timezone {}", country),
        address: format!("1 Arcade Street, {}", country),
        location: LatLng {
            lat: -33.8688,
            lng: 151.2093,
        },
        country: CountryCode::new(country),
    }
}

/// Serialize stores the way the crawler writes them
pub fn feed_body(stores: &[StoreRecord]) -> String {
    serde_json::to_string(stores).unwrap()
}
