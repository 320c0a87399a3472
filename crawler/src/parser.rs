//! Location page parser
//!
//! Pulls stores out of a location-service listing page. Each listed store
//! carries a Google Maps link of the form `q=<name>@<lat>,<lng>&zoom` and an
//! address span; the n-th link pairs with the n-th address.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::Region;
use crate::overrides::location_override;

/// A store as written to `json/<game>.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub address: String,
    pub location: [f64; 2],
    pub country: String,
}

pub struct LocationParser {
    location_re: Regex,
    address_re: Regex,
}

impl LocationParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            location_re: Regex::new(r"//maps.google.com/maps\?q=(.*)&zoom")?,
            address_re: Regex::new(r#"<span class="store_address">(.*)</span>"#)?,
        })
    }

    /// Parse every store on a listing page
    pub fn parse(&self, html: &str, region: Region) -> Vec<Store> {
        let addresses: Vec<&str> = self
            .address_re
            .captures_iter(html)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect();

        self.location_re
            .captures_iter(html)
            .filter_map(|c| c.get(1))
            .enumerate()
            .filter_map(|(idx, m)| {
                let raw = m.as_str();
                let Some((name, location)) = split_location(raw) else {
                    tracing::debug!("Skipping malformed location entry: {:?}", raw);
                    return None;
                };

                Some(Store {
                    location: location_override(name).unwrap_or(location),
                    name: name.to_string(),
                    address: addresses.get(idx).copied().unwrap_or_default().to_string(),
                    country: region.code().to_string(),
                })
            })
            .collect()
    }
}

/// Split `name@lat,lng` at the last `@`
fn split_location(raw: &str) -> Option<(&str, [f64; 2])> {
    let (name, coords) = raw.rsplit_once('@')?;
    let mut parts = coords.split(',').map(|s| s.trim().parse::<f64>());

    let lat = parts.next()?.ok()?;
    let lng = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some((name, [lat, lng]))
}
