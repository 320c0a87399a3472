//! Coordinate overrides
//!
//! Stores the location service places nowhere, or in the wrong place.

/// Store name and corrected `[lat, lng]`
const OVERRIDES: &[(&str, [f64; 2])] = &[
    // Not placed on the map
    ("TOM'S WORLD (E-SQUARE@KEELUNG)", [25.1301738, 121.7406039]),
    ("TOM'S WORLD(SHANG-SHUN WORLD@MIAOLI)", [24.6890502, 120.9014187]),
    ("GiGO MITSUI OUTLET PARK Lin Kou", [25.0706472, 121.364833]),
    ("QUANTUM GREENHILLS", [14.6025933, 121.0494889]),
    ("QUANTUM SM FAIRVIEW", [14.7342227, 121.0548111]),
    ("PALO Sunway Velocity Mall", [3.1278768, 101.722265]),
    ("PALO Imago", [5.9708238, 116.0611211]),
    ("FUNHOUSE SUNNYBANK", [-27.5710502, 153.0606721]),
    // Wrong location
    ("TOM'S WORLD (HAIDIAN-LI@TAINAN))", [23.026179, 120.190815]),
    ("ROBOT AMUSEMENT", [16.7832939, 96.1714648]),
];

/// Corrected location for a store, if one is known
pub fn location_override(name: &str) -> Option<[f64; 2]> {
    OVERRIDES
        .iter()
        .find(|(store, _)| *store == name)
        .map(|(_, location)| *location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_store_is_overridden() {
        assert_eq!(
            location_override("ROBOT AMUSEMENT"),
            Some([16.7832939, 96.1714648])
        );
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(location_override("robot amusement"), None);
        assert_eq!(location_override("ROBOT AMUSEMENT "), None);
    }

    #[test]
    fn overrides_are_valid_coordinates() {
        for (name, [lat, lng]) in OVERRIDES {
            assert!(lat.abs() <= 90.0 && lng.abs() <= 180.0, "{name}");
        }
    }
}
