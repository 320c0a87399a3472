//! Duplicate detection
//!
//! Finds stores that carry every game offered in a region, matched by
//! address. The result is the `duplicate` dataset.

use std::collections::{HashMap, HashSet};

use crate::catalog::{Game, Region};
use crate::parser::Store;

/// Stores whose country matches the region, case-insensitively
fn in_region(stores: &[Store], region: Region) -> Vec<Store> {
    stores
        .iter()
        .filter(|s| s.country.eq_ignore_ascii_case(region.code()))
        .cloned()
        .collect()
}

/// Keep the stores in `other` whose address also appears in `common`.
///
/// The later game's records win, in its order and with its repeats.
fn intersect_by_address(common: &[Store], other: Vec<Store>) -> Vec<Store> {
    let addresses: HashSet<&str> = common.iter().map(|s| s.address.as_str()).collect();
    other
        .into_iter()
        .filter(|s| addresses.contains(s.address.as_str()))
        .collect()
}

/// Stores present in every game of each region, JP first then EN.
///
/// Records come from the last game (in catalog order) offering the region.
pub fn find_duplicates(stores: &HashMap<Game, Vec<Store>>) -> Vec<Store> {
    let mut duplicates = Vec::new();

    for region in Region::ALL {
        let games: Vec<Game> = Game::ALL
            .into_iter()
            .filter(|g| g.has_region(region))
            .collect();
        let Some((first, rest)) = games.split_first() else {
            continue;
        };

        let mut common = in_region(stores.get(first).map(Vec::as_slice).unwrap_or_default(), region);
        for game in rest {
            let other = in_region(stores.get(game).map(Vec::as_slice).unwrap_or_default(), region);
            common = intersect_by_address(&common, other);
        }

        tracing::info!(%region, count = common.len(), "Found stores carrying every game");
        duplicates.extend(common);
    }

    duplicates
}
