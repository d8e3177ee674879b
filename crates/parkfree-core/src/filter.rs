//! Filter Engine
//!
//! Case-insensitive substring match on location names.

use crate::domain::Location;

/// Every location whose name contains `term`, ignoring case, in input order.
/// An empty term keeps everything.
pub fn filter_locations(locations: &[Location], term: &str) -> Vec<Location> {
    if term.is_empty() {
        return locations.to_vec();
    }
    let needle = term.to_lowercase();
    locations
        .iter()
        .filter(|loc| loc.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
