//! View Composer
//!
//! Side-panel entries and map markers, both built from the same filtered
//! slice so they can't drift apart.

use serde::{Deserialize, Serialize};

use crate::domain::{Location, LocationId};

/// One row in the side panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: LocationId,
    pub name: String,
    pub hours: String,
}

/// Popup text shown when a marker is opened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub name: String,
    pub hours: String,
}

/// One pin on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: LocationId,
    /// (lat, lng)
    pub position: (f64, f64),
    pub popup: Popup,
}

/// Everything the list panel and map need for one render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposedView {
    pub entries: Vec<ListEntry>,
    pub markers: Vec<Marker>,
    /// Size of the unfiltered list, for "N of M" summaries
    pub total: usize,
}

impl ComposedView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> String {
        let shown = self.entries.len();
        let noun = if self.total == 1 { "location" } else { "locations" };
        if shown == self.total {
            format!("{} {}", shown, noun)
        } else {
            format!("{} of {} {}", shown, self.total, noun)
        }
    }
}

pub fn compose(filtered: &[Location], total: usize) -> ComposedView {
    ComposedView {
        entries: filtered.iter().map(list_entry).collect(),
        markers: filtered.iter().map(marker).collect(),
        total,
    }
}

fn list_entry(loc: &Location) -> ListEntry {
    ListEntry {
        id: loc.id,
        name: loc.name.clone(),
        hours: loc.hours.clone(),
    }
}

fn marker(loc: &Location) -> Marker {
    Marker {
        id: loc.id,
        position: loc.position(),
        popup: Popup {
            name: loc.name.clone(),
            hours: loc.hours.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_locations;
    use crate::repository::seed_locations;

    #[test]
    fn test_list_and_markers_in_lockstep() {
        let seeds = seed_locations();
        let view = compose(&seeds, seeds.len());

        assert_eq!(view.entries.len(), view.markers.len());
        for (entry, marker) in view.entries.iter().zip(&view.markers) {
            assert_eq!(entry.id, marker.id);
            assert_eq!(entry.name, marker.popup.name);
            assert_eq!(entry.hours, marker.popup.hours);
        }
        assert_eq!(view.markers[0].position, (53.48071, -2.24265));
    }

    #[test]
    fn test_summary() {
        let seeds = seed_locations();
        assert_eq!(compose(&seeds, 2).summary(), "2 locations");

        let bristol = filter_locations(&seeds, "bristol");
        let view = compose(&bristol, seeds.len());
        assert_eq!(view.summary(), "1 of 2 locations");

        let none = compose(&[], 2);
        assert!(none.is_empty());
        assert_eq!(none.summary(), "0 of 2 locations");
    }
}
