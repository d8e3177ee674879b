//! Seed Source
//!
//! Two built-in example locations. Used directly as the in-memory
//! variant, and as first-run data for the local store.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::domain::{BackendError, FetchError, Location, LocationId, NewLocation};
use super::id_clock::IdClock;
use super::traits::LocationSource;

/// The literal example records shipped with the app
pub fn seed_locations() -> Vec<Location> {
    vec![
        Location {
            id: LocationId(1),
            name: "Free Parking - Manchester City Centre".to_string(),
            lat: 53.48071,
            lng: -2.24265,
            hours: "Mon-Sat after 6pm, all day Sunday".to_string(),
        },
        Location {
            id: LocationId(2),
            name: "Free Parking - Bristol Sundays Only".to_string(),
            lat: 51.45451,
            lng: -2.58791,
            hours: "Sundays only, 8am-6pm".to_string(),
        },
    ]
}

/// In-memory source: seed data plus whatever is added this session
pub struct SeedSource {
    records: RefCell<Vec<Location>>,
    ids: IdClock,
}

impl SeedSource {
    pub fn new() -> Self {
        let records = seed_locations();
        let ids = IdClock::new();
        ids.observe(&records);
        Self {
            records: RefCell::new(records),
            ids,
        }
    }
}

impl Default for SeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl LocationSource for SeedSource {
    fn kind(&self) -> &'static str {
        "seed"
    }

    async fn load(&self) -> Result<Vec<Location>, FetchError> {
        Ok(self.records.borrow().clone())
    }

    async fn append(&self, candidate: NewLocation) -> Result<Location, BackendError> {
        let location = Location::from_new(self.ids.next(), candidate);
        self.records.borrow_mut().push(location.clone());
        Ok(location)
    }
}
