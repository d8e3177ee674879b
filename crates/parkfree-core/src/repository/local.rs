//! Local Store Source
//!
//! Persists the whole location list as one JSON value under a fixed key.
//! Every append rewrites the full list; nothing is patched in place.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::domain::{BackendError, FetchError, Location, NewLocation};
use super::id_clock::IdClock;
use super::seed::seed_locations;
use super::traits::{KeyValueStore, LocationSource};

/// Key the list is saved under
pub const STORAGE_KEY: &str = "parkfree.locations";

/// Source backed by a synchronous key-value store
pub struct LocalSource<S: KeyValueStore> {
    store: S,
    key: String,
    /// Mirror of what was last read from or written to the store
    records: RefCell<Vec<Location>>,
    loaded: Cell<bool>,
    ids: IdClock,
}

impl<S: KeyValueStore> LocalSource<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            records: RefCell::new(Vec::new()),
            loaded: Cell::new(false),
            ids: IdClock::new(),
        }
    }

    fn read(&self) -> Result<Vec<Location>, FetchError> {
        let raw = self.store.get(&self.key).map_err(FetchError::Storage)?;

        let records = match raw {
            Some(raw) => {
                let records: Vec<Location> =
                    serde_json::from_str(&raw).map_err(|e| FetchError::Corrupt(e.to_string()))?;
                tracing::debug!(key = %self.key, count = records.len(), "read saved locations");
                records
            }
            None => {
                let seeds = seed_locations();
                // The seeds are returned even if storing them fails
                match self.write(&seeds) {
                    Ok(()) => tracing::info!(key = %self.key, "no saved locations, stored seed data"),
                    Err(e) => tracing::warn!(key = %self.key, error = %e, "could not store seed data"),
                }
                seeds
            }
        };

        self.ids.observe(&records);
        *self.records.borrow_mut() = records.clone();
        self.loaded.set(true);
        Ok(records)
    }

    fn write(&self, records: &[Location]) -> Result<(), BackendError> {
        let json = serde_json::to_string(records).map_err(|e| BackendError::Storage(e.to_string()))?;
        self.store.set(&self.key, &json).map_err(BackendError::Storage)
    }
}

#[async_trait(?Send)]
impl<S: KeyValueStore> LocationSource for LocalSource<S> {
    fn kind(&self) -> &'static str {
        "local"
    }

    async fn load(&self) -> Result<Vec<Location>, FetchError> {
        self.read()
    }

    async fn append(&self, candidate: NewLocation) -> Result<Location, BackendError> {
        // Never rewrite the store from an empty mirror
        if !self.loaded.get() {
            self.read().map_err(|e| BackendError::Storage(e.to_string()))?;
        }

        let location = Location::from_new(self.ids.next(), candidate);
        let mut next = self.records.borrow().clone();
        next.push(location.clone());

        self.write(&next)?;
        *self.records.borrow_mut() = next;
        tracing::debug!(key = %self.key, id = %location.id, "saved location");
        Ok(location)
    }
}
