//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for location data access.
//! Implementations: seed (in-memory), local (key-value store), remote (REST).

use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::{BackendError, FetchError, Location, NewLocation};

/// A backend that can list and append locations.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait LocationSource {
    /// Short name for logs ("seed", "local", "remote")
    fn kind(&self) -> &'static str;

    /// Load the full list, in the order the backend defines
    async fn load(&self) -> Result<Vec<Location>, FetchError>;

    /// Store a validated candidate and return the authoritative record
    async fn append(&self, candidate: NewLocation) -> Result<Location, BackendError>;
}

/// Synchronous whole-value key-value storage (browser `localStorage` shape)
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// The remote collaborator: a `locations` collection with list/insert
#[async_trait(?Send)]
pub trait RemoteBackend {
    /// Select every record, ordered by name ascending
    async fn select_ordered_by_name(&self) -> Result<Vec<Location>, FetchError>;

    /// Insert one record; returns whatever rows the backend sends back
    async fn insert(&self, candidate: &NewLocation) -> Result<Vec<Location>, BackendError>;
}

// Shared handles, so a store or backend can be inspected after handing it over

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }
}

#[async_trait(?Send)]
impl<T: RemoteBackend + ?Sized> RemoteBackend for Rc<T> {
    async fn select_ordered_by_name(&self) -> Result<Vec<Location>, FetchError> {
        (**self).select_ordered_by_name().await
    }

    async fn insert(&self, candidate: &NewLocation) -> Result<Vec<Location>, BackendError> {
        (**self).insert(candidate).await
    }
}
