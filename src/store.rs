//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.
//! All location state lives in one `Session`; the store only adds UI extras.

use leptos::prelude::*;
use reactive_stores::Store;

use parkfree_core::{Location, LocationId, Session};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Location list, search term, draft, load/submit progress
    pub session: Session,
    /// Location picked in the side panel (map flies to it)
    pub focused: Option<LocationId>,
    /// Short-lived confirmation text ("Location added")
    pub flash: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Look up a loaded location by id
pub fn store_find_location(store: &AppStore, id: LocationId) -> Option<Location> {
    store.session().read().locations().iter().find(|loc| loc.id == id).cloned()
}

/// Focus a location, but only while it is still in the filtered view
pub fn store_focus(store: &AppStore, id: LocationId) {
    let visible = store.session().read().filtered().iter().any(|loc| loc.id == id);
    if visible {
        store.focused().set(Some(id));
    }
}
