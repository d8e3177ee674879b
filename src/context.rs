//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use parkfree_core::LocationRepository;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload locations from the source - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload locations from the source - write
    set_reload_trigger: WriteSignal<u32>,
    /// The configured repository (not `Send`, so kept in local storage)
    repository: StoredValue<LocationRepository, LocalStorage>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        repository: LocationRepository,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            repository: StoredValue::new_local(repository),
        }
    }

    /// Trigger a reload of locations
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Cheap clone of the repository, for moving into async tasks
    pub fn repository(&self) -> LocationRepository {
        self.repository.get_value()
    }

    pub fn source_kind(&self) -> &'static str {
        self.repository.with_value(|repo| repo.kind())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
