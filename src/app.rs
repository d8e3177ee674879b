//! ParkFree App
//!
//! Top-level component: owns the store, loads locations, lays out the
//! side panel and the map.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{LoadBanner, LocationForm, LocationList, MapView, SearchBar};
use crate::config;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config::open_repository());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load locations on mount and on every retry
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let repo = ctx.repository();
        tracing::debug!(source = repo.kind(), trigger, "loading locations");
        store.session().write().begin_load();
        spawn_local(async move {
            let result = repo.load().await;
            store.session().write().finish_load(result);
        });
    });

    view! {
        <div class="app-layout">
            // Left: search, list, and the add form
            <aside class="side-panel">
                <h1>"ParkFree"</h1>
                <p class="tagline">"Free parking spots, shared by drivers."</p>

                <SearchBar />
                <LoadBanner />
                <LocationList />
                <LocationForm />

                <p class="source-label">{format!("Data source: {}", ctx.source_kind())}</p>
            </aside>

            // Right: the map
            <main class="map-panel">
                <MapView />
            </main>
        </div>
    }
}
