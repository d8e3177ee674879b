//! Search Bar Component
//!
//! Edits the session search term; the filtered view follows immediately.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search by name..."
                autocomplete="off"
                prop:value=move || store.session().read().search_term().to_string()
                on:input=move |ev| {
                    store.session().write().set_search_term(event_target_value(&ev));
                }
            />
            {move || {
                let has_term = !store.session().read().search_term().is_empty();
                has_term.then(|| view! {
                    <button
                        type="button"
                        class="clear-btn"
                        title="Clear search"
                        on:click=move |_| store.session().write().set_search_term("")
                    >
                        "×"
                    </button>
                })
            }}
        </div>
    }
}
