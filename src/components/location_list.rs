//! Location List Component
//!
//! Renders the filtered locations in source order. Clicking a row flies
//! the map to that location.

use leptos::prelude::*;

use parkfree_core::{ListEntry, LoadState};

use crate::store::{store_focus, use_app_store, AppStateStoreFields};

#[component]
pub fn LocationList() -> impl IntoView {
    let store = use_app_store();

    let view_model = Memo::new(move |_| store.session().read().view());
    let is_ready = move || matches!(store.session().read().load_state(), LoadState::Ready);

    view! {
        <section class="location-list">
            <div class="list-header">
                <h2>"Locations"</h2>
                <Show when=is_ready>
                    <span class="list-summary">{move || view_model.with(|v| v.summary())}</span>
                </Show>
            </div>

            <Show
                when=move || !view_model.with(|v| v.is_empty())
                fallback=move || {
                    let message = if !is_ready() {
                        ""
                    } else if store.session().read().search_term().is_empty() {
                        "No locations yet. Add one below."
                    } else {
                        "No locations match your search."
                    };
                    view! { <p class="empty-state">{message}</p> }
                }
            >
                <ul>
                    <For
                        each=move || view_model.get().entries
                        key=|entry| entry.id
                        children=move |entry: ListEntry| {
                            let id = entry.id;
                            let is_focused = move || store.focused().get() == Some(id);
                            view! {
                                <li
                                    class="location-row"
                                    class:focused=is_focused
                                    on:click=move |_| store_focus(&store, id)
                                >
                                    <span class="location-name">{entry.name}</span>
                                    <span class="location-hours">{entry.hours}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
