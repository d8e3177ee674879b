//! Load Banner Component
//!
//! Shows loading progress and a persistent error when the initial load
//! fails. Retrying is always a user action.

use leptos::prelude::*;

use parkfree_core::LoadState;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoadBanner() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    move || match store.session().read().load_state().clone() {
        LoadState::Loading => view! {
            <div class="banner loading">"Loading locations..."</div>
        }.into_any(),
        LoadState::Ready => ().into_any(),
        LoadState::Failed(message) => view! {
            <div class="banner error" role="alert">
                <strong>"Could not load locations."</strong>
                <span class="banner-detail">{message}</span>
                <button type="button" on:click=move |_| ctx.reload()>"Retry"</button>
            </div>
        }.into_any(),
    }
}
