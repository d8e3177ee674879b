//! Location Form Component
//!
//! Four text inputs bound to the session draft. Latitude and longitude
//! are usually filled by clicking the map. Submission is validated before
//! anything reaches the repository, and only one submission runs at a time.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use parkfree_core::{DraftField, SubmitState};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// How long the "added" confirmation stays visible
const FLASH_MS: u32 = 3_000;

#[component]
pub fn LocationForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let is_submitting = move || store.session().read().is_submitting();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(draft) = store.session().write().begin_submit() else {
            tracing::debug!("submit ignored, another is in flight");
            return;
        };

        let repo = ctx.repository();
        spawn_local(async move {
            let result = repo.append(&draft).await;
            let added = result.as_ref().ok().map(|loc| loc.name.clone());
            store.session().write().finish_submit(result);

            if let Some(name) = added {
                store.flash().set(Some(format!("Added \"{}\"", name)));
                TimeoutFuture::new(FLASH_MS).await;
                store.flash().set(None);
            }
        });
    };

    view! {
        <section class="location-form">
            <h2>"Add a location"</h2>
            <p class="hint">"Click the map to fill in the coordinates."</p>

            <form on:submit=on_submit>
                {DraftField::ALL
                    .into_iter()
                    .map(|field| view! { <DraftInput field=field /> })
                    .collect_view()}

                <button type="submit" disabled=is_submitting>
                    {move || if is_submitting() { "Saving..." } else { "Add location" }}
                </button>
            </form>

            {move || match store.session().read().submit_state().clone() {
                SubmitState::Rejected(err) => view! {
                    <p class="form-error" role="alert">{err.to_string()}</p>
                }.into_any(),
                SubmitState::Failed(message) => view! {
                    <div class="banner error" role="alert">
                        <span>"Could not save the location: " {message}</span>
                        <button
                            type="button"
                            on:click=move |_| store.session().write().dismiss_notice()
                        >
                            "Dismiss"
                        </button>
                    </div>
                }.into_any(),
                SubmitState::Idle | SubmitState::Submitting => ().into_any(),
            }}

            {move || store.flash().get().map(|text| view! {
                <p class="flash">{text}</p>
            })}
        </section>
    }
}

/// One labelled draft input
#[component]
fn DraftInput(field: DraftField) -> impl IntoView {
    let store = use_app_store();

    let input_id = format!("draft-{}", field.as_str());
    let placeholder = match field {
        DraftField::Name => "e.g. Free Parking - Leeds Dock",
        DraftField::Lat => "53.48071",
        DraftField::Lng => "-2.24265",
        DraftField::Hours => "e.g. Sundays only, 8am-6pm",
    };
    let input_mode = match field {
        DraftField::Lat | DraftField::Lng => "decimal",
        DraftField::Name | DraftField::Hours => "text",
    };
    let is_invalid = move || {
        matches!(
            store.session().read().submit_state(),
            SubmitState::Rejected(err) if err.field() == field
        )
    };

    view! {
        <div class="form-row">
            <label for=input_id.clone()>{field.label()}</label>
            <input
                id=input_id
                type="text"
                inputmode=input_mode
                placeholder=placeholder
                class:invalid=is_invalid
                prop:value=move || store.session().read().draft().field(field).to_string()
                on:input=move |ev| {
                    store.session().write().set_field(field, event_target_value(&ev));
                }
            />
        </div>
    }
}
