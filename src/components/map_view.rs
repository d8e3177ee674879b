//! Map View Component
//!
//! Hosts the Leaflet map. Markers follow the filtered list, clicks fill the
//! draft coordinates, and picking a row in the list flies to its marker.

use leptos::html;
use leptos::prelude::*;

use crate::map::MapHandle;
use crate::store::{store_find_location, use_app_store, AppStateStoreFields};

#[component]
pub fn MapView() -> impl IntoView {
    let store = use_app_store();
    let container = NodeRef::<html::Div>::new();
    let handle = StoredValue::new_local(None::<MapHandle>);

    // Draft edits touch the session too; only marker changes should redraw
    let markers = Memo::new(move |_| store.session().read().view().markers);

    // Mount once the container exists, then redraw markers on every view change
    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        let markers = markers.get();

        handle.update_value(|slot| {
            if slot.is_none() {
                let on_click = move |lat: f64, lng: f64| {
                    tracing::debug!(lat, lng, "map click");
                    store.session().write().capture_click(lat, lng);
                };
                match MapHandle::mount(&element, on_click) {
                    Ok(mounted) => *slot = Some(mounted),
                    Err(e) => {
                        tracing::error!("failed to mount map: {}", e);
                        return;
                    }
                }
            }
            if let Some(map) = slot.as_mut() {
                if let Err(e) = map.render_markers(&markers) {
                    tracing::warn!("failed to draw markers: {}", e);
                }
            }
        });
    });

    // Fly to the location picked in the list
    Effect::new(move |_| {
        let Some(id) = store.focused().get() else {
            return;
        };
        let Some(location) = store_find_location(&store, id) else {
            return;
        };
        handle.with_value(|slot| {
            if let Some(map) = slot {
                map.focus(id, location.position());
            }
        });
    });

    view! {
        <div class="map-container" node_ref=container></div>
    }
}
