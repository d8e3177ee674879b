//! Leaflet Bindings
//!
//! Just enough of the global `L` API to show tiles, draw markers, and
//! report clicks. Leaflet itself is loaded by index.html.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use parkfree_core::{LocationId, Marker as MarkerView};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(element: &web_sys::HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = getZoom)]
    fn get_zoom(this: &LeafletMap) -> f64;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = TileLayer)]
    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = LayerGroup)]
    type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_group_to(this: &LayerGroup, map: &LeafletMap) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup) -> LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = Marker)]
    type LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn leaflet_marker(position: &JsValue) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &LeafletMarker, content: &web_sys::HtmlElement) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &LeafletMarker) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to_group(this: &LeafletMarker, group: &LayerGroup) -> LeafletMarker;

    /// Leaflet `MouseEvent` passed to click handlers
    pub type LeafletMouseEvent;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &LeafletMouseEvent) -> LatLng;

    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &LatLng) -> f64;
}

// ========================
// Settings
// ========================

/// Initial view: central England, so both seed locations are on screen
const DEFAULT_CENTER: (f64, f64) = (52.6, -2.3);
const DEFAULT_ZOOM: f64 = 7.0;
const FOCUS_ZOOM: f64 = 15.0;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
    #[serde(rename = "maxZoom")]
    max_zoom: u8,
}

fn lat_lng((lat, lng): (f64, f64)) -> JsValue {
    js_sys::Array::of2(&lat.into(), &lng.into()).into()
}

// ========================
// Map handle
// ========================

/// A mounted map with one marker layer
pub struct MapHandle {
    map: LeafletMap,
    layer: LayerGroup,
    markers: Vec<(LocationId, LeafletMarker)>,
}

impl MapHandle {
    /// Mount Leaflet in `element`; `on_click` receives (lat, lng) of each click
    pub fn mount<F>(element: &web_sys::HtmlElement, on_click: F) -> Result<Self, String>
    where
        F: Fn(f64, f64) + 'static,
    {
        let map = leaflet_map(element);
        map.set_view(&lat_lng(DEFAULT_CENTER), DEFAULT_ZOOM);

        let options = serde_wasm_bindgen::to_value(&TileOptions {
            attribution: TILE_ATTRIBUTION,
            max_zoom: 19,
        })
        .map_err(|e| e.to_string())?;
        tile_layer(TILE_URL, &options).add_to(&map);

        let layer = layer_group();
        layer.add_group_to(&map);

        let handler = Closure::<dyn FnMut(LeafletMouseEvent)>::new(move |ev: LeafletMouseEvent| {
            let position = ev.latlng();
            on_click(position.lat(), position.lng());
        });
        map.on("click", handler.as_ref().unchecked_ref());
        // Lives as long as the page
        handler.forget();

        Ok(Self { map, layer, markers: Vec::new() })
    }

    /// Replace every marker with the given set
    pub fn render_markers(&mut self, markers: &[MarkerView]) -> Result<(), String> {
        self.layer.clear_layers();
        self.markers.clear();

        for view in markers {
            let marker = leaflet_marker(&lat_lng(view.position));
            marker.bind_popup(&popup_content(&view.popup.name, &view.popup.hours)?);
            marker.add_to_group(&self.layer);
            self.markers.push((view.id, marker));
        }
        Ok(())
    }

    /// Center on a marker and open its popup
    pub fn focus(&self, id: LocationId, position: (f64, f64)) {
        let zoom = self.map.get_zoom().max(FOCUS_ZOOM);
        self.map.fly_to(&lat_lng(position), zoom);
        if let Some((_, marker)) = self.markers.iter().find(|(marker_id, _)| *marker_id == id) {
            marker.open_popup();
        }
    }
}

/// Popup body built as DOM nodes so names are never parsed as HTML
fn popup_content(name: &str, hours: &str) -> Result<web_sys::HtmlElement, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let create = |tag: &str| document.create_element(tag).map_err(|e| format!("{:?}", e));

    let root = create("div")?;
    root.set_class_name("marker-popup");

    let title = create("strong")?;
    title.set_text_content(Some(name));
    let detail = create("div")?;
    detail.set_text_content(Some(hours));

    root.append_child(&title).map_err(|e| format!("{:?}", e))?;
    root.append_child(&detail).map_err(|e| format!("{:?}", e))?;
    root.dyn_into::<web_sys::HtmlElement>().map_err(|_| "popup root is not an HTML element".to_string())
}
