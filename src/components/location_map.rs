//! Location Map Component
//!
//! Leaflet map that reports clicked coordinates and marks the selected point.

use leptos::prelude::*;
use leptos_leaflet::{
    leaflet::{Map, MouseEvent},
    prelude::*,
};
use point_form::Coordinates;

#[component]
pub fn LocationMap(
    /// Recenters the map when it changes
    #[prop(into)] center: Signal<Coordinates>,
    #[prop(into)] selected: Signal<Option<Coordinates>>,
    #[prop(into)] on_select: Callback<Coordinates>,
    #[prop(into)] tile_url: String,
    #[prop(into)] attribution: String,
    zoom: f64,
) -> impl IntoView {
    let map = JsRwSignal::new_local(None::<Map>);

    Effect::new(move |_| {
        let Coordinates { latitude, longitude } = center.get();
        if let Some(map) = map.get() {
            map.set_view(&Position::new(latitude, longitude).as_lat_lng(), map.get_zoom());
        }
    });

    let events = MapEvents::new().mouse_click(move |event: MouseEvent| {
        let point = event.lat_lng();
        log::debug!("[MAP] Click at {}, {}", point.lat(), point.lng());
        on_select.run(Coordinates::new(point.lat(), point.lng()));
    });

    let start = center.get_untracked();

    view! {
        <MapContainer
            class="location-map"
            center=Position::new(start.latitude, start.longitude)
            zoom=zoom
            set_view=true
            map=map.write_only()
            events
        >
            <TileLayer url=tile_url attribution=attribution />
            {move || selected.get().map(|point| view! {
                <Marker position=Position::new(point.latitude, point.longitude) />
            })}
        </MapContainer>
    }
}
