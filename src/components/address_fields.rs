//! Address Fields Component
//!
//! "Address" fieldset: the location map plus cascading province/city selects.

use leptos::prelude::*;
use point_form::{Coordinates, UNSELECTED_VALUE};

use crate::components::LocationMap;
use crate::config::AppConfig;
use crate::store::{use_create_point_store, CreatePointStateStoreFields};

#[component]
pub fn AddressFields(
    config: AppConfig,
    #[prop(into)] on_province_change: Callback<String>,
) -> impl IntoView {
    let store = use_create_point_store();

    let center = Signal::derive(move || store.initial_position().get());
    let selected = Signal::derive(move || store.form().read().position);
    let on_select = Callback::new(move |point: Coordinates| {
        store.form().write().on_map_click(point.latitude, point.longitude);
    });

    view! {
        <fieldset>
            <legend>
                <h2>"Address"</h2>
                <span>"Select an address on the map"</span>
            </legend>

            <LocationMap
                center=center
                selected=selected
                on_select=on_select
                tile_url=config.tile_url.clone()
                attribution=config.attribution.clone()
                zoom=config.default_zoom
            />

            <div class="field-group">
                <div class="field">
                    <label for="province">"Province"</label>
                    <select
                        name="province"
                        id="province"
                        prop:value=move || store.form().read().province.as_value().to_string()
                        on:change=move |ev| on_province_change.run(event_target_value(&ev))
                    >
                        <option
                            value=UNSELECTED_VALUE
                            prop:selected=move || store.form().read().province.name().is_none()
                        >
                            "Select a province"
                        </option>
                        <For
                            each=move || store.provinces().get().into_iter().enumerate()
                            key=|(index, name)| (*index, name.clone())
                            children=move |(_, name)| {
                                let value = name.clone();
                                let option_value = name.clone();
                                let is_selected = move || {
                                    store.form().read().province.name() == Some(value.as_str())
                                };
                                view! {
                                    <option value=option_value prop:selected=is_selected>{name}</option>
                                }
                            }
                        />
                    </select>
                </div>
                <div class="field">
                    <label for="city">"City"</label>
                    <select
                        name="city"
                        id="city"
                        on:change=move |ev| store.form().write().on_city_change(&event_target_value(&ev))
                    >
                        <option
                            value=UNSELECTED_VALUE
                            prop:selected=move || store.form().read().city.is_none()
                        >
                            "Select a city"
                        </option>
                        <For
                            each=move || store.cities().get().into_iter().enumerate()
                            key=|(index, name)| (*index, name.clone())
                            children=move |(_, name)| {
                                let value = name.clone();
                                let option_value = name.clone();
                                let is_selected = move || {
                                    store.form().read().city.as_deref() == Some(value.as_str())
                                };
                                view! {
                                    <option value=option_value prop:selected=is_selected>{name}</option>
                                }
                            }
                        />
                    </select>
                </div>
            </div>
        </fieldset>
    }
}
