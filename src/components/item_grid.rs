//! Item Grid Component
//!
//! Clickable grid of residue categories; clicking toggles selection.

use leptos::prelude::*;

use crate::store::{use_create_point_store, CreatePointStateStoreFields};

#[component]
pub fn ItemGrid() -> impl IntoView {
    let store = use_create_point_store();

    view! {
        <fieldset>
            <legend>
                <h2>"Residues"</h2>
                <span>"Select one or more items below"</span>
            </legend>

            <ul class="items-grid">
                <For
                    each=move || store.catalog().get()
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        let is_selected = move || store.form().read().items.contains(id);
                        view! {
                            <li
                                class=move || if is_selected() { "selected" } else { "" }
                                on:click=move |_| store.form().write().on_item_toggle(id)
                            >
                                <img src=item.image_url.clone() alt=item.title.clone() />
                                <span>{item.title.clone()}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </fieldset>
    }
}
