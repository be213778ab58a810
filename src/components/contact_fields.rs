//! Contact Fields Component
//!
//! "Data" fieldset: entity name, e-mail and mobile number.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{use_create_point_store, CreatePointStateStoreFields};

#[component]
pub fn ContactFields() -> impl IntoView {
    let store = use_create_point_store();

    // Inputs are routed by their `name` attribute
    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        store.form().write().on_field_change(&input.name(), input.value());
    };

    view! {
        <fieldset>
            <legend>
                <h2>"Data"</h2>
            </legend>

            <div class="field">
                <label for="name">"Entity name"</label>
                <input
                    type="text"
                    name="name"
                    id="name"
                    prop:value=move || store.form().read().data.name.clone()
                    on:input=on_input
                />
            </div>

            <div class="field-group">
                <div class="field">
                    <label for="email">"E-mail"</label>
                    <input
                        type="email"
                        name="email"
                        id="email"
                        prop:value=move || store.form().read().data.email.clone()
                        on:input=on_input
                    />
                </div>
                <div class="field">
                    <label for="mobile">"Mobile number"</label>
                    <input
                        type="text"
                        name="mobile"
                        id="mobile"
                        prop:value=move || store.form().read().data.mobile.clone()
                        on:input=on_input
                    />
                </div>
            </div>
        </fieldset>
    }
}
