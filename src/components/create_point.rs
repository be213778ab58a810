//! Create Point Page
//!
//! Registration form for a new collection point. Loads the item catalog,
//! the province list and the device position on mount, then posts the
//! composed record and returns to the landing page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;
use point_form::ProvinceChange;

use crate::components::{AddressFields, ContactFields, ItemGrid, PageHeader};
use crate::context::AppContext;
use crate::store::{
    store_apply_cities, store_finish_submission, store_load_catalog, store_load_provinces,
    store_set_initial_position, CreatePointState, CreatePointStateStoreFields,
};

pub const SUCCESS_MESSAGE: &str = "Collection point created!";

/// Show the blocking confirmation; a failing alert is logged, not fatal
fn confirm_success<E: std::fmt::Debug>(alert: impl FnOnce(&str) -> Result<(), E>) -> bool {
    match alert(SUCCESS_MESSAGE) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("[CREATE_POINT] Confirmation alert failed: {:?}", e);
            false
        }
    }
}

#[component]
pub fn CreatePoint() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = Store::new(CreatePointState::new(ctx.config.fallback_center));
    provide_context(store);

    let api = ctx.config.api_client();
    let reference = ctx.config.reference_data();
    let navigate = use_navigate();

    // Device position, once on mount
    let location = ctx.location.clone();
    Effect::new(move |_| {
        let location = location.clone();
        spawn_local(async move {
            match location.current().await {
                Ok(position) => {
                    log::debug!("[CREATE_POINT] Device at {}, {}", position.latitude, position.longitude);
                    store_set_initial_position(&store, position);
                }
                Err(e) => log::warn!("[CREATE_POINT] {}", e),
            }
        });
    });

    // Item catalog, once on mount
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                store_load_catalog(&store, api.list_items()).await;
            });
        });
    }

    // Provinces, once on mount; independent of the catalog request
    {
        let reference = reference.clone();
        Effect::new(move |_| {
            let reference = reference.clone();
            spawn_local(async move {
                store_load_provinces(&store, reference.provinces()).await;
            });
        });
    }

    // A shown validation error follows the input until it is fixed
    Effect::new(move |_| {
        let shown = store.validation_error().get_untracked();
        let next = store.form().read().recheck(shown);
        if next != shown {
            *store.validation_error().write() = next;
        }
    });

    // Province change resets the city and refetches the city list;
    // responses of superseded requests are dropped
    let on_province_change = Callback::new(move |value: String| {
        let change = store.form().write().on_province_change(&value);
        match change {
            ProvinceChange::Unchanged => {}
            ProvinceChange::Cleared => {
                store.city_requests().write().cancel();
                store.cities().write().clear();
            }
            ProvinceChange::FetchCities(province) => {
                let token = store.city_requests().write().begin();
                store.cities().write().clear();
                let reference = reference.clone();
                spawn_local(async move {
                    match reference.cities(&province).await {
                        Ok(cities) => {
                            if !store_apply_cities(&store, token, cities) {
                                log::debug!("[CREATE_POINT] Dropped stale cities of {}", province);
                            }
                        }
                        Err(e) => log::warn!("[CREATE_POINT] Failed to load cities of {}: {}", province, e),
                    }
                });
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let assembled = store.form().read().submission();
        let submission = match assembled {
            Ok(submission) => submission,
            Err(e) => {
                *store.validation_error().write() = Some(e);
                return;
            }
        };
        *store.validation_error().write() = None;

        if !store.submission().write().start() {
            log::debug!("[CREATE_POINT] Submission already in flight");
            return;
        }

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api.create_point(&submission).await;
            let succeeded = result.is_ok();
            store_finish_submission(&store, result);
            if succeeded {
                confirm_success(|msg| window().alert_with_message(msg));
                navigate("/", Default::default());
            }
        });
    };

    let form_error = move || {
        let validation = store.validation_error().get().map(|e| e.to_string());
        let failure = store.submission().read().error().map(|reason| reason.to_string());
        validation.or(failure).map(|msg| view! { <p class="form-error">{msg}</p> })
    };

    view! {
        <div id="page-create-point">
            <PageHeader back_link=true />

            <form on:submit=on_submit>
                <h1>"Collection Point Registration"</h1>

                <ContactFields />

                <AddressFields config=ctx.config.clone() on_province_change=on_province_change />

                <ItemGrid />

                {form_error}

                <button type="submit" disabled=move || store.submission().read().is_submitting()>
                    {move || {
                        if store.submission().read().is_submitting() {
                            "Registering..."
                        } else {
                            "Register collection point"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
