//! Create Point Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store is
//! created per mount of the registration page and dropped on navigation.

use std::future::Future;

use leptos::prelude::*;
use reactive_stores::Store;
use point_form::{
    CityRequests, Coordinates, Item, PointForm, RequestToken, SubmissionState, ValidationError,
};

/// Registration page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CreatePointState {
    /// Residue catalog from the backend
    pub catalog: Vec<Item>,
    /// Province names in source order
    pub provinces: Vec<String>,
    /// Sorted cities of the selected province
    pub cities: Vec<String>,
    /// Map center; geolocation result or the configured fallback
    pub initial_position: Coordinates,
    /// User input
    pub form: PointForm,
    /// Sequence tokens for in-flight city requests
    pub city_requests: CityRequests,
    /// Last failed validation, cleared on the next attempt
    pub validation_error: Option<ValidationError>,
    pub submission: SubmissionState,
}

impl CreatePointState {
    pub fn new(initial_position: Coordinates) -> Self {
        Self {
            initial_position,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type CreatePointStore = Store<CreatePointState>;

/// Get the page store from context
pub fn use_create_point_store() -> CreatePointStore {
    expect_context::<CreatePointStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// These run from async tasks that may resolve after the page unmounted,
// so they use the fallible accessors.

/// Replace the item catalog
pub fn store_set_catalog(store: &CreatePointStore, items: Vec<Item>) {
    if let Some(mut catalog) = store.catalog().try_write() {
        *catalog = items;
    }
}

/// Replace the province list
pub fn store_set_provinces(store: &CreatePointStore, names: Vec<String>) {
    if let Some(mut provinces) = store.provinces().try_write() {
        *provinces = names;
    }
}

/// Await the catalog request and store its result.
/// A failure leaves the catalog empty.
pub async fn store_load_catalog<E: std::fmt::Display>(
    store: &CreatePointStore,
    request: impl Future<Output = Result<Vec<Item>, E>>,
) {
    match request.await {
        Ok(items) => {
            log::info!("[CREATE_POINT] Loaded {} items", items.len());
            store_set_catalog(store, items);
        }
        Err(e) => log::warn!("[CREATE_POINT] Failed to load items: {}", e),
    }
}

/// Await the province request and store its result.
/// A failure leaves the province list empty.
pub async fn store_load_provinces<E: std::fmt::Display>(
    store: &CreatePointStore,
    request: impl Future<Output = Result<Vec<String>, E>>,
) {
    match request.await {
        Ok(names) => store_set_provinces(store, names),
        Err(e) => log::warn!("[CREATE_POINT] Failed to load provinces: {}", e),
    }
}

/// Recenter the map on the device position
pub fn store_set_initial_position(store: &CreatePointStore, position: Coordinates) {
    if let Some(mut initial) = store.initial_position().try_write() {
        *initial = position;
    }
}

/// Apply a city list only if `token` belongs to the latest request.
/// Returns false for stale responses.
pub fn store_apply_cities(store: &CreatePointStore, token: RequestToken, names: Vec<String>) -> bool {
    let is_current = store
        .city_requests()
        .try_read()
        .map(|requests| requests.is_current(token))
        .unwrap_or(false);
    if !is_current {
        return false;
    }
    if let Some(mut cities) = store.cities().try_write() {
        *cities = names;
    }
    true
}

/// Record the outcome of `POST /points`
pub fn store_finish_submission<E: std::fmt::Display>(store: &CreatePointStore, result: Result<(), E>) {
    if let Some(mut submission) = store.submission().try_write() {
        submission.finish(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    fn poll_once<F: Future>(future: F) -> Poll<F::Output> {
        let mut future = pin!(future);
        future.as_mut().poll(&mut Context::from_waker(Waker::noop()))
    }

    fn item(id: u32) -> Item {
        Item {
            id,
            title: format!("Item {}", id),
            image_url: format!("http://localhost:3333/uploads/{}.svg", id),
        }
    }

    #[test]
    fn test_stale_cities_are_dropped() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(CreatePointState::default());

        let ontario = store.city_requests().write().begin();
        let quebec = store.city_requests().write().begin();

        // Quebec answers first, then the superseded Ontario request
        assert!(store_apply_cities(&store, quebec, vec!["Laval".to_string()]));
        assert!(!store_apply_cities(&store, ontario, vec!["Toronto".to_string()]));
        assert_eq!(store.cities().get_untracked(), vec!["Laval".to_string()]);

        store.city_requests().write().cancel();
        assert!(!store_apply_cities(&store, quebec, vec!["Montreal".to_string()]));
        assert_eq!(store.cities().get_untracked(), vec!["Laval".to_string()]);
    }

    #[test]
    fn test_provinces_load_while_catalog_hangs() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(CreatePointState::default());

        let catalog = poll_once(store_load_catalog(
            &store,
            std::future::pending::<Result<Vec<Item>, String>>(),
        ));
        assert!(catalog.is_pending());

        let provinces = poll_once(store_load_provinces(
            &store,
            std::future::ready(Ok::<_, String>(vec!["Ontario".to_string(), "Quebec".to_string()])),
        ));
        assert!(provinces.is_ready());

        assert!(store.catalog().get_untracked().is_empty());
        assert_eq!(store.provinces().get_untracked(), vec!["Ontario", "Quebec"]);
    }

    #[test]
    fn test_failed_load_leaves_list_empty() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(CreatePointState::default());

        let done = poll_once(store_load_catalog(
            &store,
            std::future::ready(Err::<Vec<Item>, _>("HTTP 500: Internal Server Error")),
        ));
        assert!(done.is_ready());
        assert!(store.catalog().get_untracked().is_empty());

        let done = poll_once(store_load_catalog(&store, std::future::ready(Ok::<_, String>(vec![item(1), item(2)]))));
        assert!(done.is_ready());
        assert_eq!(store.catalog().get_untracked().len(), 2);
    }
}
