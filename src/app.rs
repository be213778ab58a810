//! Ecollection Frontend App
//!
//! Router with the landing page and the registration form.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{CreatePoint, Home, NotFound};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::geolocation::BrowserLocation;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all pages
    provide_context(AppContext::new(AppConfig::default(), Arc::new(BrowserLocation)));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/create-point") view=CreatePoint />
            </Routes>
        </Router>
    }
}
