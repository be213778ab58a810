//! Page Header Component
//!
//! Logo bar with an optional link back to the landing page.

use leptos::prelude::*;
use leptos_router::components::A;

pub const LOGO_SRC: &str = "/assets/logo.svg";

/// Header shown at the top of every page
#[component]
pub fn PageHeader(
    /// Show the "Go back home" link
    #[prop(optional)] back_link: bool,
) -> impl IntoView {
    view! {
        <header>
            <img src=LOGO_SRC alt="Ecollection" />
            <Show when=move || back_link>
                <A href="/">
                    <span class="icon">"←"</span>
                    "Go back home"
                </A>
            </Show>
        </header>
    }
}
