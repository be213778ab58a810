//! Home Page
//!
//! Landing page with the entry point to the registration form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::PageHeader;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div id="page-home">
            <div class="content">
                <PageHeader />

                <main>
                    <h1>"Your marketplace for residue collection"</h1>
                    <p>"We help people find collection points all around Canada efficiently."</p>

                    <A href="/create-point">
                        <span class="icon">"→"</span>
                        <strong>"Register a Collection Point"</strong>
                    </A>
                </main>
            </div>
        </div>
    }
}
