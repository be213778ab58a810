use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div id="page-not-found">
            <h1>"Page not found"</h1>
            <A href="/">"Go back home"</A>
        </div>
    }
}
