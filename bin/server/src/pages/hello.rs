//! Hello page component.

use leptos::prelude::*;

/// Landing page.
#[component]
pub fn HelloPage() -> impl IntoView {
    view! {
        <div class="hello-page">
            <h1>"Welcome to Your Signpost App"</h1>
            <p>"Pick a page from the navigation bar to get started."</p>
        </div>
    }
}
