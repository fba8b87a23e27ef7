//! About page component.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About"</h1>
            <p>"A two-page front-end rendered with Leptos."</p>
        </div>
    }
}
