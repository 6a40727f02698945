//! Router fallback for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"That page doesn't exist."</p>
            <a class="btn btn--primary" href="/">"Back to Home"</a>
        </div>
    }
}
