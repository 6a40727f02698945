//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__links">
                <a href="/browse-jobs">"Browse Jobs"</a>
                <a href="/register">"Become a Contractor"</a>
                <a href="/contact">"Contact"</a>
            </div>
            <p class="footer__note">
                "Build Launch: renovation projects with payments held in escrow until the work is done."
            </p>
        </footer>
    }
}
