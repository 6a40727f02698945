//! Top navigation bar, auth-aware.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthSession;

/// Site-wide navigation.
///
/// Public links always show; the right side switches between sign-in
/// calls to action and the signed-in user's shortcuts.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        session.logout();
        navigate("/", NavigateOptions::default());
    });

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"Build Launch"</a>
            <div class="navbar__links">
                <a href="/browse-jobs">"Browse Jobs"</a>
                <a href="/contact">"Contact"</a>
            </div>
            <span class="navbar__spacer"></span>
            {move || match session.state.get().user {
                Some(user) => view! {
                    <div class="navbar__links">
                        <a href=user.user_type.dashboard_path()>"Dashboard"</a>
                        <a href="/messages">"Messages"</a>
                        <a href="/profile">"Profile"</a>
                        <span class="navbar__user">{user.full_name.clone()}</span>
                        <button class="btn navbar__logout" on:click=move |_| on_logout.run(())>
                            "Logout"
                        </button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="navbar__links">
                        <a href="/login">"Sign In"</a>
                        <a href="/register" class="btn btn--primary">"Get Started"</a>
                    </div>
                }
                .into_any(),
            }}
        </nav>
    }
}
