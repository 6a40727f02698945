//! Email/password sign-in for homeowners and contractors.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthSession;

/// Login page. On success the visitor lands on their role's dashboard;
/// failures are shown inline and leave the session untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            submitting.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let address = email.get_untracked();
                match session.login(address.trim(), &password.get_untracked()).await {
                    Ok(user) => {
                        navigate(user.user_type.dashboard_path(), NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
            let _ = &email;
            let _ = &password;
            let _ = &error;
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"Welcome Back"</h1>
                <p class="auth-page__subtitle">
                    "Sign in to manage your renovation projects and bids."
                </p>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-page__alt">
                    "New to Build Launch? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
