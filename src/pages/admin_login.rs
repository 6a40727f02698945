//! Separate sign-in entry for platform staff.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::state::auth::AuthSession;

/// Admin login page. A lockout must read differently from a bad password
/// so staff know whether to wait or retype.
#[component]
pub fn AdminLoginPage() -> impl IntoView {
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
                match session
                    .admin_login(address.trim(), &password.get_untracked())
                    .await
                {
                    Ok(_) => navigate("/admin", NavigateOptions::default()),
                    Err(ApiError::RateLimited) => {
                        error.set(Some("Account locked. Please wait 5 minutes.".to_owned()));
                        submitting.set(false);
                    }
                    Err(_) => {
                        error.set(Some("Invalid admin credentials".to_owned()));
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
        <div class="auth-page auth-page--admin">
            <div class="auth-page__card">
                <span class="auth-page__badge">"Admin Access"</span>
                <h1>"Admin Login"</h1>
                <p class="auth-page__subtitle">"Secure access to the Build Launch admin panel."</p>
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
            </div>
        </div>
    }
}
