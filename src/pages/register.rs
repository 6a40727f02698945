//! Account signup with a homeowner/contractor role choice.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::error::{ApiError, FieldError};
use crate::net::types::{RegisterRequest, UserType};
use crate::state::auth::AuthSession;

/// Registration page. Field-level validation errors from the backend are
/// listed under the form; success signs the visitor in and lands them on
/// their new dashboard.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let user_type = RwSignal::new(UserType::Homeowner);
    let error = RwSignal::new(None::<String>);
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
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
            field_errors.set(Vec::new());
            let request = RegisterRequest {
                email: email.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
                full_name: full_name.get_untracked().trim().to_owned(),
                user_type: user_type.get_untracked(),
                phone: Some(phone.get_untracked().trim().to_owned()).filter(|p| !p.is_empty()),
            };
            leptos::task::spawn_local(async move {
                match session.register(&request).await {
                    Ok(user) => {
                        navigate(user.user_type.dashboard_path(), NavigateOptions::default());
                    }
                    Err(ApiError::Validation(fields)) => {
                        field_errors.set(fields);
                        submitting.set(false);
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
            let _ = &error;
            let _ = &field_errors;
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"Create Your Account"</h1>
                <p class="auth-page__subtitle">
                    "Post renovation jobs or bid on them. Payments stay in escrow until the work is done."
                </p>
                <div class="auth-page__roles">
                    <button
                        class="btn"
                        class:btn--primary=move || user_type.get() == UserType::Homeowner
                        on:click=move |_| user_type.set(UserType::Homeowner)
                    >
                        "I need work done"
                    </button>
                    <button
                        class="btn"
                        class:btn--primary=move || user_type.get() == UserType::Contractor
                        on:click=move |_| user_type.set(UserType::Contractor)
                    >
                        "I'm a contractor"
                    </button>
                </div>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                {move || {
                    let errors = field_errors.get();
                    (!errors.is_empty()).then(|| view! {
                        <ul class="form-error">
                            {errors
                                .into_iter()
                                .map(|e| view! { <li>{format!("{}: {}", e.field, e.message)}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    })
                }}
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <label class="form__label">
                        "Full Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
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
                        "Phone (optional)"
                        <input
                            class="form__input"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            placeholder="At least 8 characters with letters and numbers"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-page__alt">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
