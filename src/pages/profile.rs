//! Account profile: contact basics for everyone, verification details for
//! contractors.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{UserType, Verification};
use crate::state::auth::{AuthSession, UserUpdate};

/// Profile page. Saves merge back into the shared session user, so the
/// navbar and guard see the same data without a refetch.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    // The guard only renders this page once a user is present.
    let user = session.current_user();

    let full_name = RwSignal::new(
        user.as_ref()
            .map(|u| u.full_name.clone())
            .unwrap_or_default(),
    );
    let phone = RwSignal::new(user.as_ref().and_then(|u| u.phone.clone()).unwrap_or_default());
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let is_contractor = user.as_ref().map(|u| u.user_type) == Some(UserType::Contractor);

    let saved = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = Callback::new(move |()| {
        if saving.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            saved.set(false);
            error.set(None);
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                let name = full_name.get_untracked().trim().to_owned();
                let phone_value = phone.get_untracked().trim().to_owned();
                let phone_opt = Some(phone_value.as_str()).filter(|p| !p.is_empty());
                match api::update_profile(&token, &name, phone_opt).await {
                    Ok(updated) => {
                        session.update_user(UserUpdate {
                            full_name: Some(updated.full_name),
                            phone: updated.phone,
                            ..UserUpdate::default()
                        });
                        saved.set(true);
                    }
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &full_name, &phone, &saved, &error);
        }
    });

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <p class="profile-page__email">{email}</p>
            {move || {
                session.state.get().user.filter(|u| u.verified).map(|_| view! {
                    <span class="profile-page__badge">"Verified"</span>
                })
            }}

            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            {move || saved.get().then(|| view! { <p class="profile-page__saved">"Profile saved."</p> })}

            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                save.run(());
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
                    "Phone"
                    <input
                        class="form__input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                </button>
            </form>

            <Show when=move || is_contractor>
                <VerificationForm/>
            </Show>
        </div>
    }
}

/// Contractor credential form. A license number plus insurance details is
/// what flips the verified flag on the backend.
#[component]
fn VerificationForm() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let existing = session
        .current_user()
        .and_then(|u| u.verification)
        .unwrap_or_default();

    let license = RwSignal::new(existing.license_number.unwrap_or_default());
    let insurance = RwSignal::new(existing.insurance_info.unwrap_or_default());
    let company = RwSignal::new(existing.company_name.unwrap_or_default());
    let years = RwSignal::new(
        existing
            .years_experience
            .map(|y| y.to_string())
            .unwrap_or_default(),
    );
    let specialties = RwSignal::new(existing.specialties.unwrap_or_default().join(", "));

    let note = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if saving.get() {
            return;
        }
        let years_value = years.get().trim().to_owned();
        let years_experience = if years_value.is_empty() {
            None
        } else {
            match years_value.parse::<u32>() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    error.set(Some("Years of experience must be a number".to_owned()));
                    return;
                }
            }
        };
        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            error.set(None);
            note.set(None);
            let verification = Verification {
                license_number: Some(license.get_untracked().trim().to_owned())
                    .filter(|v| !v.is_empty()),
                insurance_info: Some(insurance.get_untracked().trim().to_owned())
                    .filter(|v| !v.is_empty()),
                company_name: Some(company.get_untracked().trim().to_owned())
                    .filter(|v| !v.is_empty()),
                years_experience,
                specialties: Some(
                    specialties
                        .get_untracked()
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_owned)
                        .collect::<Vec<_>>(),
                )
                .filter(|list: &Vec<String>| !list.is_empty()),
            };
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::update_verification(&token, &verification).await {
                    Ok(ack) => {
                        session.update_user(UserUpdate {
                            verified: Some(ack.verified),
                            verification: Some(verification.clone()),
                            ..UserUpdate::default()
                        });
                        note.set(Some(if ack.verified {
                            "You're verified. Bidding is unlocked.".to_owned()
                        } else {
                            "Details saved. A license number and insurance info are required \
                             for verification."
                                .to_owned()
                        }));
                    }
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = years_experience;
            let _ = (&session, &license, &insurance, &company, &specialties, &note);
        }
    });

    view! {
        <section class="verification-form">
            <h2>"Contractor Verification"</h2>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            {move || note.get().map(|message| view! { <p class="verification-form__note">{message}</p> })}
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }>
                <label class="form__label">
                    "License Number"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || license.get()
                        on:input=move |ev| license.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Insurance Info"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || insurance.get()
                        on:input=move |ev| insurance.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Company Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || company.get()
                        on:input=move |ev| company.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Years of Experience"
                    <input
                        class="form__input"
                        type="number"
                        prop:value=move || years.get()
                        on:input=move |ev| years.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Specialties (comma separated)"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Kitchen Renovation, Flooring"
                        prop:value=move || specialties.get()
                        on:input=move |ev| specialties.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Submitting..." } else { "Submit for Verification" }}
                </button>
            </form>
        </section>
    }
}
