//! Job posting form for homeowners.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::NewJob;
use crate::state::auth::AuthSession;

/// Post-job page. Budget fields are validated locally before the backend
/// sees them; success navigates straight to the new job's page.
#[component]
pub fn PostJobPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let budget_min = RwSignal::new(String::new());
    let budget_max = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let categories = LocalResource::new(|| async { api::categories().await.unwrap_or_default() });
    let locations = LocalResource::new(|| async { api::locations().await.unwrap_or_default() });

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        let (Ok(min), Ok(max)) = (
            budget_min.get().trim().parse::<f64>(),
            budget_max.get().trim().parse::<f64>(),
        ) else {
            error.set(Some("Enter a numeric budget range".to_owned()));
            return;
        };
        if min > max {
            error.set(Some("The minimum budget exceeds the maximum".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            submitting.set(true);
            error.set(None);
            let job = NewJob {
                title: title.get_untracked().trim().to_owned(),
                description: description.get_untracked().trim().to_owned(),
                location: location.get_untracked(),
                category: category.get_untracked(),
                budget_min: min,
                budget_max: max,
                start_date: Some(start_date.get_untracked()).filter(|d| !d.is_empty()),
                images: Vec::new(),
            };
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::create_job(&token, &job).await {
                    Ok(created) => {
                        navigate(&format!("/jobs/{}", created.id), NavigateOptions::default());
                    }
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (min, max);
            let _ = &session;
        }
    });

    view! {
        <div class="post-job-page">
            <h1>"Post a Job"</h1>
            <p class="post-job-page__subtitle">
                "Describe the work and your budget. Contractors bid, you choose."
            </p>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }>
                <label class="form__label">
                    "Title"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Description"
                    <textarea
                        class="form__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__label">
                    "Category"
                    <select
                        class="form__input"
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a category"</option>
                        {move || {
                            categories.get().map(|list| {
                                list.into_iter()
                                    .map(|c| view! { <option value=c.clone()>{c}</option> })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </select>
                </label>
                <label class="form__label">
                    "Location"
                    <select
                        class="form__input"
                        on:change=move |ev| location.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a location"</option>
                        {move || {
                            locations.get().map(|list| {
                                list.into_iter()
                                    .map(|l| view! { <option value=l.clone()>{l}</option> })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </select>
                </label>
                <div class="form__row">
                    <label class="form__label">
                        "Budget From (CAD)"
                        <input
                            class="form__input"
                            type="number"
                            prop:value=move || budget_min.get()
                            on:input=move |ev| budget_min.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Budget To (CAD)"
                        <input
                            class="form__input"
                            type="number"
                            prop:value=move || budget_max.get()
                            on:input=move |ev| budget_max.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="form__label">
                    "Preferred Start Date (optional)"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Posting..." } else { "Post Job" }}
                </button>
            </form>
        </div>
    }
}
