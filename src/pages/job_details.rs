//! Job detail page.
//!
//! Public visitors see the listing; the owning homeowner gets the escrow
//! funding, bid review, and payment release controls; contractors get the
//! bid form while the job still accepts bids.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Bid, Job, NewBid, UserType};
use crate::state::auth::AuthSession;

use super::job_owner::OwnerPanel;

#[component]
pub fn JobDetailsPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let params = use_params_map();

    let job = LocalResource::new(move || {
        let job_id = params.read().get("jobId");
        async move {
            let Some(job_id) = job_id else {
                return Err(ApiError::NotFound("Job not found".to_owned()));
            };
            api::fetch_job(&job_id).await
        }
    });

    // The backend only shows bids to the job's homeowner; anyone else gets
    // an empty list here and no bids section.
    let bids = LocalResource::new(move || {
        let state = session.state.get();
        let job_id = params.read().get("jobId");
        async move {
            let (Some(token), Some(job_id)) = (state.token, job_id) else {
                return Vec::new();
            };
            if state.user.as_ref().map(|u| u.user_type) != Some(UserType::Homeowner) {
                return Vec::new();
            }
            match api::job_bids(&token, &job_id).await {
                Ok(bids) => bids,
                Err(err) => {
                    session.handle_unauthorized(&err);
                    Vec::new()
                }
            }
        }
    });

    view! {
        <div class="job-page">
            <Suspense fallback=move || view! { <p>"Loading job..."</p> }>
                {move || {
                    job.get().map(|result| match result {
                        Err(err) => view! { <p class="form-error">{err.to_string()}</p> }.into_any(),
                        Ok(loaded) => view! {
                            <JobView job=loaded job_resource=job bids=bids/>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn JobView(
    job: Job,
    job_resource: LocalResource<Result<Job, ApiError>>,
    bids: LocalResource<Vec<Bid>>,
) -> impl IntoView {
    let session = expect_context::<AuthSession>();

    let budget = format!("${:.0} - ${:.0}", job.budget_min, job.budget_max);
    let posted_by = job.homeowner_name.clone();
    let role_job = job.clone();

    let role_section = move || {
        let state = session.state.get();
        let job = role_job.clone();
        match state.user {
            None => view! {
                <p class="job-page__prompt">
                    <a href="/login">"Sign in"</a> " to bid on this job or contact the homeowner."
                </p>
            }
            .into_any(),
            Some(user) if user.id == job.homeowner_id => view! {
                <OwnerPanel job=job job_resource=job_resource bids=bids/>
            }
            .into_any(),
            Some(user) if user.user_type == UserType::Contractor => view! {
                <ContractorPanel job=job job_resource=job_resource/>
            }
            .into_any(),
            Some(_) => ().into_any(),
        }
    };

    view! {
        <article class="job-page__detail">
            <header class="job-page__header">
                <h1>{job.title}</h1>
                <span class="job-page__status">{job.status.label()}</span>
            </header>
            <p class="job-page__meta">
                {job.category} " · " {job.location} " · Posted by " {posted_by}
            </p>
            <p class="job-page__budget">{budget}</p>
            {job.start_date.map(|date| view! {
                <p class="job-page__start">"Preferred start: " {date}</p>
            })}
            <p class="job-page__description">{job.description}</p>
            {job.awarded_contractor_id.clone().map(|contractor_id| view! {
                <ContractorSummary contractor_id=contractor_id/>
            })}
            {role_section}
        </article>
    }
}

/// Public snapshot of the awarded contractor: rating aggregates and job
/// history, so anyone viewing the listing can see who won it.
#[component]
fn ContractorSummary(contractor_id: String) -> impl IntoView {
    let profile = LocalResource::new(move || {
        let contractor_id = contractor_id.clone();
        async move { api::contractor_profile(&contractor_id).await.ok() }
    });

    view! {
        <Suspense fallback=|| ()>
            {move || {
                profile.get().flatten().map(|profile| {
                    let rating = if profile.total_reviews == 0 {
                        "No reviews yet".to_owned()
                    } else {
                        format!(
                            "{:.1} / 5 ({} review{})",
                            profile.average_rating,
                            profile.total_reviews,
                            if profile.total_reviews == 1 { "" } else { "s" }
                        )
                    };
                    view! {
                        <aside class="contractor-summary">
                            <span class="contractor-summary__name">
                                "Awarded to " {profile.user.full_name.clone()}
                            </span>
                            {profile.user.verified.then(|| view! {
                                <span class="contractor-summary__badge">"Verified"</span>
                            })}
                            <span class="contractor-summary__rating">{rating}</span>
                            <span class="contractor-summary__jobs">
                                {format!("{} completed job{}",
                                    profile.completed_jobs,
                                    if profile.completed_jobs == 1 { "" } else { "s" })}
                            </span>
                        </aside>
                    }
                })
            }}
        </Suspense>
    }
}

/// Bid form shown to contractors while the job accepts bids.
#[component]
fn ContractorPanel(job: Job, job_resource: LocalResource<Result<Job, ApiError>>) -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let amount = RwSignal::new(String::new());
    let days = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let homeowner_href = format!("/messages/{}", job.homeowner_id);
    let job_id = job.id.clone();
    let accepts_bids = job.status.accepts_bids();

    let submit = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        let (Ok(bid_amount), Ok(estimated_days)) = (
            amount.get().trim().parse::<f64>(),
            days.get().trim().parse::<u32>(),
        ) else {
            error.set(Some("Enter a numeric amount and day estimate".to_owned()));
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let job_id = job_id.clone();
            submitting.set(true);
            error.set(None);
            let bid = NewBid {
                amount: bid_amount,
                message: message.get_untracked().trim().to_owned(),
                estimated_days,
            };
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::create_bid(&token, &job_id, &bid).await {
                    Ok(_) => {
                        submitted.set(true);
                        job_resource.refetch();
                    }
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (bid_amount, estimated_days);
            let _ = (&job_id, &job_resource, &session, &message, &submitted);
        }
    });

    view! {
        <section class="bid-form">
            <p class="job-page__prompt">
                <a href=homeowner_href>"Message the homeowner"</a> " with any questions."
            </p>
            <Show
                when=move || accepts_bids && !submitted.get()
                fallback=move || {
                    if submitted.get() {
                        view! { <p class="bid-form__done">"Bid submitted. Good luck!"</p> }
                            .into_any()
                    } else {
                        view! { <p>"This job is no longer accepting bids."</p> }.into_any()
                    }
                }
            >
                <h2>"Place a Bid"</h2>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <div class="form__row">
                        <label class="form__label">
                            "Amount (CAD)"
                            <input
                                class="form__input"
                                type="number"
                                prop:value=move || amount.get()
                                on:input=move |ev| amount.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "Estimated Days"
                            <input
                                class="form__input"
                                type="number"
                                prop:value=move || days.get()
                                on:input=move |ev| days.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="form__label">
                        "Message to the Homeowner"
                        <textarea
                            class="form__input"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting..." } else { "Submit Bid" }}
                    </button>
                </form>
            </Show>
        </section>
    }
}
