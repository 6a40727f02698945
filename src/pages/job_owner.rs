//! Owner's side of the job detail page.
//!
//! Everything here is gated on the visitor being the posting homeowner:
//! funding the escrow, reviewing and accepting bids, releasing the payment,
//! editing or withdrawing an open listing, and leaving the review once the
//! work is done.

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Bid, Job, JobStatus, JobUpdate, NewReview};
use crate::state::auth::AuthSession;

/// Controls for the owning homeowner, keyed off the job status: fund the
/// escrow while open, accept a bid once funded, release once awarded,
/// review once completed.
#[component]
pub fn OwnerPanel(
    job: Job,
    job_resource: LocalResource<Result<Job, ApiError>>,
    bids: LocalResource<Vec<Bid>>,
) -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let release_note = RwSignal::new(None::<String>);
    let editing = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let job_id = job.id.clone();
    let status = job.status;
    let escrow_amount = job.budget_max;
    let contractor_id = job.awarded_contractor_id.clone();
    let review_target = job.awarded_contractor_id.clone();
    let edit_job = job.clone();

    let fund_escrow = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let job_id = job_id.clone();
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                let origin = web_sys::window()
                    .and_then(|w| w.location().origin().ok())
                    .unwrap_or_default();
                match api::create_escrow_checkout(&token, &job_id, &origin).await {
                    Ok(checkout) => {
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href(&checkout.checkout_url);
                        }
                    }
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&job_id, &session, &error);
        }
    });

    let delete_job_id = job.id.clone();
    let delete = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            let navigate = navigate.clone();
            let job_id = delete_job_id.clone();
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::delete_job(&token, &job_id).await {
                    Ok(_) => navigate("/dashboard", NavigateOptions::default()),
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&delete_job_id, &session, &error);
        }
    });

    let accept = Callback::new(move |bid_id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::accept_bid(&token, &bid_id).await {
                    Ok(_) => {
                        job_resource.refetch();
                        bids.refetch();
                    }
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (bid_id, &job_resource, &bids, &session, &error);
        }
    });

    let release_job_id = job.id.clone();
    let release = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let job_id = release_job_id.clone();
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::release_payment(&token, &job_id).await {
                    Ok(outcome) => {
                        release_note.set(Some(format!(
                            "Payment released! Contractor receives ${:.0}",
                            outcome.contractor_payout
                        )));
                        job_resource.refetch();
                    }
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&release_job_id, &job_resource, &session, &error, &release_note);
        }
    });

    view! {
        <section class="owner-panel">
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            {move || release_note.get().map(|note| view! { <p class="owner-panel__note">{note}</p> })}

            {match status {
                JobStatus::Open => view! {
                    <div class="owner-panel__escrow">
                        <p>
                            "Fund the escrow to start accepting bids. The hold amount is your \
                             budget ceiling and is only released when you confirm completion."
                        </p>
                        <div class="owner-panel__actions">
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=move |_| fund_escrow.run(())
                            >
                                {format!("Fund Escrow (${escrow_amount:.0})")}
                            </button>
                            <button class="btn" on:click=move |_| editing.update(|e| *e = !*e)>
                                {move || if editing.get() { "Close Editor" } else { "Edit Listing" }}
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=move |_| delete.run(())
                            >
                                "Delete Job"
                            </button>
                        </div>
                        <Show when=move || editing.get()>
                            {
                                let job = edit_job.clone();
                                view! {
                                    <EditListingForm job=job job_resource=job_resource editing=editing/>
                                }
                            }
                        </Show>
                    </div>
                }
                .into_any(),
                JobStatus::Awarded => view! {
                    <div class="owner-panel__release">
                        <p>"Work awarded. Release the payment once you've confirmed completion."</p>
                        <button
                            class="btn btn--primary"
                            disabled=move || busy.get()
                            on:click=move |_| release.run(())
                        >
                            "Release Payment"
                        </button>
                        {contractor_id.as_ref().map(|id| {
                            let href = format!("/messages/{id}");
                            view! { <a class="btn" href=href>"Message Contractor"</a> }
                        })}
                    </div>
                }
                .into_any(),
                JobStatus::Completed => view! {
                    <p class="owner-panel__done">"This job is completed and paid out."</p>
                    {review_target.clone().map(|contractor_id| view! {
                        <ReviewForm job_id=job.id.clone() contractor_id=contractor_id/>
                    })}
                }
                .into_any(),
                _ => ().into_any(),
            }}

            <h2>"Bids"</h2>
            <Suspense fallback=move || view! { <p>"Loading bids..."</p> }>
                {move || {
                    bids.get().map(|list| {
                        if list.is_empty() {
                            return view! { <p>"No bids yet."</p> }.into_any();
                        }
                        let accepting = status == JobStatus::InEscrow;
                        view! {
                            <div class="owner-panel__bids">
                                {list
                                    .into_iter()
                                    .map(|bid| bid_card(bid, accepting, accept))
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    })
                }}
            </Suspense>
        </section>
    }
}

fn bid_card(bid: Bid, accepting: bool, accept: Callback<String>) -> impl IntoView {
    let bid_id = bid.id.clone();
    let message_href = format!("/messages/{}", bid.contractor_id);
    view! {
        <div class="bid-card">
            <div class="bid-card__top">
                <span class="bid-card__name">{bid.contractor_name}</span>
                <span class="bid-card__amount">{format!("${:.0}", bid.amount)}</span>
            </div>
            <p class="bid-card__meta">
                {format!("{} days", bid.estimated_days)} " · " {bid.status.label()}
            </p>
            <p class="bid-card__message">{bid.message}</p>
            <div class="bid-card__actions">
                <a class="btn" href=message_href>"Message"</a>
                <Show when=move || accepting>
                    {
                        let bid_id = bid_id.clone();
                        view! {
                            <button
                                class="btn btn--primary"
                                on:click=move |_| accept.run(bid_id.clone())
                            >
                                "Accept Bid"
                            </button>
                        }
                    }
                </Show>
            </div>
        </div>
    }
}

/// Inline editor for an open listing. Only the fields a homeowner would
/// realistically adjust after posting; category and location stay fixed.
#[component]
fn EditListingForm(
    job: Job,
    job_resource: LocalResource<Result<Job, ApiError>>,
    editing: RwSignal<bool>,
) -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let title = RwSignal::new(job.title.clone());
    let description = RwSignal::new(job.description.clone());
    let budget_min = RwSignal::new(format!("{:.0}", job.budget_min));
    let budget_max = RwSignal::new(format!("{:.0}", job.budget_max));
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let job_id = job.id.clone();

    let save = Callback::new(move |()| {
        if saving.get() {
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
            let job_id = job_id.clone();
            saving.set(true);
            error.set(None);
            let updates = JobUpdate {
                title: Some(title.get_untracked().trim().to_owned()),
                description: Some(description.get_untracked().trim().to_owned()),
                budget_min: Some(min),
                budget_max: Some(max),
                ..JobUpdate::default()
            };
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::update_job(&token, &job_id, &updates).await {
                    Ok(_) => {
                        job_resource.refetch();
                        editing.set(false);
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
            let _ = (min, max);
            let _ = (&job_id, &job_resource, &session, &title, &description, &editing);
        }
    });

    view! {
        <form
            class="owner-panel__edit"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                save.run(());
            }
        >
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
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
            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
            </button>
        </form>
    }
}

/// Post-completion review form. The backend enforces one review per job,
/// so a repeat submit comes back as a conflict and is shown as-is.
#[component]
fn ReviewForm(job_id: String, contractor_id: String) -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let rating = RwSignal::new("5".to_owned());
    let comment = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        let Ok(stars) = rating.get().parse::<u8>() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let review = NewReview {
                contractor_id: contractor_id.clone(),
                job_id: job_id.clone(),
                rating: stars,
                comment: comment.get_untracked().trim().to_owned(),
            };
            submitting.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::create_review(&token, &review).await {
                    Ok(_) => submitted.set(true),
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
            let _ = stars;
            let _ = (&job_id, &contractor_id, &session, &comment, &submitted, &error);
        }
    });

    view! {
        <div class="review-form">
            <Show
                when=move || !submitted.get()
                fallback=|| view! { <p class="review-form__done">"Thanks for the review!"</p> }
            >
                <h3>"Rate the Contractor"</h3>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <label class="form__label">
                        "Rating"
                        <select
                            class="form__input"
                            on:change=move |ev| rating.set(event_target_value(&ev))
                        >
                            <option value="5" selected>"5 - Excellent"</option>
                            <option value="4">"4 - Good"</option>
                            <option value="3">"3 - Fair"</option>
                            <option value="2">"2 - Poor"</option>
                            <option value="1">"1 - Bad"</option>
                        </select>
                    </label>
                    <label class="form__label">
                        "Comment"
                        <textarea
                            class="form__input"
                            prop:value=move || comment.get()
                            on:input=move |ev| comment.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
