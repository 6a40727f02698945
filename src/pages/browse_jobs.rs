//! Public job board with category and location filters.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::net::api;
use crate::net::types::JobFilters;

/// Browse page. Changing a filter refetches the list; everything here is
/// public, so no token is involved.
#[component]
pub fn BrowseJobsPage() -> impl IntoView {
    let category = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    let categories = LocalResource::new(|| async { api::categories().await.unwrap_or_default() });
    let locations = LocalResource::new(|| async { api::locations().await.unwrap_or_default() });

    // Reads the filter signals, so a change refetches.
    let jobs = LocalResource::new(move || {
        let filters = JobFilters {
            category: Some(category.get()).filter(|v| !v.is_empty()),
            location: Some(location.get()).filter(|v| !v.is_empty()),
            ..JobFilters::default()
        };
        async move {
            match api::list_jobs(&filters).await {
                Ok(jobs) => jobs,
                Err(err) => {
                    leptos::logging::warn!("job list failed: {err}");
                    Vec::new()
                }
            }
        }
    });

    view! {
        <div class="browse-page">
            <header class="browse-page__header">
                <h1>"Open Jobs"</h1>
                <div class="browse-page__filters">
                    <select
                        class="form__input"
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"All Categories"</option>
                        {move || {
                            categories.get().map(|list| {
                                list.into_iter()
                                    .map(|c| view! { <option value=c.clone()>{c}</option> })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </select>
                    <select
                        class="form__input"
                        on:change=move |ev| location.set(event_target_value(&ev))
                    >
                        <option value="">"All Locations"</option>
                        {move || {
                            locations.get().map(|list| {
                                list.into_iter()
                                    .map(|l| view! { <option value=l.clone()>{l}</option> })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </select>
                </div>
            </header>
            <Suspense fallback=move || view! { <p>"Loading jobs..."</p> }>
                {move || {
                    jobs.get().map(|list| {
                        if list.is_empty() {
                            view! {
                                <p class="browse-page__empty">"No jobs match these filters yet."</p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="browse-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|job| view! { <JobCard job=job/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
