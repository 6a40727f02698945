//! Card linking to a job's detail page.

use leptos::prelude::*;

use crate::net::types::Job;

/// Job summary card used by the browse list and the dashboards.
#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let href = format!("/jobs/{}", job.id);
    let budget = format!("${:.0} - ${:.0}", job.budget_min, job.budget_max);
    let bids = format!(
        "{} bid{}",
        job.bid_count,
        if job.bid_count == 1 { "" } else { "s" }
    );

    view! {
        <a class="job-card" href=href>
            <div class="job-card__top">
                <h3 class="job-card__title">{job.title}</h3>
                <span class="job-card__status">{job.status.label()}</span>
            </div>
            <p class="job-card__meta">{job.category} " · " {job.location}</p>
            <p class="job-card__budget">{budget}</p>
            <p class="job-card__bids">{bids}</p>
        </a>
    }
}
