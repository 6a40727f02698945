//! Homeowner dashboard: project stats and posted jobs.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::components::stat_tile::StatTile;
use crate::net::api;
use crate::net::types::{DashboardStats, Job};
use crate::state::auth::AuthSession;

#[component]
pub fn HomeownerDashboardPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();

    let stats = LocalResource::new(move || {
        let token = session.state.get().token;
        async move {
            let token = token?;
            match api::dashboard_stats(&token).await {
                Ok(stats) => Some(stats),
                Err(err) => {
                    session.handle_unauthorized(&err);
                    leptos::logging::warn!("dashboard stats failed: {err}");
                    None
                }
            }
        }
    });

    let jobs = LocalResource::new(move || {
        let token = session.state.get().token;
        async move {
            let Some(token) = token else {
                return Vec::new();
            };
            match api::my_jobs(&token).await {
                Ok(jobs) => jobs,
                Err(err) => {
                    session.handle_unauthorized(&err);
                    leptos::logging::warn!("job list failed: {err}");
                    Vec::new()
                }
            }
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My Projects"</h1>
                <a class="btn btn--primary" href="/post-job">"+ Post a Job"</a>
            </header>

            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    stats.get().flatten().map(|stats| {
                        let DashboardStats::Homeowner {
                            total_jobs,
                            active_jobs,
                            completed_jobs,
                            total_spent,
                        } = stats
                        else {
                            return ().into_any();
                        };
                        view! {
                            <div class="stats-row">
                                <StatTile label="Jobs Posted" value=total_jobs.to_string()/>
                                <StatTile label="Active" value=active_jobs.to_string()/>
                                <StatTile label="Completed" value=completed_jobs.to_string()/>
                                <StatTile label="Total Spent" value=format!("${total_spent:.0}")/>
                            </div>
                        }
                        .into_any()
                    })
                }}

                {move || jobs.get().map(job_list)}
            </Suspense>
        </div>
    }
}

fn job_list(jobs: Vec<Job>) -> AnyView {
    if jobs.is_empty() {
        view! {
            <div class="dashboard-page__empty">
                <p>"You haven't posted any jobs yet."</p>
                <a class="btn btn--primary" href="/post-job">"Post your first job"</a>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="dashboard-page__grid">
                {jobs
                    .into_iter()
                    .map(|job| view! { <JobCard job=job/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    }
}
