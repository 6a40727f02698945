//! Admin panel: platform stats, user moderation, job cleanup, and payment
//! activity.

use leptos::prelude::*;

use crate::components::stat_tile::StatTile;
use crate::net::api;
use crate::net::types::{Job, User, UserType};
use crate::state::auth::AuthSession;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AdminTab {
    #[default]
    Users,
    Jobs,
    Payments,
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let tab = RwSignal::new(AdminTab::Users);
    let error = RwSignal::new(None::<String>);

    let stats = LocalResource::new(move || {
        let token = session.state.get().token;
        async move {
            let token = token?;
            match api::admin_stats(&token).await {
                Ok(stats) => Some(stats),
                Err(err) => {
                    session.handle_unauthorized(&err);
                    leptos::logging::warn!("admin stats failed: {err}");
                    None
                }
            }
        }
    });

    let users = LocalResource::new(move || {
        let token = session.state.get().token;
        async move {
            let Some(token) = token else {
                return Vec::new();
            };
            match api::admin_users(&token).await {
                Ok(users) => users,
                Err(err) => {
                    session.handle_unauthorized(&err);
                    Vec::new()
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
            match api::admin_jobs(&token).await {
                Ok(jobs) => jobs,
                Err(err) => {
                    session.handle_unauthorized(&err);
                    Vec::new()
                }
            }
        }
    });

    let payments = LocalResource::new(move || {
        let token = session.state.get().token;
        async move {
            let token = token?;
            match api::admin_payments(&token).await {
                Ok(payments) => Some(payments),
                Err(err) => {
                    session.handle_unauthorized(&err);
                    None
                }
            }
        }
    });

    let verify = Callback::new(move |user_id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::admin_verify_user(&token, &user_id).await {
                    Ok(_) => users.refetch(),
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, &session, &users, &error);
        }
    });

    let set_suspended = Callback::new(move |(user_id, suspend): (String, bool)| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::admin_set_suspended(&token, &user_id, suspend).await {
                    Ok(_) => users.refetch(),
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, suspend, &session, &users, &error);
        }
    });

    let delete_job = Callback::new(move |job_id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                match api::admin_delete_job(&token, &job_id).await {
                    Ok(_) => jobs.refetch(),
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (job_id, &session, &jobs, &error);
        }
    });

    view! {
        <div class="admin-page">
            <h1>"Admin Dashboard"</h1>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats.get().flatten().map(|stats| view! {
                        <div class="stats-row">
                            <StatTile
                                label="Users"
                                value=format!(
                                    "{} ({}H / {}C)",
                                    stats.users.total, stats.users.homeowners, stats.users.contractors
                                )
                            />
                            <StatTile
                                label="Jobs"
                                value=format!(
                                    "{} ({} open, {} done)",
                                    stats.jobs.total, stats.jobs.open, stats.jobs.completed
                                )
                            />
                            <StatTile label="Bids" value=stats.bids.total.to_string()/>
                            <StatTile
                                label="Platform Fees"
                                value=format!("${:.0}", stats.revenue.total_platform_fees)
                            />
                            <StatTile
                                label="Escrow Processed"
                                value=format!("${:.0}", stats.revenue.total_escrow_processed)
                            />
                        </div>
                    })
                }}
            </Suspense>

            <div class="admin-page__tabs">
                <button
                    class="btn"
                    class:btn--primary=move || tab.get() == AdminTab::Users
                    on:click=move |_| tab.set(AdminTab::Users)
                >
                    "Users"
                </button>
                <button
                    class="btn"
                    class:btn--primary=move || tab.get() == AdminTab::Jobs
                    on:click=move |_| tab.set(AdminTab::Jobs)
                >
                    "Jobs"
                </button>
                <button
                    class="btn"
                    class:btn--primary=move || tab.get() == AdminTab::Payments
                    on:click=move |_| tab.set(AdminTab::Payments)
                >
                    "Payments"
                </button>
            </div>

            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || match tab.get() {
                    AdminTab::Users => users.get().map(|list| {
                        view! {
                            <div class="admin-page__list">
                                {list
                                    .into_iter()
                                    .map(|user| user_row(user, verify, set_suspended))
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }),
                    AdminTab::Jobs => jobs.get().map(|list| {
                        view! {
                            <div class="admin-page__list">
                                {list
                                    .into_iter()
                                    .map(|job| job_row(job, delete_job))
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }),
                    AdminTab::Payments => payments
                        .get()
                        .flatten()
                        .map(|list| payments_view(list).into_any()),
                }}
            </Suspense>
        </div>
    }
}

fn user_row(user: User, verify: Callback<String>, set_suspended: Callback<(String, bool)>) -> impl IntoView {
    let verify_id = user.id.clone();
    let suspend_id = user.id.clone();
    let suspended = user.suspended;
    let needs_verify = user.user_type == UserType::Contractor && !user.verified;

    view! {
        <div class="admin-user-row">
            <div class="admin-user-row__who">
                <span class="admin-user-row__name">{user.full_name}</span>
                <span class="admin-user-row__type">{user.user_type.label()}</span>
                <Show when=move || user.verified>
                    <span class="admin-user-row__badge">"Verified"</span>
                </Show>
                <Show when=move || suspended>
                    <span class="admin-user-row__badge admin-user-row__badge--suspended">
                        "Suspended"
                    </span>
                </Show>
                <span class="admin-user-row__email">{user.email}</span>
            </div>
            <div class="admin-user-row__actions">
                <Show when=move || needs_verify>
                    {
                        let id = verify_id.clone();
                        view! {
                            <button class="btn" on:click=move |_| verify.run(id.clone())>
                                "Verify"
                            </button>
                        }
                    }
                </Show>
                <button
                    class="btn"
                    on:click=move |_| set_suspended.run((suspend_id.clone(), !suspended))
                >
                    {if suspended { "Reinstate" } else { "Suspend" }}
                </button>
            </div>
        </div>
    }
}

fn job_row(job: Job, delete_job: Callback<String>) -> impl IntoView {
    let delete_id = job.id.clone();
    let href = format!("/jobs/{}", job.id);
    view! {
        <div class="admin-job-row">
            <a class="admin-job-row__title" href=href>{job.title}</a>
            <span class="admin-job-row__status">{job.status.label()}</span>
            <span class="admin-job-row__owner">{job.homeowner_name}</span>
            <button class="btn" on:click=move |_| delete_job.run(delete_id.clone())>
                "Delete"
            </button>
        </div>
    }
}

fn payments_view(payments: crate::net::types::AdminPayments) -> impl IntoView {
    view! {
        <div class="admin-page__payments">
            <h3>"Recent Transactions"</h3>
            {if payments.transactions.is_empty() {
                view! { <p>"No transactions yet"</p> }.into_any()
            } else {
                view! {
                    <div class="admin-page__list">
                        {payments
                            .transactions
                            .into_iter()
                            .map(|tx| view! {
                                <div class="admin-payment-row">
                                    <span>"Escrow Payment"</span>
                                    <span class="admin-payment-row__job">{tx.job_id}</span>
                                    <span>{format!("${:.0} CAD", tx.amount)}</span>
                                    <span class="admin-payment-row__status">{tx.payment_status}</span>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }}

            <h3>"Recent Payouts"</h3>
            {if payments.payouts.is_empty() {
                view! { <p>"No payouts yet"</p> }.into_any()
            } else {
                view! {
                    <div class="admin-page__list">
                        {payments
                            .payouts
                            .into_iter()
                            .map(|payout| view! {
                                <div class="admin-payment-row">
                                    <span>"Contractor Payout"</span>
                                    <span>{format!("${:.0}", payout.contractor_payout)}</span>
                                    <span>{format!("fee ${:.0}", payout.platform_fee)}</span>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
