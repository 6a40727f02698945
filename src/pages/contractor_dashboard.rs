//! Contractor dashboard: bid stats, verification nudge, and active bids.

use leptos::prelude::*;

use crate::components::stat_tile::StatTile;
use crate::net::api;
use crate::net::types::{Bid, DashboardStats, Review};
use crate::state::auth::AuthSession;

#[component]
pub fn ContractorDashboardPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();

    let verified = move || {
        session
            .state
            .get()
            .user
            .is_some_and(|user| user.verified)
    };

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

    let bids = LocalResource::new(move || {
        let token = session.state.get().token;
        async move {
            let Some(token) = token else {
                return Vec::new();
            };
            match api::my_bids(&token).await {
                Ok(bids) => bids,
                Err(err) => {
                    session.handle_unauthorized(&err);
                    leptos::logging::warn!("bid list failed: {err}");
                    Vec::new()
                }
            }
        }
    });

    let reviews = LocalResource::new(move || {
        let user_id = session.state.get().user.map(|user| user.id);
        async move {
            let user_id = user_id?;
            match api::contractor_reviews(&user_id).await {
                Ok(reviews) => Some(reviews),
                Err(err) => {
                    leptos::logging::warn!("review fetch failed: {err}");
                    None
                }
            }
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My Bids"</h1>
                <a class="btn btn--primary" href="/browse-jobs">"Find Jobs"</a>
            </header>

            <Show when=move || !verified()>
                <div class="dashboard-page__notice">
                    <p>
                        "Your account isn't verified yet. Submit your license and insurance \
                         details to unlock bidding."
                    </p>
                    <a class="btn" href="/profile">"Complete Verification"</a>
                </div>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    stats.get().flatten().map(|stats| {
                        let DashboardStats::Contractor {
                            total_bids,
                            accepted_bids,
                            jobs_completed,
                            total_earnings,
                            average_rating,
                            total_reviews,
                        } = stats
                        else {
                            return ().into_any();
                        };
                        view! {
                            <div class="stats-row">
                                <StatTile label="Bids Placed" value=total_bids.to_string()/>
                                <StatTile label="Accepted" value=accepted_bids.to_string()/>
                                <StatTile label="Jobs Completed" value=jobs_completed.to_string()/>
                                <StatTile label="Earned" value=format!("${total_earnings:.0}")/>
                                <StatTile
                                    label="Rating"
                                    value=format!("{average_rating:.1} ({total_reviews})")
                                />
                            </div>
                        }
                        .into_any()
                    })
                }}

                {move || {
                    bids.get().map(|list| {
                        if list.is_empty() {
                            view! {
                                <div class="dashboard-page__empty">
                                    <p>"No bids yet. Find an open job and make an offer."</p>
                                    <a class="btn btn--primary" href="/browse-jobs">"Browse Jobs"</a>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="dashboard-page__list">
                                    {list.into_iter().map(bid_row).collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    })
                }}
                {move || {
                    reviews.get().flatten().filter(|r| !r.reviews.is_empty()).map(|loaded| {
                        view! {
                            <section class="dashboard-page__reviews">
                                <h2>"Recent Reviews"</h2>
                                {loaded
                                    .reviews
                                    .into_iter()
                                    .take(5)
                                    .map(review_row)
                                    .collect::<Vec<_>>()}
                            </section>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

fn review_row(review: Review) -> impl IntoView {
    view! {
        <div class="review-row">
            <span class="review-row__rating">{format!("{}/5", review.rating)}</span>
            <span class="review-row__author">{review.homeowner_name}</span>
            <p class="review-row__comment">{review.comment}</p>
        </div>
    }
}

fn bid_row(bid: Bid) -> impl IntoView {
    let href = format!("/jobs/{}", bid.job_id);
    view! {
        <a class="bid-row" href=href>
            <span class="bid-row__amount">{format!("${:.0}", bid.amount)}</span>
            <span class="bid-row__days">{format!("{} days", bid.estimated_days)}</span>
            <span class="bid-row__status">{bid.status.label()}</span>
            <span class="bid-row__message">{bid.message}</span>
        </a>
    }
}
