//! Landing page after the escrow checkout redirect.
//!
//! Reads `session_id` from the query string and polls the payment status
//! until the webhook marks it paid, the session expires, or the attempts
//! run out. The stripe-hosted checkout already happened; this page only
//! reports the result.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::auth::AuthSession;

#[derive(Clone, Debug, PartialEq, Eq)]
enum PollOutcome {
    Checking,
    Paid { job_id: Option<String> },
    Failed,
}

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let query = use_query_map();
    let outcome = RwSignal::new(PollOutcome::Checking);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api;
        const MAX_ATTEMPTS: u32 = 5;

        match query.read_untracked().get("session_id") {
            None => outcome.set(PollOutcome::Failed),
            Some(session_id) => leptos::task::spawn_local(async move {
                let interval = std::time::Duration::from_secs(2);
                for _ in 0..MAX_ATTEMPTS {
                    // The session may still be booting right after the
                    // redirect; skip the call until a token is available.
                    if let Some(token) = session.token() {
                        match api::payment_status(&token, &session_id).await {
                            Ok(status) if status.is_paid() => {
                                outcome.set(PollOutcome::Paid {
                                    job_id: status.job_id,
                                });
                                return;
                            }
                            Ok(status) if status.is_expired() => {
                                outcome.set(PollOutcome::Failed);
                                return;
                            }
                            Ok(_) => {}
                            Err(err) => {
                                leptos::logging::warn!("payment status check failed: {err}");
                            }
                        }
                    }
                    gloo_timers::future::sleep(interval).await;
                }
                outcome.set(PollOutcome::Failed);
            }),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&session, &query);
    }

    view! {
        <div class="payment-page">
            {move || match outcome.get() {
                PollOutcome::Checking => view! {
                    <div class="payment-page__card">
                        <div class="route-loading__spinner"></div>
                        <h1>"Processing Payment"</h1>
                        <p>"Please wait while we confirm your payment..."</p>
                    </div>
                }
                .into_any(),
                PollOutcome::Paid { job_id } => view! {
                    <div class="payment-page__card payment-page__card--success">
                        <h1>"Payment Successful!"</h1>
                        <p>
                            "Your funds are now securely held in escrow. You can now accept \
                             bids from contractors."
                        </p>
                        {match job_id {
                            Some(id) => {
                                let href = format!("/jobs/{id}");
                                view! { <a class="btn btn--primary" href=href>"View Job"</a> }
                                    .into_any()
                            }
                            None => view! {
                                <a class="btn btn--primary" href="/dashboard">"Go to Dashboard"</a>
                            }
                            .into_any(),
                        }}
                    </div>
                }
                .into_any(),
                PollOutcome::Failed => view! {
                    <div class="payment-page__card payment-page__card--error">
                        <h1>"Payment Not Confirmed"</h1>
                        <p>
                            "We couldn't confirm this payment. If you completed checkout, it \
                             may still be settling; check your dashboard in a minute."
                        </p>
                        <a class="btn" href="/dashboard">"Back to Dashboard"</a>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
