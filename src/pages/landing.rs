//! Public marketing landing page.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="landing-page__hero">
                <h1>"Renovate with Confidence"</h1>
                <p>
                    "Post your renovation project, compare bids from local contractors, \
                     and pay through escrow. Funds are released only when you confirm the \
                     work is done."
                </p>
                <div class="landing-page__actions">
                    <a class="btn btn--primary" href="/register">"Post a Job"</a>
                    <a class="btn" href="/browse-jobs">"Browse Jobs"</a>
                </div>
            </section>

            <section class="landing-page__steps">
                <h2>"How It Works"</h2>
                <div class="landing-page__grid">
                    <div class="landing-page__step">
                        <h3>"1. Describe your project"</h3>
                        <p>"Set a budget range and the work you need, from kitchens to roofing."</p>
                    </div>
                    <div class="landing-page__step">
                        <h3>"2. Compare bids"</h3>
                        <p>"Verified contractors bid with a price and a timeline. Message them directly."</p>
                    </div>
                    <div class="landing-page__step">
                        <h3>"3. Fund escrow and award"</h3>
                        <p>"Your payment is held securely while the work happens."</p>
                    </div>
                    <div class="landing-page__step">
                        <h3>"4. Release on completion"</h3>
                        <p>"Confirm the result and the contractor gets paid."</p>
                    </div>
                </div>
            </section>

            <section class="landing-page__cta">
                <h2>"Are you a contractor?"</h2>
                <p>"Get verified, bid on local jobs, and build your reputation."</p>
                <a class="btn btn--primary" href="/register">"Join as a Contractor"</a>
            </section>
        </div>
    }
}
