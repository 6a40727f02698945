//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::net::types::UserType;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage, browse_jobs::BrowseJobsPage,
    contact::ContactPage, contractor_dashboard::ContractorDashboardPage,
    homeowner_dashboard::HomeownerDashboardPage, job_details::JobDetailsPage,
    landing::LandingPage, login::LoginPage, messages::MessagesPage, not_found::NotFoundPage,
    payment_success::PaymentSuccessPage, post_job::PostJobPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::auth::AuthSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the one [`AuthSession`], provides it via context, kicks off
/// the boot resolve, and sets up client-side routing. Protected routes are
/// wrapped in [`Protected`] with the role they require.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AuthSession::new();
    provide_context(session);

    // Resolve any stored token exactly once, as soon as the app mounts.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(session.boot());

    view! {
        <Stylesheet id="leptos" href="/pkg/buildlaunch.css"/>
        <Title text="Build Launch"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("browse-jobs") view=BrowseJobsPage/>
                    <Route
                        path=(StaticSegment("jobs"), ParamSegment("jobId"))
                        view=JobDetailsPage
                    />
                    <Route path=StaticSegment("payment-success") view=PaymentSuccessPage/>

                    // Homeowner routes
                    <Route path=StaticSegment("dashboard") view=|| view! {
                        <Protected require=Some(UserType::Homeowner)>
                            <HomeownerDashboardPage/>
                        </Protected>
                    }/>
                    <Route path=StaticSegment("post-job") view=|| view! {
                        <Protected require=Some(UserType::Homeowner)>
                            <PostJobPage/>
                        </Protected>
                    }/>

                    // Contractor routes
                    <Route path=StaticSegment("contractor-dashboard") view=|| view! {
                        <Protected require=Some(UserType::Contractor)>
                            <ContractorDashboardPage/>
                        </Protected>
                    }/>

                    // Any signed-in role
                    <Route path=StaticSegment("profile") view=|| view! {
                        <Protected require=None>
                            <ProfilePage/>
                        </Protected>
                    }/>
                    <Route path=StaticSegment("messages") view=|| view! {
                        <Protected require=None>
                            <MessagesPage/>
                        </Protected>
                    }/>
                    <Route
                        path=(StaticSegment("messages"), ParamSegment("userId"))
                        view=|| view! {
                            <Protected require=None>
                                <MessagesPage/>
                            </Protected>
                        }
                    />

                    // Admin routes
                    <Route path=StaticSegment("admin-login") view=AdminLoginPage/>
                    <Route path=StaticSegment("admin") view=|| view! {
                        <Protected require=Some(UserType::Admin)>
                            <AdminDashboardPage/>
                        </Protected>
                    }/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
