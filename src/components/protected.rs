//! Route guard wrapper.
//!
//! Applies `route_access` decisions at the routing layer: the decision
//! itself is pure and lives in `state::guard`; this component only renders
//! the waiting shell, issues the redirect, or passes the children through.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::UserType;
use crate::state::auth::AuthSession;
use crate::state::guard::{RouteAccess, route_access};

/// Gate a page subtree behind the session state.
///
/// Until boot settles nothing but a spinner renders. Anonymous visitors
/// are sent to the sign-in entry for the required role, wrong-role
/// visitors to their own home, and matching visitors see the children
/// unchanged.
#[component]
pub fn Protected(require: Option<UserType>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AuthSession>();

    move || match route_access(&session.state.get(), require) {
        RouteAccess::Loading => view! {
            <div class="route-loading">
                <div class="route-loading__spinner"></div>
            </div>
        }
        .into_any(),
        RouteAccess::DeniedAnonymous { login_path } => {
            view! { <Redirect path=login_path/> }.into_any()
        }
        RouteAccess::DeniedWrongRole { home_path } => {
            view! { <Redirect path=home_path/> }.into_any()
        }
        RouteAccess::Allowed => children().into_any(),
    }
}
