//! Route access decisions.
//!
//! A pure function of the auth state and the role a route requires. The
//! redirect side effect lives in `components::protected`, so the decision
//! logic here tests without a rendering environment.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::UserType;

use super::auth::AuthState;

/// Outcome of checking a protected route against the auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Boot has not settled; render a waiting state, never a decision.
    Loading,
    /// Nobody is signed in; send them to the sign-in entry for the
    /// required role.
    DeniedAnonymous { login_path: &'static str },
    /// Signed in as the wrong role; send them to their own home.
    DeniedWrongRole { home_path: &'static str },
    /// Render the wrapped subtree unchanged.
    Allowed,
}

/// Decide whether the current auth state may enter a route. `required`
/// of `None` admits any signed-in user.
pub fn route_access(auth: &AuthState, required: Option<UserType>) -> RouteAccess {
    if auth.loading {
        return RouteAccess::Loading;
    }
    let Some(user) = &auth.user else {
        let login_path = if required == Some(UserType::Admin) {
            "/admin-login"
        } else {
            "/login"
        };
        return RouteAccess::DeniedAnonymous { login_path };
    };
    if let Some(required) = required {
        if user.user_type != required {
            return RouteAccess::DeniedWrongRole {
                home_path: user.user_type.dashboard_path(),
            };
        }
    }
    RouteAccess::Allowed
}
