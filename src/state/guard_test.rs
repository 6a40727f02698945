use super::*;
use crate::net::types::User;
use crate::state::auth::AuthState;

fn anonymous() -> AuthState {
    let mut state = AuthState::default();
    state.finish_boot(None);
    state
}

fn signed_in(user_type: UserType) -> AuthState {
    let mut state = AuthState::default();
    state.establish(
        "t1".to_owned(),
        User {
            id: "u1".to_owned(),
            email: "u1@example.com".to_owned(),
            full_name: "Test User".to_owned(),
            user_type,
            phone: None,
            verified: false,
            verification: None,
            suspended: false,
            created_at: None,
        },
    );
    state
}

// =============================================================
// Loading gates everything
// =============================================================

#[test]
fn loading_state_defers_every_decision() {
    let loading = AuthState::default();
    assert_eq!(route_access(&loading, None), RouteAccess::Loading);
    assert_eq!(
        route_access(&loading, Some(UserType::Homeowner)),
        RouteAccess::Loading
    );
    assert_eq!(
        route_access(&loading, Some(UserType::Admin)),
        RouteAccess::Loading
    );
}

// =============================================================
// Anonymous visitors
// =============================================================

#[test]
fn anonymous_denied_to_login() {
    assert_eq!(
        route_access(&anonymous(), Some(UserType::Homeowner)),
        RouteAccess::DeniedAnonymous {
            login_path: "/login"
        }
    );
}

#[test]
fn anonymous_denied_to_admin_login_for_admin_routes() {
    assert_eq!(
        route_access(&anonymous(), Some(UserType::Admin)),
        RouteAccess::DeniedAnonymous {
            login_path: "/admin-login"
        }
    );
}

#[test]
fn anonymous_denied_on_any_role_routes() {
    assert_eq!(
        route_access(&anonymous(), None),
        RouteAccess::DeniedAnonymous {
            login_path: "/login"
        }
    );
}

// =============================================================
// Role mismatches redirect to the visitor's own home
// =============================================================

#[test]
fn contractor_on_homeowner_route_goes_home() {
    assert_eq!(
        route_access(&signed_in(UserType::Contractor), Some(UserType::Homeowner)),
        RouteAccess::DeniedWrongRole {
            home_path: "/contractor-dashboard"
        }
    );
}

#[test]
fn homeowner_on_contractor_route_goes_home() {
    assert_eq!(
        route_access(&signed_in(UserType::Homeowner), Some(UserType::Contractor)),
        RouteAccess::DeniedWrongRole {
            home_path: "/dashboard"
        }
    );
}

#[test]
fn admin_on_role_route_goes_to_admin_home() {
    assert_eq!(
        route_access(&signed_in(UserType::Admin), Some(UserType::Homeowner)),
        RouteAccess::DeniedWrongRole {
            home_path: "/admin"
        }
    );
}

#[test]
fn homeowner_on_admin_route_goes_home() {
    assert_eq!(
        route_access(&signed_in(UserType::Homeowner), Some(UserType::Admin)),
        RouteAccess::DeniedWrongRole {
            home_path: "/dashboard"
        }
    );
}

// =============================================================
// Allowed
// =============================================================

#[test]
fn matching_role_is_allowed() {
    assert_eq!(
        route_access(&signed_in(UserType::Homeowner), Some(UserType::Homeowner)),
        RouteAccess::Allowed
    );
    assert_eq!(
        route_access(&signed_in(UserType::Contractor), Some(UserType::Contractor)),
        RouteAccess::Allowed
    );
    assert_eq!(
        route_access(&signed_in(UserType::Admin), Some(UserType::Admin)),
        RouteAccess::Allowed
    );
}

#[test]
fn any_signed_in_role_allowed_when_unrestricted() {
    assert_eq!(
        route_access(&signed_in(UserType::Contractor), None),
        RouteAccess::Allowed
    );
    assert_eq!(route_access(&signed_in(UserType::Admin), None), RouteAccess::Allowed);
}
