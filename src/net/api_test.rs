use super::*;

// =============================================================
// Credential-check error translation
// =============================================================

#[test]
fn credential_check_translates_unauthorized() {
    assert_eq!(
        as_invalid_credentials(ApiError::Unauthorized),
        ApiError::InvalidCredentials
    );
}

#[test]
fn credential_check_passes_other_errors_through() {
    assert_eq!(
        as_invalid_credentials(ApiError::RateLimited),
        ApiError::RateLimited
    );
    let network = ApiError::Network("connection refused".to_owned());
    assert_eq!(as_invalid_credentials(network.clone()), network);
    let conflict = ApiError::Conflict("Email already registered".to_owned());
    assert_eq!(as_invalid_credentials(conflict.clone()), conflict);
}
