use super::*;

fn sample_user(id: &str, user_type: UserType) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        full_name: "Anna Kowalski".to_owned(),
        user_type,
        phone: Some("416-555-0101".to_owned()),
        verified: false,
        verification: None,
        suspended: false,
        created_at: None,
    }
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn default_state_is_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn finish_boot_without_outcome_settles_anonymous() {
    let mut state = AuthState::default();
    state.finish_boot(None);
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn finish_boot_with_outcome_settles_authenticated() {
    let mut state = AuthState::default();
    state.finish_boot(Some(("abc".to_owned(), sample_user("u1", UserType::Homeowner))));
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert_eq!(state.role(), Some(UserType::Homeowner));
}

#[test]
fn user_implies_token_across_transitions() {
    let mut state = AuthState::default();
    state.establish("t1".to_owned(), sample_user("u1", UserType::Contractor));
    assert!(state.user.is_none() || state.token.is_some());
    state.reset();
    assert!(state.user.is_none() || state.token.is_some());
}

#[test]
fn reset_is_idempotent() {
    let mut state = AuthState::default();
    state.establish("t1".to_owned(), sample_user("u1", UserType::Homeowner));
    state.reset();
    let after_first = state.clone();
    state.reset();
    assert_eq!(state, after_first);
    assert!(state.user.is_none());
    assert!(!state.loading);
}

// =============================================================
// Partial user updates
// =============================================================

#[test]
fn merge_user_is_noop_when_anonymous() {
    let mut state = AuthState::default();
    state.finish_boot(None);
    state.merge_user(UserUpdate {
        verified: Some(true),
        ..UserUpdate::default()
    });
    assert!(state.user.is_none());
}

#[test]
fn merge_user_sets_only_named_fields() {
    let mut state = AuthState::default();
    state.establish("t1".to_owned(), sample_user("u1", UserType::Contractor));
    let before = state.user.clone().unwrap();

    state.merge_user(UserUpdate {
        verified: Some(true),
        ..UserUpdate::default()
    });

    let after = state.user.clone().unwrap();
    assert!(after.verified);
    assert_eq!(after.id, before.id);
    assert_eq!(after.email, before.email);
    assert_eq!(after.full_name, before.full_name);
    assert_eq!(after.phone, before.phone);
    assert_eq!(state.token.as_deref(), Some("t1"));
}

#[test]
fn merge_user_with_empty_update_changes_nothing() {
    let mut state = AuthState::default();
    state.establish("t1".to_owned(), sample_user("u1", UserType::Homeowner));
    let before = state.clone();
    state.merge_user(UserUpdate::default());
    assert_eq!(state, before);
}

#[test]
fn merge_user_applies_profile_fields() {
    let mut state = AuthState::default();
    state.establish("t1".to_owned(), sample_user("u1", UserType::Homeowner));
    state.merge_user(UserUpdate {
        full_name: Some("Anna K.".to_owned()),
        phone: Some("647-555-0199".to_owned()),
        ..UserUpdate::default()
    });
    let user = state.user.unwrap();
    assert_eq!(user.full_name, "Anna K.");
    assert_eq!(user.phone.as_deref(), Some("647-555-0199"));
}

// =============================================================
// Boot settlement and session commit (token store interplay)
// =============================================================

#[test]
fn settle_boot_keeps_validated_pair() {
    let outcome = settle_boot("abc".to_owned(), Ok(sample_user("u1", UserType::Homeowner)));
    let (token, user) = outcome.expect("validated session");
    assert_eq!(token, "abc");
    assert_eq!(user.id, "u1");
}

#[test]
fn settle_boot_rejection_clears_store() {
    token_store::set("stale");
    let outcome = settle_boot("stale".to_owned(), Err(ApiError::Unauthorized));
    assert!(outcome.is_none());
    assert_eq!(token_store::get(), None);
}

#[test]
fn settle_boot_network_failure_also_demotes() {
    token_store::set("abc");
    let outcome = settle_boot("abc".to_owned(), Err(ApiError::Network("offline".to_owned())));
    assert!(outcome.is_none());
    assert_eq!(token_store::get(), None);
}

#[test]
fn commit_session_persists_token_and_user_together() {
    let mut state = AuthState::default();
    let user = sample_user("u7", UserType::Contractor);
    commit_session(&mut state, "fresh-token".to_owned(), user.clone());
    assert_eq!(token_store::get(), Some("fresh-token".to_owned()));
    assert_eq!(state.token.as_deref(), Some("fresh-token"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some(user.id.as_str()));
    assert!(!state.loading);
}
