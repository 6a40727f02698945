//! Authentication state and session lifecycle.
//!
//! `AuthState` is the plain, testable state machine; `AuthSession` wraps it
//! in an `RwSignal`, owns the token store and API calls, and is the single
//! writer. It is constructed once in `App` and provided via context, so
//! every consumer shares one explicit session object.
//!
//! Boot runs exactly once per session: read the stored token, validate it
//! against `/auth/me`, and resolve to authenticated or anonymous. Any
//! failure during boot demotes to anonymous silently; login/register
//! failures instead propagate to the calling page untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AdminToken, AuthResponse, RegisterRequest, User, UserType, Verification};
use crate::util::token_store;

/// Authentication state: the current user, their token, and whether the
/// initial boot resolve is still in flight.
///
/// `user` being set implies `token` is set; `loading` is `true` from
/// construction until boot settles, and never again afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Settle the boot resolve: authenticated when a validated token/user
    /// pair came back, anonymous otherwise. Flips `loading` off either way.
    pub fn finish_boot(&mut self, outcome: Option<(String, User)>) {
        match outcome {
            Some((token, user)) => self.establish(token, user),
            None => self.reset(),
        }
    }

    /// Enter the authenticated state in one write.
    pub fn establish(&mut self, token: String, user: User) {
        self.user = Some(user);
        self.token = Some(token);
        self.loading = false;
    }

    /// Back to anonymous. Idempotent.
    pub fn reset(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
    }

    /// Shallow-merge profile fields into the current user. No-op when
    /// anonymous; never touches the token.
    pub fn merge_user(&mut self, update: UserUpdate) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        if let Some(full_name) = update.full_name {
            user.full_name = full_name;
        }
        if let Some(phone) = update.phone {
            user.phone = Some(phone);
        }
        if let Some(verified) = update.verified {
            user.verified = verified;
        }
        if let Some(verification) = update.verification {
            user.verification = Some(verification);
        }
    }

    /// The signed-in user's role, if any.
    pub fn role(&self) -> Option<UserType> {
        self.user.as_ref().map(|user| user.user_type)
    }
}

/// A typed partial update for [`AuthState::merge_user`]. Unset fields are
/// left alone.
#[derive(Clone, Debug, Default)]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub verified: Option<bool>,
    pub verification: Option<Verification>,
}

/// Persist the token and enter the authenticated state. The store write
/// and the state write happen together so observers never see one without
/// the other.
fn commit_session(state: &mut AuthState, token: String, user: User) {
    token_store::set(&token);
    state.establish(token, user);
}

/// Resolve a stored token against the `/auth/me` result. A rejected token
/// is cleared from the store so the next boot starts anonymous.
fn settle_boot(token: String, fetched: Result<User, ApiError>) -> Option<(String, User)> {
    match fetched {
        Ok(user) => Some((token, user)),
        Err(err) => {
            leptos::logging::warn!("stored session rejected: {err}");
            token_store::clear();
            None
        }
    }
}

/// The session handle provided to the whole component tree.
///
/// Cheap to copy; all mutation of [`AuthState`] goes through here.
#[derive(Clone, Copy)]
pub struct AuthSession {
    pub state: RwSignal<AuthState>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Untracked token read for event handlers and spawned tasks.
    pub fn token(self) -> Option<String> {
        self.state.with_untracked(|state| state.token.clone())
    }

    /// Untracked user read for event handlers and spawned tasks.
    pub fn current_user(self) -> Option<User> {
        self.state.with_untracked(|state| state.user.clone())
    }

    /// Validate any stored token and settle into authenticated or
    /// anonymous. Runs once, spawned when the app mounts.
    pub async fn boot(self) {
        let outcome = match token_store::get() {
            None => None,
            Some(token) => {
                let fetched = api::fetch_current_user(&token).await;
                settle_boot(token, fetched)
            }
        };
        self.state.update(|state| state.finish_boot(outcome));
    }

    /// Sign in. On success the token is persisted and the state becomes
    /// authenticated; on failure nothing changes and the error propagates.
    pub async fn login(self, email: &str, password: &str) -> Result<User, ApiError> {
        let AuthResponse { token, user } = api::login(email, password).await?;
        self.state
            .update(|state| commit_session(state, token, user.clone()));
        Ok(user)
    }

    /// Create an account and sign in, symmetric to [`Self::login`].
    pub async fn register(self, request: &RegisterRequest) -> Result<User, ApiError> {
        let AuthResponse { token, user } = api::register(request).await?;
        self.state
            .update(|state| commit_session(state, token, user.clone()));
        Ok(user)
    }

    /// Admin sign-in. The endpoint only returns a token, so the user is
    /// resolved via `/auth/me` before anything is persisted; a failure on
    /// either call leaves the session untouched.
    pub async fn admin_login(self, email: &str, password: &str) -> Result<User, ApiError> {
        let AdminToken { token } = api::admin_login(email, password).await?;
        let user = api::fetch_current_user(&token).await?;
        self.state
            .update(|state| commit_session(state, token, user.clone()));
        Ok(user)
    }

    /// Drop the session. Synchronous, idempotent, cannot fail.
    pub fn logout(self) {
        token_store::clear();
        self.state.update(AuthState::reset);
    }

    /// Merge profile changes into the signed-in user.
    pub fn update_user(self, update: UserUpdate) {
        self.state.update(|state| state.merge_user(update));
    }

    /// Treat a mid-session 401 like a failed boot check: drop the session
    /// and let the route guard redirect to login. Other errors are left to
    /// the caller.
    pub fn handle_unauthorized(self, err: &ApiError) {
        if *err == ApiError::Unauthorized {
            self.logout();
        }
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}
