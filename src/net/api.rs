//! REST API wrappers for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/api` prefix. Server-side and native test builds: stubs
//! returning `ApiError::offline()`, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is single-shot — no retries — and failures surface to the
//! caller as a typed [`ApiError`] so pages can branch on the taxonomy
//! instead of response text. Authenticated calls attach
//! `Authorization: Bearer <token>`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Ack, AdminPayments, AdminStats, AdminToken, AuthResponse, Bid, CheckoutSession,
    ContractorProfile, ContractorReviews, Conversation, Created, DashboardStats, Job, JobFilters,
    JobUpdate, Message, NewBid, NewJob, NewMessage, NewReview, PaymentStatus, RegisterRequest,
    ReleaseOutcome, User, Verification, VerificationAck,
};

// ---------------------------------------------------------------
// Transport helpers — the only code that touches gloo-net directly
// ---------------------------------------------------------------

#[cfg(feature = "hydrate")]
fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn with_bearer(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn into_result<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(super::error::from_response(status, &body));
    }
    resp.json::<T>().await.map_err(net_err)
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(path), token)
            .send()
            .await
            .map_err(net_err)?;
        into_result(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::offline())
    }
}

async fn get_json_query<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    pairs: &[(&'static str, String)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(
            gloo_net::http::Request::get(path).query(pairs.iter().map(|(k, v)| (*k, v.as_str()))),
            token,
        )
        .send()
        .await
        .map_err(net_err)?;
        into_result(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, pairs);
        Err(ApiError::offline())
    }
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(path), token)
            .json(body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        into_result(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::offline())
    }
}

async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::put(path), token)
            .json(body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        into_result(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::offline())
    }
}

async fn put_empty<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::put(path), token)
            .send()
            .await
            .map_err(net_err)?;
        into_result(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::offline())
    }
}

async fn delete_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::delete(path), token)
            .send()
            .await
            .map_err(net_err)?;
        into_result(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::offline())
    }
}

/// A 401 on a credential check means bad credentials, not a stale session.
fn as_invalid_credentials(err: ApiError) -> ApiError {
    match err {
        ApiError::Unauthorized => ApiError::InvalidCredentials,
        other => other,
    }
}

// Auth

/// Exchange credentials for a token and user via `POST /auth/login`.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = serde_json::json!({ "email": email, "password": password });
    post_json("/api/auth/login", None, &body)
        .await
        .map_err(as_invalid_credentials)
}

/// Create an account via `POST /auth/register`.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    post_json("/api/auth/register", None, request).await
}

/// Exchange admin credentials for a token via `POST /auth/admin-login`.
/// Lockouts surface as [`ApiError::RateLimited`].
pub async fn admin_login(email: &str, password: &str) -> Result<AdminToken, ApiError> {
    let body = serde_json::json!({ "email": email, "password": password });
    post_json("/api/auth/admin-login", None, &body)
        .await
        .map_err(as_invalid_credentials)
}

/// Resolve a stored token into the current user via `GET /auth/me`.
pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
    get_json("/api/auth/me", Some(token)).await
}

/// Update profile basics; returns the full refreshed user.
pub async fn update_profile(
    token: &str,
    full_name: &str,
    phone: Option<&str>,
) -> Result<User, ApiError> {
    let body = serde_json::json!({ "full_name": full_name, "phone": phone });
    put_json("/api/auth/profile", Some(token), &body).await
}

/// Submit contractor verification credentials.
pub async fn update_verification(
    token: &str,
    verification: &Verification,
) -> Result<VerificationAck, ApiError> {
    put_json("/api/auth/contractor-verification", Some(token), verification).await
}

// Jobs

/// Public job list, optionally filtered.
pub async fn list_jobs(filters: &JobFilters) -> Result<Vec<Job>, ApiError> {
    get_json_query("/api/jobs", None, &filters.pairs()).await
}

/// Public job detail.
pub async fn fetch_job(job_id: &str) -> Result<Job, ApiError> {
    get_json(&format!("/api/jobs/{job_id}"), None).await
}

/// Post a new job (homeowner only).
pub async fn create_job(token: &str, job: &NewJob) -> Result<Created, ApiError> {
    post_json("/api/jobs", Some(token), job).await
}

/// Edit an open job's listing fields (owner only).
pub async fn update_job(token: &str, job_id: &str, updates: &JobUpdate) -> Result<Ack, ApiError> {
    put_json(&format!("/api/jobs/{job_id}"), Some(token), updates).await
}

/// Remove a job and its bids. The backend refuses once work is underway.
pub async fn delete_job(token: &str, job_id: &str) -> Result<Ack, ApiError> {
    delete_json(&format!("/api/jobs/{job_id}"), Some(token)).await
}

/// Jobs relevant to the current user: own posts for homeowners, bid or
/// awarded jobs for contractors.
pub async fn my_jobs(token: &str) -> Result<Vec<Job>, ApiError> {
    get_json("/api/jobs/my-jobs", Some(token)).await
}

// Bids

/// Place a bid on a job (contractor only, one per job).
pub async fn create_bid(token: &str, job_id: &str, bid: &NewBid) -> Result<Created, ApiError> {
    post_json(&format!("/api/jobs/{job_id}/bids"), Some(token), bid).await
}

/// Bids on a job, visible to its homeowner.
pub async fn job_bids(token: &str, job_id: &str) -> Result<Vec<Bid>, ApiError> {
    get_json(&format!("/api/jobs/{job_id}/bids"), Some(token)).await
}

/// The contractor's own bids.
pub async fn my_bids(token: &str) -> Result<Vec<Bid>, ApiError> {
    get_json("/api/bids/my-bids", Some(token)).await
}

/// Accept a bid, awarding the job (requires funded escrow).
pub async fn accept_bid(token: &str, bid_id: &str) -> Result<Ack, ApiError> {
    put_empty(&format!("/api/bids/{bid_id}/accept"), Some(token)).await
}

// Messages

/// Send a direct message.
pub async fn send_message(token: &str, message: &NewMessage) -> Result<Created, ApiError> {
    post_json("/api/messages", Some(token), message).await
}

/// Conversation summaries for the inbox.
pub async fn conversations(token: &str) -> Result<Vec<Conversation>, ApiError> {
    get_json("/api/messages/conversations", Some(token)).await
}

/// Full thread with one partner; the backend marks it read as a side
/// effect.
pub async fn conversation_messages(
    token: &str,
    other_user_id: &str,
) -> Result<Vec<Message>, ApiError> {
    get_json(&format!("/api/messages/{other_user_id}"), Some(token)).await
}

// Reviews

/// Leave a review for the contractor on a completed job (owner only).
pub async fn create_review(token: &str, review: &NewReview) -> Result<Created, ApiError> {
    post_json("/api/reviews", Some(token), review).await
}

/// A contractor's reviews with their rating aggregates. Public.
pub async fn contractor_reviews(contractor_id: &str) -> Result<ContractorReviews, ApiError> {
    get_json(&format!("/api/reviews/contractor/{contractor_id}"), None).await
}

/// Public contractor profile with rating aggregates and job history.
pub async fn contractor_profile(contractor_id: &str) -> Result<ContractorProfile, ApiError> {
    get_json(&format!("/api/contractors/{contractor_id}"), None).await
}

// Stats

/// Role-shaped dashboard stats for the current user.
pub async fn dashboard_stats(token: &str) -> Result<DashboardStats, ApiError> {
    get_json("/api/stats/dashboard", Some(token)).await
}

// Payments

/// Open an escrow checkout for a job; the caller follows `checkout_url`.
pub async fn create_escrow_checkout(
    token: &str,
    job_id: &str,
    origin_url: &str,
) -> Result<CheckoutSession, ApiError> {
    let body = serde_json::json!({ "job_id": job_id, "origin_url": origin_url });
    post_json("/api/payments/escrow/create", Some(token), &body).await
}

/// Poll the status of a checkout session.
pub async fn payment_status(token: &str, session_id: &str) -> Result<PaymentStatus, ApiError> {
    get_json(&format!("/api/payments/status/{session_id}"), Some(token)).await
}

/// Release escrowed funds to the awarded contractor.
pub async fn release_payment(token: &str, job_id: &str) -> Result<ReleaseOutcome, ApiError> {
    let body = serde_json::json!({ "job_id": job_id });
    post_json("/api/payments/release", Some(token), &body).await
}

// Lookups

/// Job categories offered by the platform.
pub async fn categories() -> Result<Vec<String>, ApiError> {
    #[derive(serde::Deserialize)]
    struct CategoryList {
        categories: Vec<String>,
    }
    let list: CategoryList = get_json("/api/categories", None).await?;
    Ok(list.categories)
}

/// Service locations offered by the platform.
pub async fn locations() -> Result<Vec<String>, ApiError> {
    #[derive(serde::Deserialize)]
    struct LocationList {
        locations: Vec<String>,
    }
    let list: LocationList = get_json("/api/locations", None).await?;
    Ok(list.locations)
}

// Admin

/// Platform-wide counters.
pub async fn admin_stats(token: &str) -> Result<AdminStats, ApiError> {
    get_json("/api/admin/stats", Some(token)).await
}

/// All registered users.
pub async fn admin_users(token: &str) -> Result<Vec<User>, ApiError> {
    #[derive(serde::Deserialize)]
    struct UserList {
        users: Vec<User>,
    }
    let list: UserList = get_json("/api/admin/users", Some(token)).await?;
    Ok(list.users)
}

/// All jobs, regardless of status.
pub async fn admin_jobs(token: &str) -> Result<Vec<Job>, ApiError> {
    #[derive(serde::Deserialize)]
    struct JobList {
        jobs: Vec<Job>,
    }
    let list: JobList = get_json("/api/admin/jobs", Some(token)).await?;
    Ok(list.jobs)
}

/// Escrow transactions and payouts.
pub async fn admin_payments(token: &str) -> Result<AdminPayments, ApiError> {
    get_json("/api/admin/payments", Some(token)).await
}

/// Mark a contractor as verified.
pub async fn admin_verify_user(token: &str, user_id: &str) -> Result<Ack, ApiError> {
    put_empty(&format!("/api/admin/users/{user_id}/verify"), Some(token)).await
}

/// Suspend or reinstate an account.
pub async fn admin_set_suspended(
    token: &str,
    user_id: &str,
    suspend: bool,
) -> Result<Ack, ApiError> {
    let action = if suspend { "suspend" } else { "unsuspend" };
    put_empty(&format!("/api/admin/users/{user_id}/{action}"), Some(token)).await
}

/// Remove a job and its bids.
pub async fn admin_delete_job(token: &str, job_id: &str) -> Result<Ack, ApiError> {
    delete_json(&format!("/api/admin/jobs/{job_id}"), Some(token)).await
}
