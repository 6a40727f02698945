//! Wire types shared with the marketplace backend.
//!
//! Everything here mirrors the JSON the REST API produces or accepts.
//! Fields the backend omits on some endpoints are `Option` or defaulted so
//! one type covers every payload shape that carries it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Drives dashboards, guard decisions, and signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Homeowner,
    Contractor,
    Admin,
}

impl UserType {
    /// The home route for this role, used after login and by the guard
    /// when a user lands on a page for another role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Homeowner => "/dashboard",
            Self::Contractor => "/contractor-dashboard",
            Self::Admin => "/admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Homeowner => "Homeowner",
            Self::Contractor => "Contractor",
            Self::Admin => "Admin",
        }
    }
}

/// Contractor credential details submitted for platform verification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub insurance_info: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub specialties: Option<Vec<String>>,
}

/// An account as returned by the auth and admin endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub user_type: UserType,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub verification: Option<Verification>,
    #[serde(default)]
    pub suspended: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Successful login/register payload.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Successful admin login payload. The user is resolved separately via
/// `/auth/me`.
#[derive(Clone, Debug, Deserialize)]
pub struct AdminToken {
    pub token: String,
}

/// Signup form payload for `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Lifecycle of a posted job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    InEscrow,
    Awarded,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InEscrow => "In Escrow",
            Self::Awarded => "Awarded",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether contractors may still place bids.
    pub fn accepts_bids(self) -> bool {
        matches!(self, Self::Open | Self::InEscrow)
    }
}

/// A renovation job listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub budget_min: f64,
    pub budget_max: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: JobStatus,
    pub homeowner_id: String,
    pub homeowner_name: String,
    #[serde(default)]
    pub escrow_amount: Option<f64>,
    #[serde(default)]
    pub awarded_contractor_id: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub bid_count: u32,
}

/// Payload for `POST /jobs`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub budget_min: f64,
    pub budget_max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Payload for `PUT /jobs/{id}`. Only the set fields are sent; the backend
/// ignores anything outside the listing fields.
#[derive(Clone, Debug, Default, Serialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Optional filters for the public job list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobFilters {
    pub location: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub min_budget: Option<f64>,
    pub max_budget: Option<f64>,
}

impl JobFilters {
    /// Query-string pairs for the set filters, ready for URL encoding.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(min) = self.min_budget {
            pairs.push(("min_budget", min.to_string()));
        }
        if let Some(max) = self.max_budget {
            pairs.push(("max_budget", max.to_string()));
        }
        pairs
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BidStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }
}

/// A contractor's offer on a job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: String,
    pub job_id: String,
    pub contractor_id: String,
    pub contractor_name: String,
    pub amount: f64,
    pub message: String,
    pub estimated_days: u32,
    pub status: BidStatus,
    pub created_at: String,
}

/// Payload for `POST /jobs/{id}/bids`.
#[derive(Clone, Debug, Serialize)]
pub struct NewBid {
    pub amount: f64,
    pub message: String,
    pub estimated_days: u32,
}

/// A direct message between two users.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub receiver_id: String,
    #[serde(default)]
    pub job_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: String,
}

/// Payload for `POST /messages`.
#[derive(Clone, Debug, Serialize)]
pub struct NewMessage {
    pub receiver_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub content: String,
}

/// A conversation summary row for the inbox.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub user_id: String,
    pub user_name: String,
    pub user_type: String,
    pub last_message: String,
    pub last_message_time: String,
    #[serde(default)]
    pub unread_count: u32,
}

/// A homeowner's rating of a contractor after a completed job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub homeowner_id: String,
    pub homeowner_name: String,
    pub contractor_id: String,
    pub job_id: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
}

/// Payload for `POST /reviews`. One review per homeowner per job.
#[derive(Clone, Debug, Serialize)]
pub struct NewReview {
    pub contractor_id: String,
    pub job_id: String,
    pub rating: u8,
    pub comment: String,
}

/// `GET /reviews/contractor/{id}` payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContractorReviews {
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
}

/// Public contractor profile: the account plus its review aggregates and
/// completed-job count.
#[derive(Clone, Debug, Deserialize)]
pub struct ContractorProfile {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default)]
    pub completed_jobs: u32,
}

/// `{id, message}` acknowledgement returned by create endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct Created {
    pub id: String,
    #[serde(default)]
    pub message: String,
}

/// Bare `{message}` acknowledgement.
#[derive(Clone, Debug, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

/// `PUT /auth/contractor-verification` acknowledgement; `verified` reports
/// whether the submitted credentials were enough to flip the flag.
#[derive(Clone, Debug, Deserialize)]
pub struct VerificationAck {
    #[serde(default)]
    pub message: String,
    pub verified: bool,
}

/// `POST /payments/release` acknowledgement with the split amounts.
#[derive(Clone, Debug, Deserialize)]
pub struct ReleaseOutcome {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub contractor_payout: f64,
    #[serde(default)]
    pub platform_fee: f64,
}

/// Role-shaped dashboard stats; the backend returns different fields for
/// homeowners and contractors from the same endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DashboardStats {
    Homeowner {
        total_jobs: u32,
        active_jobs: u32,
        completed_jobs: u32,
        total_spent: f64,
    },
    Contractor {
        total_bids: u32,
        accepted_bids: u32,
        jobs_completed: u32,
        total_earnings: f64,
        average_rating: f64,
        total_reviews: u32,
    },
}

/// `POST /payments/escrow/create` payload: where to send the homeowner.
#[derive(Clone, Debug, Deserialize)]
pub struct CheckoutSession {
    pub checkout_url: String,
    pub session_id: String,
}

/// `GET /payments/status/{session_id}` payload.
#[derive(Clone, Debug, Deserialize)]
pub struct PaymentStatus {
    pub status: String,
    #[serde(default)]
    pub job_id: Option<String>,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        self.status == "paid"
    }

    pub fn is_expired(&self) -> bool {
        self.status == "expired"
    }
}

/// Platform-wide counters for the admin dashboard.
#[derive(Clone, Debug, Deserialize)]
pub struct AdminStats {
    pub users: AdminUserStats,
    pub jobs: AdminJobStats,
    pub bids: AdminBidStats,
    pub revenue: AdminRevenueStats,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AdminUserStats {
    pub total: u32,
    pub homeowners: u32,
    pub contractors: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AdminJobStats {
    pub total: u32,
    pub open: u32,
    pub completed: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AdminBidStats {
    pub total: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AdminRevenueStats {
    #[serde(default)]
    pub total_platform_fees: f64,
    #[serde(default)]
    pub total_escrow_processed: f64,
}

/// An escrow transaction row in the admin payments view.
#[derive(Clone, Debug, Deserialize)]
pub struct PaymentTransaction {
    pub id: String,
    pub job_id: String,
    pub amount: f64,
    pub payment_status: String,
}

/// A released contractor payout row in the admin payments view.
#[derive(Clone, Debug, Deserialize)]
pub struct Payout {
    pub id: String,
    pub contractor_payout: f64,
    pub platform_fee: f64,
}

/// `GET /admin/payments` payload.
#[derive(Clone, Debug, Deserialize)]
pub struct AdminPayments {
    pub transactions: Vec<PaymentTransaction>,
    pub payouts: Vec<Payout>,
}
