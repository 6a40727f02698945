use super::*;

// =============================================================
// User payloads
// =============================================================

#[test]
fn user_deserializes_me_payload() {
    let json = r#"{
        "id": "u1",
        "email": "anna@example.com",
        "full_name": "Anna Kowalski",
        "user_type": "homeowner",
        "phone": "416-555-0101",
        "verified": false,
        "verification": null
    }"#;
    let user: User = serde_json::from_str(json).expect("user");
    assert_eq!(user.id, "u1");
    assert_eq!(user.user_type, UserType::Homeowner);
    assert!(user.verification.is_none());
    assert!(!user.suspended);
    assert!(user.created_at.is_none());
}

#[test]
fn user_deserializes_contractor_with_verification() {
    let json = r#"{
        "id": "c1",
        "email": "mike@example.com",
        "full_name": "Mike Builder",
        "user_type": "contractor",
        "phone": null,
        "verified": true,
        "verification": {
            "license_number": "ON-12345",
            "insurance_info": "PolicyCo #998",
            "company_name": "Builder Bros",
            "years_experience": 12,
            "specialties": ["Kitchen Renovation", "Flooring"]
        }
    }"#;
    let user: User = serde_json::from_str(json).expect("user");
    assert!(user.verified);
    let verification = user.verification.expect("verification");
    assert_eq!(verification.years_experience, Some(12));
    assert_eq!(
        verification.specialties.as_deref().map(<[String]>::len),
        Some(2)
    );
}

#[test]
fn user_type_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&UserType::Contractor).unwrap(),
        r#""contractor""#
    );
    assert_eq!(
        serde_json::from_str::<UserType>(r#""admin""#).unwrap(),
        UserType::Admin
    );
}

#[test]
fn dashboard_paths_per_role() {
    assert_eq!(UserType::Homeowner.dashboard_path(), "/dashboard");
    assert_eq!(UserType::Contractor.dashboard_path(), "/contractor-dashboard");
    assert_eq!(UserType::Admin.dashboard_path(), "/admin");
}

#[test]
fn register_request_omits_missing_phone() {
    let req = RegisterRequest {
        email: "a@b.c".to_owned(),
        password: "hunter22x".to_owned(),
        full_name: "A B".to_owned(),
        user_type: UserType::Homeowner,
        phone: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("phone").is_none());
    assert_eq!(json["user_type"], "homeowner");
}

// =============================================================
// Jobs and bids
// =============================================================

#[test]
fn job_deserializes_backend_payload() {
    let json = r#"{
        "id": "j1",
        "title": "Kitchen refresh",
        "description": "Counters and backsplash",
        "location": "Toronto",
        "category": "Kitchen Renovation",
        "budget_min": 5000,
        "budget_max": 12000,
        "start_date": null,
        "images": [],
        "status": "in_escrow",
        "homeowner_id": "u1",
        "homeowner_name": "Anna Kowalski",
        "escrow_amount": 12000,
        "awarded_contractor_id": null,
        "created_at": "2025-06-01T12:00:00+00:00",
        "bid_count": 3
    }"#;
    let job: Job = serde_json::from_str(json).expect("job");
    assert_eq!(job.status, JobStatus::InEscrow);
    assert!(job.status.accepts_bids());
    assert_eq!(job.bid_count, 3);
    assert_eq!(job.escrow_amount, Some(12000.0));
}

#[test]
fn closed_statuses_do_not_accept_bids() {
    assert!(JobStatus::Open.accepts_bids());
    assert!(!JobStatus::Awarded.accepts_bids());
    assert!(!JobStatus::Completed.accepts_bids());
    assert!(!JobStatus::Cancelled.accepts_bids());
}

#[test]
fn bid_status_deserializes_lowercase() {
    let json = r#"{
        "id": "b1",
        "job_id": "j1",
        "contractor_id": "c1",
        "contractor_name": "Mike Builder",
        "amount": 9500.0,
        "message": "Two week turnaround",
        "estimated_days": 14,
        "status": "accepted",
        "created_at": "2025-06-02T08:00:00+00:00"
    }"#;
    let bid: Bid = serde_json::from_str(json).expect("bid");
    assert_eq!(bid.status, BidStatus::Accepted);
}

#[test]
fn job_filters_pairs_skip_unset_fields() {
    let filters = JobFilters {
        category: Some("Roofing".to_owned()),
        max_budget: Some(20000.0),
        ..JobFilters::default()
    };
    let pairs = filters.pairs();
    assert_eq!(
        pairs,
        vec![
            ("category", "Roofing".to_owned()),
            ("max_budget", "20000".to_owned()),
        ]
    );
    assert!(JobFilters::default().pairs().is_empty());
}

#[test]
fn job_update_omits_unset_fields() {
    let updates = JobUpdate {
        title: Some("Kitchen refresh v2".to_owned()),
        budget_max: Some(14000.0),
        ..JobUpdate::default()
    };
    let json = serde_json::to_value(&updates).unwrap();
    assert_eq!(json["title"], "Kitchen refresh v2");
    assert_eq!(json["budget_max"], 14000.0);
    assert!(json.get("description").is_none());
    assert!(json.get("start_date").is_none());
}

// =============================================================
// Reviews and contractor profiles
// =============================================================

#[test]
fn contractor_reviews_deserializes_aggregates() {
    let json = r#"{
        "reviews": [{
            "id": "r1",
            "homeowner_id": "u1",
            "homeowner_name": "Anna Kowalski",
            "contractor_id": "c1",
            "job_id": "j1",
            "rating": 4,
            "comment": "Solid work, slight delay",
            "created_at": "2025-06-20T10:00:00+00:00"
        }],
        "average_rating": 4.0,
        "total_reviews": 1
    }"#;
    let reviews: ContractorReviews = serde_json::from_str(json).expect("reviews");
    assert_eq!(reviews.total_reviews, 1);
    assert_eq!(reviews.reviews[0].rating, 4);
    assert_eq!(reviews.average_rating, 4.0);
}

#[test]
fn contractor_reviews_defaults_when_unrated() {
    let json = r#"{"reviews": [], "average_rating": 0, "total_reviews": 0}"#;
    let reviews: ContractorReviews = serde_json::from_str(json).expect("reviews");
    assert!(reviews.reviews.is_empty());
    assert_eq!(reviews.average_rating, 0.0);
}

#[test]
fn contractor_profile_flattens_account_fields() {
    let json = r#"{
        "id": "c1",
        "email": "mike@example.com",
        "full_name": "Mike Builder",
        "user_type": "contractor",
        "verified": true,
        "average_rating": 4.7,
        "total_reviews": 12,
        "completed_jobs": 9
    }"#;
    let profile: ContractorProfile = serde_json::from_str(json).expect("profile");
    assert_eq!(profile.user.full_name, "Mike Builder");
    assert!(profile.user.verified);
    assert_eq!(profile.average_rating, 4.7);
    assert_eq!(profile.completed_jobs, 9);
}

// =============================================================
// Role-shaped dashboard stats
// =============================================================

#[test]
fn dashboard_stats_selects_homeowner_shape() {
    let json = r#"{"total_jobs": 4, "active_jobs": 2, "completed_jobs": 1, "total_spent": 18000}"#;
    let stats: DashboardStats = serde_json::from_str(json).expect("stats");
    let DashboardStats::Homeowner { total_jobs, total_spent, .. } = stats else {
        panic!("expected homeowner stats, got {stats:?}");
    };
    assert_eq!(total_jobs, 4);
    assert_eq!(total_spent, 18000.0);
}

#[test]
fn dashboard_stats_selects_contractor_shape() {
    let json = r#"{
        "total_bids": 9,
        "accepted_bids": 3,
        "jobs_completed": 2,
        "total_earnings": 21500.5,
        "average_rating": 4.5,
        "total_reviews": 6
    }"#;
    let stats: DashboardStats = serde_json::from_str(json).expect("stats");
    let DashboardStats::Contractor { accepted_bids, average_rating, .. } = stats else {
        panic!("expected contractor stats, got {stats:?}");
    };
    assert_eq!(accepted_bids, 3);
    assert_eq!(average_rating, 4.5);
}

// =============================================================
// Payments
// =============================================================

#[test]
fn payment_status_helpers() {
    let paid: PaymentStatus =
        serde_json::from_str(r#"{"status": "paid", "job_id": "j1"}"#).unwrap();
    assert!(paid.is_paid());
    assert_eq!(paid.job_id.as_deref(), Some("j1"));

    let pending: PaymentStatus = serde_json::from_str(r#"{"status": "pending"}"#).unwrap();
    assert!(!pending.is_paid());
    assert!(!pending.is_expired());
}
