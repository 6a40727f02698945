use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn unauthorized_from_401() {
    let err = from_response(401, r#"{"detail":"Invalid token"}"#);
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn conflict_from_400_detail() {
    let err = from_response(400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(err, ApiError::Conflict("Email already registered".to_owned()));
}

#[test]
fn forbidden_from_403_detail() {
    let err = from_response(403, r#"{"detail":"Only homeowners can post jobs"}"#);
    assert_eq!(err, ApiError::Forbidden("Only homeowners can post jobs".to_owned()));
}

#[test]
fn not_found_from_404() {
    let err = from_response(404, r#"{"detail":"Job not found"}"#);
    assert_eq!(err, ApiError::NotFound("Job not found".to_owned()));
}

#[test]
fn unexpected_carries_status_and_detail() {
    let err = from_response(500, r#"{"detail":"boom"}"#);
    assert_eq!(
        err,
        ApiError::Unexpected {
            status: 500,
            detail: "boom".to_owned()
        }
    );
}

// =============================================================
// Rate limiting
// =============================================================

#[test]
fn rate_limited_from_429() {
    let err = from_response(429, r#"{"detail":"slow down"}"#);
    assert_eq!(err, ApiError::RateLimited);
}

#[test]
fn rate_limited_from_lockout_message_regardless_of_status() {
    let err = from_response(
        401,
        r#"{"detail":"Too many login attempts. Please try again later."}"#,
    );
    assert_eq!(err, ApiError::RateLimited);
}

// =============================================================
// Validation details
// =============================================================

#[test]
fn validation_fields_flattened_from_detail_list() {
    let body = r#"{"detail":[
        {"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},
        {"loc":["body","password"],"msg":"Password must be at least 8 characters with letters and numbers","type":"value_error"}
    ]}"#;
    let err = from_response(422, body);
    let ApiError::Validation(fields) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].field, "email");
    assert_eq!(fields[1].field, "password");
    assert!(fields[1].message.contains("8 characters"));
}

#[test]
fn validation_nested_loc_joined_with_dots() {
    let body = r#"{"detail":[{"loc":["body","verification","years_experience"],"msg":"value is not a valid integer","type":"type_error"}]}"#;
    let ApiError::Validation(fields) = from_response(422, body) else {
        panic!("expected validation error");
    };
    assert_eq!(fields[0].field, "verification.years_experience");
}

// =============================================================
// Malformed bodies
// =============================================================

#[test]
fn malformed_body_falls_back_to_raw_text() {
    let err = from_response(502, "Bad Gateway");
    assert_eq!(
        err,
        ApiError::Unexpected {
            status: 502,
            detail: "Bad Gateway".to_owned()
        }
    );
}

#[test]
fn empty_body_gets_placeholder_detail() {
    let err = from_response(400, "");
    assert_eq!(err, ApiError::Conflict("Request failed".to_owned()));
}

#[test]
fn empty_detail_list_falls_back_to_raw_text() {
    let err = from_response(422, r#"{"detail":[]}"#);
    assert_eq!(
        err,
        ApiError::Unexpected {
            status: 422,
            detail: r#"{"detail":[]}"#.to_owned()
        }
    );
}
