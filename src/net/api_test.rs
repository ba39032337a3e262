use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn identity_endpoints_join_base_url() {
    let base = "https://backend.example.com";
    assert_eq!(
        token_endpoint(base),
        "https://backend.example.com/auth/v1/token?grant_type=password"
    );
    assert_eq!(signup_endpoint(base), "https://backend.example.com/auth/v1/signup");
    assert_eq!(user_endpoint(base), "https://backend.example.com/auth/v1/user");
    assert_eq!(logout_endpoint(base), "https://backend.example.com/auth/v1/logout");
}

#[test]
fn rest_endpoint_joins_table_and_query() {
    assert_eq!(
        rest_endpoint("https://b.example", "community_posts", "select=*"),
        "https://b.example/rest/v1/community_posts?select=*"
    );
}

#[test]
fn own_projects_query_filters_by_user() {
    assert_eq!(
        own_projects_query("u-1"),
        "select=*&user_id=eq.u-1&order=created_at.desc"
    );
}

#[test]
fn delete_project_query_targets_single_row() {
    assert_eq!(delete_project_query("p-9"), "id=eq.p-9");
}

#[test]
fn progress_query_filters_by_user() {
    assert_eq!(progress_query("u-1"), "select=*&user_id=eq.u-1");
}

// =============================================================
// Error body extraction
// =============================================================

#[test]
fn extract_error_message_reads_identity_shape() {
    let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
    assert_eq!(extract_error_message(400, body), "Invalid login credentials");
}

#[test]
fn extract_error_message_reads_msg_shape() {
    let body = r#"{"code":422,"msg":"Password should be at least 6 characters"}"#;
    assert_eq!(
        extract_error_message(422, body),
        "Password should be at least 6 characters"
    );
}

#[test]
fn extract_error_message_reads_data_api_shape() {
    let body = r#"{"code":"23505","message":"duplicate key value","details":null}"#;
    assert_eq!(extract_error_message(409, body), "duplicate key value");
}

#[test]
fn extract_error_message_falls_back_to_status() {
    assert_eq!(extract_error_message(502, "<html>bad gateway</html>"), "HTTP 502");
    assert_eq!(extract_error_message(500, ""), "HTTP 500");
    assert_eq!(extract_error_message(500, r#"{"msg":""}"#), "HTTP 500");
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn http_error_displays_extracted_message() {
    let err = ApiError::Http {
        status: 400,
        message: "Invalid login credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "Invalid login credentials");
}

#[test]
fn network_error_display_mentions_connection() {
    let err = ApiError::Network("timeout".to_owned());
    assert!(err.to_string().contains("falha de conexão"));
}
