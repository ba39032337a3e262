use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_payload() -> SessionUserPayload {
    SessionUserPayload {
        id: "u-1".to_owned(),
        email: Some("thais@example.com".to_owned()),
        user_metadata: UserMetadata {
            full_name: Some("Thais Oliveira".to_owned()),
            user_type: Some("student".to_owned()),
        },
    }
}

// =============================================================
// UserType
// =============================================================

#[test]
fn user_type_wire_strings_round_trip() {
    for kind in UserType::ALL {
        assert_eq!(UserType::parse(kind.as_str()), Some(kind));
    }
}

#[test]
fn user_type_parse_rejects_unknown_values() {
    assert_eq!(UserType::parse("wizard"), None);
    assert_eq!(UserType::parse(""), None);
    assert_eq!(UserType::parse("Student"), None);
}

#[test]
fn user_type_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&UserType::Student).unwrap(), "\"student\"");
    assert_eq!(serde_json::to_string(&UserType::School).unwrap(), "\"school\"");
}

// =============================================================
// AccountUser normalization
// =============================================================

#[test]
fn from_payload_keeps_name_and_profile_kind() {
    let user = AccountUser::from_payload(make_payload());
    assert_eq!(user.id, "u-1");
    assert_eq!(user.email, "thais@example.com");
    assert_eq!(user.full_name.as_deref(), Some("Thais Oliveira"));
    assert_eq!(user.user_type, Some(UserType::Student));
}

#[test]
fn from_payload_collapses_blank_name() {
    let mut payload = make_payload();
    payload.user_metadata.full_name = Some("   ".to_owned());
    let user = AccountUser::from_payload(payload);
    assert_eq!(user.full_name, None);
}

#[test]
fn from_payload_trims_name_whitespace() {
    let mut payload = make_payload();
    payload.user_metadata.full_name = Some("  Thais  ".to_owned());
    let user = AccountUser::from_payload(payload);
    assert_eq!(user.full_name.as_deref(), Some("Thais"));
}

#[test]
fn from_payload_drops_unknown_profile_kind() {
    let mut payload = make_payload();
    payload.user_metadata.user_type = Some("wizard".to_owned());
    let user = AccountUser::from_payload(payload);
    assert_eq!(user.user_type, None);
}

#[test]
fn from_payload_defaults_missing_email_to_empty() {
    let mut payload = make_payload();
    payload.email = None;
    let user = AccountUser::from_payload(payload);
    assert_eq!(user.email, "");
}

// =============================================================
// Identity payload parsing
// =============================================================

#[test]
fn session_user_payload_tolerates_missing_metadata() {
    let json = serde_json::json!({ "id": "u-9" });
    let payload: SessionUserPayload = serde_json::from_value(json).unwrap();
    assert_eq!(payload.id, "u-9");
    assert_eq!(payload.email, None);
    assert_eq!(payload.user_metadata, UserMetadata::default());
}

#[test]
fn token_response_parses_grant_payload() {
    let json = serde_json::json!({
        "access_token": "jwt-abc",
        "token_type": "bearer",
        "expires_in": 3600,
        "user": { "id": "u-1", "email": "thais@example.com" }
    });
    let token: TokenResponse = serde_json::from_value(json).unwrap();
    assert_eq!(token.access_token, "jwt-abc");
    assert_eq!(token.user.id, "u-1");
}

#[test]
fn parse_signup_response_detects_issued_session() {
    let body = serde_json::json!({
        "access_token": "jwt-abc",
        "user": { "id": "u-1", "email": "thais@example.com" }
    });
    match parse_signup_response(&body) {
        SignupResponse::Session { access_token, user } => {
            assert_eq!(access_token, "jwt-abc");
            assert_eq!(user.id, "u-1");
        }
        SignupResponse::Pending => panic!("expected issued session"),
    }
}

#[test]
fn parse_signup_response_treats_bare_user_as_pending() {
    // Shape returned when email confirmation is enabled.
    let body = serde_json::json!({
        "id": "u-1",
        "email": "thais@example.com",
        "confirmation_sent_at": "2024-06-01T12:00:00Z"
    });
    assert_eq!(parse_signup_response(&body), SignupResponse::Pending);
}

#[test]
fn parse_signup_response_requires_user_alongside_token() {
    let body = serde_json::json!({ "access_token": "jwt-abc" });
    assert_eq!(parse_signup_response(&body), SignupResponse::Pending);
}

// =============================================================
// Data rows
// =============================================================

#[test]
fn microforest_project_parses_row_with_nulls() {
    let json = serde_json::json!({
        "id": "p-1",
        "user_id": "u-1",
        "name": "Microfloresta da Escola Verde",
        "description": null,
        "location_name": "Rua das Flores, 123",
        "location_lat": null,
        "location_lng": null,
        "trees_planned": 40,
        "trees_planted": null,
        "tree_types": null,
        "status": "planning",
        "created_at": "2024-06-01T12:00:00Z",
        "updated_at": "2024-06-02T12:00:00Z"
    });
    let row: MicroforestProject = serde_json::from_value(json).unwrap();
    assert_eq!(row.name, "Microfloresta da Escola Verde");
    assert_eq!(row.description, None);
    assert_eq!(row.trees_planned, Some(40));
    assert_eq!(row.trees_planted, None);
    assert_eq!(row.status.as_deref(), Some("planning"));
}

#[test]
fn challenge_row_parses_without_optional_columns() {
    let json = serde_json::json!({
        "id": "c-1",
        "title": "Plante 20 mudas",
        "description": "Plante 20 mudas nativas este mês",
        "challenge_type": "planting",
        "target_value": 20
    });
    let row: Challenge = serde_json::from_value(json).unwrap();
    assert_eq!(row.target_value, 20);
    assert_eq!(row.points_reward, None);
}

#[test]
fn challenge_progress_defaults_missing_fields() {
    let json = serde_json::json!({ "challenge_id": "c-1" });
    let row: ChallengeProgress = serde_json::from_value(json).unwrap();
    assert_eq!(row.current_progress, None);
    assert_eq!(row.completed_at, None);
}

#[test]
fn new_project_serializes_insert_payload() {
    let insert = NewProject {
        user_id: "u-1".to_owned(),
        name: "Quintal Verde".to_owned(),
        description: None,
        location_name: Some("Bairro Jardim".to_owned()),
        location_lat: None,
        location_lng: None,
        trees_planned: 10,
        trees_planted: 0,
        status: "planning".to_owned(),
    };
    let value = serde_json::to_value(&insert).unwrap();
    assert_eq!(value["name"], "Quintal Verde");
    assert_eq!(value["trees_planted"], 0);
    assert_eq!(value["status"], "planning");
}
