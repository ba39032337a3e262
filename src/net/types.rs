//! Wire DTOs for the hosted identity and data backend.
//!
//! DESIGN
//! ======
//! The identity endpoints follow the GoTrue shapes (token grant, signup,
//! user lookup) and the data endpoints are PostgREST rows, so these types
//! mirror those payloads field-for-field. Serde skips unknown fields,
//! which keeps the DTOs stable as the hosted schema grows columns.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identity payloads
// ============================================================================

/// Profile kind chosen at registration, stored in user metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Teacher,
    School,
    Community,
}

impl UserType {
    /// All profile kinds, in the order shown by the registration form.
    pub const ALL: [UserType; 4] = [
        UserType::Student,
        UserType::Teacher,
        UserType::School,
        UserType::Community,
    ];

    /// Wire string stored in user metadata.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Teacher => "teacher",
            UserType::School => "school",
            UserType::Community => "community",
        }
    }

    /// Parse a metadata string, returning `None` for unknown values.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "student" => Some(UserType::Student),
            "teacher" => Some(UserType::Teacher),
            "school" => Some(UserType::School),
            "community" => Some(UserType::Community),
            _ => None,
        }
    }

    /// Label shown in the registration form's profile selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UserType::Student => "🧑‍🎓 Aluno",
            UserType::Teacher => "🧑‍🏫 Professor",
            UserType::School => "🏫 Escola/Instituição",
            UserType::Community => "🌱 Comunidade / Público geral",
        }
    }
}

/// Free-form metadata block attached to a backend user record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    /// Display name captured at registration, if provided.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Profile kind wire string, if provided.
    #[serde(default)]
    pub user_type: Option<String>,
}

/// Raw user record as returned by the identity endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUserPayload {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Account email, if the record carries one.
    #[serde(default)]
    pub email: Option<String>,
    /// Registration metadata (name, profile kind).
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Successful password-grant response carrying a bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent authenticated calls.
    pub access_token: String,
    /// The user the token was issued for.
    pub user: SessionUserPayload,
}

/// Normalized account holder used throughout the app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name captured at registration, if provided.
    pub full_name: Option<String>,
    /// Profile kind, if the stored metadata value was recognized.
    pub user_type: Option<UserType>,
}

impl AccountUser {
    /// Normalize a raw identity payload: blank names collapse to `None`
    /// and unknown profile kinds are dropped.
    #[must_use]
    pub fn from_payload(payload: SessionUserPayload) -> Self {
        let full_name = payload
            .user_metadata
            .full_name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());
        let user_type = payload
            .user_metadata
            .user_type
            .as_deref()
            .and_then(UserType::parse);
        Self {
            id: payload.id,
            email: payload.email.unwrap_or_default(),
            full_name,
            user_type,
        }
    }
}

/// Registration form payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub user_type: Option<UserType>,
}

/// Parsed signup response.
///
/// The identity service answers a signup with either a full session
/// (auto-confirm enabled) or a bare user record awaiting email
/// confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupResponse {
    /// Session issued immediately; the user is signed in.
    Session {
        access_token: String,
        user: SessionUserPayload,
    },
    /// Account created but email confirmation is still pending.
    Pending,
}

/// Classify a signup response body.
///
/// Anything without a usable `access_token` + `user` pair is treated as
/// confirmation-pending, which is the safe reading of a 2xx signup.
#[must_use]
pub fn parse_signup_response(value: &serde_json::Value) -> SignupResponse {
    let token = value.get("access_token").and_then(serde_json::Value::as_str);
    let user = value
        .get("user")
        .and_then(|user| serde_json::from_value::<SessionUserPayload>(user.clone()).ok());
    match (token, user) {
        (Some(token), Some(user)) => SignupResponse::Session {
            access_token: token.to_owned(),
            user,
        },
        _ => SignupResponse::Pending,
    }
}

// ============================================================================
// Data rows
// ============================================================================

/// A microforest project row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MicroforestProject {
    /// Unique project identifier (UUID string).
    pub id: String,
    /// Owning user (UUID string).
    pub user_id: String,
    /// Project name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Human-readable location (street/neighborhood).
    #[serde(default)]
    pub location_name: Option<String>,
    /// Latitude, if geocoded.
    #[serde(default)]
    pub location_lat: Option<f64>,
    /// Longitude, if geocoded.
    #[serde(default)]
    pub location_lng: Option<f64>,
    /// Seedlings planned for the project.
    #[serde(default)]
    pub trees_planned: Option<i64>,
    /// Seedlings planted so far.
    #[serde(default)]
    pub trees_planted: Option<i64>,
    /// Selected species names.
    #[serde(default)]
    pub tree_types: Option<Vec<String>>,
    /// Lifecycle stage: `"planning"`, `"active"`, or `"completed"`.
    #[serde(default)]
    pub status: Option<String>,
    /// Row creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: String,
}

/// Insert payload for a new microforest project.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProject {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub location_name: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub trees_planned: i64,
    pub trees_planted: i64,
    pub status: String,
}

/// A community forum post row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommunityPost {
    /// Unique post identifier (UUID string).
    pub id: String,
    /// Authoring user (UUID string).
    pub user_id: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Category id (`"duvidas"`, `"projetos"`, `"parcerias"`, `"eventos"`).
    #[serde(default)]
    pub category: Option<String>,
    /// Like counter.
    #[serde(default)]
    pub likes_count: Option<i64>,
    /// Row creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: String,
}

/// Insert payload for a new community post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub category: String,
}

/// An environmental challenge row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    /// Unique challenge identifier (UUID string).
    pub id: String,
    /// Challenge title.
    pub title: String,
    /// Challenge description.
    pub description: String,
    /// Kind: `"planting"`, `"biodiversity"`, `"composting"`,
    /// `"maintenance"`, or `"education"`.
    pub challenge_type: String,
    /// Progress target for completion.
    pub target_value: i64,
    /// XP awarded on completion.
    #[serde(default)]
    pub points_reward: Option<i64>,
}

/// Per-user progress on a challenge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengeProgress {
    /// Challenge this row tracks (UUID string).
    pub challenge_id: String,
    /// Current progress toward the target.
    #[serde(default)]
    pub current_progress: Option<i64>,
    /// Completion timestamp, once reached.
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// A published guide article row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuideArticle {
    /// Unique article identifier.
    pub id: String,
    /// Article title.
    pub title: String,
    /// Article body (markdown).
    pub content: String,
    /// One-line teaser shown on cards.
    #[serde(default)]
    pub summary: Option<String>,
    /// Category id (`"especies"`, `"solo"`, ...).
    pub category: String,
    /// Publication timestamp (ISO 8601).
    #[serde(default)]
    pub published_at: String,
}

/// Public profile row used to attribute projects to owners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile owner (UUID string).
    pub id: String,
    /// Display name, if the owner set one.
    #[serde(default)]
    pub full_name: Option<String>,
}
