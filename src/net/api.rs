//! REST calls against the hosted identity and data backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so callers can distinguish
//! backend rejections (with the message extracted from the body) from
//! connectivity failures and decode problems. Nothing in this module
//! panics; session and page code decide how failures surface.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

#[cfg(feature = "hydrate")]
use super::config::BackendConfig;
use super::types::{
    Challenge, ChallengeProgress, CommunityPost, GuideArticle, MicroforestProject, NewPost,
    NewProject, SessionUserPayload, SignUpRequest, SignupResponse, TokenResponse, UserProfile,
};
#[cfg(feature = "hydrate")]
use super::types::parse_signup_response;

/// Transport-level failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; the message is extracted from the error body.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Request never completed (offline, DNS, CORS).
    #[error("falha de conexão: {0}")]
    Network(String),
    /// 2xx response whose body could not be decoded.
    #[error("resposta inesperada do servidor: {0}")]
    Decode(String),
    /// Called outside a browser context.
    #[error("indisponível fora do navegador")]
    Unavailable,
}

// ============================================================================
// Endpoint and query builders
// ============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=password")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn rest_endpoint(base: &str, table: &str, query: &str) -> String {
    format!("{base}/rest/v1/{table}?{query}")
}

#[cfg(any(test, feature = "hydrate"))]
fn own_projects_query(user_id: &str) -> String {
    format!("select=*&user_id=eq.{user_id}&order=created_at.desc")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_project_query(project_id: &str) -> String {
    format!("id=eq.{project_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn progress_query(user_id: &str) -> String {
    format!("select=*&user_id=eq.{user_id}")
}

/// Pull a human-readable message out of a backend error body.
///
/// The identity endpoints use `error_description`/`msg`, the data
/// endpoints use `message`, and some proxies answer with `error`.
#[cfg(any(test, feature = "hydrate"))]
fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message", "error"] {
            if let Some(message) = value.get(key).and_then(serde_json::Value::as_str) {
                if !message.is_empty() {
                    return message.to_owned();
                }
            }
        }
    }
    format!("HTTP {status}")
}

// ============================================================================
// Request plumbing (browser only)
// ============================================================================

#[cfg(feature = "hydrate")]
fn with_backend_headers(
    req: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    let cfg = BackendConfig::from_env();
    let req = req.header("apikey", cfg.anon_key);
    match token {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

#[cfg(feature = "hydrate")]
async fn check_response(
    resp: gloo_net::http::Response,
) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Http {
        status,
        message: extract_error_message(status, &body),
    })
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    url: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let resp = with_backend_headers(gloo_net::http::Request::get(url), token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = check_response(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(
    url: &str,
    token: Option<&str>,
    body: &T,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = with_backend_headers(gloo_net::http::Request::post(url), token)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_response(resp).await
}

// ============================================================================
// Identity endpoints
// ============================================================================

/// Exchange email + password for a session token.
///
/// # Errors
///
/// Returns [`ApiError::Http`] when the backend rejects the credentials
/// and [`ApiError::Network`]/[`ApiError::Decode`] on transport problems.
pub async fn sign_in_with_password(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = token_endpoint(cfg.trimmed_base());
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = post_json(&url, None, &payload).await?;
        resp.json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Register a new account.
///
/// The response is classified into "session issued" vs "confirmation
/// pending" since the backend answers both from the same endpoint.
///
/// # Errors
///
/// Returns [`ApiError::Http`] when registration is rejected and
/// [`ApiError::Network`]/[`ApiError::Decode`] on transport problems.
pub async fn register_account(req: &SignUpRequest) -> Result<SignupResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = signup_endpoint(cfg.trimmed_base());
        let payload = serde_json::json!({
            "email": req.email,
            "password": req.password,
            "data": {
                "full_name": req.full_name,
                "user_type": req.user_type.map(super::types::UserType::as_str),
            },
        });
        let resp = post_json(&url, None, &payload).await?;
        let body = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parse_signup_response(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Look up the user a stored session token belongs to.
///
/// Returns `Ok(None)` when the token is expired or revoked, so callers
/// can treat that as a definite "no session" rather than a failure.
///
/// # Errors
///
/// Returns [`ApiError::Http`] for non-auth backend errors and
/// [`ApiError::Network`]/[`ApiError::Decode`] on transport problems.
pub async fn fetch_session_user(token: &str) -> Result<Option<SessionUserPayload>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = user_endpoint(cfg.trimmed_base());
        match get_json::<SessionUserPayload>(&url, Some(token)).await {
            Ok(user) => Ok(Some(user)),
            Err(ApiError::Http { status: 401 | 403, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Terminate the backend session behind a token.
///
/// # Errors
///
/// Returns [`ApiError::Http`] when the backend refuses the call and
/// [`ApiError::Network`] on transport problems. Local sign-out never
/// waits on this.
pub async fn terminate_session(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = logout_endpoint(cfg.trimmed_base());
        let resp = with_backend_headers(gloo_net::http::Request::post(&url), Some(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_response(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

// ============================================================================
// Data endpoints
// ============================================================================

/// Fetch all microforest projects, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn list_projects() -> Result<Vec<MicroforestProject>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = rest_endpoint(
            cfg.trimmed_base(),
            "microforest_projects",
            "select=*&order=created_at.desc",
        );
        get_json(&url, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user's projects, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn list_own_projects(
    token: &str,
    user_id: &str,
) -> Result<Vec<MicroforestProject>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = rest_endpoint(
            cfg.trimmed_base(),
            "microforest_projects",
            &own_projects_query(user_id),
        );
        get_json(&url, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err(ApiError::Unavailable)
    }
}

/// Insert a new microforest project.
///
/// # Errors
///
/// Returns an [`ApiError`] when the insert is rejected or the request
/// fails.
pub async fn create_project(token: &str, project: &NewProject) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = rest_endpoint(cfg.trimmed_base(), "microforest_projects", "select=id");
        post_json(&url, Some(token), project).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, project);
        Err(ApiError::Unavailable)
    }
}

/// Delete one of the signed-in user's projects.
///
/// # Errors
///
/// Returns an [`ApiError`] when the delete is rejected or the request
/// fails.
pub async fn delete_project(token: &str, project_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = rest_endpoint(
            cfg.trimmed_base(),
            "microforest_projects",
            &delete_project_query(project_id),
        );
        let resp = with_backend_headers(gloo_net::http::Request::delete(&url), Some(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_response(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, project_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch public owner profiles for project attribution.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn list_profiles() -> Result<Vec<UserProfile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = rest_endpoint(cfg.trimmed_base(), "user_profiles", "select=id,full_name");
        get_json(&url, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch all community posts, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn list_posts() -> Result<Vec<CommunityPost>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = rest_endpoint(
            cfg.trimmed_base(),
            "community_posts",
            "select=*&order=created_at.desc",
        );
        get_json(&url, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Publish a community post.
///
/// # Errors
///
/// Returns an [`ApiError`] when the insert is rejected or the request
/// fails.
pub async fn create_post(token: &str, post: &NewPost) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = rest_endpoint(cfg.trimmed_base(), "community_posts", "select=id");
        post_json(&url, Some(token), post).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, post);
        Err(ApiError::Unavailable)
    }
}

/// Fetch active challenges, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn list_active_challenges() -> Result<Vec<Challenge>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = rest_endpoint(
            cfg.trimmed_base(),
            "challenges",
            "select=*&is_active=eq.true&order=created_at.desc",
        );
        get_json(&url, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user's challenge progress rows.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn list_challenge_progress(
    token: &str,
    user_id: &str,
) -> Result<Vec<ChallengeProgress>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = rest_endpoint(
            cfg.trimmed_base(),
            "user_challenge_progress",
            &progress_query(user_id),
        );
        get_json(&url, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch published guide articles, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn list_guide_articles() -> Result<Vec<GuideArticle>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = BackendConfig::from_env();
        let url = rest_endpoint(
            cfg.trimmed_base(),
            "guide_articles",
            "select=*&order=published_at.desc",
        );
        get_json(&url, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
