//! Authentication handlers

use axum::extract::{Extension, Json};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::db;
use super::extractors::AuthedUser;
use super::models::{Claims, GoogleIdTokenPayload, UpsertUser, User};
use crate::common::{safe_email_log, ApiError, AppState};

/// POST /api/auth/google
/// Authenticates a user via Google OAuth ID token
///
/// Verifies the token against Google's tokeninfo endpoint, upserts the user
/// keyed on the provider subject, and issues a session JWT.
///
/// # Response
/// ```json
/// {
///   "token": "<jwt token>",
///   "user": { ... }
/// }
/// ```
pub async fn google_auth(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<GoogleIdTokenPayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    // Verify token with Google's tokeninfo endpoint
    // Docs: https://developers.google.com/identity/sign-in/web/backend-auth
    let tokeninfo_url = format!(
        "https://oauth2.googleapis.com/tokeninfo?id_token={}",
        payload.id_token
    );

    let resp = state.http.get(&tokeninfo_url).send().await.map_err(|e| {
        warn!(error = %e, "HTTP error contacting Google tokeninfo endpoint");
        ApiError::InternalServer("google token validation service unavailable".to_string())
    })?;

    if !resp.status().is_success() {
        warn!(http_status = %resp.status(), "Google tokeninfo rejected the token");
        return Err(ApiError::Unauthorized(
            "invalid or expired id_token".to_string(),
        ));
    }

    let body: serde_json::Value = resp.json().await.map_err(|e| {
        warn!(error = %e, "Failed to parse Google tokeninfo response");
        ApiError::BadRequest("malformed id_token".to_string())
    })?;

    let sub = body.get("sub").and_then(|v| v.as_str()).map(str::to_string);
    let email = body
        .get("email")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    let name = body
        .get("name")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let sub = match sub {
        Some(s) => s,
        None => {
            warn!("Google token missing subject");
            return Err(ApiError::BadRequest(
                "token missing required fields".to_string(),
            ));
        }
    };

    // Check token expiration
    if let Some(exp) = body.get("exp").and_then(|v| v.as_str()).and_then(|v| v.parse::<i64>().ok()) {
        if exp < Utc::now().timestamp() {
            warn!(token_exp = exp, "Google token has expired");
            return Err(ApiError::Unauthorized("token has expired".to_string()));
        }
    }

    // Validate audience (client id) when configured
    if let Some(client_id) = &state.google_client_id {
        match body.get("aud").and_then(|v| v.as_str()) {
            Some(aud) if aud == client_id => {}
            Some(aud) => {
                warn!(token_audience = %aud, "Google token audience mismatch");
                return Err(ApiError::Unauthorized(
                    "token audience mismatch".to_string(),
                ));
            }
            None => {
                return Err(ApiError::Unauthorized("token missing audience".to_string()));
            }
        }
    }

    debug!(
        open_id = %sub,
        email = %email.as_deref().map(safe_email_log).unwrap_or_default(),
        "Google token verified, upserting user"
    );

    db::upsert_user(
        &state.db,
        state.owner_open_id.as_deref(),
        UpsertUser {
            open_id: sub.clone(),
            name,
            email,
            login_method: Some("google".to_string()),
            ..Default::default()
        },
    )
    .await?;

    let user = db::get_user_by_open_id(&state.db, &sub)
        .await?
        .ok_or_else(|| ApiError::InternalServer("user missing after upsert".to_string()))?;

    let claims = Claims {
        sub: user.id.to_string(),
        exp: (Utc::now() + Duration::days(7)).timestamp() as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.jwt_secret.as_bytes()),
    )
    .map_err(|e| {
        warn!(error = %e, "Failed to sign session token");
        ApiError::InternalServer("failed to issue session token".to_string())
    })?;

    info!(user_id = user.id, "User signed in");

    Ok(Json(serde_json::json!({
        "token": token,
        "user": user,
    })))
}

/// GET /api/me
/// Returns the current session user, or JSON null for anonymous callers
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: Option<AuthedUser>,
) -> Result<Json<Option<User>>, ApiError> {
    let authed = match authed {
        Some(a) => a,
        None => return Ok(Json(None)),
    };

    let state = state_lock.read().await.clone();
    let user = db::get_user_by_id(&state.db, authed.id).await?;

    Ok(Json(user))
}

/// POST /api/auth/logout
/// Sessions are bearer JWTs, so logout is client-side token disposal;
/// this endpoint just confirms the request.
pub async fn logout_handler() -> Json<serde_json::Value> {
    info!("User logout");
    Json(serde_json::json!({ "success": true }))
}
