//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use super::models::{Claims, User};
use crate::common::{ApiError, AppState};

/// Authenticated user extractor
///
/// Validates the bearer JWT and loads the user row it points at. Handlers
/// that take this extractor are the "protected" tier: the session decides
/// which user the request acts for, never the request body.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub id: i64,
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: String,
}

impl AuthedUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

impl From<User> for AuthedUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            open_id: u.open_id,
            name: u.name,
            email: u.email,
            role: u.role,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let token = match token {
            Some(t) => t,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("missing auth".into()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let bare_token = if let Some(rest) = token.strip_prefix("Bearer ") {
            rest.to_string()
        } else {
            token
        };

        let decoded = match decode::<Claims>(
            &bare_token,
            &DecodingKey::from_secret(app_state.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        ) {
            Ok(d) => d,
            Err(e) => {
                warn!(error = %e, "JWT token validation failed");
                return Err(ApiError::Unauthorized("invalid token".into()));
            }
        };

        let user_id: i64 = match decoded.claims.sub.parse() {
            Ok(id) => id,
            Err(_) => {
                warn!(sub = %decoded.claims.sub, "JWT subject is not a user id");
                return Err(ApiError::Unauthorized("invalid token".into()));
            }
        };

        let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&app_state.db)
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    user_id = user_id,
                    "Database error during user lookup in authentication"
                );
                ApiError::DatabaseError(e)
            })?;

        match user {
            Some(u) => {
                debug!(user_id = u.id, role = %u.role, "User authenticated");
                Ok(u.into())
            }
            None => {
                warn!(user_id = user_id, "Authentication failed: user not found");
                Err(ApiError::Unauthorized("user not found".into()))
            }
        }
    }
}

/// Admin-tier extractor: an [`AuthedUser`] whose role is `admin`.
///
/// The role check runs before the handler body, so an unauthorized request
/// never reaches validation or persistence.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthedUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let authed = AuthedUser::from_request_parts(parts, state).await?;

        if !authed.is_admin() {
            warn!(user_id = authed.id, "Admin access denied");
            return Err(ApiError::Forbidden("admin privileges required".to_string()));
        }

        Ok(AdminUser(authed))
    }
}
