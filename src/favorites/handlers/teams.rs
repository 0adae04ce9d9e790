// src/favorites/handlers/teams.rs

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};
use crate::favorites::db;
use crate::favorites::models::*;
use crate::favorites::validators::FavoriteTeamValidator;

/// GET /api/favorites/teams - List the session user's favorite teams
pub async fn list_favorite_teams(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<Vec<FavoriteTeam>>, ApiError> {
    let state = state_lock.read().await.clone();

    let teams = db::list_favorite_teams(&state.db, authed.id).await?;

    debug!(user_id = authed.id, count = teams.len(), "Listed favorite teams");

    Ok(Json(teams))
}

/// POST /api/favorites/teams - Favorite a team
pub async fn add_favorite_team(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(body): Json<AddFavoriteTeam>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let validation = FavoriteTeamValidator.validate(&body);
    if !validation.is_valid {
        warn!(user_id = authed.id, errors = ?validation.errors, "Favorite team validation failed");
        return Err(ApiError::from(validation));
    }

    let state = state_lock.read().await.clone();

    let team_id = body.team_id;
    db::add_favorite_team(&state.db, authed.id, body).await?;

    info!(user_id = authed.id, team_id = team_id, "Team favorited");

    Ok(Json(serde_json::json!({ "success": true })))
}

/// DELETE /api/favorites/teams/:team_id - Unfavorite a team
pub async fn remove_favorite_team(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(team_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    db::remove_favorite_team(&state.db, authed.id, team_id).await?;

    info!(user_id = authed.id, team_id = team_id, "Team unfavorited");

    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /api/favorites/teams/:team_id - Is this team favorited?
pub async fn is_favorite_team(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(team_id): Path<i64>,
) -> Result<Json<FavoriteStatus>, ApiError> {
    let state = state_lock.read().await.clone();

    let is_favorite = db::is_favorite_team(&state.db, authed.id, team_id).await?;

    Ok(Json(FavoriteStatus { is_favorite }))
}
