// src/favorites/handlers/players.rs

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
use crate::favorites::validators::FavoritePlayerValidator;

/// GET /api/favorites/players - List the session user's favorite players
pub async fn list_favorite_players(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<Vec<FavoritePlayer>>, ApiError> {
    let state = state_lock.read().await.clone();

    let players = db::list_favorite_players(&state.db, authed.id).await?;

    debug!(user_id = authed.id, count = players.len(), "Listed favorite players");

    Ok(Json(players))
}

/// POST /api/favorites/players - Favorite a player
pub async fn add_favorite_player(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(body): Json<AddFavoritePlayer>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let validation = FavoritePlayerValidator.validate(&body);
    if !validation.is_valid {
        warn!(user_id = authed.id, errors = ?validation.errors, "Favorite player validation failed");
        return Err(ApiError::from(validation));
    }

    let state = state_lock.read().await.clone();

    let player_id = body.player_id;
    db::add_favorite_player(&state.db, authed.id, body).await?;

    info!(user_id = authed.id, player_id = player_id, "Player favorited");

    Ok(Json(serde_json::json!({ "success": true })))
}

/// DELETE /api/favorites/players/:player_id - Unfavorite a player
pub async fn remove_favorite_player(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(player_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    db::remove_favorite_player(&state.db, authed.id, player_id).await?;

    info!(user_id = authed.id, player_id = player_id, "Player unfavorited");

    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /api/favorites/players/:player_id - Is this player favorited?
pub async fn is_favorite_player(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(player_id): Path<i64>,
) -> Result<Json<FavoriteStatus>, ApiError> {
    let state = state_lock.read().await.clone();

    let is_favorite = db::is_favorite_player(&state.db, authed.id, player_id).await?;

    Ok(Json(FavoriteStatus { is_favorite }))
}
