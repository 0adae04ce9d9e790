//! Favorites persistence for teams and players.
//!
//! `add_*` inserts unconditionally: the store carries no uniqueness on the
//! (user, external-id) pair, so duplicate suppression is the caller's
//! check-then-act. `remove_*` deletes every row for the pair.

use sqlx::SqlitePool;

use super::models::{AddFavoritePlayer, AddFavoriteTeam, FavoritePlayer, FavoriteTeam};
use crate::common::ApiError;

// ============================================================================
// Teams
// ============================================================================

pub async fn add_favorite_team(
    pool: &SqlitePool,
    user_id: i64,
    team: AddFavoriteTeam,
) -> Result<(), ApiError> {
    sqlx::query(
        r#"
        INSERT INTO favorite_teams (user_id, team_id, team_name, team_logo)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(team.team_id)
    .bind(&team.team_name)
    .bind(team.team_logo.as_deref())
    .execute(pool)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(())
}

pub async fn remove_favorite_team(
    pool: &SqlitePool,
    user_id: i64,
    team_id: i64,
) -> Result<(), ApiError> {
    sqlx::query("DELETE FROM favorite_teams WHERE user_id = ? AND team_id = ?")
        .bind(user_id)
        .bind(team_id)
        .execute(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    Ok(())
}

pub async fn list_favorite_teams(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<FavoriteTeam>, ApiError> {
    sqlx::query_as::<_, FavoriteTeam>(
        "SELECT * FROM favorite_teams WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(ApiError::DatabaseError)
}

pub async fn is_favorite_team(
    pool: &SqlitePool,
    user_id: i64,
    team_id: i64,
) -> Result<bool, ApiError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM favorite_teams WHERE user_id = ? AND team_id = ?",
    )
    .bind(user_id)
    .bind(team_id)
    .fetch_one(pool)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(count > 0)
}

// ============================================================================
// Players
// ============================================================================

pub async fn add_favorite_player(
    pool: &SqlitePool,
    user_id: i64,
    player: AddFavoritePlayer,
) -> Result<(), ApiError> {
    sqlx::query(
        r#"
        INSERT INTO favorite_players (user_id, player_id, player_name, player_photo, team_name, position)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(player.player_id)
    .bind(&player.player_name)
    .bind(player.player_photo.as_deref())
    .bind(player.team_name.as_deref())
    .bind(player.position.as_deref())
    .execute(pool)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(())
}

pub async fn remove_favorite_player(
    pool: &SqlitePool,
    user_id: i64,
    player_id: i64,
) -> Result<(), ApiError> {
    sqlx::query("DELETE FROM favorite_players WHERE user_id = ? AND player_id = ?")
        .bind(user_id)
        .bind(player_id)
        .execute(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    Ok(())
}

pub async fn list_favorite_players(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<FavoritePlayer>, ApiError> {
    sqlx::query_as::<_, FavoritePlayer>(
        "SELECT * FROM favorite_players WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(ApiError::DatabaseError)
}

pub async fn is_favorite_player(
    pool: &SqlitePool,
    user_id: i64,
    player_id: i64,
) -> Result<bool, ApiError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM favorite_players WHERE user_id = ? AND player_id = ?",
    )
    .bind(user_id)
    .bind(player_id)
    .fetch_one(pool)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(count > 0)
}
